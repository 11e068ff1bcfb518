//! Pipeline store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const fn default_stale_after_days() -> u32 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// JSON seed file with the initial venture set. Empty uses the built-in demo seed.
    #[serde(default)]
    pub seed_path: String,

    /// Ventures idle in a non-terminal stage longer than this are flagged stale.
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: u32,
}

impl PipelineConfig {
    /// The configured seed file, if any.
    #[must_use]
    pub fn seed_path(&self) -> Option<PathBuf> {
        let trimmed = self.seed_path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed_path: String::new(),
            stale_after_days: default_stale_after_days(),
        }
    }
}
