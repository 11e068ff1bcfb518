//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

fn default_actor() -> String {
    "analyst".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list/filter commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Actor recorded on stage history when `--actor` is not given.
    #[serde(default = "default_actor")]
    pub default_actor: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_actor: default_actor(),
        }
    }
}
