//! Per-invocation application context: configuration plus a seeded store.

use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use deal_config::DealConfig;
use deal_store::PipelineStore;
use deal_store::seed::{demo_seed, load_seed_file};

use crate::cli::GlobalFlags;

pub struct AppContext {
    pub config: DealConfig,
    pub store: Arc<PipelineStore>,
    pub actor: String,
    pub now: DateTime<Utc>,
}

impl AppContext {
    /// Seed a fresh store from `--seed`, then `pipeline.seed_path`, then the
    /// built-in demo pipeline.
    pub fn init(config: DealConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        Self::init_at(config, flags, Utc::now())
    }

    pub fn init_at(
        config: DealConfig,
        flags: &GlobalFlags,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Self> {
        let seed_path = flags.seed.clone().or_else(|| config.pipeline.seed_path());
        let ventures = match seed_path {
            Some(path) => load_seed_file(&path, now)?,
            None => demo_seed(now).context("built-in demo seed is malformed")?,
        };
        let store = PipelineStore::with_ventures(ventures)?;
        tracing::debug!(ventures = store.len(), "pipeline store ready");

        let actor = flags
            .actor
            .clone()
            .filter(|actor| !actor.trim().is_empty())
            .unwrap_or_else(|| config.general.default_actor.clone());

        Ok(Self {
            config,
            store: Arc::new(store),
            actor,
            now,
        })
    }

    pub const fn stale_after_days(&self) -> u32 {
        self.config.pipeline.stale_after_days
    }

    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}
