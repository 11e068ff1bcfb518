use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the pipeline board: one column per stage.
    Board,
    /// List ventures, optionally in a single stage.
    List(ListArgs),
    /// Filter ventures by stage, industry, market, and deal type.
    Filter(FilterArgs),
    /// Show one venture.
    Get(IdArgs),
    /// Open a new venture in screening.
    Add(AddArgs),
    /// Move a venture to an adjacent stage.
    Transition(TransitionArgs),
    /// Proceed: move a venture to its next stage.
    Advance(IdArgs),
    /// Pass on a venture.
    Pass(PassArgs),
    /// Apply a JSONL action script and report the outcome.
    Run(RunArgs),
    /// Show a venture's stage history.
    History(IdArgs),
    /// Query the audit log.
    Audit(AuditArgs),
    /// List the platform's named sections.
    Sections,
    /// Resolve a section id and report the host callbacks it triggers.
    Navigate(NavigateArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct IdArgs {
    /// Venture id
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub stage: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub stage: Option<String>,
    #[arg(long)]
    pub industry: Option<String>,
    #[arg(long)]
    pub market: Option<String>,
    #[arg(long)]
    pub deal_type: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub industry: String,
    #[arg(long)]
    pub market: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Deal size, e.g. "$2.5M" or "500K"
    #[arg(long, default_value = "0")]
    pub deal_size: String,
    #[arg(long, default_value = "0")]
    pub valuation: String,
    #[arg(long, default_value = "seed")]
    pub funding_stage: String,
    #[arg(long, default_value = "primary")]
    pub deal_type: String,
    #[arg(long)]
    pub priority: Option<String>,
    /// Promoted from saved opportunities rather than marketplace interest
    #[arg(long)]
    pub saved: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TransitionArgs {
    /// Venture id
    pub id: String,
    /// Target stage, e.g. due-diligence
    pub stage: String,
    #[arg(long)]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PassArgs {
    /// Venture id
    pub id: String,
    #[arg(long)]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// JSONL file with one action per line
    pub script: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    #[arg(long)]
    pub venture: Option<String>,
    #[arg(long)]
    pub action: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct NavigateArgs {
    /// Section id, e.g. market-intelligence
    pub section: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. venture, stage-change, pipeline-action
    pub type_name: String,
}
