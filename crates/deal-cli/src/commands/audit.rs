use deal_core::entities::AuditEntry;
use deal_core::enums::AuditAction;
use deal_store::AuditFilter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuditArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_id, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `dealflow audit`.
pub fn handle(args: &AuditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&query(args, ctx, flags)?, flags.format)
}

pub fn query(
    args: &AuditArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Vec<AuditEntry>> {
    let filter = AuditFilter {
        venture_id: args.venture.as_deref().map(parse_id).transpose()?,
        action: parse_opt_enum::<AuditAction>(args.action.as_deref(), "action")?,
        limit: Some(effective_limit(args.limit, flags.limit, ctx.default_limit())),
    };
    Ok(ctx.store.audit(&filter))
}

#[cfg(test)]
mod tests {
    use deal_core::ids::VentureId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::test_support::{demo_context, flags};

    #[test]
    fn seeded_pipeline_has_one_entry_per_venture() {
        let ctx = demo_context();
        let args = AuditArgs {
            venture: None,
            action: Some("seeded".into()),
            limit: Some(100),
        };
        assert_eq!(query(&args, &ctx, &flags()).unwrap().len(), 8);
    }

    #[test]
    fn filters_to_one_venture() {
        let ctx = demo_context();
        ctx.store.advance(VentureId(2), "amara").unwrap();
        let args = AuditArgs {
            venture: Some("2".into()),
            action: None,
            limit: None,
        };
        let entries = query(&args, &ctx, &flags()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, AuditAction::StageChanged);
        assert_eq!(entries[1].action, AuditAction::Seeded);
    }
}
