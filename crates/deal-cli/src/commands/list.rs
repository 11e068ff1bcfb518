use deal_core::entities::Venture;
use deal_core::enums::{DealType, Stage};
use deal_store::FilterCriteria;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{FilterArgs, IdArgs, ListArgs};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_id, parse_opt_enum};
use crate::context::AppContext;
use crate::output::{output, render_ventures};

/// Handle `dealflow list`.
pub fn handle_list(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ventures = list(args, ctx, flags)?;
    print_ventures(&ventures, ctx, flags)
}

/// Handle `dealflow filter`.
pub fn handle_filter(
    args: &FilterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ventures = filter(args, ctx, flags)?;
    print_ventures(&ventures, ctx, flags)
}

/// Handle `dealflow get`.
pub fn handle_get(args: &IdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let venture = ctx.store.get(parse_id(&args.id)?)?;
    output(&venture, flags.format)
}

pub fn list(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Vec<Venture>> {
    let stage = parse_opt_enum::<Stage>(args.stage.as_deref(), "stage")?;
    let mut ventures = match stage {
        Some(stage) => ctx.store.list_by_stage(stage),
        None => ctx.store.list(),
    };
    ventures.truncate(effective_limit(args.limit, flags.limit, ctx.default_limit()));
    Ok(ventures)
}

pub fn filter(
    args: &FilterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Vec<Venture>> {
    let criteria = FilterCriteria {
        stage: parse_opt_enum::<Stage>(args.stage.as_deref(), "stage")?,
        industry: args.industry.clone(),
        market: args.market.clone(),
        deal_type: parse_opt_enum::<DealType>(args.deal_type.as_deref(), "deal type")?,
    };
    tracing::debug!(?criteria, "filtering ventures");

    let mut ventures = ctx.store.apply_filter(&criteria);
    ventures.truncate(effective_limit(args.limit, flags.limit, ctx.default_limit()));
    Ok(ventures)
}

fn print_ventures(ventures: &[Venture], ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rendered = render_ventures(ventures, ctx.now, ctx.stale_after_days(), flags.format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use deal_core::ids::VentureId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::test_support::{demo_context, flags};

    fn ids(ventures: &[Venture]) -> Vec<u64> {
        ventures.iter().map(|v| v.id.get()).collect()
    }

    #[test]
    fn list_by_stage_is_newest_first() {
        let ctx = demo_context();
        let args = ListArgs {
            stage: Some("screening".into()),
            limit: None,
        };
        // AquaPure entered screening 1 day ago, PayLink 3, GreenHarvest 9.
        assert_eq!(ids(&list(&args, &ctx, &flags()).unwrap()), vec![8, 1, 2]);
    }

    #[test]
    fn list_honors_limits() {
        let ctx = demo_context();
        let args = ListArgs {
            stage: None,
            limit: Some(2),
        };
        assert_eq!(list(&args, &ctx, &flags()).unwrap().len(), 2);

        let mut global = flags();
        global.limit = Some(3);
        let args = ListArgs {
            stage: None,
            limit: None,
        };
        assert_eq!(list(&args, &ctx, &global).unwrap().len(), 3);
    }

    #[test]
    fn filter_combines_criteria() {
        let ctx = demo_context();
        let args = FilterArgs {
            stage: None,
            industry: Some("fintech".into()),
            market: None,
            deal_type: Some("secondary".into()),
            limit: None,
        };
        assert_eq!(ids(&filter(&args, &ctx, &flags()).unwrap()), vec![7]);
    }

    #[test]
    fn filter_rejects_unknown_stage() {
        let ctx = demo_context();
        let args = FilterArgs {
            stage: Some("archived".into()),
            industry: None,
            market: None,
            deal_type: None,
            limit: None,
        };
        let err = filter(&args, &ctx, &flags()).unwrap_err();
        assert!(err.to_string().contains("invalid stage"));
    }

    #[test]
    fn get_unknown_venture_fails() {
        let ctx = demo_context();
        let args = IdArgs { id: "404".into() };
        assert!(handle_get(&args, &ctx, &flags()).is_err());
        assert!(ctx.store.get(VentureId(1)).is_ok());
    }
}
