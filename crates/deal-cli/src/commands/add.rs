use deal_core::entities::Venture;
use deal_core::enums::{DealType, FundingStage, Priority, VentureSource};
use deal_core::money::Money;
use deal_store::inputs::NewVentureBuilder;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::parse::{parse_enum, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `dealflow add`.
pub fn handle(args: &AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&add(args, ctx)?, flags.format)
}

pub fn add(args: &AddArgs, ctx: &AppContext) -> anyhow::Result<Venture> {
    let source = if args.saved {
        VentureSource::SavedOpportunity
    } else {
        VentureSource::Marketplace
    };
    let new = NewVentureBuilder::new(&args.name, &args.industry, &args.market)
        .description(&args.description)
        .deal_size(Money::parse(&args.deal_size)?)
        .valuation(Money::parse(&args.valuation)?)
        .funding_stage(parse_enum::<FundingStage>(&args.funding_stage, "funding stage")?)
        .deal_type(parse_enum::<DealType>(&args.deal_type, "deal type")?)
        .priority(parse_opt_enum::<Priority>(args.priority.as_deref(), "priority")?.unwrap_or_default())
        .source(source)
        .entered_at(ctx.now)
        .build();

    Ok(ctx.store.create_venture(new, &ctx.actor)?)
}
