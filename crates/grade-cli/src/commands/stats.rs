use grade_config::StatsConfig;
use grade_core::enums::TotalCountBasis;
use grade_core::inputs::StatsQuery;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::commands::shared::parse::{parse_enum, parse_optional_id};
use crate::context::AppContext;
use crate::output::output;

/// Handle `grades stats`. Prints `null` when no learner is counted.
pub async fn handle(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(args, &ctx.config.stats)?;
    let stats = ctx.store.threshold_stats(&query).await?;
    output(&stats, flags.compact)
}

fn build_query(args: &StatsArgs, defaults: &StatsConfig) -> anyhow::Result<StatsQuery> {
    let basis = match (&args.total_count, args.legacy_total) {
        (_, true) => TotalCountBasis::Qualifying,
        (Some(raw), false) => parse_enum::<TotalCountBasis>(raw, "total_count")?,
        (None, false) => defaults.total_count,
    };
    Ok(StatsQuery {
        class_id: parse_optional_id("class_id", args.class.as_deref())?,
        threshold: args.threshold.unwrap_or(defaults.threshold),
        total_count: basis,
    })
}
