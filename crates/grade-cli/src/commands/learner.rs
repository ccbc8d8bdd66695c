use grade_core::responses::AffectedResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{IdArgs, LearnerArgs};
use crate::commands::shared::parse::{parse_id, parse_optional_id};
use crate::context::AppContext;
use crate::output::output;

/// Handle `grades learner`.
pub async fn list(args: &LearnerArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let learner_id = parse_id("learner_id", &args.id)?;
    let class_id = parse_optional_id("class_id", args.class.as_deref())?;
    let grades = ctx.store.list_by_learner(learner_id, class_id).await?;
    output(&grades, flags.compact)
}

/// Handle `grades delete-learner`.
pub async fn delete(args: &IdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let learner_id = parse_id("learner_id", &args.id)?;
    let affected = ctx.store.delete_by_learner(learner_id).await?;
    output(&AffectedResponse { affected }, flags.compact)
}
