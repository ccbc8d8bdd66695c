use grade_core::inputs::ClassUpdate;
use grade_core::responses::AffectedResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ClassArgs, IdArgs, MoveClassArgs};
use crate::commands::shared::parse::{parse_id, parse_optional_id};
use crate::context::AppContext;
use crate::output::output;

/// Handle `grades class`.
pub async fn list(args: &ClassArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let class_id = parse_id("class_id", &args.id)?;
    let learner_id = parse_optional_id("learner_id", args.learner.as_deref())?;
    let grades = ctx.store.list_by_class(class_id, learner_id).await?;
    output(&grades, flags.compact)
}

/// Handle `grades move-class`.
pub async fn move_class(
    args: &MoveClassArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let class_id = parse_id("class_id", &args.id)?;
    let update = ClassUpdate {
        class_id: parse_id("class_id", &args.to)?,
    };
    let affected = ctx.store.update_class_id(class_id, update).await?;
    output(&AffectedResponse { affected }, flags.compact)
}

/// Handle `grades delete-class`.
pub async fn delete(args: &IdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let class_id = parse_id("class_id", &args.id)?;
    let affected = ctx.store.delete_by_class(class_id).await?;
    output(&AffectedResponse { affected }, flags.compact)
}
