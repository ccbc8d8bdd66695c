use grade_core::entities::Score;
use grade_core::inputs::ScoreMatch;
use grade_core::responses::{AffectedResponse, CreatedResponse};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AddScoreArgs, CreateArgs, IdArgs, RemoveScoreArgs};
use crate::commands::shared::parse::{parse_grade_id, parse_json};
use crate::context::AppContext;
use crate::output::output;

/// Handle `grades create`.
pub async fn create(args: &CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let body = parse_json(&args.json)?;
    let grade = ctx.store.create_grade_from_json(body).await?;
    output(&CreatedResponse { id: grade.id }, flags.compact)
}

/// Handle `grades get`.
pub async fn get(args: &IdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_grade_id(&args.id)?;
    let grade = ctx.store.get_grade(&id).await?;
    output(&grade, flags.compact)
}

/// Handle `grades delete`.
pub async fn delete(args: &IdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_grade_id(&args.id)?;
    ctx.store.delete_grade(&id).await?;
    output(&AffectedResponse { affected: 1 }, flags.compact)
}

/// Handle `grades add-score`.
pub async fn add_score(
    args: &AddScoreArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let id = parse_grade_id(&args.id)?;
    let score = Score::new(args.kind.clone(), args.score)?;
    let grade = ctx.store.append_score(&id, score).await?;
    output(&grade, flags.compact)
}

/// Handle `grades remove-score`.
pub async fn remove_score(
    args: &RemoveScoreArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let id = parse_grade_id(&args.id)?;
    let criteria = ScoreMatch {
        kind: args.kind.clone(),
        score: args.score,
    };
    let grade = ctx.store.remove_score(&id, &criteria).await?;
    output(&grade, flags.compact)
}
