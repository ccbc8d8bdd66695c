use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grades setup`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.ensure_indexes().await?;
    ctx.store.install_schema().await?;
    let installed = ctx.store.admin_objects().await?;
    output(&json!({ "installed": installed }), flags.compact)
}
