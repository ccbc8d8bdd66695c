use grade_config::GradesConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (including `.env`) and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<GradesConfig> {
    let mut config = GradesConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    tracing::debug!(
        path = %config.database.path,
        remote = config.database.is_remote(),
        "configuration loaded"
    );
    Ok(config)
}

fn apply_overrides(config: &mut GradesConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.db {
        // An explicit file wins over any configured remote database.
        config.database.path.clone_from(path);
        config.database.url.clear();
        config.database.auth_token.clear();
    }
}
