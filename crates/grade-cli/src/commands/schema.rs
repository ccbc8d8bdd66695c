use grade_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `grades schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let schema = registry.get(&args.name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown schema '{}'; available: {}",
            args.name,
            registry.list().join(", ")
        )
    })?;
    output(schema, flags.compact)
}
