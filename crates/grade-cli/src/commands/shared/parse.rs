use grade_core::ids::{GradeId, parse_numeric_id};
use serde::de::DeserializeOwned;

/// Parse a `grd-` record ID argument.
pub fn parse_grade_id(raw: &str) -> anyhow::Result<GradeId> {
    Ok(GradeId::parse(raw)?)
}

/// Parse an integer learner or class ID argument.
pub fn parse_id(field: &str, raw: &str) -> anyhow::Result<i64> {
    Ok(parse_numeric_id(field, raw)?)
}

pub fn parse_optional_id(field: &str, raw: Option<&str>) -> anyhow::Result<Option<i64>> {
    raw.map(|value| parse_id(field, value)).transpose()
}

/// Parse a snake_case enum value using serde deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a JSON body argument.
pub fn parse_json(raw: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(raw).map_err(|error| anyhow::anyhow!("invalid JSON body: {error}"))
}
