//! Identifier formats and parsing helpers.
//!
//! Grade ids are generated by the store as `grd-` followed by 16 lowercase hex
//! characters. Learner and class ids are plain integers.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Prefix for grade record ids.
pub const PREFIX_GRADE: &str = "grd";

/// Number of hex characters after the prefix.
pub const GRADE_ID_HEX_LEN: usize = 16;

/// Opaque, storage-generated identifier of a grade record.
///
/// Deserialization goes through [`GradeId::parse`], so a malformed id is
/// rejected wherever it enters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct GradeId(String);

impl GradeId {
    /// Parse and validate a caller-supplied grade id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` if the text is not of the form
    /// `grd-<16 lowercase hex>`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let hex = raw
            .strip_prefix(PREFIX_GRADE)
            .and_then(|rest| rest.strip_prefix('-'))
            .ok_or_else(|| {
                CoreError::invalid_argument("id", format!("'{raw}' must start with '{PREFIX_GRADE}-'"))
            })?;

        let well_formed = hex.len() == GRADE_ID_HEX_LEN
            && hex
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        if !well_formed {
            return Err(CoreError::invalid_argument(
                "id",
                format!("'{raw}' must end with {GRADE_ID_HEX_LEN} lowercase hex characters"),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GradeId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GradeId {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<GradeId> for String {
    fn from(id: GradeId) -> Self {
        id.0
    }
}

impl AsRef<str> for GradeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parse a learner or class id supplied as text.
///
/// # Errors
///
/// Returns `CoreError::InvalidArgument` naming `field` if `raw` is not an integer.
pub fn parse_numeric_id(field: &str, raw: &str) -> Result<i64, CoreError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| CoreError::invalid_argument(field, format!("'{raw}' is not an integer: {e}")))
}
