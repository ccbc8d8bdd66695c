//! Policy enums for the grade store.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TotalCountBasis
// ---------------------------------------------------------------------------

/// Which learners `total_count` counts in threshold statistics.
///
/// ```text
/// population  every learner with at least one score in scope (default)
/// qualifying  only learners above the threshold (legacy report shape:
///             total equals the above-threshold count, percentage is 100)
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TotalCountBasis {
    #[default]
    Population,
    Qualifying,
}

impl TotalCountBasis {
    /// Return the string representation used in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Population => "population",
            Self::Qualifying => "qualifying",
        }
    }
}

impl fmt::Display for TotalCountBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
