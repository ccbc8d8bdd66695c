//! Entity structs for the grade store.
//!
//! A `Grade` maps to one row of the `grades` table; its `scores` column holds
//! the JSON array of `Score` entries. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod grade;
mod score;

pub use grade::{Grade, NewGrade};
pub use score::Score;
