//! Repository modules implementing grade operations.
//!
//! Each module adds methods to `GradeStore` via `impl GradeStore` blocks.

pub mod admin;
pub mod grade;
pub mod stats;
