//! # grade-core
//!
//! Core types, identifiers, and error types for the grade store.
//!
//! This crate provides the foundational types shared across all grade crates:
//! - Entity structs for grade records and their score entries
//! - Validated caller inputs (create documents, score matches, class updates)
//! - The aggregation policy enum
//! - ID prefix constants and parsing helpers
//! - Cross-cutting error types
//! - Response payloads returned by the CLI

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod inputs;
pub mod responses;
