//! # grade-schema
//!
//! JSON Schema generation, validation, and registry for grade payloads.
//!
//! Payload types are defined in `grade-core` with `#[derive(JsonSchema)]`.
//! This crate builds their schemas once and checks loosely-typed JSON bodies
//! against them before they are deserialized and handed to the store.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
