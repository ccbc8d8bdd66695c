//! Central schema registry for grade payloads.
//!
//! The `SchemaRegistry` builds JSON Schemas from grade-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde::de::DeserializeOwned;

use crate::error::SchemaError;

/// Central store of all JSON Schemas exchanged with callers.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Generate the schema for `$ty` and store it under `$name`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a registry holding the schema of every grade-core payload type.
    ///
    /// # Panics
    ///
    /// Panics if a generated schema cannot be converted to a JSON value.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entities ---
        register!(schemas, "grade", grade_core::entities::Grade);
        register!(schemas, "new_grade", grade_core::entities::NewGrade);
        register!(schemas, "score", grade_core::entities::Score);

        // --- Caller inputs ---
        register!(schemas, "grade_document", grade_core::inputs::GradeDocument);
        register!(schemas, "score_match", grade_core::inputs::ScoreMatch);
        register!(schemas, "class_update", grade_core::inputs::ClassUpdate);
        register!(schemas, "stats_query", grade_core::inputs::StatsQuery);

        // --- Responses ---
        register!(
            schemas,
            "threshold_stats",
            grade_core::responses::ThresholdStats
        );
        register!(
            schemas,
            "created_response",
            grade_core::responses::CreatedResponse
        );
        register!(
            schemas,
            "affected_response",
            grade_core::responses::AffectedResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Validate a JSON value against a named schema, then deserialize it.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` if the value does not match the
    /// schema or cannot be deserialized into `T`.
    pub fn parse<T: DeserializeOwned>(
        &self,
        name: &str,
        instance: serde_json::Value,
    ) -> Result<T, SchemaError> {
        self.validate(name, &instance)?;
        serde_json::from_value(instance).map_err(|e| SchemaError::ValidationFailed {
            errors: vec![e.to_string()],
        })
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grade_core::entities::Score;
    use grade_core::inputs::{ClassUpdate, GradeDocument};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        // 3 entities + 4 inputs + 3 responses
        assert_eq!(registry().schema_count(), 10);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"grade_document"));
    }

    #[test]
    fn unknown_schema_is_not_found() {
        let err = registry().validate("nope", &json!({})).unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(ref n) if n == "nope"));
    }

    #[test]
    fn accepts_legacy_grade_document() {
        let doc: GradeDocument = registry()
            .parse(
                "grade_document",
                json!({
                    "student_id": 3,
                    "class_id": 7,
                    "scores": [{"type": "exam", "score": 71.5}]
                }),
            )
            .unwrap();
        assert_eq!(doc.student_id, Some(3));
        assert_eq!(doc.learner_id, None);
    }

    #[test]
    fn rejects_string_class_id() {
        let err = registry()
            .validate(
                "grade_document",
                &json!({"learner_id": 1, "class_id": "abc", "scores": []}),
            )
            .unwrap_err();
        match err {
            SchemaError::ValidationFailed { errors } => assert!(!errors.is_empty()),
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn rejects_score_without_type() {
        let result: Result<Score, _> = registry().parse("score", json!({"score": 12.0}));
        assert!(matches!(result, Err(SchemaError::ValidationFailed { .. })));
    }

    #[test]
    fn rejects_non_numeric_score() {
        let result = registry().validate("score", &json!({"type": "quiz", "score": "high"}));
        assert!(matches!(result, Err(SchemaError::ValidationFailed { .. })));
    }

    #[test]
    fn parses_class_update() {
        let update: ClassUpdate = registry()
            .parse("class_update", json!({"class_id": 12}))
            .unwrap();
        assert_eq!(update, ClassUpdate { class_id: 12 });
    }

    #[test]
    fn rejects_class_update_without_class_id() {
        let result: Result<ClassUpdate, _> = registry().parse("class_update", json!({}));
        assert!(matches!(result, Err(SchemaError::ValidationFailed { .. })));
    }
}
