//! Serde roundtrip and JsonSchema validation tests for grade types.

use schemars::schema_for;
use grade_core::entities::{Grade, NewGrade, Score};
use grade_core::enums::TotalCountBasis;
use grade_core::ids::GradeId;
use grade_core::inputs::{ClassUpdate, GradeDocument, ScoreMatch, StatsQuery};
use grade_core::responses::{AffectedResponse, CreatedResponse, ThresholdStats};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn grade_id() -> GradeId {
    GradeId::parse("grd-00ff00ff00ff00ff").unwrap()
}

roundtrip_and_validate!(
    grade_roundtrip,
    Grade,
    Grade {
        id: grade_id(),
        learner_id: 12,
        class_id: 301,
        scores: vec![
            Score::new("exam", 60.0).unwrap(),
            Score::new("homework", 90.5).unwrap(),
        ],
    }
);

roundtrip_and_validate!(
    new_grade_roundtrip,
    NewGrade,
    NewGrade::new(4, 8, Vec::new())
);

roundtrip_and_validate!(
    grade_document_roundtrip,
    GradeDocument,
    GradeDocument {
        learner_id: None,
        student_id: Some(77),
        class_id: Some(3),
        scores: Some(vec![Score::new("quiz", 42.0).unwrap()]),
    }
);

roundtrip_and_validate!(
    score_match_roundtrip,
    ScoreMatch,
    ScoreMatch {
        kind: Some("quiz".into()),
        score: None,
    }
);

roundtrip_and_validate!(
    class_update_roundtrip,
    ClassUpdate,
    ClassUpdate { class_id: 550 }
);

roundtrip_and_validate!(
    stats_query_roundtrip,
    StatsQuery,
    StatsQuery::for_class(2).with_total_count(TotalCountBasis::Qualifying)
);

roundtrip_and_validate!(
    threshold_stats_roundtrip,
    ThresholdStats,
    ThresholdStats {
        count_above: 5,
        total_count: 8,
        percentage_above: 62.5,
    }
);

roundtrip_and_validate!(
    created_response_roundtrip,
    CreatedResponse,
    CreatedResponse { id: grade_id() }
);

roundtrip_and_validate!(
    affected_response_roundtrip,
    AffectedResponse,
    AffectedResponse { affected: 3 }
);

#[test]
fn threshold_stats_keep_report_field_names() {
    let stats = ThresholdStats {
        count_above: 1,
        total_count: 1,
        percentage_above: 100.0,
    };
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "count_above_70": 1,
            "total_count": 1,
            "percentage_above_70": 100.0
        })
    );
}
