//! Shared test utilities for grade-db tests.

pub(crate) mod helpers {
    use grade_core::entities::{Grade, NewGrade, Score};

    use crate::service::GradeStore;

    /// In-memory store with indexes and the validator installed, as after
    /// deployment.
    pub async fn test_store() -> GradeStore {
        let store = bare_test_store().await;
        store.ensure_indexes().await.unwrap();
        store.install_schema().await.unwrap();
        store
    }

    /// In-memory store with only the base table.
    pub async fn bare_test_store() -> GradeStore {
        GradeStore::open_local(":memory:").await.unwrap()
    }

    pub fn exam(score: f64) -> Score {
        Score::new("exam", score).unwrap()
    }

    /// Insert a grade whose scores are all exams with the given values.
    pub async fn seed_grade(
        store: &GradeStore,
        learner_id: i64,
        class_id: i64,
        scores: &[f64],
    ) -> Grade {
        let scores = scores.iter().copied().map(exam).collect();
        store
            .create_grade(NewGrade::new(learner_id, class_id, scores))
            .await
            .unwrap()
    }
}
