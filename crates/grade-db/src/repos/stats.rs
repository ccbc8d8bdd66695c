//! Threshold aggregation over grade scores.
//!
//! The query runs as one statement in four stages:
//!
//! ```text
//! observations      one row per (grade, score) pair in scope   (unwind)
//! learner_averages  mean of every observation per learner      (group)
//! counted           learners above threshold, learner total    (filter + count)
//! final select      percentage = 100 * above / total           (project)
//! ```
//!
//! An empty population yields no row, so the caller gets `None` rather than
//! a division by zero.

use grade_core::enums::TotalCountBasis;
use grade_core::inputs::StatsQuery;
use grade_core::responses::ThresholdStats;

use crate::error::DatabaseError;
use crate::helpers::opt_integer;
use crate::service::GradeStore;

/// Build the aggregation SQL. `?1` is the optional class, `?2` the threshold.
fn threshold_stats_sql(basis: TotalCountBasis) -> String {
    // Qualifying counts learners after the threshold filter, so the total
    // equals the above-threshold count.
    let learner_filter = match basis {
        TotalCountBasis::Population => "",
        TotalCountBasis::Qualifying => "WHERE avg_score > ?2",
    };
    format!(
        "WITH observations AS (
             SELECT g.learner_id, json_extract(s.value, '$.score') AS score
             FROM grades AS g, json_each(g.scores) AS s
             WHERE ?1 IS NULL OR g.class_id = ?1
         ),
         learner_averages AS (
             SELECT learner_id, avg(score) AS avg_score
             FROM observations
             GROUP BY learner_id
         ),
         counted AS (
             SELECT coalesce(sum(avg_score > ?2), 0) AS count_above,
                    count(*) AS total_count
             FROM learner_averages
             {learner_filter}
         )
         SELECT count_above, total_count, count_above * 100.0 / total_count
         FROM counted
         WHERE total_count > 0"
    )
}

fn non_negative(value: i64, column: &str) -> Result<u64, DatabaseError> {
    u64::try_from(value)
        .map_err(|_| DatabaseError::Query(format!("negative {column} in stats result: {value}")))
}

impl GradeStore {
    /// Count learners whose mean score is strictly above `query.threshold`,
    /// over all grades or the grades of one class.
    ///
    /// Returns `Ok(None)` when no learner is counted (an empty class, or with
    /// [`TotalCountBasis::Qualifying`] no learner above the threshold).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for a non-finite threshold, or
    /// `DatabaseError` if the query fails.
    pub async fn threshold_stats(
        &self,
        query: &StatsQuery,
    ) -> Result<Option<ThresholdStats>, DatabaseError> {
        query.validate()?;

        let sql = threshold_stats_sql(query.total_count);
        let mut rows = self
            .db()
            .conn()
            .query(
                &sql,
                libsql::params_from_iter(vec![
                    opt_integer(query.class_id),
                    libsql::Value::Real(query.threshold),
                ]),
            )
            .await?;

        let Some(row) = rows.next().await? else {
            tracing::debug!(class_id = ?query.class_id, threshold = query.threshold, "no learners in scope");
            return Ok(None);
        };

        let stats = ThresholdStats {
            count_above: non_negative(row.get::<i64>(0)?, "count_above")?,
            total_count: non_negative(row.get::<i64>(1)?, "total_count")?,
            percentage_above: row.get::<f64>(2)?,
        };
        tracing::debug!(
            class_id = ?query.class_id,
            threshold = query.threshold,
            basis = %query.total_count,
            count_above = stats.count_above,
            total_count = stats.total_count,
            "computed threshold stats"
        );
        Ok(Some(stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_grade, test_store};
    use grade_core::entities::NewGrade;
    use pretty_assertions::assert_eq;

    const C1: i64 = 1;
    const C2: i64 = 2;

    /// L1 [60, 90] avg 75, L2 [50], L3 [80, 85] avg 82.5, all in C1.
    async fn three_learner_class(store: &GradeStore) {
        seed_grade(store, 1, C1, &[60.0, 90.0]).await;
        seed_grade(store, 2, C1, &[50.0]).await;
        seed_grade(store, 3, C1, &[80.0, 85.0]).await;
    }

    #[tokio::test]
    async fn population_total_counts_every_learner() {
        let store = test_store().await;
        three_learner_class(&store).await;

        let stats = store
            .threshold_stats(&StatsQuery::for_class(C1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stats.count_above, 2);
        assert_eq!(stats.total_count, 3);
        assert!((stats.percentage_above - 200.0 / 3.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn qualifying_total_matches_legacy_report() {
        let store = test_store().await;
        three_learner_class(&store).await;

        let query = StatsQuery::for_class(C1).with_total_count(TotalCountBasis::Qualifying);
        let stats = store.threshold_stats(&query).await.unwrap().unwrap();
        assert_eq!(
            stats,
            ThresholdStats {
                count_above: 2,
                total_count: 2,
                percentage_above: 100.0,
            }
        );
    }

    #[tokio::test]
    async fn qualifying_with_nobody_above_is_empty() {
        let store = test_store().await;
        seed_grade(&store, 1, C1, &[40.0]).await;

        let query = StatsQuery::for_class(C1).with_total_count(TotalCountBasis::Qualifying);
        assert_eq!(store.threshold_stats(&query).await.unwrap(), None);

        let population = store
            .threshold_stats(&StatsQuery::for_class(C1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(population.count_above, 0);
        assert_eq!(population.total_count, 1);
        assert!(population.percentage_above.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn empty_class_yields_no_result() {
        let store = test_store().await;
        three_learner_class(&store).await;

        for basis in [TotalCountBasis::Population, TotalCountBasis::Qualifying] {
            let query = StatsQuery::for_class(99).with_total_count(basis);
            assert_eq!(store.threshold_stats(&query).await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn empty_store_yields_no_result() {
        let store = test_store().await;
        assert_eq!(
            store.threshold_stats(&StatsQuery::all_classes()).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn threshold_is_strictly_greater() {
        let store = test_store().await;
        seed_grade(&store, 1, C1, &[70.0]).await;
        seed_grade(&store, 2, C1, &[60.0, 80.5]).await;

        let stats = store
            .threshold_stats(&StatsQuery::for_class(C1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stats.count_above, 1);
        assert_eq!(stats.total_count, 2);
        assert!((stats.percentage_above - 50.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn averages_flatten_scores_across_grade_records() {
        let store = test_store().await;
        // One learner, two grade records in scope: mean of [100, 40, 40] = 60.
        seed_grade(&store, 1, C1, &[100.0]).await;
        seed_grade(&store, 1, C2, &[40.0, 40.0]).await;

        let stats = store
            .threshold_stats(&StatsQuery::all_classes())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stats.count_above, 0);
        assert_eq!(stats.total_count, 1);

        // Scoped to C1 only the 100 counts.
        let scoped = store
            .threshold_stats(&StatsQuery::for_class(C1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(scoped.count_above, 1);
    }

    #[tokio::test]
    async fn unscoped_aggregates_every_class() {
        let store = test_store().await;
        three_learner_class(&store).await;
        seed_grade(&store, 4, C2, &[95.0]).await;

        let stats = store
            .threshold_stats(&StatsQuery::all_classes())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stats.count_above, 3);
        assert_eq!(stats.total_count, 4);
        assert!((stats.percentage_above - 75.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn class_scope_excludes_learners_only_in_other_classes() {
        let store = test_store().await;
        three_learner_class(&store).await;
        seed_grade(&store, 4, C2, &[95.0]).await;
        seed_grade(&store, 5, C2, &[10.0]).await;

        let stats = store
            .threshold_stats(&StatsQuery::for_class(C1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.count_above, 2);
    }

    #[tokio::test]
    async fn learners_without_scores_are_not_counted() {
        let store = test_store().await;
        store
            .create_grade(NewGrade::new(7, C1, Vec::new()))
            .await
            .unwrap();
        seed_grade(&store, 8, C1, &[90.0]).await;

        let stats = store
            .threshold_stats(&StatsQuery::for_class(C1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stats.total_count, 1);
        assert_eq!(stats.count_above, 1);
    }

    #[tokio::test]
    async fn custom_threshold_is_applied() {
        let store = test_store().await;
        three_learner_class(&store).await;

        let query = StatsQuery::for_class(C1).with_threshold(80.0);
        let stats = store.threshold_stats(&query).await.unwrap().unwrap();
        assert_eq!(stats.count_above, 1);
        assert_eq!(stats.total_count, 3);
    }

    #[tokio::test]
    async fn non_finite_threshold_is_invalid() {
        let store = test_store().await;
        let query = StatsQuery::all_classes().with_threshold(f64::NAN);
        assert!(matches!(
            store.threshold_stats(&query).await,
            Err(DatabaseError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn stats_reflect_later_mutations() {
        let store = test_store().await;
        let low = seed_grade(&store, 1, C1, &[50.0]).await;
        seed_grade(&store, 2, C1, &[90.0]).await;

        let before = store
            .threshold_stats(&StatsQuery::for_class(C1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(before.count_above, 1);

        store
            .append_score(&low.id, grade_core::entities::Score::new("exam", 100.0).unwrap())
            .await
            .unwrap();
        let after = store
            .threshold_stats(&StatsQuery::for_class(C1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(after.count_above, 2);
        assert!((after.percentage_above - 100.0).abs() < 1e-9);
    }
}
