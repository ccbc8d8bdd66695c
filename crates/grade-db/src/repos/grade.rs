//! Grade repository: create, lookup, score append/pull, and bulk operations
//! by learner or class.

use grade_core::entities::{Grade, NewGrade, Score};
use grade_core::ids::GradeId;
use grade_core::inputs::{ClassUpdate, GradeDocument, ScoreMatch};

use crate::error::DatabaseError;
use crate::helpers::{
    GRADE_COLUMNS, opt_integer, opt_real, opt_text, row_to_grade, scores_to_json,
};
use crate::service::GradeStore;

impl GradeStore {
    /// Insert a new grade record and return it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ValidationFailed` if a score entry is invalid or
    /// the installed validator rejects the row.
    pub async fn create_grade(&self, grade: NewGrade) -> Result<Grade, DatabaseError> {
        for score in &grade.scores {
            score.validate()?;
        }
        let id = self.db().generate_id().await?;
        let scores = scores_to_json(&grade.scores)?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO grades (id, learner_id, class_id, scores) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![id.as_str(), grade.learner_id, grade.class_id, scores],
            )
            .await?;

        tracing::debug!(
            grade_id = %id,
            learner_id = grade.learner_id,
            class_id = grade.class_id,
            scores = grade.scores.len(),
            "created grade"
        );
        Ok(grade.with_id(id))
    }

    /// Insert a create document, applying the legacy `student_id` rename.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ValidationFailed` if required fields are missing.
    pub async fn create_grade_document(&self, doc: GradeDocument) -> Result<Grade, DatabaseError> {
        let grade = doc.normalize()?;
        self.create_grade(grade).await
    }

    /// Insert a loosely-typed JSON body after schema validation.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ValidationFailed` if the body does not match the
    /// `grade_document` schema or misses required fields.
    pub async fn create_grade_from_json(
        &self,
        body: serde_json::Value,
    ) -> Result<Grade, DatabaseError> {
        let doc: GradeDocument = self.schema().parse("grade_document", body)?;
        self.create_grade_document(doc).await
    }

    /// Fetch one grade by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no grade has this id.
    pub async fn get_grade(&self, id: &GradeId) -> Result<Grade, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {GRADE_COLUMNS} FROM grades WHERE id = ?1"),
                [id.as_str()],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::NotFound(id.to_string()))?;
        row_to_grade(&row)
    }

    /// Delete one grade by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no grade has this id.
    pub async fn delete_grade(&self, id: &GradeId) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM grades WHERE id = ?1", [id.as_str()])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound(id.to_string()));
        }
        tracing::debug!(grade_id = %id, "deleted grade");
        Ok(())
    }

    /// Append a score to the end of a grade's `scores`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no grade has this id, or
    /// `DatabaseError::ValidationFailed` if the score is invalid.
    pub async fn append_score(&self, id: &GradeId, score: Score) -> Result<Grade, DatabaseError> {
        score.validate()?;
        let entry = serde_json::to_string(&score).map_err(|e| DatabaseError::Other(e.into()))?;

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE grades SET scores = json_insert(scores, '$[#]', json(?2)) WHERE id = ?1",
                libsql::params![id.as_str(), entry],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound(id.to_string()));
        }

        tracing::debug!(grade_id = %id, kind = %score.kind, score = score.score, "appended score");
        self.get_grade(id).await
    }

    /// Append a loosely-typed JSON score after schema validation.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ValidationFailed` for a malformed body, or
    /// `DatabaseError::NotFound` if no grade has this id.
    pub async fn append_score_from_json(
        &self,
        id: &GradeId,
        body: serde_json::Value,
    ) -> Result<Grade, DatabaseError> {
        let score: Score = self.schema().parse("score", body)?;
        self.append_score(id, score).await
    }

    /// Remove every score entry matching `criteria`, preserving the order of
    /// the remaining entries. Matching nothing is not an error.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for an empty match, or
    /// `DatabaseError::NotFound` if no grade has this id.
    pub async fn remove_score(
        &self,
        id: &GradeId,
        criteria: &ScoreMatch,
    ) -> Result<Grade, DatabaseError> {
        criteria.validate()?;

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE grades SET scores = (
                     SELECT json_group_array(json(kept.value)) FROM (
                         SELECT s.value FROM json_each(grades.scores) AS s
                         WHERE NOT coalesce(
                             (?2 IS NULL OR json_extract(s.value, '$.type') = ?2)
                             AND (?3 IS NULL OR json_extract(s.value, '$.score') = ?3),
                             0
                         )
                         ORDER BY s.key
                     ) AS kept
                 )
                 WHERE id = ?1",
                libsql::params_from_iter(vec![
                    libsql::Value::Text(id.to_string()),
                    opt_text(criteria.kind.as_deref()),
                    opt_real(criteria.score),
                ]),
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound(id.to_string()));
        }

        tracing::debug!(grade_id = %id, ?criteria, "removed matching scores");
        self.get_grade(id).await
    }

    /// Remove scores matching a loosely-typed JSON body after schema validation.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ValidationFailed` for a malformed body, plus
    /// the errors of [`remove_score`](Self::remove_score).
    pub async fn remove_score_from_json(
        &self,
        id: &GradeId,
        body: serde_json::Value,
    ) -> Result<Grade, DatabaseError> {
        let criteria: ScoreMatch = self.schema().parse("score_match", body)?;
        self.remove_score(id, &criteria).await
    }

    /// All grades of a learner, optionally restricted to one class, in
    /// insertion order. No match yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_by_learner(
        &self,
        learner_id: i64,
        class_id: Option<i64>,
    ) -> Result<Vec<Grade>, DatabaseError> {
        self.list_where(
            "learner_id = ?1 AND (?2 IS NULL OR class_id = ?2)",
            learner_id,
            class_id,
        )
        .await
    }

    /// All grades of a class, optionally restricted to one learner, in
    /// insertion order. No match yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_by_class(
        &self,
        class_id: i64,
        learner_id: Option<i64>,
    ) -> Result<Vec<Grade>, DatabaseError> {
        self.list_where(
            "class_id = ?1 AND (?2 IS NULL OR learner_id = ?2)",
            class_id,
            learner_id,
        )
        .await
    }

    /// Delete every grade of a learner. Returns the number deleted (zero is
    /// not an error).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn delete_by_learner(&self, learner_id: i64) -> Result<u64, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM grades WHERE learner_id = ?1", [learner_id])
            .await?;
        tracing::debug!(learner_id, affected, "deleted grades by learner");
        Ok(affected)
    }

    /// Move every grade of `class_id` to `update.class_id`. Returns the number
    /// of grades changed (zero is not an error).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn update_class_id(
        &self,
        class_id: i64,
        update: ClassUpdate,
    ) -> Result<u64, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE grades SET class_id = ?2 WHERE class_id = ?1",
                [class_id, update.class_id],
            )
            .await?;
        tracing::debug!(class_id, new_class_id = update.class_id, affected, "updated class id");
        Ok(affected)
    }

    /// Apply a loosely-typed JSON class update after schema validation.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ValidationFailed` for a malformed body.
    pub async fn update_class_id_from_json(
        &self,
        class_id: i64,
        body: serde_json::Value,
    ) -> Result<u64, DatabaseError> {
        let update: ClassUpdate = self.schema().parse("class_update", body)?;
        self.update_class_id(class_id, update).await
    }

    /// Delete every grade of a class. Returns the number deleted (zero is not
    /// an error).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn delete_by_class(&self, class_id: i64) -> Result<u64, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM grades WHERE class_id = ?1", [class_id])
            .await?;
        tracing::debug!(class_id, affected, "deleted grades by class");
        Ok(affected)
    }

    async fn list_where(
        &self,
        filter: &str,
        key: i64,
        narrow: Option<i64>,
    ) -> Result<Vec<Grade>, DatabaseError> {
        let sql = format!("SELECT {GRADE_COLUMNS} FROM grades WHERE {filter} ORDER BY rowid");
        let mut rows = self
            .db()
            .conn()
            .query(
                &sql,
                libsql::params_from_iter(vec![libsql::Value::Integer(key), opt_integer(narrow)]),
            )
            .await?;

        let mut grades = Vec::new();
        while let Some(row) = rows.next().await? {
            grades.push(row_to_grade(&row)?);
        }
        Ok(grades)
    }
}
