//! Repository for the `diagnoses` table.

use bodymap_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::diagnosis::{CreateDiagnosis, Diagnosis};
use crate::models::finding::FindingRecord;
use crate::repositories::finding_repo::FindingRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, report_text, findings, generated_image_url, \
                        created_at, updated_at";

/// Provides CRUD operations for diagnoses.
pub struct DiagnosisRepo;

impl DiagnosisRepo {
    /// Insert a diagnosis and one `findings` row per finding, atomically.
    ///
    /// Either both the diagnosis and all its finding rows are stored, or
    /// nothing is.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDiagnosis<'_>,
    ) -> Result<(Diagnosis, Vec<FindingRecord>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO diagnoses (user_id, report_text, findings)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let diagnosis = sqlx::query_as::<_, Diagnosis>(&query)
            .bind(input.user_id)
            .bind(input.report_text)
            .bind(Json(input.findings))
            .fetch_one(&mut *tx)
            .await?;

        let rows = FindingRepo::insert_all(&mut tx, diagnosis.id, input.findings).await?;

        tx.commit().await?;
        Ok((diagnosis, rows))
    }

    /// Find a diagnosis by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Diagnosis>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diagnoses WHERE id = $1");
        sqlx::query_as::<_, Diagnosis>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's diagnoses, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Diagnosis>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM diagnoses
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Diagnosis>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Attach a generated image URL. Returns the updated row, or `None` if not found.
    pub async fn update_image(
        pool: &PgPool,
        id: DbId,
        image_url: &str,
    ) -> Result<Option<Diagnosis>, sqlx::Error> {
        let query = format!(
            "UPDATE diagnoses SET generated_image_url = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Diagnosis>(&query)
            .bind(id)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a diagnosis; its finding rows cascade. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM diagnoses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
