//! Repository for the `findings` table.

use bodymap_core::extraction::Finding;
use bodymap_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::finding::FindingRecord;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, diagnosis_id, body_part, condition, severity, description, \
                        sort_order, created_at, updated_at";

/// Provides insert and lookup operations for finding rows.
pub struct FindingRepo;

impl FindingRepo {
    /// Insert findings on an existing connection or transaction.
    ///
    /// `sort_order` is the index in `findings`, so [`Self::list_by_diagnosis`]
    /// returns rows in extractor order.
    pub(crate) async fn insert_all(
        conn: &mut PgConnection,
        diagnosis_id: DbId,
        findings: &[Finding],
    ) -> Result<Vec<FindingRecord>, sqlx::Error> {
        let query = format!(
            "INSERT INTO findings (diagnosis_id, body_part, condition, severity, description, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );

        let mut rows = Vec::with_capacity(findings.len());
        for (index, finding) in findings.iter().enumerate() {
            let row = sqlx::query_as::<_, FindingRecord>(&query)
                .bind(diagnosis_id)
                .bind(&finding.body_part)
                .bind(&finding.condition)
                .bind(finding.severity.as_str())
                .bind(&finding.description)
                .bind(index as i32)
                .fetch_one(&mut *conn)
                .await?;
            rows.push(row);
        }
        Ok(rows)
    }

    /// List finding rows of a diagnosis in extractor order.
    pub async fn list_by_diagnosis(
        pool: &PgPool,
        diagnosis_id: DbId,
    ) -> Result<Vec<FindingRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM findings
             WHERE diagnosis_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, FindingRecord>(&query)
            .bind(diagnosis_id)
            .fetch_all(pool)
            .await
    }
}
