//! Handlers for the `/diagnoses` resource.
//!
//! Every diagnosis is scoped to its owner; requests for another user's
//! diagnosis answer 404 exactly like a missing id.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use bodymap_core::body_map::{build_body_map, BodyMap};
use bodymap_core::error::CoreError;
use bodymap_core::extraction::Finding;
use bodymap_core::image_prompt::build_image_prompt;
use bodymap_core::report::{preview, validate_report_text};
use bodymap_core::types::{DbId, Timestamp};
use bodymap_db::models::diagnosis::{CreateDiagnosis, Diagnosis};
use bodymap_db::models::finding::FindingRecord;
use bodymap_db::repositories::{clamp_limit, clamp_offset, DiagnosisRepo, FindingRepo};
use bodymap_imagegen::generate_within;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::extract::ReportRequest;
use crate::middleware::auth::CurrentUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response for `POST /diagnoses`.
#[derive(Debug, Serialize)]
pub struct CreateDiagnosisResponse {
    pub diagnosis_id: DbId,
    pub findings: Vec<Finding>,
    pub generated_image_url: Option<String>,
}

/// History-list entry.
#[derive(Debug, Serialize)]
pub struct DiagnosisSummary {
    pub id: DbId,
    pub preview: String,
    pub finding_count: usize,
    pub generated_image_url: Option<String>,
    pub created_at: Timestamp,
}

impl From<&Diagnosis> for DiagnosisSummary {
    fn from(d: &Diagnosis) -> Self {
        Self {
            id: d.id,
            preview: preview(&d.report_text),
            finding_count: d.findings.as_array().map_or(0, Vec::len),
            generated_image_url: d.generated_image_url.clone(),
            created_at: d.created_at,
        }
    }
}

/// A diagnosis with its finding rows in extractor order.
#[derive(Debug, Serialize)]
pub struct DiagnosisDetail {
    pub id: DbId,
    pub user_id: DbId,
    pub report_text: String,
    pub generated_image_url: Option<String>,
    pub findings: Vec<FindingRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/diagnoses
///
/// Validate, extract, persist, then try to attach an illustrative image.
/// Persisting the diagnosis is the only step that can fail the request.
/// Image errors, an exceeded image budget, or a failed URL update are logged
/// and the committed diagnosis is returned without an image URL.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(input): Json<ReportRequest>,
) -> AppResult<(StatusCode, Json<CreateDiagnosisResponse>)> {
    validate_report_text(&input.report_text)?;

    let findings = state.extractor.extract(&input.report_text);

    let (diagnosis, rows) = DiagnosisRepo::create(
        &state.pool,
        &CreateDiagnosis {
            user_id: user.user_id,
            report_text: &input.report_text,
            findings: &findings,
        },
    )
    .await?;

    tracing::info!(
        diagnosis_id = diagnosis.id,
        user_id = user.user_id,
        finding_count = rows.len(),
        "Diagnosis created",
    );

    let generated_image_url = attach_image_best_effort(&state, diagnosis.id, &findings).await;

    Ok((
        StatusCode::CREATED,
        Json(CreateDiagnosisResponse {
            diagnosis_id: diagnosis.id,
            findings,
            generated_image_url,
        }),
    ))
}

/// GET /api/v1/diagnoses?limit=&offset=
///
/// Newest first.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<DiagnosisSummary>>>> {
    let diagnoses = DiagnosisRepo::list_by_user(
        &state.pool,
        user.user_id,
        clamp_limit(params.limit),
        clamp_offset(params.offset),
    )
    .await?;

    Ok(Json(DataResponse {
        data: diagnoses.iter().map(DiagnosisSummary::from).collect(),
    }))
}

/// GET /api/v1/diagnoses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DiagnosisDetail>>> {
    let diagnosis = find_owned(&state, &user, id).await?;
    let findings = FindingRepo::list_by_diagnosis(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: DiagnosisDetail {
            id: diagnosis.id,
            user_id: diagnosis.user_id,
            report_text: diagnosis.report_text,
            generated_image_url: diagnosis.generated_image_url,
            findings,
            created_at: diagnosis.created_at,
            updated_at: diagnosis.updated_at,
        },
    }))
}

/// GET /api/v1/diagnoses/{id}/body-map
pub async fn body_map(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BodyMap>>> {
    find_owned(&state, &user, id).await?;
    let findings = load_findings(&state, id).await?;
    Ok(Json(DataResponse {
        data: build_body_map(&findings),
    }))
}

/// POST /api/v1/diagnoses/{id}/image
///
/// (Re)generate the illustrative image. Unlike creation, failures here are
/// reported to the caller: 503 when generation is disabled, 502 when the
/// upstream service fails or exceeds the image budget.
pub async fn generate_image(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DiagnosisSummary>>> {
    let generator = state.image_generator.clone().ok_or_else(|| {
        AppError::ServiceUnavailable("Image generation is not configured".into())
    })?;

    find_owned(&state, &user, id).await?;
    let findings = load_findings(&state, id).await?;

    let image = generate_within(
        generator.as_ref(),
        &build_image_prompt(&findings),
        state.config.image_budget,
    )
    .await?;
    let updated = DiagnosisRepo::update_image(&state.pool, id, &image.url)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Diagnosis",
            id,
        }))?;

    tracing::info!(diagnosis_id = id, url = %image.url, "Diagnosis image regenerated");
    Ok(Json(DataResponse {
        data: DiagnosisSummary::from(&updated),
    }))
}

/// DELETE /api/v1/diagnoses/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_owned(&state, &user, id).await?;
    if DiagnosisRepo::delete(&state.pool, id).await? {
        tracing::info!(diagnosis_id = id, user_id = user.user_id, "Diagnosis deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Diagnosis",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a diagnosis owned by `user`, or 404.
async fn find_owned(state: &AppState, user: &CurrentUser, id: DbId) -> AppResult<Diagnosis> {
    DiagnosisRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|d| d.user_id == user.user_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Diagnosis",
            id,
        }))
}

/// Finding rows of a diagnosis, decoded back into [`Finding`]s.
async fn load_findings(state: &AppState, id: DbId) -> AppResult<Vec<Finding>> {
    let rows = FindingRepo::list_by_diagnosis(&state.pool, id).await?;
    let findings = rows
        .iter()
        .map(FindingRecord::to_finding)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(findings)
}

/// Generate and store an image for a fresh diagnosis.
///
/// Returns `None` when generation is disabled, fails, runs past
/// `image_budget`, or the URL cannot be stored.
async fn attach_image_best_effort(
    state: &AppState,
    diagnosis_id: DbId,
    findings: &[Finding],
) -> Option<String> {
    let generator = state.image_generator.as_ref()?;

    let prompt = build_image_prompt(findings);
    let image = match generate_within(generator.as_ref(), &prompt, state.config.image_budget).await
    {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!(diagnosis_id, error = %e, "Image generation failed; continuing without image");
            return None;
        }
    };

    match DiagnosisRepo::update_image(&state.pool, diagnosis_id, &image.url).await {
        Ok(updated) => updated.and_then(|d| d.generated_image_url),
        Err(e) => {
            tracing::warn!(diagnosis_id, error = %e, "Failed to store image URL; continuing without image");
            None
        }
    }
}
