//! Axum route handler for the Parse API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::parsing::document::{extract_text, DocumentKind};
use crate::parsing::models::ResumeResponse;
use crate::parsing::service::build_resume;
use crate::state::AppState;

/// Fields read from the multipart form.
struct ParseUpload {
    file_name: String,
    data: Bytes,
    job_description: Option<String>,
}

/// POST /parse
///
/// Multipart form: `file` (PDF or DOCX, required), `job_description` (optional).
/// When a bearer token is configured it is checked before anything is read,
/// including the multipart framing itself.
pub async fn handle_parse(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeResponse>, AppError> {
    authorize(&state, &headers)?;

    let multipart = multipart
        .map_err(|e| AppError::Validation(format!("Expected a multipart form: {e}")))?;
    let upload = read_upload(multipart).await?;
    let kind = DocumentKind::from_file_name(&upload.file_name)?;
    info!(
        file_name = %upload.file_name,
        bytes = upload.data.len(),
        "parsing uploaded resume"
    );

    let data = upload.data;
    // pdf-extract panics on some malformed files; a panic here means an unreadable upload.
    let text = tokio::task::spawn_blocking(move || extract_text(kind, &data))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::UnprocessableEntity("Could not read document".to_string())
            } else {
                AppError::Internal(anyhow::Error::new(e).context("document conversion task failed"))
            }
        })??;

    let resume = build_resume(&text, upload.job_description.as_deref(), &state.experience).await;

    Ok(Json(resume))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    let Some(expected) = state.config.expected_authorization() else {
        return Ok(());
    };

    let provided = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if provided == Some(expected.as_str()) {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

async fn read_upload(mut multipart: Multipart) -> Result<ParseUpload, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut job_description = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read file: {e}")))?;
                file = Some((file_name, data));
            }
            "job_description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read job_description: {e}"))
                })?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let (file_name, data) =
        file.ok_or_else(|| AppError::Validation("file is required".to_string()))?;

    Ok(ParseUpload {
        file_name,
        data,
        job_description,
    })
}
