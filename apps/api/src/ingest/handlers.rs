//! Axum route handler for résumé PDF upload.

use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::ingest::pdf::{extract_resume_text, is_pdf};

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub resume_text: String,
}

/// POST /api/v1/resume/upload
///
/// Accepts a multipart form with a single `file` field holding a PDF résumé
/// and returns its extracted text. Nothing is written to the session here;
/// the client submits the final text with the generate action.
pub async fn handle_upload_resume(
    mut multipart: Multipart,
) -> Result<Json<UploadResumeResponse>, AppError> {
    let mut file: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("failed to read multipart field: {e}");
        AppError::Validation("failed to read multipart field".to_string())
    })? {
        let name = field.name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(|e| {
            tracing::error!("failed to read field data: {e}");
            AppError::Validation("failed to read field data".to_string())
        })?;
        if name == "file" {
            file = Some(data);
        }
    }

    let data = file.ok_or_else(|| AppError::Validation("missing file field".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }
    if !is_pdf(&data) {
        return Err(AppError::Validation(
            "uploaded file is not a PDF".to_string(),
        ));
    }

    let resume_text = extract_resume_text(&data)?;
    info!("extracted {} characters from uploaded PDF", resume_text.len());

    Ok(Json(UploadResumeResponse { resume_text }))
}
