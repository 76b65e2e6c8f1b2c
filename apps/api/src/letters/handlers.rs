//! Axum route handler for letter generation — the delivery pipeline.
//!
//! Flow: validate → build_prompt → completion call → assemble → render_docx →
//! write the named output file → return bytes for download.
//!
//! The completion call is the only fallible remote step; when it fails the
//! pipeline stops before any document is rendered or written, so no partial
//! file is ever exposed.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::document::{assemble, docx::render_docx};
use crate::errors::AppError;
use crate::letters::prompts::build_prompt;
use crate::letters::{output_filename, LetterRequest};
use crate::state::AppState;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// POST /api/v1/letters
///
/// Runs the full generation pipeline for one request and returns the
/// finished `.docx` as an attachment. Re-submitting identical inputs
/// overwrites the same-named file; the last write wins.
pub async fn handle_generate_letter(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate().map_err(AppError::Validation)?;

    let prompt = build_prompt(&request);
    info!(
        letter_type = ?request.letter_type,
        recipient = %request.recipient_name,
        "requesting letter completion"
    );

    let generated_text = state.llm.complete(&prompt).await?;

    let document = assemble(&request, &generated_text);
    let docx_bytes = render_docx(&document, &state.config.logo_path)?;

    let filename = output_filename(&request);
    let output_path = std::path::Path::new(&state.config.output_dir).join(&filename);
    tokio::fs::write(&output_path, &docx_bytes)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    info!(path = %output_path.display(), bytes = docx_bytes.len(), "letter written");

    let headers = [
        (header::CONTENT_TYPE, DOCX_MIME.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, Bytes::from(docx_bytes)))
}
