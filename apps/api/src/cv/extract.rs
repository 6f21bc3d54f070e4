//! CV text extraction from uploaded documents.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Extracts plain text from an uploaded CV. PDF, plain text and markdown
/// are supported; the result has its whitespace collapsed.
pub fn extract_text(file_name: &str, data: &Bytes) -> Result<String, AppError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let raw = match extension.as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(data).map_err(|e| {
            AppError::UnprocessableEntity(format!("Could not read PDF '{file_name}': {e}"))
        })?,
        "txt" | "md" => String::from_utf8_lossy(data).into_owned(),
        _ => {
            return Err(AppError::Validation(format!(
                "Unsupported CV format '{file_name}'; upload a PDF or text file"
            )))
        }
    };

    let text = collapse_whitespace(&raw);
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "No text found in '{file_name}'"
        )));
    }

    debug!("Extracted {} chars from {file_name}", text.chars().count());
    Ok(text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
