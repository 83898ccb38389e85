//! Shared multipart assembly for all upload-style endpoints.

use reqwest::multipart::{Form, Part};

use crate::{error::AssistantError, types::Attachment};

/// Build a multipart form from an optional file plus extra text fields.
///
/// Every upload-style call goes through here so field assembly stays in one
/// place: the file lands in a `file` part carrying the display name and MIME
/// type, and each extra field becomes a text part.
pub fn build_multipart(
    file: Option<&Attachment>,
    fields: &[(&str, &str)],
) -> Result<Form, AssistantError> {
    let mut form = Form::new();

    if let Some(attachment) = file {
        let part = Part::bytes(attachment.bytes.clone())
            .file_name(attachment.file_name.clone())
            .mime_str(attachment.mime())
            .map_err(|e| {
                AssistantError::invalid_request(format!(
                    "Invalid MIME type '{}': {}",
                    attachment.mime(),
                    e
                ))
            })?;
        form = form.part("file", part);
    }

    for (name, value) in fields {
        form = form.text(name.to_string(), value.to_string());
    }

    Ok(form)
}
