//! Command implementations: each collects input, issues one request through
//! the client, and renders the response.

mod ask;
mod feedback;
mod plan;
mod upload;

pub use ask::run_ask;
pub use feedback::run_feedback;
pub use plan::{run_plan_file, run_plan_manual};
pub use upload::run_upload;

use plantai_client::Attachment;
use std::path::Path;

use crate::error::CliError;

/// Read a file into an attachment carrying its display name and MIME type
pub(crate) fn read_attachment(path: &Path, mime: Option<&str>) -> Result<Attachment, CliError> {
    let bytes = std::fs::read(path)
        .map_err(|e| CliError::Input(format!("Cannot read file {}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("file")
        .to_string();

    let mut attachment = Attachment::new(file_name, bytes);
    if let Some(mime) = mime {
        attachment = attachment.with_mime_type(mime);
    }
    Ok(attachment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_attachment_carries_name_and_mime() {
        let mut file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .unwrap();
        file.write_all(b"conteudo").unwrap();

        let attachment = read_attachment(file.path(), Some("text/plain")).unwrap();
        assert_eq!(attachment.bytes, b"conteudo");
        assert_eq!(attachment.mime(), "text/plain");
        assert!(attachment.file_name.ends_with(".txt"));
    }

    #[test]
    fn read_attachment_defaults_to_wildcard_mime() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"x").unwrap();

        let attachment = read_attachment(file.path(), None).unwrap();
        assert_eq!(attachment.mime(), "*/*");
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let result = read_attachment(Path::new("/nonexistent/planta.pdf"), None);
        assert!(matches!(result, Err(CliError::Input(_))));
    }
}
