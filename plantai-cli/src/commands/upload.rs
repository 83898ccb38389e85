//! Knowledge-base ingestion: one file per invocation, status-line reporting.

use plantai_client::AssistantClient;
use std::path::Path;
use tracing::warn;

use crate::{commands::read_attachment, error::CliError};

pub async fn run_upload(
    client: &AssistantClient,
    path: &Path,
    mime: Option<&str>,
) -> Result<(), CliError> {
    if !path.exists() {
        // Invoking the action without a usable file is a status, not a crash.
        println!("No file selected.");
        return Ok(());
    }

    let attachment = read_attachment(path, mime)?;
    println!("Uploading {}...", attachment.file_name);

    match client.ingest_document(&attachment).await {
        Ok(()) => {
            if attachment.mime().starts_with("image/") {
                println!("Image uploaded. The assistant will interpret the plan.");
            } else {
                println!("File uploaded successfully.");
            }
            Ok(())
        }
        Err(e) => {
            warn!("Upload failed: {}", e);
            println!("Upload failed.");
            Err(e.into())
        }
    }
}
