use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::AssistantError,
    multipart::build_multipart,
    types::{
        Attachment, ChatRequest, ChatResponse, FeedbackRequest, InterpretResponse, ManualEstimate,
        PlanInterpretation,
    },
};

/// Client for the materials-assistant backend.
///
/// One instance covers all endpoints; the base URL is resolved once at
/// startup instead of being hardcoded per call site.
pub struct AssistantClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl AssistantClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// No timeout is configured: each user action issues a single attempt
    /// and waits for it to settle.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask a free-text question with no attachment.
    ///
    /// An answer that trims to empty is a failure, not a blank answer.
    pub async fn ask(&self, question: &str) -> Result<String, AssistantError> {
        let url = format!("{}/chat", self.base_url);
        debug!("POST {}", url);

        let request = ChatRequest {
            question: question.to_string(),
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::Network { source: e })?;

        let body: ChatResponse = read_json(response).await?;
        non_blank(body.answer)
    }

    /// Ask a question about an attached document.
    ///
    /// The question text travels as the `contexto` field next to the file.
    pub async fn ask_about_file(
        &self,
        attachment: &Attachment,
        contexto: &str,
    ) -> Result<String, AssistantError> {
        let url = format!("{}/upload-interpreta", self.base_url);
        debug!("POST {} ({})", url, attachment.file_name);

        let form = build_multipart(Some(attachment), &[("contexto", contexto)])?;
        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AssistantError::Network { source: e })?;

        let body: InterpretResponse = read_json(response).await?;
        non_blank(body.resposta_ia)
    }

    /// Append a document to the backend knowledge base.
    ///
    /// The response body is not inspected beyond the status.
    pub async fn ingest_document(&self, attachment: &Attachment) -> Result<(), AssistantError> {
        let url = format!("{}/upload", self.base_url);
        debug!("POST {} ({})", url, attachment.file_name);

        let form = build_multipart(Some(attachment), &[])?;
        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AssistantError::Network { source: e })?;

        expect_success(response).await
    }

    /// Submit a floor-plan file for a materials estimate.
    pub async fn interpret_plan(
        &self,
        attachment: &Attachment,
        contexto: &str,
    ) -> Result<PlanInterpretation, AssistantError> {
        let url = format!("{}/upload-planta", self.base_url);
        debug!("POST {} ({})", url, attachment.file_name);

        let form = build_multipart(Some(attachment), &[("contexto", contexto)])?;
        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AssistantError::Network { source: e })?;

        read_json(response).await
    }

    /// Compute a materials estimate from manually entered geometry.
    ///
    /// `area` and `perimetro` are passed through in their raw string form;
    /// the backend owns numeric validation.
    pub async fn estimate_from_measures(
        &self,
        area: &str,
        perimetro: &str,
        contexto: &str,
    ) -> Result<ManualEstimate, AssistantError> {
        let url = format!("{}/calcular-materiais", self.base_url);
        debug!("POST {}", url);

        let form = build_multipart(
            None,
            &[("area", area), ("perimetro", perimetro), ("contexto", contexto)],
        )?;
        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AssistantError::Network { source: e })?;

        read_json(response).await
    }

    /// Report a verdict on a prior answer.
    ///
    /// Callers treat failures here as best-effort: log and move on.
    pub async fn send_feedback(&self, request: &FeedbackRequest) -> Result<(), AssistantError> {
        let url = format!("{}/feedback", self.base_url);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AssistantError::Network { source: e })?;

        expect_success(response).await
    }
}

/// Read the response body and parse it as JSON, mapping non-success
/// statuses to the error taxonomy first.
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AssistantError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| AssistantError::Network { source: e })?;

    if !status.is_success() {
        return Err(error_for_status(status, text));
    }

    serde_json::from_str(&text).map_err(AssistantError::from)
}

/// Check the status of a response whose body is not otherwise inspected.
async fn expect_success(response: reqwest::Response) -> Result<(), AssistantError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(error_for_status(status, text))
}

fn error_for_status(status: StatusCode, message: String) -> AssistantError {
    match status {
        StatusCode::BAD_REQUEST => AssistantError::invalid_request(message),
        _ => AssistantError::api_error(status.as_u16(), message),
    }
}

fn non_blank(answer: String) -> Result<String, AssistantError> {
    if answer.trim().is_empty() {
        Err(AssistantError::EmptyAnswer)
    } else {
        Ok(answer)
    }
}
