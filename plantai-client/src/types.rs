use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// MIME type substituted when the attachment's real type is unknown
pub const WILDCARD_MIME: &str = "*/*";

/// A file to be sent to the backend: content plus display name and MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Display name sent as the multipart filename
    pub file_name: String,
    /// MIME type, if detected
    pub mime_type: Option<String>,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Create an attachment with an undetected MIME type
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes,
        }
    }

    /// Set the MIME type
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// MIME type to put on the wire; wildcard when undetected
    pub fn mime(&self) -> &str {
        self.mime_type.as_deref().unwrap_or(WILDCARD_MIME)
    }
}

/// Request body for the chat endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Response body from the chat endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: String,
}

/// Response body from the document-interpretation endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct InterpretResponse {
    #[serde(default)]
    pub resposta_ia: String,
}

/// Backend-computed material quantities, keyed by material name.
///
/// The backend is the source of truth for which materials exist; quantities
/// may be numeric or string and are carried through unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialEstimate(pub BTreeMap<String, serde_json::Value>);

impl MaterialEstimate {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0.iter()
    }

    /// One display line per material, underscores in keys shown as spaces
    pub fn display_lines(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(key, value)| {
                let label = key.replace('_', " ");
                let quantity = match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                format!("{}: {}", label, quantity)
            })
            .collect()
    }
}

/// Width/height the backend detected in a floor plan, in meters
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectedMeasures {
    pub largura_metros: f64,
    pub altura_metros: f64,
}

/// Response body from the floor-plan interpretation endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PlanInterpretation {
    #[serde(default)]
    pub materiais_estimados: MaterialEstimate,
    #[serde(default)]
    pub resumo: String,
    #[serde(default)]
    pub medidas_detectadas: Option<DetectedMeasures>,
    #[serde(default)]
    pub resposta_ia: Option<String>,
}

/// Response body from the manual materials-computation endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ManualEstimate {
    #[serde(default)]
    pub materiais_estimados: MaterialEstimate,
    #[serde(default)]
    pub resposta_ia: Option<String>,
}

/// User verdict on an assistant answer.
///
/// Serialized as the wire values the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackVerdict {
    #[serde(rename = "certa")]
    Correct,
    #[serde(rename = "errada")]
    Incorrect,
    #[serde(rename = "melhorar")]
    NeedsImprovement,
}

impl FeedbackVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackVerdict::Correct => "certa",
            FeedbackVerdict::Incorrect => "errada",
            FeedbackVerdict::NeedsImprovement => "melhorar",
        }
    }
}

impl std::fmt::Display for FeedbackVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request body for the feedback endpoint.
///
/// All flows submit the same superset shape; `contexto_usuario` and
/// `origem_planta` go out as empty strings when the caller has none.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub question: String,
    pub answer: String,
    pub feedback: FeedbackVerdict,
    pub contexto_usuario: String,
    pub origem_planta: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_base_id: Option<String>,
}

impl FeedbackRequest {
    /// Create a feedback request with empty context and source fields
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        feedback: FeedbackVerdict,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            feedback,
            contexto_usuario: String::new(),
            origem_planta: String::new(),
            knowledge_base_id: None,
        }
    }

    /// Set the free-text user context
    pub fn with_user_context(mut self, contexto: impl Into<String>) -> Self {
        self.contexto_usuario = contexto.into();
        self
    }

    /// Set the source-document name the answer was derived from
    pub fn with_plan_source(mut self, origem: impl Into<String>) -> Self {
        self.origem_planta = origem.into();
        self
    }

    /// Set the knowledge-base identifier
    pub fn with_knowledge_base_id(mut self, id: impl Into<String>) -> Self {
        self.knowledge_base_id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn attachment_defaults_to_wildcard_mime() {
        let attachment = Attachment::new("planta.pdf", vec![1, 2, 3]);
        assert_eq!(attachment.mime(), "*/*");

        let attachment = attachment.with_mime_type("application/pdf");
        assert_eq!(attachment.mime(), "application/pdf");
    }

    #[test]
    fn verdict_wire_values() {
        assert_eq!(
            serde_json::to_string(&FeedbackVerdict::Correct).unwrap(),
            "\"certa\""
        );
        assert_eq!(
            serde_json::to_string(&FeedbackVerdict::Incorrect).unwrap(),
            "\"errada\""
        );
        assert_eq!(
            serde_json::to_string(&FeedbackVerdict::NeedsImprovement).unwrap(),
            "\"melhorar\""
        );
    }

    #[test]
    fn feedback_request_superset_shape() {
        let request = FeedbackRequest::new("q", "a", FeedbackVerdict::Correct)
            .with_user_context("forro de gesso")
            .with_plan_source("planta_sala.pdf");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "question": "q",
                "answer": "a",
                "feedback": "certa",
                "contextoUsuario": "forro de gesso",
                "origemPlanta": "planta_sala.pdf",
            })
        );
    }

    #[test]
    fn feedback_request_includes_knowledge_base_id_when_set() {
        let request =
            FeedbackRequest::new("q", "a", FeedbackVerdict::Incorrect).with_knowledge_base_id("kb-7");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["knowledgeBaseId"], json!("kb-7"));
    }

    #[test]
    fn material_estimate_renders_all_keys_generically() {
        let estimate: MaterialEstimate = serde_json::from_value(json!({
            "placas_gesso": 14,
            "montantes": "42",
            "material_novo": 3.5,
        }))
        .unwrap();

        let lines = estimate.display_lines();
        assert_eq!(
            lines,
            vec![
                "material novo: 3.5",
                "montantes: 42",
                "placas gesso: 14",
            ]
        );
    }

    #[test]
    fn material_estimate_defaults_empty() {
        let estimate = MaterialEstimate::default();
        assert!(estimate.is_empty());
        assert!(estimate.display_lines().is_empty());
    }
}
