//! # plantai client
//!
//! Typed client for the plantai materials-assistant backend: free-text
//! questions, document uploads into the knowledge base, floor-plan
//! interpretation, manual materials computation, and answer feedback.
//!
//! ## Example
//!
//! ```rust,no_run
//! use plantai_client::AssistantClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AssistantClient::new("http://localhost:8000");
//!     let answer = client.ask("Quantas placas para 20 m²?").await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```
//!
//! ## Floor-plan example
//!
//! ```rust,no_run
//! use plantai_client::{AssistantClient, Attachment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AssistantClient::new("http://localhost:8000");
//!     let planta = Attachment::new("planta.pdf", std::fs::read("planta.pdf")?)
//!         .with_mime_type("application/pdf");
//!     let estimate = client.interpret_plan(&planta, "forro de gesso").await?;
//!     for line in estimate.materiais_estimados.display_lines() {
//!         println!("{}", line);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod multipart;
pub mod session;
pub mod types;

pub use client::AssistantClient;
pub use error::AssistantError;
pub use session::FlowState;
pub use types::{
    Attachment, DetectedMeasures, FeedbackRequest, FeedbackVerdict, ManualEstimate,
    MaterialEstimate, PlanInterpretation,
};
