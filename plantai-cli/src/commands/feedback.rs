//! Standalone feedback submission on a prior answer.

use plantai_client::{AssistantClient, FeedbackRequest, FeedbackVerdict};

use crate::error::CliError;

pub async fn run_feedback(
    client: &AssistantClient,
    question: &str,
    answer: &str,
    verdict: FeedbackVerdict,
    context: Option<&str>,
    source: Option<&str>,
    kb_id: Option<&str>,
) -> Result<(), CliError> {
    let mut request = FeedbackRequest::new(question, answer, verdict);
    if let Some(context) = context {
        request = request.with_user_context(context);
    }
    if let Some(source) = source {
        request = request.with_plan_source(source);
    }
    if let Some(kb_id) = kb_id {
        request = request.with_knowledge_base_id(kb_id);
    }

    client.send_feedback(&request).await?;
    println!("Feedback sent. Thank you!");
    Ok(())
}
