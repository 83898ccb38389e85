//! The question flow: free text to the chat endpoint, or multipart to the
//! interpretation endpoint when a file is attached.

use plantai_client::{AssistantClient, FeedbackRequest, FeedbackVerdict, FlowState};
use std::path::Path;
use tracing::warn;

use crate::{commands::read_attachment, error::CliError};

pub async fn run_ask(
    client: &AssistantClient,
    question: &str,
    file: Option<&Path>,
    mime: Option<&str>,
    offer_feedback: bool,
) -> Result<(), CliError> {
    let mut state: FlowState<String> = FlowState::new();
    if !state.try_begin() {
        return Ok(());
    }

    let outcome = match file {
        Some(path) => {
            let attachment = read_attachment(path, mime)?;
            client.ask_about_file(&attachment, question).await
        }
        None => client.ask(question).await,
    };

    match outcome {
        Ok(answer) => state.complete(answer),
        Err(e) => {
            state.fail();
            return Err(e.into());
        }
    }

    let answer = match state.result() {
        Some(answer) => answer.clone(),
        None => return Ok(()),
    };
    println!("{}", answer);

    if offer_feedback && state.can_send_feedback() {
        if let Some(verdict) = prompt_verdict() {
            let request = FeedbackRequest::new(question, answer, verdict);
            match client.send_feedback(&request).await {
                Ok(()) => {
                    state.mark_feedback_sent();
                    println!("Feedback sent. Thank you!");
                }
                // Best-effort: feedback failures never block the flow.
                Err(e) => warn!("Failed to send feedback: {}", e),
            }
        }
    }

    Ok(())
}

fn prompt_verdict() -> Option<FeedbackVerdict> {
    println!();
    println!("Was this answer helpful? [c]orrect / [w]rong / [i]mprovable / Enter to skip");

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return None;
    }

    match line.trim().to_lowercase().as_str() {
        "c" => Some(FeedbackVerdict::Correct),
        "w" => Some(FeedbackVerdict::Incorrect),
        "i" => Some(FeedbackVerdict::NeedsImprovement),
        _ => None,
    }
}
