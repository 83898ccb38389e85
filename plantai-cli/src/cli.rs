use clap::{Parser, Subcommand};
use plantai_client::{AssistantClient, FeedbackVerdict};
use std::path::PathBuf;

use crate::{commands, config, error::CliError};

#[derive(Debug, Parser)]
#[command(name = "plantai")]
#[command(about = "Materials-assistant client: ask questions, upload documents, estimate materials")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides environment and config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ask the assistant a question, optionally about an attached file
    Ask {
        /// Question text
        question: String,

        /// File to attach; the question then travels as its interpretive context
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// MIME type of the attached file (wildcard when omitted)
        #[arg(long)]
        mime: Option<String>,

        /// Prompt for a verdict after the answer is rendered
        #[arg(long)]
        feedback: bool,
    },

    /// Send a document to the backend knowledge base
    Upload {
        /// File to ingest
        path: PathBuf,

        /// MIME type of the file (wildcard when omitted)
        #[arg(long)]
        mime: Option<String>,
    },

    /// Materials estimate from a floor plan or from manual measures
    Plan {
        #[command(subcommand)]
        mode: PlanCommands,
    },

    /// Report a verdict on a prior answer
    Feedback {
        /// The original question
        #[arg(long)]
        question: String,

        /// The answer being judged
        #[arg(long)]
        answer: String,

        /// Verdict on the answer
        #[arg(long, value_enum)]
        verdict: VerdictArg,

        /// Free-text user context
        #[arg(long)]
        context: Option<String>,

        /// Source-document name the answer was derived from
        #[arg(long)]
        source: Option<String>,

        /// Knowledge-base identifier
        #[arg(long)]
        kb_id: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlanCommands {
    /// Interpret a floor-plan file
    File {
        /// Floor-plan file (PDF, image, ...)
        path: PathBuf,

        /// Project notes sent alongside the plan
        #[arg(short, long, default_value = "")]
        context: String,

        /// MIME type of the file (wildcard when omitted)
        #[arg(long)]
        mime: Option<String>,
    },

    /// Compute from manually entered measures
    Manual {
        /// Area in m², passed through as typed
        #[arg(long)]
        area: String,

        /// Perimeter in m, passed through as typed
        #[arg(long)]
        perimeter: String,

        /// Project notes sent alongside the measures
        #[arg(short, long, default_value = "")]
        context: String,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum VerdictArg {
    Correct,
    Incorrect,
    Improve,
}

impl From<VerdictArg> for FeedbackVerdict {
    fn from(arg: VerdictArg) -> Self {
        match arg {
            VerdictArg::Correct => FeedbackVerdict::Correct,
            VerdictArg::Incorrect => FeedbackVerdict::Incorrect,
            VerdictArg::Improve => FeedbackVerdict::NeedsImprovement,
        }
    }
}

impl Cli {
    pub async fn run(&self) -> Result<(), CliError> {
        let api_url = config::resolve_api_url(self.api_url.as_deref(), self.config.as_deref())?;
        let client = AssistantClient::new(api_url);

        match &self.command {
            Some(Commands::Ask {
                question,
                file,
                mime,
                feedback,
            }) => {
                commands::run_ask(
                    &client,
                    question,
                    file.as_deref(),
                    mime.as_deref(),
                    *feedback,
                )
                .await
            }
            Some(Commands::Upload { path, mime }) => {
                commands::run_upload(&client, path, mime.as_deref()).await
            }
            Some(Commands::Plan { mode }) => match mode {
                PlanCommands::File {
                    path,
                    context,
                    mime,
                } => commands::run_plan_file(&client, path, context, mime.as_deref()).await,
                PlanCommands::Manual {
                    area,
                    perimeter,
                    context,
                } => commands::run_plan_manual(&client, area, perimeter, context).await,
            },
            Some(Commands::Feedback {
                question,
                answer,
                verdict,
                context,
                source,
                kb_id,
            }) => {
                commands::run_feedback(
                    &client,
                    question,
                    answer,
                    (*verdict).into(),
                    context.as_deref(),
                    source.as_deref(),
                    kb_id.as_deref(),
                )
                .await
            }
            None => {
                println!("plantai - materials-assistant client");
                println!("Run 'plantai --help' for usage information.");
                Ok(())
            }
        }
    }
}
