//! The materials-estimate flow. File and manual mode are alternative entry
//! points; the invoked subcommand, not the populated fields, selects which
//! single request goes out.

use plantai_client::{AssistantClient, FlowState, ManualEstimate, MaterialEstimate, PlanInterpretation};
use std::path::Path;

use crate::{commands::read_attachment, error::CliError};

pub async fn run_plan_file(
    client: &AssistantClient,
    path: &Path,
    context: &str,
    mime: Option<&str>,
) -> Result<(), CliError> {
    let attachment = read_attachment(path, mime)?;

    let mut state: FlowState<PlanInterpretation> = FlowState::new();
    if !state.try_begin() {
        return Ok(());
    }

    println!("Interpreting floor plan...");
    match client.interpret_plan(&attachment, context).await {
        Ok(interpretation) => state.complete(interpretation),
        Err(e) => {
            state.fail();
            return Err(e.into());
        }
    }

    if let Some(interpretation) = state.result() {
        render_interpretation(interpretation);
    }
    Ok(())
}

pub async fn run_plan_manual(
    client: &AssistantClient,
    area: &str,
    perimeter: &str,
    context: &str,
) -> Result<(), CliError> {
    let mut state: FlowState<ManualEstimate> = FlowState::new();
    if !state.try_begin() {
        return Ok(());
    }

    println!("Computing materials from manual measures...");
    match client.estimate_from_measures(area, perimeter, context).await {
        Ok(estimate) => state.complete(estimate),
        Err(e) => {
            state.fail();
            return Err(e.into());
        }
    }

    if let Some(estimate) = state.result() {
        render_materials(&estimate.materiais_estimados);
        if let Some(resposta) = &estimate.resposta_ia {
            println!();
            println!("{}", resposta);
        }
    }
    Ok(())
}

fn render_interpretation(interpretation: &PlanInterpretation) {
    if let Some(measures) = &interpretation.medidas_detectadas {
        println!(
            "Detected measures: {} m x {} m",
            measures.largura_metros, measures.altura_metros
        );
    }
    if !interpretation.resumo.is_empty() {
        println!("{}", interpretation.resumo);
    }

    render_materials(&interpretation.materiais_estimados);

    if let Some(resposta) = &interpretation.resposta_ia {
        println!();
        println!("{}", resposta);
    }
}

/// One line per material the backend returned; no fixed key set.
fn render_materials(estimate: &MaterialEstimate) {
    for line in estimate.display_lines() {
        println!("{}", line);
    }
}
