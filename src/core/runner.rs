use crate::config::toml_config::OutputConfig;
use crate::core::{demo, report};
use crate::domain::model::Operation;
use crate::utils::error::Result;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Demo,
    Single {
        operation: Operation,
        operands: Vec<f64>,
    },
}

/// Execute `request` and render its output.
pub fn execute(request: &Request, output: &OutputConfig) -> Result<String> {
    match request {
        Request::Demo => {
            tracing::debug!("Running demo sequence");
            let evaluations = demo::demo_evaluations()?;
            tracing::debug!("Demo produced {} results", evaluations.len());
            report::render_demo(&evaluations, output)
        }
        Request::Single {
            operation,
            operands,
        } => {
            tracing::debug!(operation = %operation, ?operands, "Evaluating");
            match operation.evaluate(operands) {
                Ok(evaluation) => {
                    tracing::debug!(result = evaluation.result, "Evaluated");
                    report::render_evaluation(&evaluation, output)
                }
                Err(e) => {
                    tracing::warn!(operation = %operation, "Evaluation rejected: {}", e);
                    Err(e)
                }
            }
        }
    }
}
