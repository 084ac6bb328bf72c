use crate::config::toml_config::{OutputConfig, OutputFormat};
use crate::domain::model::Evaluation;
use crate::utils::error::Result;
use serde::Serialize;

pub const DEMO_HEADER: &str = "Calculator Demo:";

pub fn format_result(result: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, result),
        // Debug keeps the trailing `.0` on integral values.
        None => format!("{:?}", result),
    }
}

pub fn text_line(evaluation: &Evaluation, precision: Option<usize>) -> String {
    format!(
        "{} = {}",
        evaluation.expression(),
        format_result(evaluation.result, precision)
    )
}

pub fn render_evaluation(evaluation: &Evaluation, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Text => Ok(text_line(evaluation, output.precision)),
        OutputFormat::Json => to_json(evaluation, output.pretty),
    }
}

pub fn render_demo(evaluations: &[Evaluation], output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Text => {
            let mut lines = Vec::with_capacity(evaluations.len() + 1);
            lines.push(DEMO_HEADER.to_string());
            lines.extend(evaluations.iter().map(|e| text_line(e, output.precision)));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => to_json(&evaluations, output.pretty),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
