//! Structured reporting of failed CLI runs.

use beamchain_core::ElementId;
use tracing::{error, field};

use super::commands::CliError;

/// Logs `err` with its full cause chain, stable codes and the element ids it
/// implicates.
///
/// Codes and element ids are taken from the [`CliError`] inside `err`, when
/// there is one.
pub fn report_failure(err: &anyhow::Error) {
    let cli_error = err.downcast_ref::<CliError>();
    let code = cli_error.map(CliError::code);
    let cause_code = cli_error.and_then(CliError::cause_code);
    let elements: Vec<u64> = cli_error
        .map(CliError::implicated_elements)
        .unwrap_or_default()
        .into_iter()
        .map(ElementId::get)
        .collect();
    let message = format!("{err:#}");

    error!(
        error = %message,
        code = code.map(field::display),
        cause_code = cause_code.map(field::display),
        elements = (!elements.is_empty()).then_some(field::debug(&elements)),
        "command execution failed"
    );
}
