//! Command handler: run one operation and print its outcome.

use lmwrap_core::{Dispatcher, Operation};

use crate::error::CliError;
use crate::presentation::{OutputFormat, print_outcome};

/// Dispatch `operation` and print whatever output the tool produced.
///
/// Output is printed for failed runs too, before the error is returned.
pub fn execute(
    dispatcher: &Dispatcher,
    operation: &Operation,
    format: OutputFormat,
) -> Result<(), CliError> {
    let result = dispatcher.dispatch(operation);

    let outcome = match &result {
        Ok(outcome) => Some(outcome),
        Err(err) => err.outcome(),
    };
    if let Some(outcome) = outcome {
        print_outcome(outcome, format).map_err(|e| CliError::Io(e.to_string()))?;
    }

    result.map(|_| ()).map_err(CliError::from)
}
