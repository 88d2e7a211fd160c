// error.rs

use thiserror::Error;

use crate::ops::Operation;

/// Everything a single line of user input can fail with. All variants are
/// recoverable: the REPL reports the Display text to the user and keeps
/// running, and none of them mutates history.
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("Invalid input. Please follow the format: <operation> <num1> <num2>")]
    InvalidFormat,
    #[error("Unknown operation '{0}'. Supported operations: {}.", Operation::supported())]
    UnknownOperation(String),
    #[error("Division by zero is not allowed.")]
    DivisionByZero,
}
