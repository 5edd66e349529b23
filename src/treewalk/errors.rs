use super::value::Value;
use crate::errors::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RuntimeError {
    #[error("No such variable `{0}`.")]
    UndefinedVariable(String),
    #[error("Call on unknown function `{0}`.")]
    UnknownFunction(String),
    #[error("`{0}` is not callable.")]
    NotCallable(String),
    #[error("Incompatible types for `{0}`: {1} and {2}.")]
    IncompatibleTypes(String, Value, Value),
    #[error("Expected boolean condition, but got {0}.")]
    NonBooleanCondition(Value),
    #[error("Unary minus is only for numbers, but got {0}.")]
    IllegalNegation(Value),
    #[error("Unknown operator `{0}`.")]
    UnknownOperator(String),
    #[error("Cannot assign to `{0}`.")]
    InvalidAssignmentTarget(String),
    #[error("Failed to write output: {0}")]
    Output(String),
}

impl RuntimeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::UndefinedVariable(_)
            | RuntimeError::UnknownFunction(_)
            | RuntimeError::NotCallable(_) => ErrorKind::Name,
            RuntimeError::IncompatibleTypes(..)
            | RuntimeError::NonBooleanCondition(_)
            | RuntimeError::IllegalNegation(_) => ErrorKind::Type,
            RuntimeError::UnknownOperator(_) | RuntimeError::InvalidAssignmentTarget(_) => {
                ErrorKind::Internal
            }
            RuntimeError::Output(_) => ErrorKind::Output,
        }
    }
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
