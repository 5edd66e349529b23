use crate::frontend::{LexError, ParserError};
use crate::treewalk::RuntimeError;
use std::fmt;
use thiserror::Error;

/// Error classes a run can abort with.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    Lex,
    Parse,
    Name,
    Type,
    Internal,
    Output,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("LexError: {0}")]
    Lex(#[from] LexError),
    #[error("ParseError: {0}")]
    Parse(#[from] ParserError),
    #[error("{kind}: {0}", kind = .0.kind())]
    Runtime(#[from] RuntimeError),
}

impl ScriptError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScriptError::Lex(_) => ErrorKind::Lex,
            ScriptError::Parse(_) => ErrorKind::Parse,
            ScriptError::Runtime(e) => e.kind(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ErrorKind::Lex => "LexError",
            ErrorKind::Parse => "ParseError",
            ErrorKind::Name => "NameError",
            ErrorKind::Type => "TypeError",
            ErrorKind::Internal => "InternalError",
            ErrorKind::Output => "OutputError",
        };
        write!(f, "{}", name)
    }
}
