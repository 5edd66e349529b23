use thiserror::Error;

/// No lexical class matches at the cursor.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Bad string at byte {position}: `{snippet}`")]
pub struct LexError {
    pub position: usize,
    pub snippet: String,
}

pub type LexerResult<T> = Result<T, LexError>;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParserError {
    #[error("Expected `{expected}`, but instead got {found}.")]
    ExpectedSymbol { expected: &'static str, found: String },
    #[error("Expected primary token, but instead got {0}.")]
    ExpectedPrimary(String),
    #[error("Expected closing parenthesis, but instead got {0}.")]
    ExpectedClosingParen(String),
    #[error("Expected end of block, but reached end of input.")]
    ExpectedEndOfBlock,
    #[error("Left side of assignment must be a variable.")]
    ExpectedVariable,
    #[error("Unresolved statement at {0}.")]
    UnresolvedStatement(String),
}

pub type ParserResult<T> = Result<T, ParserError>;
