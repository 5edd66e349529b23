pub mod ast;
mod cursor;
pub mod errors;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

pub use errors::{LexError, ParserError};
pub use lexer::Lexer;
pub use parser::{filter_whitespace, Parser};
