//! Tokenizer, parser and tree-walking evaluator for a small imperative
//! scripting language with numbers, booleans, `if`, `while` and `print`.
//!
//! ```
//! use easyscript::{run, Interpreter};
//!
//! let mut interpreter = Interpreter::new_with_output(Vec::<u8>::new());
//! run(&mut interpreter, "a = 2; b = a * 3; if (b == 6) { print(b,); }").unwrap();
//! assert_eq!(interpreter.output(), b"6\n");
//! ```

pub mod errors;
pub mod frontend;
pub mod treewalk;

use frontend::ast::Program;
use frontend::token::Token;
use frontend::{filter_whitespace, LexError, Lexer, Parser};
use std::io::Write;

pub use errors::{ErrorKind, ScriptError};
pub use treewalk::{Interpreter, Value};

/// Splits the whole source into tokens, whitespace included.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).iter().collect()
}

pub fn parse_source(source: &str) -> Result<Program, ScriptError> {
    let tokens = tokenize(source)?;

    #[cfg(feature = "print-tokens")]
    for token in filter_whitespace(tokens.iter().cloned()) {
        eprintln!("{}", token);
    }

    let program = Parser::new(filter_whitespace(tokens)).parse()?;

    #[cfg(feature = "print-ast")]
    eprintln!("{}", program.ast_string());

    Ok(program)
}

/// Parses and evaluates the source against an existing interpreter, so
/// bindings made by earlier runs stay visible.
pub fn run<W: Write>(interpreter: &mut Interpreter<W>, source: &str) -> Result<(), ScriptError> {
    let program = parse_source(source)?;
    interpreter.run(&program)?;
    Ok(())
}
