use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Whitespace,
    Punctuation,
    Identifier,
    Number,
    Comment,
    String,
    // Whole `for (...;...;...)` clause. Identifiers win for `for`, so the
    // grammar never sees one.
    ForCycle,
    // Sentinel; a successful tokenization never produces it.
    None,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str) -> Self {
        Token {
            kind,
            text: text.to_owned(),
        }
    }

    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{:?} {:?}>", self.kind, self.text)
    }
}
