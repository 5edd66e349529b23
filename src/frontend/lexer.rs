use super::cursor::Cursor;
use super::errors::{LexError, LexerResult};
use super::token::{Token, TokenKind};

type LexRule = fn(&mut Cursor) -> bool;

/// Lexical classes in priority order. The first rule that matches at the
/// cursor produces the token.
const LEXICAL_CLASSES: [(TokenKind, LexRule); 7] = [
    (TokenKind::Comment, lex_comment),
    (TokenKind::Number, lex_number),
    (TokenKind::Whitespace, lex_whitespace),
    (TokenKind::Punctuation, lex_punctuation),
    (TokenKind::Identifier, lex_identifier),
    (TokenKind::String, lex_string),
    (TokenKind::ForCycle, lex_for_cycle),
];

const TWO_CHAR_PUNCTUATION: [&str; 4] = ["==", "!=", "<=", ">="];

const ONE_CHAR_PUNCTUATION: [char; 20] = [
    '<', '>', '.', ';', '=', '{', '}', ',', '+', '-', '*', '/', '!', '(', ')', ':', '[', ']', '|',
    '?',
];

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    failed: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer from source code.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            failed: false,
        }
    }

    /// Returns the next token or None when the source is finished. Nothing
    /// more is produced after an error.
    fn scan_token(&mut self) -> Option<LexerResult<Token>> {
        if self.failed || self.cursor.is_at_end() {
            return None;
        }

        let start = self.cursor.get_position();
        let rest = self.cursor.rest();

        for (kind, rule) in LEXICAL_CLASSES.iter() {
            let mut attempt = self.cursor.clone();
            if rule(&mut attempt) {
                let text = &rest[..attempt.get_position() - start];
                self.cursor = attempt;
                return Some(Ok(Token::new(*kind, text)));
            }
        }

        self.failed = true;
        let snippet = rest.lines().next().unwrap_or(rest).to_owned();
        Some(Err(LexError {
            position: start,
            snippet,
        }))
    }

    /// Returns an iterator version of lexer.
    pub fn iter(self) -> LexerIterator<'src> {
        LexerIterator { lexer: self }
    }
}

pub struct LexerIterator<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Iterator for LexerIterator<'src> {
    type Item = LexerResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lexer.scan_token()
    }
}

/// `//` up to and including the end of the line. The newline is mandatory.
fn lex_comment(cursor: &mut Cursor) -> bool {
    if !cursor.take_str("//") {
        return false;
    }
    cursor.take_while(|ch| ch != '\n');
    cursor.take_if('\n')
}

fn lex_number(cursor: &mut Cursor) -> bool {
    cursor.take_while(|ch| ch.is_ascii_digit()) > 0
}

fn lex_whitespace(cursor: &mut Cursor) -> bool {
    cursor.take_while(char::is_whitespace) > 0
}

fn lex_punctuation(cursor: &mut Cursor) -> bool {
    if TWO_CHAR_PUNCTUATION.iter().any(|p| cursor.take_str(p)) {
        return true;
    }
    match cursor.peek() {
        Some(ch) if ONE_CHAR_PUNCTUATION.contains(&ch) => {
            cursor.take();
            true
        }
        _ => false,
    }
}

fn lex_identifier(cursor: &mut Cursor) -> bool {
    cursor.take_while(is_word_char) > 0
}

/// `"..."` or `@"..."` on one line. The body is greedy, so the literal ends
/// at the last quote of the line.
fn lex_string(cursor: &mut Cursor) -> bool {
    cursor.take_if('@');
    if !cursor.take_if('"') {
        return false;
    }

    let body_start = cursor.get_position();
    let line = cursor.rest().split('\n').next().unwrap_or("");
    match line.rfind('"') {
        Some(idx) => {
            cursor.advance_to(body_start + idx + 1);
            true
        }
        None => false,
    }
}

/// `for (init; cond; step)` as a single token. Spans newlines and ends at the
/// last `)` preceded by at least two `;`.
fn lex_for_cycle(cursor: &mut Cursor) -> bool {
    if !cursor.take_str("for") {
        return false;
    }
    cursor.take_while(|ch| ch == ' ');
    if !cursor.take_if('(') {
        return false;
    }

    let body_start = cursor.get_position();
    let body = cursor.rest();
    let close = body
        .match_indices(')')
        .rev()
        .map(|(idx, _)| idx)
        .find(|&idx| body[..idx].matches(';').count() >= 2);

    match close {
        Some(idx) => {
            cursor.advance_to(body_start + idx + 1);
            true
        }
        None => false,
    }
}
