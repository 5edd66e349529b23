use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    char_iterator: Peekable<CharIndices<'src>>,
    byte_pos: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a character stream for the source string.
    pub fn new(source: &'src str) -> Self {
        Cursor {
            source,
            char_iterator: source.char_indices().peekable(),
            byte_pos: 0,
        }
    }

    /// Byte offset of the next character.
    pub fn get_position(&self) -> usize {
        self.byte_pos
    }

    /// Unconsumed part of the source.
    pub fn rest(&self) -> &'src str {
        &self.source[self.byte_pos..]
    }

    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Peeks the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.char_iterator.peek().map(|&(_, ch)| ch)
    }

    /// Consumes the next character.
    pub fn take(&mut self) -> Option<char> {
        let (_, ch) = self.char_iterator.next()?;
        self.byte_pos = self
            .char_iterator
            .peek()
            .map(|&(idx, _)| idx)
            .unwrap_or(self.source.len());
        Some(ch)
    }

    /// Consumes the next character if it equals target char.
    pub fn take_if(&mut self, target: char) -> bool {
        match self.peek() {
            Some(ch) if ch == target => {
                self.take();
                true
            }
            _ => false,
        }
    }

    /// Consumes the next characters if they spell out the target string.
    /// Nothing is consumed on a mismatch.
    pub fn take_str(&mut self, target: &str) -> bool {
        if !self.rest().starts_with(target) {
            return false;
        }
        for _ in target.chars() {
            self.take();
        }
        true
    }

    /// Consumes next characters as long as they meet condition and returns
    /// how many were consumed.
    pub fn take_while<F>(&mut self, condition: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        loop {
            match self.peek() {
                Some(ch) if condition(ch) => {
                    self.take();
                    count += 1;
                }
                _ => break,
            }
        }
        count
    }

    /// Consumes characters until the byte offset is reached.
    pub fn advance_to(&mut self, byte_pos: usize) {
        while self.byte_pos < byte_pos && self.take().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_positions() {
        let mut cursor = Cursor::new("ab→c");
        assert_eq!(cursor.take(), Some('a'));
        assert_eq!(cursor.get_position(), 1);
        assert_eq!(cursor.take_while(|ch| ch != 'c'), 2);
        assert_eq!(cursor.get_position(), 5);
        assert_eq!(cursor.rest(), "c");
        assert!(cursor.take_if('c'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_take_str_is_all_or_nothing() {
        let mut cursor = Cursor::new("for(x)");
        assert!(!cursor.take_str("fox"));
        assert_eq!(cursor.get_position(), 0);
        assert!(cursor.take_str("for"));
        assert_eq!(cursor.rest(), "(x)");
    }
}
