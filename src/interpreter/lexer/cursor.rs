use std::str::Chars;

/// Scan position over one input line.
///
/// Holds the index of the current character together with a cached copy of
/// that character. Once the index passes the end of the line the cached
/// character becomes `None` and stays that way.
///
/// Positions count characters, not bytes, so a multi-byte character still
/// advances the position by one.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    chars:    Chars<'a>,
    position: usize,
    current:  Option<char>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned on the first character of `source`.
    ///
    /// # Example
    /// ```
    /// use leftcalc::interpreter::lexer::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("42");
    /// assert_eq!(cursor.current(), Some('4'));
    /// assert_eq!(cursor.position(), 0);
    ///
    /// assert_eq!(Cursor::new("").current(), None);
    /// ```
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let mut chars = source.chars();
        let current = chars.next();

        Self { chars,
               position: 0,
               current }
    }

    /// Returns the character under the cursor, or `None` once exhausted.
    #[must_use]
    pub const fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns the zero-based character index of the cursor.
    ///
    /// Once exhausted this is the number of characters in the line.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Moves one character forward.
    ///
    /// Advancing an exhausted cursor does nothing.
    ///
    /// # Example
    /// ```
    /// use leftcalc::interpreter::lexer::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("7+");
    /// cursor.advance();
    /// assert_eq!(cursor.current(), Some('+'));
    /// cursor.advance();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.position(), 2);
    /// cursor.advance();
    /// assert_eq!(cursor.position(), 2);
    /// ```
    pub fn advance(&mut self) {
        if self.current.is_some() {
            self.position += 1;
            self.current = self.chars.next();
        }
    }
}
