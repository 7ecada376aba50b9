//! Lexical primitives shared by every value grammar.
//!
//! A [`Scanner`] owns a borrowed declaration value and a byte offset into it.
//! Grammars take `&mut Scanner` and advance it as they consume input, so a
//! shorthand grammar can hand the same scanner to a chain of longhand
//! grammars and each one resumes where the previous stopped.
//!
//! Every `scan_*`/`match_*` method leaves the offset untouched when it fails.

/// Cursor over a declaration value.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Start scanning at the beginning of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Move back to an offset previously returned by [`Scanner::position`].
    pub fn reset(&mut self, pos: usize) {
        debug_assert!(self.input.is_char_boundary(pos));
        self.pos = pos.min(self.input.len());
    }

    /// The unconsumed part of the input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Whether all input has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skip ASCII whitespace.
    pub fn skip_whitespace(&mut self) {
        let _ = self.scan_while(|c| c.is_ascii_whitespace());
    }

    /// Consume characters while `pred` holds and return them.
    pub fn scan_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Consume characters up to (not including) the first of `stops`, or to
    /// the end of input.
    pub fn scan_until(&mut self, stops: &[char]) -> &'a str {
        self.scan_while(|c| !stops.contains(&c))
    }

    /// Consume a run of hexadecimal digits.
    pub fn scan_hex_run(&mut self) -> &'a str {
        self.scan_while(|c| c.is_ascii_hexdigit())
    }

    /// Whether the unconsumed input starts with `prefix`, ASCII
    /// case-insensitively. Nothing is consumed.
    #[must_use]
    pub fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        let rest = self.rest().as_bytes();
        rest.len() >= prefix.len() && rest[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    }

    /// Skip whitespace, then match the first keyword in `candidates` found at
    /// the cursor.
    ///
    /// Candidates are tried in list order and the first hit wins, so a list
    /// must put longer keywords before their prefixes when both could match.
    /// A hit is rejected when the next character is ASCII alphanumeric, which
    /// keeps `top` from matching the start of `topxyz`.
    pub fn match_keyword(&mut self, candidates: &[&'static str]) -> Option<&'static str> {
        let start = self.pos;
        self.skip_whitespace();
        let found = self.match_keyword_here(candidates);
        if found.is_none() {
            self.pos = start;
        }
        found
    }

    /// Like [`Scanner::match_keyword`] but without skipping leading
    /// whitespace. Used for units glued to a number.
    pub fn match_keyword_here(&mut self, candidates: &[&'static str]) -> Option<&'static str> {
        let rest = self.rest().as_bytes();
        let keyword = candidates.iter().copied().find(|keyword| {
            let len = keyword.len();
            rest.len() >= len
                && rest[..len].eq_ignore_ascii_case(keyword.as_bytes())
                && !rest.get(len).is_some_and(u8::is_ascii_alphanumeric)
        })?;
        self.pos += keyword.len();
        Some(keyword)
    }

    /// Scan `-?[0-9.]+` with at least one digit and return the raw text.
    pub fn scan_number(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let _ = self.eat('-');
        let digits = self.scan_while(|c| c.is_ascii_digit() || c == '.');
        if digits.bytes().any(|b| b.is_ascii_digit()) {
            Some(&self.input[start..self.pos])
        } else {
            self.pos = start;
            None
        }
    }
}
