/// A cursor for scanning one line of source text.
///
/// Positions are byte offsets into `s`. Every delimiter the inline
/// transformer recognises is ASCII, so jumping over whole delimiters or
/// advancing with [`Cursor::bump_char`] always lands on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// The unconsumed tail of the line.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Everything already consumed, i.e. the text left of the cursor.
    pub fn consumed(&self) -> &'a str {
        self.s.get(..self.i).unwrap_or(self.s)
    }

    /// Finds `pat` searching from `offset` bytes past the cursor.
    ///
    /// Returns the absolute byte index of the match. The cursor does not move.
    pub fn find_from(&self, offset: usize, pat: &str) -> Option<usize> {
        let from = self.i + offset;
        self.s.get(from..)?.find(pat).map(|k| from + k)
    }

    /// Advances past the current char, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves the cursor to the absolute byte index `i`.
    pub fn jump_to(&mut self, i: usize) {
        self.i = i;
    }
}
