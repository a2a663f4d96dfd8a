use std::io::{self, BufRead};
use tracing::warn;

/// A character source with one character of lookahead.
///
/// After construction and after every [`advance`](Scanner::advance),
/// [`peek`](Scanner::peek) reflects the next unconsumed character, or `None`
/// once the source is exhausted.
pub trait Scanner {
    fn peek(&self) -> Option<char>;
    fn advance(&mut self);

    fn at_end(&self) -> bool {
        self.peek().is_none()
    }

    fn skip_blanks(&mut self) {
        while self.peek().is_some_and(is_blank) {
            self.advance();
        }
    }

    /// Skips to the end of the current line. The newline itself stays unconsumed.
    fn discard_line(&mut self) {
        while self.peek().is_some_and(|character| character != '\n') {
            self.advance();
        }
    }
}

pub fn is_blank(character: char) -> bool {
    matches!(character, ' ' | '\t')
}

pub fn is_digit(character: char) -> bool {
    character.is_ascii_digit()
}

pub fn is_letter(character: char) -> bool {
    character.is_ascii_alphabetic() || character == '_'
}

pub struct StringScanner {
    string: String,
    index: usize,
}

impl StringScanner {
    pub fn new(string: impl Into<String>) -> Self {
        Self{string: string.into(), index: 0}
    }

    pub fn rest(&self) -> &str {
        &self.string[self.index..]
    }
}

impl Scanner for StringScanner {
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) {
        if let Some(character) = self.peek() {
            self.index += character.len_utf8();
        }
    }
}

/// Scans a buffered reader, pulling in one line at a time.
pub struct StreamScanner<R> {
    reader: R,
    line: String,
    index: usize,
    error: Option<io::Error>,
}

impl<R: BufRead> StreamScanner<R> {
    pub fn new(reader: R) -> Self {
        let mut scanner = Self {
            reader,
            line: String::new(),
            index: 0,
            error: None,
        };
        scanner.refill();
        scanner
    }

    /// Returns the read error that ended the stream early, if there was one.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn refill(&mut self) {
        while self.index >= self.line.len() {
            self.line.clear();
            self.index = 0;
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return,
                Ok(_) => {},
                Err(error) => {
                    warn!(%error, "input stream failed, treating it as ended");
                    self.line.clear();
                    self.error = Some(error);
                    return;
                },
            }
        }
    }
}

impl<R: BufRead> Scanner for StreamScanner<R> {
    fn peek(&self) -> Option<char> {
        self.line[self.index..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(character) = self.peek() {
            self.index += character.len_utf8();
            if self.index >= self.line.len() {
                self.refill();
            }
        }
    }
}
