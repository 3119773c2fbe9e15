use alloc::string::String;

use crate::escape::{QUOTE, unescape};
use crate::{ParseError, ParseErrorKind};

// -----------------------------------------------------------------------------
// Token

/// Classification of the next input byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Token {
    /// Start of a text run.
    Text,
    /// Start of a text run with an escape sequence.
    Quote,
    Array,
    EndArray,
    Object,
    EndObject,
    Is,
    Literal,
    Pipe,
    End,
}

impl Token {
    #[inline]
    const fn of(c: u8) -> Self {
        match c {
            b'[' => Self::Array,
            b']' => Self::EndArray,
            b'{' => Self::Object,
            b'}' => Self::EndObject,
            b':' => Self::Is,
            b'#' => Self::Literal,
            b'|' => Self::Pipe,
            QUOTE => Self::Quote,
            _ => Self::Text,
        }
    }

    /// Whether a text run starts here.
    #[inline]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::Quote)
    }
}

// -----------------------------------------------------------------------------
// Source

/// A cursor over the input.
pub(crate) struct Source<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Source<'a> {
    #[inline]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    #[inline]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Classifies the next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Token {
        match self.input.as_bytes().get(self.pos) {
            Some(&c) => Token::of(c),
            None => Token::End,
        }
    }

    /// Consumes one structural byte.
    #[inline]
    pub fn bump(&mut self) {
        self.pos += 1;
    }

    /// The next char, for diagnostics and raw punctuation.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consumes the next char.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// An error for whatever comes next.
    #[cold]
    pub fn unexpected(&self) -> ParseError {
        match self.peek_char() {
            Some(c) => ParseError::new(self.pos, ParseErrorKind::UnexpectedChar(c)),
            None => ParseError::new(self.pos, ParseErrorKind::UnexpectedEnd),
        }
    }

    /// Consumes a text run and returns it unescaped.
    ///
    /// A run ends at the first structural byte that is not part of an
    /// escape sequence, or at the end of the input.
    pub fn take_text(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        let mut end = start;
        while end < bytes.len() {
            match Token::of(bytes[end]) {
                Token::Text => end += 1,
                // The escaped char may itself be structural.
                Token::Quote => {
                    end += 1;
                    if let Some(c) = self.input[end..].chars().next() {
                        end += c.len_utf8();
                    }
                }
                _ => break,
            }
        }
        self.pos = end;

        let run = &self.input[start..end];
        match unescape(run) {
            Ok(text) => Ok(text.into_owned()),
            Err(e) => Err(ParseError::new(start + e.pos, ParseErrorKind::BadEscape)),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
