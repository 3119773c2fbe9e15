use alloc::string::String;

use wson_connect::ConnectorRegistry;
use wson_value::Value;

use crate::parse::Parser;
use crate::source::Token;
use crate::{CodecSettings, ParseError};

// -----------------------------------------------------------------------------
// How / Partial

/// What [`PartialParser::next`] should read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum How {
    /// A complete value, or a single punctuation char that cannot start one.
    Value,
    /// A text run, or a single punctuation char.
    Raw,
}

/// One step of a [`PartialParser`].
#[derive(Clone, Debug, PartialEq)]
pub enum Partial {
    Value(Value),
    Text(String),
    Punct(char),
}

// -----------------------------------------------------------------------------
// PartialParser

/// Reads WSON embedded in a larger grammar, one step at a time.
///
/// The caller decides for every step whether a value or raw text comes
/// next. Once a step fails the parser yields nothing more.
///
/// # Examples
///
/// ```
/// use wson_connect::ConnectorRegistry;
/// use wson_text::{How, Partial, PartialParser};
/// use wson_value::Value;
///
/// let registry = ConnectorRegistry::empty();
/// let mut parser = PartialParser::new("get:[a|#1]", &registry);
///
/// assert_eq!(parser.next(How::Raw), Some(Ok(Partial::Text("get".into()))));
/// assert_eq!(parser.next(How::Raw), Some(Ok(Partial::Punct(':'))));
/// assert_eq!(
///     parser.next(How::Value),
///     Some(Ok(Partial::Value(Value::from(vec![Value::from("a"), Value::from(1)])))),
/// );
/// assert_eq!(parser.next(How::Value), None);
/// ```
pub struct PartialParser<'a, 'r> {
    parser: Parser<'a, 'r>,
    failed: bool,
}

impl<'a, 'r> PartialParser<'a, 'r> {
    /// Creates a parser with default settings.
    #[inline]
    pub fn new(input: &'a str, registry: &'r ConnectorRegistry) -> Self {
        Self::with_settings(input, registry, &CodecSettings::default())
    }

    #[inline]
    pub fn with_settings(
        input: &'a str,
        registry: &'r ConnectorRegistry,
        settings: &CodecSettings,
    ) -> Self {
        Self {
            parser: Parser::new(input, registry, settings),
            failed: false,
        }
    }

    /// Byte offset of the next step.
    #[inline]
    pub const fn position(&self) -> usize {
        self.parser.source.pos()
    }

    /// Whether the input is exhausted.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.parser.source.is_end()
    }

    /// Reads one step; `None` at the end of the input or after an error.
    pub fn next(&mut self, how: How) -> Option<Result<Partial, ParseError>> {
        if self.failed {
            return None;
        }
        let source = &mut self.parser.source;
        let result = match (how, source.peek()) {
            (_, Token::End) => return None,
            (How::Raw, token) if token.is_text() => source.take_text().map(Partial::Text),
            (How::Raw, _)
            | (How::Value, Token::Pipe | Token::Is | Token::EndArray | Token::EndObject) => {
                Ok(Partial::Punct(source.next_char()?))
            }
            (How::Value, _) => self.parser.value().map(Partial::Value),
        };
        if let Err(e) = &result {
            log::debug!("partial parse stopped: {e}");
            self.failed = true;
        }
        Some(result)
    }
}

// -----------------------------------------------------------------------------
// Tests
