use alloc::string::String;
use alloc::vec::Vec;

use wson_connect::ConnectorRegistry;
use wson_value::{Map, Value};

use crate::source::{Source, Token};
use crate::{CodecSettings, ParseError, ParseErrorKind};

/// Parses a single WSON value, with default settings.
///
/// # Examples
///
/// ```
/// use wson_connect::ConnectorRegistry;
/// use wson_text::parse;
/// use wson_value::Value;
///
/// let registry = ConnectorRegistry::empty();
/// let value = parse("[a|#1|{b}]", &registry).unwrap();
/// assert_eq!(value.as_array().unwrap()[1], Value::Integer(1));
///
/// let err = parse("[a", &registry).unwrap_err();
/// assert_eq!(err.pos, 2);
/// ```
#[inline]
pub fn parse(input: &str, registry: &ConnectorRegistry) -> Result<Value, ParseError> {
    parse_with(input, registry, &CodecSettings::default())
}

/// Parses a single WSON value; trailing input is an error.
pub fn parse_with(
    input: &str,
    registry: &ConnectorRegistry,
    settings: &CodecSettings,
) -> Result<Value, ParseError> {
    let mut parser = Parser::new(input, registry, settings);
    let value = parser.value()?;
    if !parser.source.is_end() {
        return Err(parser.source.unexpected());
    }
    Ok(value)
}

// -----------------------------------------------------------------------------
// Parser

pub(crate) struct Parser<'a, 'r> {
    pub(crate) source: Source<'a>,
    registry: &'r ConnectorRegistry,
    max_depth: usize,
    depth: usize,
}

impl<'a, 'r> Parser<'a, 'r> {
    pub(crate) fn new(
        input: &'a str,
        registry: &'r ConnectorRegistry,
        settings: &CodecSettings,
    ) -> Self {
        Self {
            source: Source::new(input),
            registry,
            max_depth: settings.max_depth,
            depth: 0,
        }
    }

    /// Parses the value that starts at the cursor.
    pub(crate) fn value(&mut self) -> Result<Value, ParseError> {
        match self.source.peek() {
            Token::Text | Token::Quote => Ok(Value::String(self.source.take_text()?)),
            Token::Literal => {
                self.source.bump();
                self.literal()
            }
            Token::Array => {
                let start = self.source.pos();
                self.source.bump();
                self.nested(start, Self::array)
            }
            Token::Object => {
                let start = self.source.pos();
                self.source.bump();
                self.nested(start, Self::object)
            }
            Token::Pipe => Err(ParseError::new(self.source.pos(), ParseErrorKind::Backref)),
            _ => Err(self.source.unexpected()),
        }
    }

    fn nested(
        &mut self,
        start: usize,
        f: impl FnOnce(&mut Self) -> Result<Value, ParseError>,
    ) -> Result<Value, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::new(start, ParseErrorKind::TooDeep(self.max_depth)));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// After `#`.
    fn literal(&mut self) -> Result<Value, ParseError> {
        if self.source.peek() != Token::Text {
            return Ok(Value::String(String::new()));
        }
        let start = self.source.pos();
        let text = self.source.take_text()?;
        let value = match text.as_str() {
            "u" => Some(Value::Undefined),
            "n" => Some(Value::Null),
            "f" => Some(Value::Bool(false)),
            "t" => Some(Value::Bool(true)),
            other => match other.strip_prefix('d') {
                Some(millis) => millis.parse::<i64>().ok().map(Value::Date),
                None => number(other),
            },
        };
        value.ok_or_else(|| {
            // Points at the `#`.
            ParseError::new(start - 1, ParseErrorKind::UnexpectedLiteral(text))
        })
    }

    /// After `[`.
    fn array(&mut self) -> Result<Value, ParseError> {
        match self.source.peek() {
            Token::Is => {
                self.source.bump();
                return self.custom();
            }
            Token::EndArray => {
                self.source.bump();
                return Ok(Value::Array(Vec::new()));
            }
            _ => {}
        }

        let mut items = Vec::new();
        loop {
            items.push(self.value()?);
            match self.source.peek() {
                Token::Pipe => self.source.bump(),
                Token::EndArray => {
                    self.source.bump();
                    return Ok(Value::Array(items));
                }
                _ => return Err(self.source.unexpected()),
            }
        }
    }

    /// After `{`.
    fn object(&mut self) -> Result<Value, ParseError> {
        let mut map = Map::new();
        if self.source.peek() == Token::EndObject {
            self.source.bump();
            return Ok(Value::Object(map));
        }

        loop {
            let key = match self.source.peek() {
                Token::Text | Token::Quote => self.source.take_text()?,
                Token::Literal => {
                    self.source.bump();
                    String::new()
                }
                _ => return Err(self.source.unexpected()),
            };

            let value = match self.source.peek() {
                Token::Is => {
                    self.source.bump();
                    self.value()?
                }
                // A bare key stands for `true`.
                Token::Pipe | Token::EndObject => Value::Bool(true),
                _ => return Err(self.source.unexpected()),
            };
            map.insert(key, value);

            match self.source.peek() {
                Token::Pipe => self.source.bump(),
                Token::EndObject => {
                    self.source.bump();
                    return Ok(Value::Object(map));
                }
                _ => return Err(self.source.unexpected()),
            }
        }
    }

    /// After `[:`.
    fn custom(&mut self) -> Result<Value, ParseError> {
        let name_pos = self.source.pos();
        if !self.source.peek().is_text() {
            return Err(self.source.unexpected());
        }
        let cname = self.source.take_text()?;
        let registry = self.registry;
        let Ok(connector) = registry.connector_of_cname(&cname) else {
            return Err(ParseError::new(name_pos, ParseErrorKind::NoConnector(cname)));
        };

        let mut args = Vec::new();
        loop {
            match self.source.peek() {
                Token::Pipe => {
                    self.source.bump();
                    args.push(self.value()?);
                }
                Token::EndArray => {
                    self.source.bump();
                    break;
                }
                _ => return Err(self.source.unexpected()),
            }
        }

        connector
            .create_value(args)
            .map_err(|e| ParseError::new(name_pos, ParseErrorKind::Connect(e)))
    }
}

/// Integers first, then floats.
fn number(text: &str) -> Option<Value> {
    if let Ok(i) = text.parse::<i64>() {
        return Some(Value::Integer(i));
    }
    text.parse::<f64>().ok().map(Value::Float)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use wson_connect::{ConnectError, Connector, ConnectorRegistry, HookError};
    use wson_value::{Map, Value};

    use super::{parse, parse_with};
    use crate::{CodecSettings, ParseError, ParseErrorKind};

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i64,
        y: i64,
    }

    fn registry() -> ConnectorRegistry {
        ConnectorRegistry::new([Connector::of::<Point>("Point")
            .create(|args| {
                args.expect_len(2)?;
                Ok(Point {
                    x: args.i64(0)?,
                    y: args.i64(1)?,
                })
            })
            .build()
            .unwrap()])
        .unwrap()
    }

    fn ok(input: &str) -> Value {
        parse(input, &registry()).unwrap()
    }

    fn err(input: &str) -> ParseError {
        parse(input, &registry()).unwrap_err()
    }

    #[test]
    fn strings() {
        assert_eq!(ok("abc"), Value::from("abc"));
        assert_eq!(ok("#"), Value::from(""));
        assert_eq!(ok("a`ib"), Value::from("a:b"));
        assert_eq!(ok("`q"), Value::from("`"));
    }

    #[test]
    fn literals() {
        assert_eq!(ok("#u"), Value::Undefined);
        assert_eq!(ok("#n"), Value::Null);
        assert_eq!(ok("#f"), Value::Bool(false));
        assert_eq!(ok("#t"), Value::Bool(true));
        assert_eq!(ok("#42"), Value::Integer(42));
        assert_eq!(ok("#-7"), Value::Integer(-7));
        assert_eq!(ok("#0.5"), Value::Float(0.5));
        assert_eq!(ok("#1e3"), Value::Float(1000.0));
        assert_eq!(ok("#d1400000000000"), Value::Date(1_400_000_000_000));
        assert!(ok("#NaN").as_f64().is_some_and(f64::is_nan));
    }

    #[test]
    fn bad_literals() {
        assert_eq!(
            err("[#x]"),
            ParseError {
                pos: 1,
                kind: ParseErrorKind::UnexpectedLiteral("x".to_string()),
            }
        );
        assert_eq!(
            err("#dx").kind,
            ParseErrorKind::UnexpectedLiteral("dx".to_string())
        );
        assert_eq!(err("#tt").kind, ParseErrorKind::UnexpectedLiteral("tt".to_string()));
    }

    #[test]
    fn arrays() {
        assert_eq!(ok("[]"), Value::Array(vec![]));
        assert_eq!(ok("[#]"), Value::Array(vec![Value::from("")]));
        assert_eq!(
            ok("[a|#1|[]]"),
            Value::Array(vec![Value::from("a"), Value::Integer(1), Value::Array(vec![])])
        );
    }

    #[test]
    fn objects() {
        assert_eq!(ok("{}"), Value::Object(Map::new()));

        let value = ok("{a:b|c|#:#n|d:{}}");
        let map = value.as_object().unwrap();
        assert_eq!(map.get("a"), Some(&Value::from("b")));
        assert_eq!(map.get("c"), Some(&Value::Bool(true)));
        assert_eq!(map.get(""), Some(&Value::Null));
        assert_eq!(map.get("d"), Some(&Value::Object(Map::new())));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["", "a", "c", "d"]);
    }

    #[test]
    fn custom_values() {
        assert_eq!(ok("[:Point|#1|#2]"), Value::custom(Point { x: 1, y: 2 }));
        assert_eq!(
            ok("[[:Point|#0|#0]]"),
            Value::Array(vec![Value::custom(Point { x: 0, y: 0 })])
        );
    }

    #[test]
    fn custom_errors() {
        assert_eq!(
            err("[:Line|#1]"),
            ParseError {
                pos: 2,
                kind: ParseErrorKind::NoConnector("Line".to_string()),
            }
        );
        assert_eq!(
            err("[:Point|#1]"),
            ParseError {
                pos: 2,
                kind: ParseErrorKind::Connect(ConnectError::Hook {
                    cname: "Point".to_string(),
                    source: HookError::Count {
                        expected: 2,
                        found: 1
                    },
                }),
            }
        );
        assert_eq!(err("[:]").kind, ParseErrorKind::UnexpectedChar(']'));
    }

    #[test]
    fn structural_errors() {
        assert_eq!(err("").kind, ParseErrorKind::UnexpectedEnd);
        assert_eq!(err("[a").pos, 2);
        assert_eq!(err("[a").kind, ParseErrorKind::UnexpectedEnd);
        assert_eq!(err("a]").kind, ParseErrorKind::UnexpectedChar(']'));
        assert_eq!(err("a]").pos, 1);
        assert_eq!(err("{a:b:c}").pos, 4);
        assert_eq!(err("{[]}").pos, 1);
        assert_eq!(err("[a||b]").kind, ParseErrorKind::Backref);
        assert_eq!(err("|0").kind, ParseErrorKind::Backref);
        assert_eq!(err("ab`z").kind, ParseErrorKind::BadEscape);
    }

    #[test]
    fn depth_limit() {
        let settings = CodecSettings { max_depth: 2 };
        let registry = ConnectorRegistry::empty();
        assert!(parse_with("[[a]]", &registry, &settings).is_ok());
        assert_eq!(
            parse_with("[[[a]]]", &registry, &settings).unwrap_err(),
            ParseError {
                pos: 2,
                kind: ParseErrorKind::TooDeep(2),
            }
        );
    }
}
