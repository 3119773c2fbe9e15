use alloc::string::String;
use core::fmt::Write;

use wson_connect::{Connector, ConnectorRegistry};
use wson_value::{Map, Value};

use crate::escape::escape_into;
use crate::{CodecSettings, StringifyError};

/// Encodes `value`, with default settings.
///
/// # Examples
///
/// ```
/// use wson_connect::ConnectorRegistry;
/// use wson_text::stringify;
/// use wson_value::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("b".into(), Value::Bool(true));
/// map.insert("a".into(), Value::from(vec![Value::from("x:y"), Value::Null]));
///
/// let text = stringify(&Value::Object(map), &ConnectorRegistry::empty()).unwrap();
/// assert_eq!(text, "{a:[x`iy|#n]|b}");
/// ```
#[inline]
pub fn stringify(value: &Value, registry: &ConnectorRegistry) -> Result<String, StringifyError> {
    stringify_with(value, registry, &CodecSettings::default())
}

/// Encodes `value`.
///
/// Custom values must be claimed by a connector of `registry`. Plain
/// objects are offered to the registry too and fall back to the object
/// notation when no connector claims them.
pub fn stringify_with(
    value: &Value,
    registry: &ConnectorRegistry,
    settings: &CodecSettings,
) -> Result<String, StringifyError> {
    let mut stringifier = Stringifier {
        registry,
        max_depth: settings.max_depth,
        depth: 0,
        out: String::new(),
    };
    stringifier.put(value)?;
    Ok(stringifier.out)
}

// -----------------------------------------------------------------------------
// Stringifier

struct Stringifier<'r> {
    registry: &'r ConnectorRegistry,
    max_depth: usize,
    depth: usize,
    out: String,
}

impl Stringifier<'_> {
    fn put(&mut self, value: &Value) -> Result<(), StringifyError> {
        let registry = self.registry;
        match value {
            Value::Undefined => self.out.push_str("#u"),
            Value::Null => self.out.push_str("#n"),
            Value::Bool(true) => self.out.push_str("#t"),
            Value::Bool(false) => self.out.push_str("#f"),
            // Writing into a `String` cannot fail.
            Value::Integer(i) => {
                let _ = write!(self.out, "#{i}");
            }
            // `Debug` keeps a decimal point or exponent, so floats read back as floats.
            Value::Float(f) => {
                let _ = write!(self.out, "#{f:?}");
            }
            Value::Date(ms) => {
                let _ = write!(self.out, "#d{ms}");
            }
            Value::String(s) => self.put_text(s),
            Value::Array(items) => self.nested(|this| {
                this.out.push('[');
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        this.out.push('|');
                    }
                    this.put(item)?;
                }
                this.out.push(']');
                Ok(())
            })?,
            Value::Object(map) => match registry.find_of_value(value) {
                Some(connector) => self.put_custom(connector, value)?,
                None => self.nested(|this| this.put_object(map))?,
            },
            Value::Custom(_) => {
                let connector = registry.connector_of_value(value)?;
                self.put_custom(connector, value)?;
            }
        }
        Ok(())
    }

    fn nested(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<(), StringifyError>,
    ) -> Result<(), StringifyError> {
        if self.depth >= self.max_depth {
            return Err(StringifyError::TooDeep {
                max_depth: self.max_depth,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn put_text(&mut self, s: &str) {
        if s.is_empty() {
            self.out.push('#');
        } else {
            escape_into(&mut self.out, s);
        }
    }

    fn put_object(&mut self, map: &Map) -> Result<(), StringifyError> {
        self.out.push('{');
        for (index, (key, value)) in map.iter().enumerate() {
            if index > 0 {
                self.out.push('|');
            }
            self.put_text(key);
            if *value != Value::Bool(true) {
                self.out.push(':');
                self.put(value)?;
            }
        }
        self.out.push('}');
        Ok(())
    }

    fn put_custom(&mut self, connector: &Connector, value: &Value) -> Result<(), StringifyError> {
        let args = connector.split_value(value)?;
        self.nested(|this| {
            this.out.push_str("[:");
            escape_into(&mut this.out, connector.cname());
            for arg in &args {
                this.out.push('|');
                this.put(arg)?;
            }
            this.out.push(']');
            Ok(())
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use wson_connect::{ConnectError, Connector, ConnectorRegistry, LookupError};
    use wson_value::{Map, Value};

    use super::{stringify, stringify_with};
    use crate::{CodecSettings, StringifyError, parse};

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i64,
        y: i64,
    }

    #[derive(Debug, PartialEq)]
    struct Line;

    fn point() -> Connector {
        Connector::of::<Point>("Point")
            .split(|p: &Point| vec![p.x.into(), p.y.into()])
            .create(|args| {
                Ok(Point {
                    x: args.i64(0)?,
                    y: args.i64(1)?,
                })
            })
            .build()
            .unwrap()
    }

    fn text(value: &Value) -> alloc::string::String {
        stringify(value, &ConnectorRegistry::new([point()]).unwrap()).unwrap()
    }

    #[test]
    fn scalars() {
        assert_eq!(text(&Value::Undefined), "#u");
        assert_eq!(text(&Value::Null), "#n");
        assert_eq!(text(&Value::Bool(true)), "#t");
        assert_eq!(text(&Value::Bool(false)), "#f");
        assert_eq!(text(&Value::Integer(-12)), "#-12");
        assert_eq!(text(&Value::Float(1.0)), "#1.0");
        assert_eq!(text(&Value::Float(0.25)), "#0.25");
        assert_eq!(text(&Value::Date(1_400_000_000_000)), "#d1400000000000");
        assert_eq!(text(&Value::from("")), "#");
        assert_eq!(text(&Value::from("a|b")), "a`pb");
    }

    #[test]
    fn containers() {
        assert_eq!(text(&Value::Array(vec![])), "[]");
        assert_eq!(text(&Value::Object(Map::new())), "{}");
        assert_eq!(
            text(&Value::Array(vec![Value::from(""), Value::Integer(1)])),
            "[#|#1]"
        );

        let mut map = Map::new();
        map.insert("z".into(), Value::Integer(1));
        map.insert("".into(), Value::from("e"));
        map.insert("flag".into(), Value::Bool(true));
        map.insert("off".into(), Value::Bool(false));
        assert_eq!(text(&Value::Object(map)), "{#:e|flag|off:#f|z:#1}");
    }

    #[test]
    fn custom_values() {
        let value = Value::Array(vec![
            Value::custom(Point { x: 1, y: 2 }),
            Value::custom(Point { x: 0, y: -1 }),
        ]);
        assert_eq!(text(&value), "[[:Point|#1|#2]|[:Point|#0|#-1]]");
    }

    #[test]
    fn cname_is_escaped() {
        let connector = Connector::of::<Line>("a:b")
            .split_value(|_| Ok(vec![]))
            .build()
            .unwrap();
        let registry = ConnectorRegistry::new([connector]).unwrap();
        assert_eq!(
            stringify(&Value::custom(Line), &registry).unwrap(),
            "[:a`ib]"
        );
    }

    #[test]
    fn shape_connector_claims_objects() {
        let connector = Connector::builder()
            .cname("Pair")
            .by_type::<Map>()
            .shape(["left", "right"])
            .split_value(|value| {
                Ok(vec![
                    value.get("left").cloned().unwrap_or_default(),
                    value.get("right").cloned().unwrap_or_default(),
                ])
            })
            .build()
            .unwrap();
        let registry = ConnectorRegistry::new([connector]).unwrap();

        let mut pair = Map::new();
        pair.insert("left".into(), Value::Integer(1));
        pair.insert("right".into(), Value::Integer(2));
        let mut other = Map::new();
        other.insert("left".into(), Value::Integer(1));

        let value = Value::Array(vec![Value::Object(pair), Value::Object(other)]);
        assert_eq!(
            stringify(&value, &registry).unwrap(),
            "[[:Pair|#1|#2]|{left:#1}]"
        );
    }

    #[test]
    fn unknown_custom_value() {
        assert_eq!(
            stringify(&Value::custom(Line), &ConnectorRegistry::empty()).unwrap_err(),
            StringifyError::Lookup(LookupError::UnknownValue { kind: "Line" })
        );
    }

    #[test]
    fn connector_without_split() {
        let registry = ConnectorRegistry::new([Connector::of::<Line>("Line").build().unwrap()])
            .unwrap();
        assert_eq!(
            stringify(&Value::custom(Line), &registry).unwrap_err(),
            StringifyError::Connect(ConnectError::NoSplit {
                cname: "Line".to_string()
            })
        );
    }

    #[test]
    fn self_referencing_split_is_bounded() {
        let connector = Connector::of::<Line>("Line")
            .split_value(|_| Ok(vec![Value::custom(Line)]))
            .build()
            .unwrap();
        let registry = ConnectorRegistry::new([connector]).unwrap();
        assert_eq!(
            stringify_with(
                &Value::custom(Line),
                &registry,
                &CodecSettings { max_depth: 4 }
            )
            .unwrap_err(),
            StringifyError::TooDeep { max_depth: 4 }
        );
    }

    #[test]
    fn reads_back() {
        let registry = ConnectorRegistry::new([point()]).unwrap();
        let mut map = Map::new();
        map.insert("when".into(), Value::Date(5));
        map.insert("what".into(), Value::Float(-2.5e-8));
        map.insert("where".into(), Value::custom(Point { x: 7, y: 8 }));
        map.insert("tags".into(), ["a[", "b}", ""].into_iter().collect());
        map.insert("ok".into(), Value::Bool(true));
        map.insert("none".into(), Value::Undefined);
        let value = Value::Object(map);

        let text = stringify(&value, &registry).unwrap();
        assert_eq!(parse(&text, &registry).unwrap(), value);

        let floats: Vec<Value> = [0.1, 1e300, -0.0, 123456.0]
            .into_iter()
            .map(Value::Float)
            .collect();
        let value = Value::Array(floats);
        let text = stringify(&value, &registry).unwrap();
        assert_eq!(parse(&text, &registry).unwrap(), value);
    }
}
