use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;

use wson_connect::{BuildError, Connector, ConnectorRegistry, Custom, LookupError};
use wson_text::{CodecSettings, EscapeError, ParseError, PartialParser, StringifyError};
use wson_value::{TypeHandle, Value};

use crate::{WsonOptions, build_registry};

// -----------------------------------------------------------------------------
// Wson

/// A configured WSON engine.
///
/// The engine is immutable. Cloning it shares the registry.
///
/// # Examples
///
/// ```
/// use wson::{Connector, TypeHandle, Value, Wson, WsonOptions};
///
/// #[derive(Debug, PartialEq)]
/// struct Point(i64, i64);
///
/// let wson = Wson::new(WsonOptions::new().connector(Connector::of::<Point>("Point"))).unwrap();
///
/// let connector = wson.connector_of_cname("Point").unwrap();
/// assert_eq!(connector.by(), TypeHandle::of::<Point>());
///
/// let connector = wson.connector_of_value(&Value::custom(Point(0, 0))).unwrap();
/// assert_eq!(connector.cname(), "Point");
/// ```
#[derive(Clone, Debug)]
pub struct Wson {
    registry: Arc<ConnectorRegistry>,
    codec: CodecSettings,
}

impl Wson {
    /// Builds an engine, see [`build_registry`].
    pub fn new(options: WsonOptions) -> Result<Self, BuildError> {
        let codec = options.settings.codec();
        let registry = build_registry(options)?;
        Ok(Self::from_registry(registry, codec))
    }

    /// Wraps an already built registry.
    #[inline]
    pub fn from_registry(registry: impl Into<Arc<ConnectorRegistry>>, codec: CodecSettings) -> Self {
        Self {
            registry: registry.into(),
            codec,
        }
    }

    #[inline]
    pub fn registry(&self) -> &ConnectorRegistry {
        &self.registry
    }

    #[inline]
    pub fn settings(&self) -> &CodecSettings {
        &self.codec
    }

    // -------------------------------------------------------------------------
    // Resolution

    /// See [`ConnectorRegistry::connector_of_cname`].
    #[inline]
    pub fn connector_of_cname(&self, cname: &str) -> Result<&Connector, LookupError> {
        self.registry.connector_of_cname(cname)
    }

    /// See [`ConnectorRegistry::connector_of_value`].
    #[inline]
    pub fn connector_of_value(&self, value: &Value) -> Result<&Connector, LookupError> {
        self.registry.connector_of_value(value)
    }

    /// See [`ConnectorRegistry::connector_of_by`].
    #[inline]
    pub fn connector_of_by(&self, by: TypeHandle) -> Option<&Connector> {
        self.registry.connector_of_by(by)
    }

    #[inline]
    pub fn connector_of_type<T: Custom>(&self) -> Option<&Connector> {
        self.registry.connector_of_type::<T>()
    }

    // -------------------------------------------------------------------------
    // Text

    #[inline]
    pub fn stringify(&self, value: &Value) -> Result<String, StringifyError> {
        wson_text::stringify_with(value, &self.registry, &self.codec)
    }

    #[inline]
    pub fn parse(&self, input: &str) -> Result<Value, ParseError> {
        wson_text::parse_with(input, &self.registry, &self.codec)
    }

    /// Starts a step-wise parse of `input`, see [`PartialParser`].
    #[inline]
    pub fn parse_partial<'a>(&'a self, input: &'a str) -> PartialParser<'a, 'a> {
        PartialParser::with_settings(input, &self.registry, &self.codec)
    }

    #[inline]
    pub fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
        wson_text::escape(s)
    }

    #[inline]
    pub fn unescape<'a>(&self, s: &'a str) -> Result<Cow<'a, str>, EscapeError> {
        wson_text::unescape(s)
    }
}

// -----------------------------------------------------------------------------
// Tests
