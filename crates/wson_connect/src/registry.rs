use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use wson_utils::TypeIdMap;
use wson_utils::hash::HashMap;
use wson_value::{Custom, TypeHandle, Value};

use crate::{BuildError, Connector, ConnectorBuilder, DuplicateConnectorError, LookupError};

// -----------------------------------------------------------------------------
// ConnectorRegistry

/// An immutable, indexed set of [`Connector`]s.
///
/// Three indices are built once, at construction:
///
/// - cname → connector, for O(1) name resolution;
/// - the connectors in configuration order, scanned by
///   [`connector_of_value`](Self::connector_of_value);
/// - `by` type → first connector registered for that type.
///
/// There is no way to add or remove a connector afterwards. A new
/// configuration builds a new registry.
///
/// # Examples
///
/// ```
/// use wson_connect::{Connector, ConnectorRegistry, LookupError, TypeHandle, Value};
///
/// #[derive(Debug, PartialEq)]
/// struct Point(i32, i32);
///
/// let registry = ConnectorRegistry::new([
///     Connector::of::<Point>("Point").build().unwrap(),
/// ]).unwrap();
///
/// let by_name = registry.connector_of_cname("Point").unwrap();
/// assert_eq!(by_name.by(), TypeHandle::of::<Point>());
///
/// let by_value = registry.connector_of_value(&Value::custom(Point(0, 0))).unwrap();
/// assert!(core::ptr::eq(by_name, by_value));
///
/// assert!(matches!(
///     registry.connector_of_cname("Line"),
///     Err(LookupError::UnknownCname { .. })
/// ));
/// ```
pub struct ConnectorRegistry {
    connectors: Vec<Connector>,
    cname_to_index: HashMap<String, usize>,
    by_to_index: TypeIdMap<usize>,
}

impl Default for ConnectorRegistry {
    /// See [`ConnectorRegistry::empty`] .
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl ConnectorRegistry {
    /// Create a registry without connectors.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            connectors: Vec::new(),
            cname_to_index: HashMap::with_hasher(wson_utils::hash::FixedHashState),
            by_to_index: TypeIdMap::new(),
        }
    }

    /// Builds a registry from connectors, keeping their order.
    ///
    /// Fails if two connectors share a cname, whatever their `by` types.
    pub fn new(
        connectors: impl IntoIterator<Item = Connector>,
    ) -> Result<Self, DuplicateConnectorError> {
        let connectors: Vec<Connector> = connectors.into_iter().collect();
        let mut cname_to_index = HashMap::with_capacity_and_hasher(
            connectors.len(),
            wson_utils::hash::FixedHashState,
        );
        let mut by_to_index = TypeIdMap::with_capacity(connectors.len());

        for (index, connector) in connectors.iter().enumerate() {
            if let Some(&first) = cname_to_index.get(connector.cname()) {
                return Err(DuplicateConnectorError {
                    cname: String::from(connector.cname()),
                    first,
                    second: index,
                });
            }
            cname_to_index.insert(String::from(connector.cname()), index);
            by_to_index.try_insert(connector.by().id(), || index);
        }

        log::debug!("connector registry built with {} connectors", connectors.len());

        Ok(Self {
            connectors,
            cname_to_index,
            by_to_index,
        })
    }

    /// Validates every description, then builds the registry.
    ///
    /// The first malformed description is reported with its position.
    pub fn from_builders(
        builders: impl IntoIterator<Item = ConnectorBuilder>,
    ) -> Result<Self, BuildError> {
        let connectors = builders
            .into_iter()
            .enumerate()
            .map(|(index, builder)| {
                builder
                    .build()
                    .map_err(|source| BuildError::Config { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(connectors)?)
    }

    /// Returns the connector registered under `cname`.
    pub fn connector_of_cname(&self, cname: &str) -> Result<&Connector, LookupError> {
        match self.cname_to_index.get(cname) {
            Some(&index) => Ok(&self.connectors[index]),
            None => {
                log::trace!("no connector for cname `{cname}`");
                Err(LookupError::UnknownCname {
                    cname: String::from(cname),
                })
            }
        }
    }

    /// Returns the first connector, in configuration order, that matches `value`.
    pub fn connector_of_value(&self, value: &Value) -> Result<&Connector, LookupError> {
        match self.find_of_value(value) {
            Some(connector) => Ok(connector),
            None => {
                log::trace!("no connector for a value of type `{}`", value.describe());
                Err(LookupError::UnknownValue {
                    kind: value.describe(),
                })
            }
        }
    }

    /// Like [`connector_of_value`](Self::connector_of_value), but a miss is
    /// not an error.
    #[inline]
    pub fn find_of_value(&self, value: &Value) -> Option<&Connector> {
        self.connectors.iter().find(|c| c.matches(value))
    }

    /// Returns the first connector registered with `by` as its type.
    pub fn connector_of_by(&self, by: TypeHandle) -> Option<&Connector> {
        match self.by_to_index.get(&by.id()) {
            Some(&index) => Some(&self.connectors[index]),
            None => None,
        }
    }

    /// See [`connector_of_by`](Self::connector_of_by).
    #[inline]
    pub fn connector_of_type<T: Custom>(&self) -> Option<&Connector> {
        self.connector_of_by(TypeHandle::of::<T>())
    }

    /// Whether a connector is registered under `cname`.
    #[inline]
    pub fn contains(&self, cname: &str) -> bool {
        self.cname_to_index.contains_key(cname)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    /// Iterates the connectors in configuration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Connector> {
        self.connectors.iter()
    }

    /// Iterates the cnames in configuration order.
    #[inline]
    pub fn cnames(&self) -> impl ExactSizeIterator<Item = &str> {
        self.connectors.iter().map(Connector::cname)
    }
}

impl fmt::Debug for ConnectorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cnames()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::ConnectorRegistry;
    use crate::{BuildError, ConfigError, Connector, DuplicateConnectorError};
    use crate::{LookupError, TypeHandle, Value};

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Point {
        fn new(x: i32, y: i32) -> Self {
            Self { x, y }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Line;

    fn point() -> Connector {
        Connector::of::<Point>("Point").build().unwrap()
    }

    fn generic() -> Connector {
        Connector::builder()
            .cname("Generic")
            .by_type::<Value>()
            .matches(|_| true)
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_by_cname() {
        let registry = ConnectorRegistry::new([point()]).unwrap();
        let connector = registry.connector_of_cname("Point").unwrap();
        assert_eq!(connector.cname(), "Point");
        assert_eq!(connector.by(), TypeHandle::of::<Point>());
    }

    #[test]
    fn lookup_by_value() {
        let registry = ConnectorRegistry::new([point()]).unwrap();
        let connector = registry
            .connector_of_value(&Value::custom(Point::new(0, 0)))
            .unwrap();
        assert_eq!(connector.by(), TypeHandle::of::<Point>());
        assert!(core::ptr::eq(
            connector,
            registry.connector_of_cname("Point").unwrap()
        ));
    }

    #[test]
    fn specific_before_catch_all() {
        let registry = ConnectorRegistry::new([point(), generic()]).unwrap();
        let value = Value::custom(Point::new(1, 1));
        assert_eq!(registry.connector_of_value(&value).unwrap().cname(), "Point");
        assert_eq!(
            registry.connector_of_value(&Value::custom(Line)).unwrap().cname(),
            "Generic"
        );
    }

    #[test]
    fn catch_all_first_wins() {
        let registry = ConnectorRegistry::new([generic(), point()]).unwrap();
        let value = Value::custom(Point::new(1, 1));
        assert_eq!(registry.connector_of_value(&value).unwrap().cname(), "Generic");
        // Name resolution is unaffected by order.
        assert_eq!(registry.connector_of_cname("Point").unwrap().cname(), "Point");
    }

    #[test]
    fn empty_registry() {
        let registry = ConnectorRegistry::empty();
        assert!(registry.is_empty());
        assert_eq!(
            registry.connector_of_cname("Anything").unwrap_err(),
            LookupError::UnknownCname {
                cname: "Anything".to_string()
            }
        );
        assert_eq!(
            registry.connector_of_value(&Value::Integer(1)).unwrap_err(),
            LookupError::UnknownValue { kind: "integer" }
        );
    }

    #[test]
    fn unmatched_value() {
        let registry = ConnectorRegistry::new([point()]).unwrap();
        assert_eq!(
            registry.connector_of_value(&Value::custom(Line)).unwrap_err(),
            LookupError::UnknownValue { kind: "Line" }
        );
        assert!(registry.find_of_value(&Value::Null).is_none());
    }

    #[test]
    fn duplicate_cnames_fail() {
        let other = Connector::of::<Line>("Point").build().unwrap();
        let err = ConnectorRegistry::new([point(), generic(), other]).unwrap_err();
        assert_eq!(
            err,
            DuplicateConnectorError {
                cname: "Point".to_string(),
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn malformed_builders_fail() {
        let builders = vec![
            Connector::of::<Point>("Point"),
            Connector::builder().cname("Line"),
        ];
        assert_eq!(
            ConnectorRegistry::from_builders(builders).unwrap_err(),
            BuildError::Config {
                index: 1,
                source: ConfigError::MissingBy {
                    cname: "Line".to_string()
                },
            }
        );

        let builders = vec![Connector::of::<Point>("Point"), Connector::of::<Line>("Point")];
        assert!(matches!(
            ConnectorRegistry::from_builders(builders),
            Err(BuildError::Duplicate(_))
        ));
    }

    #[test]
    fn lookup_by_type() {
        let second = Connector::of::<Point>("Point2").build().unwrap();
        let registry = ConnectorRegistry::new([generic(), point(), second]).unwrap();
        assert_eq!(registry.connector_of_type::<Point>().unwrap().cname(), "Point");
        assert_eq!(
            registry.connector_of_by(TypeHandle::of::<Value>()).unwrap().cname(),
            "Generic"
        );
        assert!(registry.connector_of_type::<Line>().is_none());
    }

    #[test]
    fn order_and_idempotence() {
        let registry = ConnectorRegistry::new([point(), generic()]).unwrap();
        assert_eq!(registry.cnames().collect::<Vec<_>>(), ["Point", "Generic"]);
        assert!(registry.contains("Generic"));
        assert!(!registry.contains("generic"));

        let value = Value::custom(Point::new(2, 3));
        let first = registry.connector_of_value(&value).unwrap();
        for _ in 0..3 {
            assert!(core::ptr::eq(first, registry.connector_of_value(&value).unwrap()));
        }
        assert_eq!(alloc::format!("{registry:?}"), r#"["Point", "Generic"]"#);
    }

    #[test]
    fn registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConnectorRegistry>();
    }
}
