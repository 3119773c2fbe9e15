use alloc::vec::Vec;

use wson_connect::{BuildError, ConnectorBuilder, ConnectorRegistry, builtins};

use crate::{Wson, WsonOptions};

/// Builds an engine from `options`, see [`build_registry`].
#[inline]
pub fn factory(options: WsonOptions) -> Result<Wson, BuildError> {
    Wson::new(options)
}

/// Builds the registry described by `options`.
///
/// The user's connectors come first, in the given order. With
/// `settings.extend`, the builtin connectors follow, except those whose
/// cname a user connector already claims.
///
/// Two user connectors sharing a cname are an error, as is any connector
/// missing its cname or its `by` type.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use wson::{Connector, WsonOptions, build_registry};
///
/// let registry = build_registry(WsonOptions::new()).unwrap();
/// assert_eq!(registry.cnames().collect::<Vec<_>>(), ["Duration", "IpAddr"]);
///
/// #[derive(Debug, PartialEq)]
/// struct Millis(u64);
///
/// let options = WsonOptions::new().connector(Connector::of::<Millis>("Duration"));
/// let registry = build_registry(options).unwrap();
/// assert_eq!(registry.cnames().collect::<Vec<_>>(), ["Duration", "IpAddr"]);
/// assert!(registry.connector_of_type::<Duration>().is_none());
///
/// let registry = build_registry(WsonOptions::new().extend(false)).unwrap();
/// assert!(registry.is_empty());
/// ```
pub fn build_registry(options: WsonOptions) -> Result<ConnectorRegistry, BuildError> {
    let WsonOptions {
        mut connectors,
        settings,
    } = options;

    if settings.extend {
        let user_len = connectors.len();
        connectors.reserve(builtins::BUILTINS.len());
        for builtin in builtins::builtins() {
            if is_shadowed(&connectors[..user_len], &builtin) {
                log::debug!(
                    "builtin connector `{}` shadowed by a user connector",
                    builtin.cname_ref().unwrap_or_default()
                );
                continue;
            }
            connectors.push(builtin);
        }
    }

    ConnectorRegistry::from_builders(connectors)
}

fn is_shadowed(user: &[ConnectorBuilder], builtin: &ConnectorBuilder) -> bool {
    match builtin.cname_ref() {
        Some(cname) => user.iter().any(|c| c.cname_ref() == Some(cname)),
        None => false,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::net::IpAddr;
    use core::time::Duration;

    use wson_connect::{BuildError, ConfigError, Connector, DuplicateConnectorError};

    use super::build_registry;
    use crate::{TypeHandle, Value, WsonOptions};

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i64,
        y: i64,
    }

    #[derive(Debug, PartialEq)]
    struct Seconds(u64);

    fn cnames(options: WsonOptions) -> Vec<alloc::string::String> {
        build_registry(options)
            .unwrap()
            .cnames()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn user_connectors_come_first() {
        let options = WsonOptions::new().connector(Connector::of::<Point>("Point"));
        assert_eq!(cnames(options), ["Point", "Duration", "IpAddr"]);
    }

    #[test]
    fn replace_builtins() {
        let options = WsonOptions::new()
            .connector(Connector::of::<Point>("Point"))
            .extend(false);
        assert_eq!(cnames(options), ["Point"]);
        assert_eq!(cnames(WsonOptions::new().extend(false)), Vec::<&str>::new());
    }

    #[test]
    fn user_connector_shadows_builtin() {
        let options = WsonOptions::new().connector(Connector::of::<Seconds>("Duration"));
        let registry = build_registry(options).unwrap();

        assert_eq!(
            registry.connector_of_cname("Duration").unwrap().by(),
            TypeHandle::of::<Seconds>()
        );
        assert!(registry.connector_of_type::<Duration>().is_none());
        assert!(
            registry
                .connector_of_value(&Value::custom(Duration::from_secs(1)))
                .is_err()
        );
        assert!(registry.connector_of_type::<IpAddr>().is_some());
    }

    #[test]
    fn user_duplicates_fail() {
        let options = WsonOptions::new()
            .connector(Connector::of::<Point>("Point"))
            .connector(Connector::of::<Seconds>("Point"));
        assert_eq!(
            build_registry(options).unwrap_err(),
            BuildError::Duplicate(DuplicateConnectorError {
                cname: "Point".to_string(),
                first: 0,
                second: 1,
            })
        );
    }

    #[test]
    fn malformed_connector_fails() {
        let options = WsonOptions::new()
            .connector(Connector::of::<Point>("Point"))
            .connector(Connector::builder().by_type::<Seconds>());
        assert_eq!(
            build_registry(options).unwrap_err(),
            BuildError::Config {
                index: 1,
                source: ConfigError::MissingCname,
            }
        );
    }

    #[test]
    fn deterministic() {
        let options = || {
            WsonOptions::new()
                .connector(Connector::of::<Point>("Point"))
                .connector(Connector::builder().cname("Any").by_type::<Value>().matches(|_| true))
        };
        let a = build_registry(options()).unwrap();
        let b = build_registry(options()).unwrap();
        assert!(a.cnames().eq(b.cnames()));

        let value = Value::custom(Point { x: 1, y: 2 });
        assert_eq!(
            a.connector_of_value(&value).unwrap().cname(),
            b.connector_of_value(&value).unwrap().cname()
        );
        let other = Value::custom(Seconds(1));
        assert_eq!(a.connector_of_value(&other).unwrap().cname(), "Any");
        assert_eq!(b.connector_of_value(&other).unwrap().cname(), "Any");
    }
}
