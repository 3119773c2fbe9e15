//! Connectors shipped with the crate.
//!
//! The set is a constant list of constructor functions, so every call to
//! [`builtins`] produces fresh connectors and no registry shares state with
//! another.

use alloc::string::ToString;
use alloc::vec;
use core::net::IpAddr;
use core::time::Duration;

use wson_value::Value;

use crate::{Connector, ConnectorBuilder, HookError};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Constructors of the builtin connectors, in registration order.
pub const BUILTINS: &[fn() -> ConnectorBuilder] = &[duration, ip_addr];

/// Descriptions of all builtin connectors, in registration order.
#[inline]
pub fn builtins() -> impl ExactSizeIterator<Item = ConnectorBuilder> {
    BUILTINS.iter().map(|f| f())
}

/// `Duration`: `[secs|nanos]`.
pub fn duration() -> ConnectorBuilder {
    Connector::of::<Duration>("Duration")
        .split_value(|value| {
            let Some(duration) = value.downcast_ref::<Duration>() else {
                return Err(HookError::Mismatch {
                    expected: "Duration",
                    found: value.describe(),
                });
            };
            let secs = i64::try_from(duration.as_secs())
                .map_err(|_| HookError::Invalid("duration seconds overflow".to_string()))?;
            Ok(vec![
                Value::Integer(secs),
                Value::Integer(i64::from(duration.subsec_nanos())),
            ])
        })
        .create(|args| {
            args.expect_len(2)?;
            let secs = u64::try_from(args.i64(0)?)
                .map_err(|_| HookError::Invalid("negative duration seconds".to_string()))?;
            let nanos = args.i64(1)?;
            if !(0..NANOS_PER_SEC).contains(&nanos) {
                return Err(HookError::Invalid("duration nanos out of range".to_string()));
            }
            Ok(Duration::new(secs, nanos as u32))
        })
}

/// `IpAddr`: `[text]`, v4 or v6.
pub fn ip_addr() -> ConnectorBuilder {
    Connector::of::<IpAddr>("IpAddr")
        .split(|addr: &IpAddr| vec![Value::String(addr.to_string())])
        .create(|args| {
            args.expect_len(1)?;
            args.str(0)?
                .parse::<IpAddr>()
                .map_err(|e| HookError::Invalid(e.to_string()))
        })
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;
    use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};
    use core::time::Duration;

    use super::builtins;
    use crate::{ConnectError, ConnectorRegistry, Value};

    fn registry() -> ConnectorRegistry {
        ConnectorRegistry::from_builders(builtins()).unwrap()
    }

    #[test]
    fn fresh_and_ordered() {
        let registry = registry();
        assert_eq!(registry.cnames().collect::<Vec<_>>(), ["Duration", "IpAddr"]);
        assert_eq!(builtins().len(), 2);
    }

    #[test]
    fn duration_round_trip() {
        let registry = registry();
        let value = Value::custom(Duration::new(5, 250));
        let connector = registry.connector_of_value(&value).unwrap();
        assert_eq!(connector.cname(), "Duration");

        let args = connector.split_value(&value).unwrap();
        assert_eq!(args, vec![Value::Integer(5), Value::Integer(250)]);
        assert_eq!(connector.create_value(args).unwrap(), value);
    }

    #[test]
    fn duration_rejects_bad_args() {
        let registry = registry();
        let connector = registry.connector_of_cname("Duration").unwrap();
        assert!(matches!(
            connector.create_value(vec![Value::Integer(-1), Value::Integer(0)]),
            Err(ConnectError::Hook { .. })
        ));
        assert!(matches!(
            connector.create_value(vec![Value::Integer(1), Value::Integer(1_000_000_000)]),
            Err(ConnectError::Hook { .. })
        ));
    }

    #[test]
    fn ip_addr_both_families() {
        let registry = registry();
        for addr in [
            IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            IpAddr::V6(Ipv6Addr::LOCALHOST),
        ] {
            let value = Value::custom(addr);
            let connector = registry.connector_of_value(&value).unwrap();
            assert_eq!(connector.cname(), "IpAddr");
            let args = connector.split_value(&value).unwrap();
            assert_eq!(connector.create_value(args).unwrap(), value);
        }

        let connector = registry.connector_of_cname("IpAddr").unwrap();
        assert!(connector
            .create_value(vec![Value::from("not an address")])
            .is_err());
    }
}
