use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use wson_value::{Custom, TypeHandle, Value};

use crate::{Args, ConnectError, ConnectorBuilder, HookError, Matcher};

/// Splits a value into the argument list written after its cname.
pub type SplitFn = Arc<dyn Fn(&Value) -> Result<Vec<Value>, HookError> + Send + Sync>;

/// Re-creates a value from its parsed argument list.
pub type CreateFn = Arc<dyn Fn(Args) -> Result<Value, HookError> + Send + Sync>;

// -----------------------------------------------------------------------------
// Connector

/// Binds a cname to a type and to the logic that recognises, splits and
/// re-creates its instances.
///
/// Connectors are immutable. Cloning one shares its hooks.
///
/// # Examples
///
/// ```
/// use wson_connect::{Connector, TypeHandle, Value};
///
/// #[derive(Debug, PartialEq)]
/// struct Point { x: i64, y: i64 }
///
/// let connector = Connector::of::<Point>("Point")
///     .split(|p: &Point| vec![p.x.into(), p.y.into()])
///     .create(|args| Ok(Point { x: args.i64(0)?, y: args.i64(1)? }))
///     .build()
///     .unwrap();
///
/// assert_eq!(connector.cname(), "Point");
/// assert_eq!(connector.by(), TypeHandle::of::<Point>());
///
/// let value = Value::custom(Point { x: 1, y: 2 });
/// assert!(connector.matches(&value));
///
/// let args = connector.split_value(&value).unwrap();
/// assert_eq!(connector.create_value(args).unwrap(), value);
/// ```
#[derive(Clone)]
pub struct Connector {
    cname: String,
    by: TypeHandle,
    matcher: Matcher,
    split: Option<SplitFn>,
    create: Option<CreateFn>,
}

impl Connector {
    /// Starts a connector for the type `T`, recognised by [`Matcher::Exact`].
    #[inline]
    pub fn of<T: Custom>(cname: impl Into<String>) -> ConnectorBuilder {
        ConnectorBuilder::new().cname(cname).by_type::<T>()
    }

    /// Starts an empty connector description.
    #[inline]
    pub fn builder() -> ConnectorBuilder {
        ConnectorBuilder::new()
    }

    pub(crate) fn from_parts(
        cname: String,
        by: TypeHandle,
        matcher: Matcher,
        split: Option<SplitFn>,
        create: Option<CreateFn>,
    ) -> Self {
        Self {
            cname,
            by,
            matcher,
            split,
            create,
        }
    }

    /// The canonical name written in front of encoded instances.
    #[inline(always)]
    pub fn cname(&self) -> &str {
        &self.cname
    }

    /// The type this connector stands for.
    #[inline(always)]
    pub const fn by(&self) -> TypeHandle {
        self.by
    }

    #[inline(always)]
    pub const fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Whether this connector is responsible for `value`.
    #[inline]
    pub fn matches(&self, value: &Value) -> bool {
        self.matcher.matches(self.by, value)
    }

    #[inline]
    pub fn can_split(&self) -> bool {
        self.split.is_some()
    }

    #[inline]
    pub fn can_create(&self) -> bool {
        self.create.is_some()
    }

    /// Splits `value` into its argument list.
    pub fn split_value(&self, value: &Value) -> Result<Vec<Value>, ConnectError> {
        let split = self.split.as_ref().ok_or_else(|| ConnectError::NoSplit {
            cname: self.cname.clone(),
        })?;
        split(value).map_err(|source| self.hook_error(source))
    }

    /// Re-creates a value from its argument list.
    pub fn create_value(&self, args: Vec<Value>) -> Result<Value, ConnectError> {
        let create = self.create.as_ref().ok_or_else(|| ConnectError::NoCreate {
            cname: self.cname.clone(),
        })?;
        create(Args::new(args)).map_err(|source| self.hook_error(source))
    }

    #[cold]
    fn hook_error(&self, source: HookError) -> ConnectError {
        ConnectError::Hook {
            cname: self.cname.clone(),
            source,
        }
    }
}

impl fmt::Debug for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connector")
            .field("cname", &self.cname)
            .field("by", &self.by)
            .field("matcher", &self.matcher)
            .field("split", &self.split.is_some())
            .field("create", &self.create.is_some())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
