use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use wson_value::{Custom, TypeHandle, Value};

use crate::{Args, ConfigError, Connector, CreateFn, HookError, Matcher, SplitFn};

// -----------------------------------------------------------------------------
// ConnectorBuilder

/// An unvalidated connector description.
///
/// `cname` and `by` are mandatory; [`build`](Self::build) reports a
/// [`ConfigError`] when either is missing or the cname is empty.
///
/// # Examples
///
/// ```
/// use wson_connect::{ConfigError, Connector, Map, Value};
///
/// let err = Connector::builder().cname("Point").build().unwrap_err();
/// assert!(matches!(err, ConfigError::MissingBy { .. }));
///
/// // Duck-typed: any object with `x` and `y` is a point.
/// let connector = Connector::builder()
///     .cname("Point")
///     .by_type::<Map>()
///     .shape(["x", "y"])
///     .build()
///     .unwrap();
/// assert!(!connector.matches(&Value::Object(Map::new())));
/// ```
#[derive(Clone, Default)]
pub struct ConnectorBuilder {
    cname: Option<String>,
    by: Option<TypeHandle>,
    matcher: Matcher,
    split: Option<SplitFn>,
    create: Option<CreateFn>,
}

impl ConnectorBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cname(mut self, cname: impl Into<String>) -> Self {
        self.cname = Some(cname.into());
        self
    }

    #[inline]
    pub fn by(mut self, by: TypeHandle) -> Self {
        self.by = Some(by);
        self
    }

    #[inline]
    pub fn by_type<T: ?Sized + 'static>(self) -> Self {
        self.by(TypeHandle::of::<T>())
    }

    #[inline]
    pub fn matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Shorthand for [`Matcher::predicate`].
    #[inline]
    pub fn matches(self, f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.matcher(Matcher::predicate(f))
    }

    /// Shorthand for [`Matcher::shape`].
    #[inline]
    pub fn shape<I, S>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matcher(Matcher::shape(keys))
    }

    /// Sets an untyped split function.
    pub fn split_value(
        mut self,
        f: impl Fn(&Value) -> Result<Vec<Value>, HookError> + Send + Sync + 'static,
    ) -> Self {
        self.split = Some(Arc::new(f));
        self
    }

    /// Sets an untyped create function.
    pub fn create_value(
        mut self,
        f: impl Fn(Args) -> Result<Value, HookError> + Send + Sync + 'static,
    ) -> Self {
        self.create = Some(Arc::new(f));
        self
    }

    /// Sets a split function over custom instances of `T`.
    ///
    /// Values that are not a `T` fail with [`HookError::Mismatch`].
    pub fn split<T: Custom>(self, f: impl Fn(&T) -> Vec<Value> + Send + Sync + 'static) -> Self {
        self.split_value(move |value| match value.downcast_ref::<T>() {
            Some(instance) => Ok(f(instance)),
            None => Err(HookError::Mismatch {
                expected: TypeHandle::of::<T>().short_name(),
                found: value.describe(),
            }),
        })
    }

    /// Sets a create function producing custom instances of `T`.
    pub fn create<T: Custom>(
        self,
        f: impl Fn(Args) -> Result<T, HookError> + Send + Sync + 'static,
    ) -> Self {
        self.create_value(move |args| f(args).map(Value::custom))
    }

    /// Validates the description.
    pub fn build(self) -> Result<Connector, ConfigError> {
        let cname = self.cname.ok_or(ConfigError::MissingCname)?;
        if cname.is_empty() {
            return Err(ConfigError::EmptyCname);
        }
        let Some(by) = self.by else {
            return Err(ConfigError::MissingBy { cname });
        };
        Ok(Connector::from_parts(
            cname,
            by,
            self.matcher,
            self.split,
            self.create,
        ))
    }

    /// The cname given so far, if any.
    #[inline]
    pub fn cname_ref(&self) -> Option<&str> {
        self.cname.as_deref()
    }
}

impl fmt::Debug for ConnectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectorBuilder")
            .field("cname", &self.cname)
            .field("by", &self.by)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Tests
