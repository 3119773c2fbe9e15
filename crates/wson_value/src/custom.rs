use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use crate::TypeHandle;

// -----------------------------------------------------------------------------
// Custom

/// An instance of a user type that can live inside a [`Value`](crate::Value).
///
/// Implemented for every `'static` type that is `Debug + PartialEq + Send + Sync`,
/// so user types never implement it by hand.
pub trait Custom: Any + fmt::Debug + Send + Sync {
    /// Upcast to [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Compares with another instance; instances of different types are never equal.
    fn dyn_eq(&self, other: &dyn Custom) -> bool;

    /// Returns the [`TypeHandle`] of the concrete type.
    fn type_handle(&self) -> TypeHandle;
}

impl<T: Any + fmt::Debug + PartialEq + Send + Sync> Custom for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Custom) -> bool {
        match Custom::as_any(other).downcast_ref::<T>() {
            Some(other) => self == other,
            None => false,
        }
    }

    #[inline]
    fn type_handle(&self) -> TypeHandle {
        TypeHandle::of::<T>()
    }
}

// -----------------------------------------------------------------------------
// CustomValue

/// A shared, immutable instance of a user type.
///
/// Cloning only bumps a reference count.
///
/// # Examples
///
/// ```
/// use wson_value::{CustomValue, TypeHandle};
///
/// #[derive(Debug, PartialEq)]
/// struct Point(i32, i32);
///
/// let value = CustomValue::new(Point(1, 2));
/// assert_eq!(value.type_handle(), TypeHandle::of::<Point>());
/// assert_eq!(value.downcast_ref::<Point>(), Some(&Point(1, 2)));
/// assert!(value.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct CustomValue(Arc<dyn Custom>);

impl CustomValue {
    /// Wraps `value`.
    #[inline]
    pub fn new<T: Custom>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns the [`TypeHandle`] of the wrapped instance.
    #[inline]
    pub fn type_handle(&self) -> TypeHandle {
        Custom::type_handle(&*self.0)
    }

    /// Whether the wrapped instance is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        Custom::as_any(&*self.0).is::<T>()
    }

    /// Returns the wrapped instance if it is a `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        Custom::as_any(&*self.0).downcast_ref::<T>()
    }

    /// Returns the wrapped instance as a trait object.
    #[inline]
    pub fn as_dyn(&self) -> &dyn Custom {
        &*self.0
    }

    /// Whether both values share the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for CustomValue {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.dyn_eq(&*other.0)
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::CustomValue;
    use crate::TypeHandle;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Debug, PartialEq)]
    struct Other(i32);

    #[test]
    fn equality_follows_the_wrapped_type() {
        let a = CustomValue::new(Point { x: 1, y: 2 });
        let b = CustomValue::new(Point { x: 1, y: 2 });
        let c = CustomValue::new(Point { x: 0, y: 2 });
        let d = CustomValue::new(Other(1));

        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn downcast_and_handle() {
        let value = CustomValue::new(Other(7));
        assert!(value.is::<Other>());
        assert!(!value.is::<Point>());
        assert_eq!(value.downcast_ref::<Other>(), Some(&Other(7)));
        assert_eq!(value.type_handle(), TypeHandle::of::<Other>());
        assert_eq!(format!("{value:?}"), "Other(7)");
    }
}
