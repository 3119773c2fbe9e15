use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypeHandle

/// The identity of a Rust type, as carried by a connector's `by`.
///
/// Two handles are equal exactly when their [`TypeId`]s are equal; the
/// stored name is only used for diagnostics.
///
/// # Examples
///
/// ```
/// use wson_value::TypeHandle;
///
/// let ty = TypeHandle::of::<String>();
/// assert!(ty.is::<String>());
/// assert_eq!(ty, TypeHandle::of::<String>());
/// assert_ne!(ty, TypeHandle::of::<&'static str>());
/// ```
#[derive(Copy, Clone)]
pub struct TypeHandle {
    type_id: TypeId,
    type_name: &'static str,
}

impl TypeHandle {
    /// Creates the handle of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the full type name, as given by [`core::any::type_name`].
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the last path segment of [`name`](Self::name),
    /// generic arguments included.
    pub fn short_name(&self) -> &'static str {
        let name = self.type_name;
        let head = match name.find('<') {
            Some(index) => &name[..index],
            None => name,
        };
        match head.rfind("::") {
            Some(index) => &name[index + 2..],
            None => name,
        }
    }

    /// Check if the given type matches this one.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }
}

/// This implementation purely relies on the [`TypeId`] of the type.
impl PartialEq for TypeHandle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeHandle {}

/// This implementation purely relies on the [`TypeId`] of the type.
impl Hash for TypeHandle {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

// -----------------------------------------------------------------------------
// Tests
