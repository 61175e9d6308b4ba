//! Type-erased asset handles

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A shared, type-erased handle to a loaded asset object
///
/// Cloning is cheap. Typed access goes through [`AssetObject::downcast`].
#[derive(Clone)]
pub struct AssetObject {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl AssetObject {
    /// Wrap a value in a new handle
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an existing `Arc` without re-allocating
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            value,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// `TypeId` of the concrete object
    pub fn object_type(&self) -> TypeId {
        Any::type_id(&*self.value)
    }

    /// Name of the concrete type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.object_type() == TypeId::of::<T>()
    }

    /// True if `filter` is `None` or names this object's type
    pub fn matches(&self, filter: Option<TypeId>) -> bool {
        filter.map_or(true, |ty| ty == self.object_type())
    }

    /// Typed view of the object, if it is a `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    /// Whether two handles point at the same allocation
    pub fn ptr_eq(&self, other: &AssetObject) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for AssetObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetObject")
            .field("type", &self.type_name)
            .finish()
    }
}

/// Raw file contents, produced by byte-oriented sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAsset {
    pub path: String,
    pub bytes: Vec<u8>,
}

impl RawAsset {
    pub fn new(path: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    /// Contents as UTF-8 text, if valid
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}
