use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque item descriptor carried by insert and update changes.
///
/// Cloning shares the underlying descriptor. Two descriptors compare equal
/// only when they are clones of the same descriptor.
#[derive(Clone)]
pub struct RenderInfo {
    inner: Arc<dyn Any + Send + Sync>,
}

impl RenderInfo {
    /// Wraps an arbitrary value as an item descriptor.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Creates a descriptor with no content.
    pub fn empty() -> Self {
        Self::new(())
    }

    /// Returns `true` if this descriptor was created by [`RenderInfo::empty`].
    pub fn is_empty(&self) -> bool {
        (*self.inner).is::<()>()
    }

    /// Returns the wrapped value if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.inner).downcast_ref::<T>()
    }
}

impl PartialEq for RenderInfo {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for RenderInfo {}

impl fmt::Debug for RenderInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderInfo")
            .field("empty", &self.is_empty())
            .finish_non_exhaustive()
    }
}
