//! A lock-guarded handle for sharing a [`NamedItemSet`] across threads.

use super::error::Result;
use super::named::Named;
use super::named_item_set::NamedItemSet;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// A cloneable, thread-safe handle to a [`NamedItemSet`].
///
/// Every clone points at the same set. Single operations take the lock for
/// their own duration; use [`read`](Self::read) or [`write`](Self::write)
/// to hold it across several operations.
///
/// ### Examples
/// ```rust
/// use named_item_set::{Named, SharedNamedItemSet};
///
/// #[derive(Clone)]
/// struct Worker {
///     name: String,
/// }
///
/// impl Named for Worker {
///     fn name(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let workers = SharedNamedItemSet::new();
/// let handle = workers.clone();
/// std::thread::spawn(move || handle.add(Worker { name: "w1".into() }))
///     .join()
///     .unwrap()?;
/// assert!(workers.contains("w1"));
/// # Ok::<(), named_item_set::NamedItemSetError>(())
/// ```
pub struct SharedNamedItemSet<T> {
    inner: Arc<RwLock<NamedItemSet<T>>>,
}

impl<T> SharedNamedItemSet<T> {
    /// Creates a handle to a new, empty set.
    pub fn new() -> Self {
        Self::from_set(NamedItemSet::new())
    }

    /// Wraps an existing set.
    pub fn from_set(set: NamedItemSet<T>) -> Self {
        SharedNamedItemSet {
            inner: Arc::new(RwLock::new(set)),
        }
    }

    /// Locks the set for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, NamedItemSet<T>> {
        self.inner.read()
    }

    /// Locks the set for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, NamedItemSet<T>> {
        self.inner.write()
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns `true` if an item with this name is stored.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains(name)
    }

    /// Returns a clone of the item stored under `name`.
    pub fn get_cloned(&self, name: &str) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().get(name).cloned()
    }

    /// Removes the item stored under `name`, returning whether one was removed.
    pub fn remove(&self, name: &str) -> bool {
        self.inner.write().remove(name)
    }

    /// Removes every item.
    pub fn clear(&self) {
        self.inner.write().clear()
    }
}

impl<T: Named> SharedNamedItemSet<T> {
    /// Adds `item` under its name; see [`NamedItemSet::add`].
    pub fn add(&self, item: T) -> Result<()> {
        self.inner.write().add(item)
    }
}

impl<T> Clone for SharedNamedItemSet<T> {
    fn clone(&self) -> Self {
        SharedNamedItemSet {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedNamedItemSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<NamedItemSet<T>> for SharedNamedItemSet<T> {
    fn from(set: NamedItemSet<T>) -> Self {
        Self::from_set(set)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedNamedItemSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedNamedItemSet")
            .field(&*self.inner.read())
            .finish()
    }
}
