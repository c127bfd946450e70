// -----------------------------------------------------------------------------
// src/collections/named_item_set.rs
// -----------------------------------------------------------------------------

use super::error::{NamedItemSetError, Result};
use super::named::{Named, Rename};
use hashbrown::HashMap;
use std::fmt;
use std::iter::FusedIterator;

/// A stored item together with the name it was indexed under.
#[derive(Clone)]
struct Slot<T> {
    name: String,
    item: T,
}

/// A set of items keyed by their unique names.
///
/// Every item exposes its name through [`Named`]. The set guarantees that no
/// two stored items share a name (exact, case-sensitive comparison), and
/// offers O(1) average lookup, membership and removal by name.
///
/// ### Storage
/// Items live in a dense `Vec` and a hashbrown `HashMap` maps each name to
/// its position. Iteration walks the `Vec`, so a set that has only seen
/// insertions yields its items in insertion order. Removal swaps the last
/// item into the vacated position, so order is not preserved across removals.
///
/// ### Identity
/// Membership and removal by item are keyed by [`Named::name`] alone. Two
/// distinct values that share a name are indistinguishable to
/// [`contains_item`](Self::contains_item) and
/// [`remove_item`](Self::remove_item).
///
/// ### Concurrency
/// The set has no internal locking. Wrap it in a lock (or use
/// `SharedNamedItemSet` with the `sync` feature) for shared mutable access.
///
/// ### Examples
/// ```rust
/// use named_item_set::{Named, NamedItemSet};
///
/// #[derive(Debug)]
/// struct Order {
///     name: String,
/// }
///
/// impl Named for Order {
///     fn name(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let mut orders = NamedItemSet::new();
/// orders.add(Order { name: "hello".into() })?;
/// assert!(orders.contains("hello"));
/// assert!(orders.add(Order { name: "hello".into() }).is_err());
/// # Ok::<(), named_item_set::NamedItemSetError>(())
/// ```
#[derive(Clone)]
pub struct NamedItemSet<T> {
    slots: Vec<Slot<T>>,
    index: HashMap<String, usize>,
}

// Core API
impl<T> NamedItemSet<T> {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        NamedItemSet {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` items.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        NamedItemSet {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of items in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Checks if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Always `false`: the set is mutable.
    #[inline]
    pub const fn is_read_only(&self) -> bool {
        false
    }

    /// Reserves room for at least `additional` more items.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
        self.index.reserve(additional);
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        log::trace!("clearing {} named items", self.slots.len());
        self.slots.clear();
        self.index.clear();
    }

    /// Returns `true` if an item with this name is stored.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the item stored under `name`, if any.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index
            .get(name)
            .and_then(|&position| self.slots.get(position))
            .map(|slot| &slot.item)
    }

    /// Returns a mutable reference to the item stored under `name`.
    ///
    /// Changing the item's name through this reference is a logic error: the
    /// set keeps indexing it under the old name. Use
    /// [`rename`](Self::rename) instead.
    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        match self.index.get(name) {
            Some(&position) => self.slots.get_mut(position).map(|slot| &mut slot.item),
            None => None,
        }
    }

    /// Looks up `name`, returning whether it was found alongside the item.
    ///
    /// The flag always equals `item.is_some()`.
    #[inline]
    pub fn try_get(&self, name: &str) -> (bool, Option<&T>) {
        let item = self.get(name);
        (item.is_some(), item)
    }

    /// Removes the item stored under `name`, returning whether one was removed.
    #[inline]
    pub fn remove(&mut self, name: &str) -> bool {
        self.take(name).is_some()
    }

    /// Removes and returns the item stored under `name`.
    pub fn take(&mut self, name: &str) -> Option<T> {
        let position = self.index.remove(name)?;
        let removed = self.slots.swap_remove(position);
        // The former last slot now sits at `position`.
        if let Some(moved) = self.slots.get(position) {
            if let Some(entry) = self.index.get_mut(moved.name.as_str()) {
                *entry = position;
            }
        }
        Some(removed.item)
    }

    /// Returns an iterator over the names of the stored items.
    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    /// Returns an iterator over references to the stored items.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots.iter(),
        }
    }

    /// Clones every item into `dest`, starting at `offset`, in iteration order.
    ///
    /// Fails with [`NamedItemSetError::InvalidArgument`] when `offset` is past
    /// the end of `dest` or fewer than [`len`](Self::len) slots remain after
    /// it. `dest` is left untouched on failure.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        if offset > dest.len() {
            return Err(NamedItemSetError::InvalidArgument {
                reason: format!(
                    "offset {offset} is past the end of a buffer of length {}",
                    dest.len()
                ),
            });
        }
        let room = dest.len() - offset;
        if room < self.len() {
            return Err(NamedItemSetError::InvalidArgument {
                reason: format!(
                    "{} items do not fit in the {room} slots after offset {offset}",
                    self.len()
                ),
            });
        }
        for (target, slot) in dest[offset..].iter_mut().zip(&self.slots) {
            target.clone_from(&slot.item);
        }
        Ok(())
    }
}

impl<T: Named> NamedItemSet<T> {
    /// Builds a set from `items`, inserting them in order.
    ///
    /// Fails with [`NamedItemSetError::DuplicateKey`] on the first item whose
    /// name was already seen; the partially built set is dropped.
    pub fn try_from_items<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();
        let mut set = Self::with_capacity(items.size_hint().0);
        set.try_extend(items)?;
        Ok(set)
    }

    /// Adds `item` under its name.
    ///
    /// Fails with [`NamedItemSetError::DuplicateKey`] if the name is taken,
    /// leaving the set unchanged.
    pub fn add(&mut self, item: T) -> Result<()> {
        let name = item.name();
        if self.index.contains_key(name) {
            log::debug!("rejecting item with duplicate name '{name}'");
            return Err(NamedItemSetError::duplicate(name));
        }
        let name = name.to_owned();
        self.index.insert(name.clone(), self.slots.len());
        self.slots.push(Slot { name, item });
        Ok(())
    }

    /// Adds every item in turn, stopping at the first duplicate name.
    ///
    /// Items added before the failure stay in the set.
    pub fn try_extend<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.add(item)?;
        }
        Ok(())
    }

    /// Returns `true` if an item with the same name as `item` is stored.
    #[inline]
    pub fn contains_item(&self, item: &T) -> bool {
        self.contains(item.name())
    }

    /// Removes the stored item that has the same name as `item`.
    #[inline]
    pub fn remove_item(&mut self, item: &T) -> bool {
        self.remove(item.name())
    }
}

impl<T: Rename> NamedItemSet<T> {
    /// Renames the item stored under `from` and re-indexes it under `to`.
    ///
    /// Returns `Ok(false)` if nothing is stored under `from`. Fails with
    /// [`NamedItemSetError::DuplicateKey`] if a different item already uses
    /// `to`, leaving the set unchanged.
    pub fn rename(&mut self, from: &str, to: impl Into<String>) -> Result<bool> {
        let to = to.into();
        let Some(&position) = self.index.get(from) else {
            return Ok(false);
        };
        if from == to {
            return Ok(true);
        }
        if self.index.contains_key(to.as_str()) {
            log::debug!("cannot rename '{from}': '{to}' is already taken");
            return Err(NamedItemSetError::duplicate(&to));
        }
        self.index.remove(from);
        self.index.insert(to.clone(), position);
        if let Some(slot) = self.slots.get_mut(position) {
            log::trace!("renaming item '{}' to '{to}'", slot.name);
            slot.item.set_name(to.clone());
            slot.name = to;
        }
        Ok(true)
    }
}

impl<T> Default for NamedItemSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for NamedItemSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// Set equality: same names, equal items, order ignored.
impl<T: PartialEq> PartialEq for NamedItemSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.slots.iter().all(|slot| {
                other
                    .index
                    .get(slot.name.as_str())
                    .and_then(|&position| other.slots.get(position))
                    .is_some_and(|theirs| theirs.item == slot.item)
            })
    }
}

impl<T: Eq> Eq for NamedItemSet<T> {}

// Conversion Traits
impl<T: Named> TryFrom<Vec<T>> for NamedItemSet<T> {
    type Error = NamedItemSetError;

    #[inline]
    fn try_from(items: Vec<T>) -> Result<Self> {
        Self::try_from_items(items)
    }
}

impl<T> From<NamedItemSet<T>> for Vec<T> {
    #[inline]
    fn from(set: NamedItemSet<T>) -> Self {
        set.slots.into_iter().map(|slot| slot.item).collect()
    }
}

/// Borrowing iterator over a [`NamedItemSet`].
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Slot<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| &slot.item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|slot| &slot.item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`NamedItemSet`].
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<Slot<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|slot| slot.item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(|slot| slot.item)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for NamedItemSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.slots.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a NamedItemSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Serde Support
#[cfg(feature = "serde")]
mod serde_support {
    use super::{Named, NamedItemSet};
    use serde::de::{self, Deserializer, SeqAccess, Visitor};
    use serde::ser::{SerializeSeq, Serializer};
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::marker::PhantomData;

    // Caps the preallocation driven by an untrusted length hint.
    const MAX_PREALLOCATED: usize = 4096;

    impl<T: Serialize> Serialize for NamedItemSet<T> {
        fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
            let mut seq = ser.serialize_seq(Some(self.len()))?;
            for item in self {
                seq.serialize_element(item)?;
            }
            seq.end()
        }
    }

    impl<'de, T: Deserialize<'de> + Named> Deserialize<'de> for NamedItemSet<T> {
        fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
            struct V<T>(PhantomData<T>);
            impl<'de, T: Deserialize<'de> + Named> Visitor<'de> for V<T> {
                type Value = NamedItemSet<T>;
                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a sequence of uniquely named items")
                }

                #[inline]
                fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED);
                    let mut set = NamedItemSet::with_capacity(capacity);
                    while let Some(item) = seq.next_element()? {
                        set.add(item).map_err(de::Error::custom)?;
                    }
                    Ok(set)
                }
            }

            de.deserialize_seq(V(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag(String);

    impl Named for Tag {
        fn name(&self) -> &str {
            &self.0
        }
    }

    impl Rename for Tag {
        fn set_name(&mut self, name: String) {
            self.0 = name;
        }
    }

    fn tags(names: &[&str]) -> NamedItemSet<Tag> {
        NamedItemSet::try_from_items(names.iter().map(|n| Tag((*n).to_owned())))
            .expect("test data")
    }

    fn assert_index_consistent(set: &NamedItemSet<Tag>) {
        assert_eq!(set.index.len(), set.slots.len());
        for (position, slot) in set.slots.iter().enumerate() {
            assert_eq!(slot.name, slot.item.0);
            assert_eq!(set.index.get(slot.name.as_str()), Some(&position));
        }
    }

    #[test]
    fn test_take_reindexes_moved_slot() {
        let mut set = tags(&["a", "b", "c", "d"]);
        assert_eq!(set.take("b"), Some(Tag("b".into())));
        assert_index_consistent(&set);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["a", "d", "c"]);
        assert_eq!(set.get("d"), Some(&Tag("d".into())));
    }

    #[test]
    fn test_take_last_slot() {
        let mut set = tags(&["a", "b"]);
        assert_eq!(set.take("b"), Some(Tag("b".into())));
        assert_index_consistent(&set);
        assert_eq!(set.take("a"), Some(Tag("a".into())));
        assert!(set.is_empty());
        assert!(set.index.is_empty());
    }

    #[test]
    fn test_failed_add_leaves_index_untouched() {
        let mut set = tags(&["a", "b"]);
        let err = set.add(Tag("a".into())).unwrap_err();
        assert!(err.is_duplicate_key());
        assert_index_consistent(&set);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_rename_updates_slot_and_index() {
        let mut set = tags(&["a", "b"]);
        assert_eq!(set.rename("a", "z"), Ok(true));
        assert_index_consistent(&set);
        assert!(!set.contains("a"));
        assert_eq!(set.get("z"), Some(&Tag("z".into())));
    }

    #[test]
    fn test_rename_collision_is_rejected() {
        let mut set = tags(&["a", "b"]);
        let err = set.rename("a", "b").unwrap_err();
        assert_eq!(err, NamedItemSetError::duplicate("b"));
        assert_index_consistent(&set);
        assert_eq!(set.get("a"), Some(&Tag("a".into())));
    }

    #[test]
    fn test_rename_missing_and_same_name() {
        let mut set = tags(&["a"]);
        assert_eq!(set.rename("missing", "x"), Ok(false));
        assert_eq!(set.rename("a", "a"), Ok(true));
        assert_index_consistent(&set);
    }

    #[test]
    fn test_equality_ignores_order() {
        let left = tags(&["a", "b", "c"]);
        let right = tags(&["c", "a", "b"]);
        assert_eq!(left, right);
        assert_ne!(left, tags(&["a", "b"]));
        assert_ne!(left, tags(&["a", "b", "x"]));
    }
}
