//! Capability traits for items that carry a name.

use std::rc::Rc;
use std::sync::Arc;

/// An item identified by a string name.
///
/// [`NamedItemSet`](super::NamedItemSet) keys every stored item by the value
/// returned here. The name must not change while the item is stored, except
/// through [`NamedItemSet::rename`](super::NamedItemSet::rename).
///
/// ### Examples
/// ```rust
/// use named_item_set::Named;
///
/// struct Order {
///     name: String,
/// }
///
/// impl Named for Order {
///     fn name(&self) -> &str {
///         &self.name
///     }
/// }
/// ```
pub trait Named {
    /// Returns the item's name.
    fn name(&self) -> &str;
}

/// A [`Named`] item whose name can be changed.
pub trait Rename: Named {
    /// Replaces the item's name.
    fn set_name(&mut self, name: String);
}

impl<T: Named + ?Sized> Named for &T {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Named + ?Sized> Named for &mut T {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Named + ?Sized> Named for Box<T> {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Named + ?Sized> Named for Rc<T> {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Named + ?Sized> Named for Arc<T> {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Rename + ?Sized> Rename for &mut T {
    #[inline]
    fn set_name(&mut self, name: String) {
        (**self).set_name(name)
    }
}

impl<T: Rename + ?Sized> Rename for Box<T> {
    #[inline]
    fn set_name(&mut self, name: String) {
        (**self).set_name(name)
    }
}
