//! Macros for initializing [`NamedItemSet`](crate::NamedItemSet)s.

/// Macro for building a [`NamedItemSet`](crate::NamedItemSet) from a list
/// of named items.
///
/// Expands to [`NamedItemSet::try_from_items`](crate::NamedItemSet::try_from_items),
/// so it evaluates to a `Result` that fails on the first duplicate name.
///
/// # Example
///
/// ```rust
/// use named_item_set::macros::collections::named_item_set;
/// use named_item_set::Named;
///
/// struct Color(&'static str);
///
/// impl Named for Color {
///     fn name(&self) -> &str {
///         self.0
///     }
/// }
///
/// let colors = named_item_set![Color("red"), Color("green")]?;
/// assert_eq!(colors.len(), 2);
///
/// assert!(named_item_set![Color("red"), Color("red")].is_err());
/// # Ok::<(), named_item_set::NamedItemSetError>(())
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! __named_item_set {
    () => {
        ::core::result::Result::<_, $crate::NamedItemSetError>::Ok($crate::NamedItemSet::new())
    };
    ($($item: expr),+ $(,)?) => {
        $crate::NamedItemSet::try_from_items([$($item,)+])
    };
}

#[doc(inline)]
pub use crate::__named_item_set as named_item_set;
