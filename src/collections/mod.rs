//! Collection utilities and data structures

pub mod error;
/// Capability traits required of stored items.
pub mod named;
/// A set of items keyed by their unique names.
pub mod named_item_set;

#[cfg(feature = "sync")]
pub mod shared;

pub use error::{NamedItemSetError, Result};
pub use named::{Named, Rename};
pub use named_item_set::{IntoIter, Iter, NamedItemSet};

#[cfg(feature = "sync")]
pub use shared::SharedNamedItemSet;
