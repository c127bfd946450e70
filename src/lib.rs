//! # Named Item Set
//!
//! A collection of items that each carry a unique string name.
//!
//! [`NamedItemSet`] stores any type implementing [`Named`] and keeps names
//! unique, giving O(1) average lookup, membership and removal by name while
//! behaving like an ordinary iterable collection.
//!
//! ## Features
//!
//! - `serde` - `Serialize`/`Deserialize` as a sequence of items (default)
//! - `macros` - the `named_item_set!` construction macro (default)
//! - `sync` - `SharedNamedItemSet`, a `parking_lot` lock-guarded shared handle
//! - `full` - everything above
//!
//! ## Example
//!
//! ```rust
//! use named_item_set::{Named, NamedItemSet, NamedItemSetError};
//!
//! struct Order {
//!     name: String,
//!     quantity: u32,
//! }
//!
//! impl Named for Order {
//!     fn name(&self) -> &str {
//!         &self.name
//!     }
//! }
//!
//! let mut orders = NamedItemSet::try_from_items([
//!     Order { name: "hello".into(), quantity: 1 },
//!     Order { name: "world".into(), quantity: 2 },
//! ])?;
//!
//! assert_eq!(orders.get("world").map(|o| o.quantity), Some(2));
//! assert!(orders.get("test").is_none());
//!
//! let duplicate = orders.add(Order { name: "hello".into(), quantity: 3 });
//! assert!(matches!(duplicate, Err(NamedItemSetError::DuplicateKey { .. })));
//!
//! assert!(orders.remove("world"));
//! assert!(!orders.remove("world"));
//! assert_eq!(orders.len(), 1);
//! # Ok::<(), NamedItemSetError>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod collections;

#[cfg(feature = "macros")]
pub mod macros;

// Re-export commonly used types from collections
pub use collections::{
    named::{Named, Rename},
    named_item_set::NamedItemSet,
    NamedItemSetError, Result,
};

#[cfg(feature = "sync")]
pub use collections::shared::SharedNamedItemSet;
