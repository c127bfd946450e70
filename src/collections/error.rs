//! Error types for named item sets.

use thiserror::Error;

/// Result type alias for named item set operations
pub type Result<T> = std::result::Result<T, NamedItemSetError>;

/// Errors returned by [`NamedItemSet`](super::NamedItemSet) operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamedItemSetError {
    /// An item with the same name is already stored
    #[error("An item named '{name}' is already present in the set")]
    DuplicateKey {
        /// The name that collided
        name: String,
    },

    /// An argument was outside the range the operation accepts
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected
        reason: String,
    },
}

impl NamedItemSetError {
    pub(crate) fn duplicate(name: &str) -> Self {
        NamedItemSetError::DuplicateKey {
            name: name.to_owned(),
        }
    }

    /// Returns `true` if this error reports a name collision.
    #[inline]
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, NamedItemSetError::DuplicateKey { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duplicate_key_message() {
        let err = NamedItemSetError::duplicate("hello");
        assert_eq!(
            err.to_string(),
            "An item named 'hello' is already present in the set"
        );
        assert!(err.is_duplicate_key());
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = NamedItemSetError::InvalidArgument {
            reason: "offset 4 is past the end of a buffer of length 3".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid argument: offset 4 is past the end of a buffer of length 3"
        );
        assert!(!err.is_duplicate_key());
    }
}
