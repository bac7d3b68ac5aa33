// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Build errors

use thiserror::Error;

/// Errors that abort a geometry build.
///
/// Geometry accumulated before the error must be discarded; a builder
/// is not designed to resume after one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// `pop()` was called without a matching `push()`.
    #[error(
        "pop() called but nothing was push()ed (stack depth {depth}); check that push/pop calls are not mismatched"
    )]
    UnbalancedPop { depth: usize },

    /// A replayed script command could not be applied.
    #[error("script command #{index}: {message}")]
    Script { index: usize, message: String },
}

impl BuildError {
    /// Creates a script error for the command at `index`.
    pub fn script(index: usize, message: impl Into<String>) -> Self {
        Self::Script {
            index,
            message: message.into(),
        }
    }
}

/// Result alias used by every builder operation.
pub type Result<T> = std::result::Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbalanced_pop_message_mentions_push() {
        let err = BuildError::UnbalancedPop { depth: 1 };
        assert!(err.to_string().contains("push()"));
    }

    #[test]
    fn test_script_error_carries_index() {
        let err = BuildError::script(3, "bad matrix");
        assert_eq!(err.to_string(), "script command #3: bad matrix");
    }
}
