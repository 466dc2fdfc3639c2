// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Report construction error types.

use thiserror::Error;

/// Errors raised while turning caller input into a report definition.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A loosely typed element carried a `type` tag other than
    /// `attribute` or `metric`.
    #[error("unknown element type: {0}")]
    UnknownElementType(String),

    /// An element at `position` had an empty URI.
    #[error("element at position {position} has an empty uri")]
    EmptyUri {
        /// Zero-based index of the offending element in the input list.
        position: usize,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Crate-level result alias using [`ReportError`].
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_display() {
        let err = ReportError::UnknownElementType("fact".to_string());
        assert_eq!(err.to_string(), "unknown element type: fact");
    }

    #[test]
    fn test_empty_uri_display_names_position() {
        let err = ReportError::EmptyUri { position: 3 };
        assert!(err.to_string().contains("position 3"));
    }
}
