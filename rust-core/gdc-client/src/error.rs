// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Error types for the GoodData client.
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, GdcError>`. Every rejection by the remote service
//! carries the HTTP status and the raw response body exactly as received;
//! nothing is retried or reinterpreted locally.

use serde_json::Value;
use thiserror::Error;

use gdc_report::ReportError;

use crate::transport::TransportError;

/// Error type for GoodData client operations.
#[derive(Error, Debug)]
pub enum GdcError {
    /// Login was rejected.
    #[error("Authentication failed (HTTP {status})")]
    Authentication { status: u16, body: Value },

    /// The session check was rejected; the session is missing or expired.
    #[error("Not authenticated (HTTP {status})")]
    NotAuthenticated { status: u16, body: Value },

    /// The service refused the execution request. No poll was attempted.
    #[error("Execution rejected (HTTP {status})")]
    ExecutionSubmit { status: u16, body: Value },

    /// Fetching the tabular data result failed.
    #[error("Execution result fetch failed (HTTP {status})")]
    ExecutionPoll { status: u16, body: Value },

    /// The tabular data result was not ready when fetched.
    #[error("Execution result still pending (HTTP {status})")]
    ExecutionPending { status: u16, body: Value },

    /// The bootstrap resource could not be fetched or named no project.
    #[error("Project lookup failed (HTTP {status})")]
    Lookup { status: u16, body: Value },

    /// Logout was rejected. The local session flag is cleared regardless.
    #[error("Logout failed (HTTP {status})")]
    Logout { status: u16, body: Value },

    /// The request never produced an HTTP response.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// A 2xx response body did not have the expected shape.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GdcError {
    /// HTTP status of a service rejection, `None` for local failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            GdcError::Authentication { status, .. }
            | GdcError::NotAuthenticated { status, .. }
            | GdcError::ExecutionSubmit { status, .. }
            | GdcError::ExecutionPoll { status, .. }
            | GdcError::ExecutionPending { status, .. }
            | GdcError::Lookup { status, .. }
            | GdcError::Logout { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of a service rejection.
    pub fn body(&self) -> Option<&Value> {
        match self {
            GdcError::Authentication { body, .. }
            | GdcError::NotAuthenticated { body, .. }
            | GdcError::ExecutionSubmit { body, .. }
            | GdcError::ExecutionPoll { body, .. }
            | GdcError::ExecutionPending { body, .. }
            | GdcError::Lookup { body, .. }
            | GdcError::Logout { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Crate-level result alias using [`GdcError`].
pub type Result<T> = std::result::Result<T, GdcError>;
