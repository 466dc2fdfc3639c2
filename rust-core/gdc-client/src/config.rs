// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Client configuration.
//!
//! Defaults:
//! - base_url: `https://secure.gooddata.com`
//! - timeout_secs: 30
//! - user_agent: `gdc-client/<crate version>`
//!
//! [`ClientConfig::from_env`] overrides these from `GDC_BASE_URL`,
//! `GDC_TIMEOUT_SECS` and `GDC_USER_AGENT`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{GdcError, Result};

pub const ENV_BASE_URL: &str = "GDC_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "GDC_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "GDC_USER_AGENT";

pub const DEFAULT_BASE_URL: &str = "https://secure.gooddata.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a [`crate::GdcClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and optional port of the analytics service.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("gdc-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse and check the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GdcError::Config`] if the URL is unparsable, not http(s),
    /// or the timeout is zero.
    pub fn validate(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| GdcError::Config(format!("invalid base URL {:?}: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(GdcError::Config(format!(
                "unsupported URL scheme: {}",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 {
            return Err(GdcError::Config("timeout must be at least one second".to_string()));
        }
        Ok(url)
    }

    /// Build a configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup. Unset keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw.trim().parse().map_err(|e| {
                GdcError::Config(format!("{ENV_TIMEOUT_SECS}={raw:?} is not a number: {e}"))
            })?;
        }
        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = user_agent;
        }

        config.validate()?;
        Ok(config)
    }
}
