// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Client instance and shared session state.
//!
//! [`GdcClient`] is the entry point for every operation. It owns the
//! configuration, the transport and the session flag; domain methods
//! (session, execution, project lookup) are `impl GdcClient` blocks in their
//! own modules. Clones share the transport and the session.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{GdcError, Result};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Transport};

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Authentication status shared by all clones of a client.
///
/// Written only by the session gateway (login, logout, a rejected session check);
/// everything else reads it.
#[derive(Debug, Default)]
pub struct SessionState {
    authenticated: AtomicBool,
    /// Login-state reference returned by login, used for logout.
    login_state: RwLock<Option<String>>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Acquire)
    }

    pub fn login_state(&self) -> Option<String> {
        match self.login_state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub(crate) fn mark_authenticated(&self, login_state: Option<String>) {
        match self.login_state.write() {
            Ok(mut guard) => *guard = login_state,
            Err(poisoned) => *poisoned.into_inner() = login_state,
        }
        self.authenticated.store(true, Ordering::Release);
    }

    pub(crate) fn clear(&self) {
        self.authenticated.store(false, Ordering::Release);
        match self.login_state.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

// ---------------------------------------------------------------------------
// GdcClient
// ---------------------------------------------------------------------------

/// Client for one analytics service deployment.
///
/// # Examples
///
/// ```rust,no_run
/// use gdc_client::{ClientConfig, GdcClient};
///
/// # #[tokio::main]
/// # async fn main() -> gdc_client::Result<()> {
/// let client = GdcClient::new(ClientConfig::from_env()?)?;
/// client.login("user@example.com", "secret").await?;
/// let project_id = client.get_current_project_id().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GdcClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    session: Arc<SessionState>,
}

impl GdcClient {
    /// Create a client using the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`GdcError::Config`] if the configuration does not validate.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            session: Arc::new(SessionState::default()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Local view of the session flag. No network call; use
    /// [`GdcClient::is_logged_in`] to ask the service.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // -- Internal HTTP helpers ----------------------------------------------

    pub(crate) async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(method = %request.method, path = %request.path, "Sending request");
        let response = self.transport.send(request).await?;
        debug!(status = response.status, "Received response");
        Ok(response)
    }

    /// Pass 2xx responses through; turn anything else into the error built
    /// by `reject` from the status and raw body.
    pub(crate) fn expect_success<F>(response: HttpResponse, reject: F) -> Result<HttpResponse>
    where
        F: FnOnce(u16, Value) -> GdcError,
    {
        if response.is_success() {
            Ok(response)
        } else {
            warn!(status = response.status, "Request rejected by service");
            Err(reject(response.status, response.body_value()))
        }
    }
}

impl fmt::Debug for GdcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GdcClient")
            .field("base_url", &self.config.base_url)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
