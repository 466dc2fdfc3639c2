// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Session gateway: login, session check and logout.
//!
//! Session continuity is carried by the transport's cookies. This module
//! only records whether the last exchange left the session authenticated,
//! and the login-state reference needed to end it.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::client::GdcClient;
use crate::endpoints;
use crate::error::{GdcError, Result};
use crate::transport::HttpRequest;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    post_user_login: LoginCredentials<'a>,
}

#[derive(Serialize)]
struct LoginCredentials<'a> {
    login: &'a str,
    password: &'a str,
    remember: u8,
}

impl std::fmt::Debug for LoginCredentials<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl GdcClient {
    /// Authenticate with username and password.
    ///
    /// Resolves with the service's response body unmodified (it carries the
    /// profile and login-state references).
    ///
    /// # Errors
    ///
    /// Returns [`GdcError::Authentication`] with the status and body on any
    /// non-2xx response, or [`GdcError::Serialization`] if a 2xx body is not
    /// JSON.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Value> {
        let payload = LoginRequest {
            post_user_login: LoginCredentials {
                login: username,
                password,
                remember: 1,
            },
        };
        let request = HttpRequest::post(endpoints::LOGIN, serde_json::to_value(&payload)?);

        let response = Self::expect_success(self.send(request).await?, |status, body| {
            GdcError::Authentication { status, body }
        })?;
        let body: Value = response.json()?;

        let login_state = body
            .pointer("/userLogin/state")
            .and_then(Value::as_str)
            .map(str::to_owned);
        self.session().mark_authenticated(login_state);

        info!("Logged in");
        Ok(body)
    }

    /// Ask the service's token resource whether the session is valid.
    ///
    /// Always performs the request. A rejection clears the local session
    /// flag; a success leaves it untouched, since only login sets it.
    ///
    /// # Errors
    ///
    /// Returns [`GdcError::NotAuthenticated`] carrying the rejection's status
    /// (normally 401) and body.
    #[instrument(skip(self))]
    pub async fn is_logged_in(&self) -> Result<Value> {
        let response = self.send(HttpRequest::get(endpoints::TOKEN)).await?;

        if !response.is_success() {
            self.session().clear();
        }
        let response = Self::expect_success(response, |status, body| {
            GdcError::NotAuthenticated { status, body }
        })?;
        Ok(response.json()?)
    }

    /// End the session recorded by [`GdcClient::login`].
    ///
    /// Without a known login-state reference this only clears the local
    /// flag. The flag is cleared whether or not the service accepts the
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`GdcError::Logout`] on a non-2xx response.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        let Some(login_state) = self.session().login_state() else {
            self.session().clear();
            return Ok(());
        };

        let outcome = self.send(HttpRequest::delete(login_state)).await;
        self.session().clear();

        match Self::expect_success(outcome?, |status, body| GdcError::Logout { status, body }) {
            Ok(_) => {
                info!("Logged out");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Logout rejected");
                Err(err)
            }
        }
    }
}
