// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Current project and profile lookup from the account bootstrap resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::GdcClient;
use crate::endpoints;
use crate::error::{GdcError, Result};
use crate::transport::HttpRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapResponse {
    pub bootstrap_resource: BootstrapResource,
}

/// The parts of the bootstrap resource this client reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapResource {
    #[serde(default)]
    pub current: CurrentContext,
    #[serde(default)]
    pub account_setting: Option<LinkedResource>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentContext {
    #[serde(default)]
    pub project: Option<LinkedResource>,
}

/// Any resource exposing `links.self`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedResource {
    pub links: SelfLink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfLink {
    #[serde(rename = "self")]
    pub self_uri: String,
}

impl GdcClient {
    /// Fetch the bootstrap resource.
    ///
    /// # Errors
    ///
    /// Returns [`GdcError::Lookup`] on a non-2xx response.
    #[instrument(skip(self))]
    pub async fn bootstrap(&self) -> Result<BootstrapResource> {
        let (_, body) = self.fetch_bootstrap().await?;
        let parsed: BootstrapResponse = serde_json::from_value(body)?;
        Ok(parsed.bootstrap_resource)
    }

    /// Id of the user's current project: the last path segment of
    /// `bootstrapResource.current.project.links.self`.
    ///
    /// # Errors
    ///
    /// Returns [`GdcError::Lookup`] with the response status and body when
    /// the request is rejected or the bootstrap names no current project.
    #[instrument(skip(self))]
    pub async fn get_current_project_id(&self) -> Result<String> {
        let (status, body) = self.fetch_bootstrap().await?;
        let parsed: BootstrapResponse = serde_json::from_value(body.clone())?;

        let project_id = parsed
            .bootstrap_resource
            .current
            .project
            .as_ref()
            .and_then(|project| endpoints::last_segment(&project.links.self_uri))
            .map(str::to_owned);

        match project_id {
            Some(id) => {
                debug!(project_id = %id, "Resolved current project");
                Ok(id)
            }
            None => Err(GdcError::Lookup { status, body }),
        }
    }

    /// URI of the signed-in user's profile (`accountSetting.links.self`).
    #[instrument(skip(self))]
    pub async fn get_current_profile_uri(&self) -> Result<String> {
        let (status, body) = self.fetch_bootstrap().await?;
        let parsed: BootstrapResponse = serde_json::from_value(body.clone())?;

        parsed
            .bootstrap_resource
            .account_setting
            .map(|setting| setting.links.self_uri)
            .ok_or(GdcError::Lookup { status, body })
    }

    async fn fetch_bootstrap(&self) -> Result<(u16, Value)> {
        let response = self.send(HttpRequest::get(endpoints::BOOTSTRAP)).await?;
        let response = Self::expect_success(response, |status, body| GdcError::Lookup {
            status,
            body,
        })?;
        let body: Value = response.json()?;
        Ok((response.status, body))
    }
}
