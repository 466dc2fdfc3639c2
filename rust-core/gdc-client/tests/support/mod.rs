// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Shared helpers for client integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gdc_client::{
    ClientConfig, GdcClient, HttpMethod, HttpRequest, HttpResponse, Transport, TransportError,
};
use serde_json::{json, Value};
use tokio::sync::Notify;

/// Transport answering from a fixed script and recording every request.
///
/// Once the script is exhausted every request gets a 404.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: impl IntoIterator<Item = HttpResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| HttpResponse::new(404, "no scripted response")))
    }
}

/// Transport answering by method and path, any number of times.
#[derive(Default)]
pub struct RoutedTransport {
    routes: HashMap<(String, String), HttpResponse>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RoutedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, method: HttpMethod, path: &str, response: HttpResponse) -> Self {
        self.routes
            .insert((method.to_string(), path.to_string()), response);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RoutedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let key = (request.method.to_string(), request.path.clone());
        self.requests.lock().unwrap().push(request);
        Ok(self
            .routes
            .get(&key)
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(404, "no route")))
    }
}

/// Routed transport that holds one path's response until [`release`] is
/// called, so a request can be kept in flight while others run.
///
/// [`release`]: GatedTransport::release
pub struct GatedTransport {
    inner: RoutedTransport,
    gated: (String, String),
    gate: Notify,
}

impl GatedTransport {
    pub fn new(inner: RoutedTransport, method: HttpMethod, path: &str) -> Arc<Self> {
        Arc::new(Self {
            inner,
            gated: (method.to_string(), path.to_string()),
            gate: Notify::new(),
        })
    }

    /// Let the held request answer. A release before the request arrives
    /// is remembered.
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.requests()
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let key = (request.method.to_string(), request.path.clone());
        if key == self.gated {
            self.gate.notified().await;
        }
        self.inner.send(request).await
    }
}

/// Client over a scripted transport, plus the transport for inspection.
pub fn scripted_client(
    responses: impl IntoIterator<Item = HttpResponse>,
) -> (GdcClient, Arc<ScriptedTransport>) {
    init_tracing();
    let transport = ScriptedTransport::new(responses);
    let client = GdcClient::with_transport(ClientConfig::default(), transport.clone());
    (client, transport)
}

pub fn json_response(status: u16, body: Value) -> HttpResponse {
    HttpResponse::json_body(status, &body)
}

/// Submission response with one attribute and one metric column.
pub fn execution_response_mock() -> Value {
    json!({
        "executionResult": {
            "columns": [
                {
                    "attributeDisplayForm": {
                        "meta": {"identifier": "attrId", "uri": "attrUri", "title": "title"}
                    }
                },
                {
                    "metric": {
                        "meta": {"identifier": "metricId", "uri": "metricUri"},
                        "content": {"format": "#00"}
                    }
                }
            ],
            "tabularDataResult": "/gdc/internal/projects/myFakeProjectId/experimental/executions/23452345"
        }
    })
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
