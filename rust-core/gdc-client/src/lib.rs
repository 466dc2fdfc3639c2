// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! # GoodData Client
//!
//! Async client for the GoodData analytics API: authenticate, find the
//! current project, execute reports built from attribute/metric elements,
//! and get back headers zipped with raw values.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gdc_client::{ClientConfig, Element, GdcClient};
//!
//! #[tokio::main]
//! async fn main() -> gdc_client::Result<()> {
//!     let client = GdcClient::new(ClientConfig::new("https://secure.gooddata.com"))?;
//!     client.login("user@example.com", "secret").await?;
//!
//!     let project_id = client.get_current_project_id().await?;
//!     let result = client
//!         .execute(
//!             &project_id,
//!             &[
//!                 Element::attribute("/gdc/md/project_hash/obj/12"),
//!                 Element::metric("/gdc/md/project_hash/obj/345"),
//!             ],
//!         )
//!         .await?;
//!
//!     for (header, value) in result.headers.iter().zip(&result.raw_data) {
//!         println!("{}: {value}", header.id());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] — the client instance and shared session state.
//! - [`config`] — connection settings and environment loading.
//! - [`transport`] — the HTTP seam and its `reqwest` implementation.
//! - [`session`] — login, session check, logout.
//! - [`execution`] — submit → poll → assemble.
//! - [`project`] — bootstrap, current project and profile lookup.
//! - [`error`] — error kinds and the crate `Result` alias.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod execution;
pub mod project;
pub mod session;
pub mod transport;

pub use client::{GdcClient, SessionState};
pub use config::ClientConfig;
pub use error::{GdcError, Result};
pub use execution::ExecutionPhase;
pub use project::BootstrapResource;
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, Transport, TransportError,
};

pub use gdc_report::{
    build_report_definition, DataResult, Element, ExecutionRequest, Header, ReportDefinition,
    ReportDefinitionBuilder,
};
