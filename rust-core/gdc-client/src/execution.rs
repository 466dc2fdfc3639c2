// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Execution orchestration: submit, poll once, assemble.
//!
//! ```text
//! Submitting ──2xx──▶ Polling ──2xx──▶ Done
//!     │                  │
//!     └──non-2xx──▶ Failed ◀──non-2xx / pending
//! ```
//!
//! Each call runs the three steps strictly in order inside its own future.
//! There is no background task and no retry. A 202/204 that already carries
//! the data resolves; one without it is reported as
//! [`GdcError::ExecutionPending`] and the caller decides what to do.

use std::fmt;

use serde_json::Value;
use tracing::{debug, info, instrument};

use gdc_report::{
    assemble, DataResult, Element, ExecutionRequest, ExecutionResponse, ExecutionResult,
    ReportDefinition, TabularDataResponse,
};

use crate::client::GdcClient;
use crate::endpoints;
use crate::error::{GdcError, Result};
use crate::transport::HttpRequest;

/// Poll statuses meaning "accepted, data not ready yet".
const PENDING_STATUSES: [u16; 2] = [202, 204];

/// Stage of one execution, recorded in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionPhase {
    Submitting,
    Polling,
    Done,
    Failed,
}

impl fmt::Display for ExecutionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionPhase::Submitting => "submitting",
            ExecutionPhase::Polling => "polling",
            ExecutionPhase::Done => "done",
            ExecutionPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

impl GdcClient {
    /// Build a report definition from `elements`, execute it in
    /// `project_id`, and assemble the result.
    ///
    /// # Errors
    ///
    /// [`GdcError::ExecutionSubmit`] if the service rejects the definition
    /// (no poll is made), [`GdcError::ExecutionPoll`] or
    /// [`GdcError::ExecutionPending`] if the result fetch fails.
    #[instrument(skip(self, elements), fields(element_count = elements.len()))]
    pub async fn execute(&self, project_id: &str, elements: &[Element]) -> Result<DataResult> {
        self.execute_request(project_id, &ExecutionRequest::from_elements(elements))
            .await
    }

    /// Execute a prepared report definition.
    #[instrument(skip(self, definition), fields(title = definition.title()))]
    pub async fn execute_definition(
        &self,
        project_id: &str,
        definition: ReportDefinition,
    ) -> Result<DataResult> {
        self.execute_request(project_id, &ExecutionRequest::from_definition(definition))
            .await
    }

    /// Execute an ad-hoc list of column identifiers without building a
    /// report definition.
    #[instrument(skip(self, identifiers), fields(columns = identifiers.len()))]
    pub async fn execute_columns<S: AsRef<str>>(
        &self,
        project_id: &str,
        identifiers: &[S],
    ) -> Result<DataResult> {
        let request = ExecutionRequest::from_columns(identifiers.iter().map(|s| s.as_ref()));
        self.execute_request(project_id, &request).await
    }

    /// Run the full submit → poll → assemble pipeline for `request`.
    pub async fn execute_request(
        &self,
        project_id: &str,
        request: &ExecutionRequest,
    ) -> Result<DataResult> {
        let ExecutionResult {
            columns,
            tabular_data_result,
        } = self.submit_execution(project_id, request).await?;

        let values = self.fetch_tabular_data(&tabular_data_result).await?;

        let result = assemble(columns, values);
        info!(
            project_id,
            phase = %ExecutionPhase::Done,
            columns = result.headers.len(),
            "Execution complete"
        );
        Ok(result)
    }

    /// Submit an execution and return the column metadata plus the
    /// reference to poll.
    ///
    /// # Errors
    ///
    /// Returns [`GdcError::ExecutionSubmit`] on a non-2xx response.
    pub async fn submit_execution(
        &self,
        project_id: &str,
        request: &ExecutionRequest,
    ) -> Result<ExecutionResult> {
        debug!(project_id, phase = %ExecutionPhase::Submitting, "Submitting execution");

        let http_request =
            HttpRequest::post(endpoints::executions(project_id), serde_json::to_value(request)?);
        let response = self.send(http_request).await?;
        let response = Self::expect_success(response, |status, body| {
            debug!(phase = %ExecutionPhase::Failed, status, "Submission rejected");
            GdcError::ExecutionSubmit { status, body }
        })?;

        let parsed: ExecutionResponse = response.json()?;
        Ok(parsed.execution_result)
    }

    /// Fetch the tabular data behind `reference` exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`GdcError::ExecutionPending`] for a 202/204 whose body holds
    /// no tabular data, and [`GdcError::ExecutionPoll`] for any non-2xx
    /// response.
    pub async fn fetch_tabular_data(&self, reference: &str) -> Result<Vec<Value>> {
        debug!(reference, phase = %ExecutionPhase::Polling, "Fetching tabular data");

        let response = self.send(HttpRequest::get(reference)).await?;

        if PENDING_STATUSES.contains(&response.status) {
            if let Ok(parsed) = response.json::<TabularDataResponse>() {
                return Ok(parsed.tabular_data_result.values);
            }
            debug!(phase = %ExecutionPhase::Failed, status = response.status, "Result pending");
            return Err(GdcError::ExecutionPending {
                status: response.status,
                body: response.body_value(),
            });
        }

        let response = Self::expect_success(response, |status, body| {
            debug!(phase = %ExecutionPhase::Failed, status, "Result fetch rejected");
            GdcError::ExecutionPoll { status, body }
        })?;

        let parsed: TabularDataResponse = response.json()?;
        Ok(parsed.tabular_data_result.values)
    }
}
