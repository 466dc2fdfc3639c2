// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! GoodData report definitions and execution results.
//!
//! Pure, synchronous building blocks for the analytics client:
//!
//! - [`element`] — closed attribute/metric element descriptors.
//! - [`definition`] — grid report definition documents and their builder.
//! - [`execution`] — execution request/response wire types.
//! - [`assemble`] — merging column metadata with tabular values.
//!
//! Nothing in this crate performs I/O; the network protocol lives in
//! `gdc-client`.

pub mod assemble;
pub mod definition;
pub mod element;
pub mod error;
pub mod execution;

pub use assemble::{assemble, DataResult, Header};
pub use definition::{
    build_report_definition, ColumnMarker, Grid, GridAttribute, GridColumn, GridMetric,
    ReportDefinition, ReportDefinitionBuilder, METRIC_GROUP,
};
pub use element::{Element, RawElement};
pub use error::{ReportError, Result};
pub use execution::{
    ExecutionBody, ExecutionColumn, ExecutionRequest, ExecutionResponse, ExecutionResult,
    TabularDataResponse, TabularDataResult,
};
