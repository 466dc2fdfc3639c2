// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Execution wire types.
//!
//! Submission sends an [`ExecutionRequest`]; the service answers with an
//! [`ExecutionResponse`] carrying column metadata and a reference to the
//! tabular data, which is then fetched as a [`TabularDataResponse`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::definition::{build_report_definition, ReportDefinition};
use crate::element::Element;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Body POSTed to a project's executions collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub execution: ExecutionBody,
}

/// What to execute: a full report definition, or a bare list of column
/// identifiers resolved by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExecutionBody {
    ReportDefinition(crate::definition::ReportDefinitionBody),
    Columns(Vec<String>),
}

impl ExecutionRequest {
    /// Build a report definition from `elements` and wrap it for submission.
    pub fn from_elements(elements: &[Element]) -> Self {
        Self::from_definition(build_report_definition(elements))
    }

    pub fn from_definition(definition: ReportDefinition) -> Self {
        Self {
            execution: ExecutionBody::ReportDefinition(definition.report_definition),
        }
    }

    /// Ad-hoc execution of column identifiers, no definition built.
    pub fn from_columns<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            execution: ExecutionBody::Columns(identifiers.into_iter().map(Into::into).collect()),
        }
    }
}

// ---------------------------------------------------------------------------
// Submission response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResponse {
    pub execution_result: ExecutionResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Column metadata in grid column order.
    pub columns: Vec<ExecutionColumn>,
    /// Reference to the tabular data resource. Fetched once.
    pub tabular_data_result: String,
}

/// Metadata for one result column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExecutionColumn {
    AttributeDisplayForm(AttributeDisplayFormColumn),
    Metric(MetricColumn),
}

impl ExecutionColumn {
    pub fn identifier(&self) -> &str {
        match self {
            ExecutionColumn::AttributeDisplayForm(c) => &c.meta.identifier,
            ExecutionColumn::Metric(c) => &c.meta.identifier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDisplayFormColumn {
    pub meta: ObjectMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricColumn {
    pub meta: ObjectMeta,
    #[serde(default)]
    pub content: MetricContent,
}

/// Common metadata object header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub identifier: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

// ---------------------------------------------------------------------------
// Poll response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabularDataResponse {
    pub tabular_data_result: TabularDataResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularDataResult {
    /// Raw cell values, positionally aligned with the submitted columns.
    pub values: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_columns_request_shape() {
        let request = ExecutionRequest::from_columns(["attrId", "metricId"]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"execution": {"columns": ["attrId", "metricId"]}})
        );
    }

    #[test]
    fn test_definition_request_shape() {
        let request = ExecutionRequest::from_elements(&[
            Element::attribute("/a1"),
            Element::metric("/m1"),
        ]);
        let json = serde_json::to_value(&request).unwrap();
        let grid = &json["execution"]["reportDefinition"]["content"]["grid"];
        assert_eq!(grid["columns"][0]["attribute"]["uri"], "/a1");
        assert_eq!(grid["columns"][1], "metricGroup");
    }

    #[test]
    fn test_parse_execution_response() {
        let body = json!({
            "executionResult": {
                "columns": [
                    {"attributeDisplayForm": {"meta": {
                        "identifier": "attrId", "uri": "attrUri", "title": "title"
                    }}},
                    {"metric": {
                        "meta": {"identifier": "metricId", "uri": "metricUri"},
                        "content": {"format": "#00"}
                    }}
                ],
                "tabularDataResult": "/gdc/internal/projects/p/experimental/executions/1"
            }
        });
        let parsed: ExecutionResponse = serde_json::from_value(body).unwrap();
        let result = parsed.execution_result;

        assert_eq!(result.columns.len(), 2);
        assert_eq!(result.columns[0].identifier(), "attrId");
        assert_eq!(result.columns[1].identifier(), "metricId");
        assert!(result.tabular_data_result.ends_with("/executions/1"));
        match &result.columns[1] {
            ExecutionColumn::Metric(metric) => {
                assert_eq!(metric.content.format.as_deref(), Some("#00"))
            }
            other => panic!("expected metric column, got {other:?}"),
        }
    }

    #[test]
    fn test_metric_without_content() {
        let column: ExecutionColumn = serde_json::from_value(json!({
            "metric": {"meta": {"identifier": "m", "uri": "/m"}}
        }))
        .unwrap();
        assert_eq!(column.identifier(), "m");
    }

    #[test]
    fn test_parse_tabular_data() {
        let parsed: TabularDataResponse =
            serde_json::from_value(json!({"tabularDataResult": {"values": ["a", 1]}})).unwrap();
        assert_eq!(parsed.tabular_data_result.values, vec![json!("a"), json!(1)]);
    }
}
