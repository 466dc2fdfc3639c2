// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Result assembly: zip submission-time column metadata with poll-time values.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::execution::ExecutionColumn;

/// Caller-facing description of one result column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Header {
    Attribute {
        id: String,
        uri: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Metric {
        id: String,
        uri: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },
}

impl Header {
    pub fn id(&self) -> &str {
        match self {
            Header::Attribute { id, .. } | Header::Metric { id, .. } => id,
        }
    }

    pub fn uri(&self) -> &str {
        match self {
            Header::Attribute { uri, .. } | Header::Metric { uri, .. } => uri,
        }
    }
}

impl From<ExecutionColumn> for Header {
    fn from(column: ExecutionColumn) -> Self {
        match column {
            ExecutionColumn::AttributeDisplayForm(c) => Header::Attribute {
                id: c.meta.identifier,
                uri: c.meta.uri,
                title: c.meta.title,
            },
            ExecutionColumn::Metric(c) => Header::Metric {
                id: c.meta.identifier,
                uri: c.meta.uri,
                format: c.content.format,
            },
        }
    }
}

/// Assembled execution output. `headers[i]` describes `raw_data[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResult {
    pub headers: Vec<Header>,
    pub raw_data: Vec<Value>,
}

/// Map each column to a [`Header`] and attach `values` unchanged.
///
/// Lengths are not reconciled: a mismatch is logged and passed through.
pub fn assemble(columns: Vec<ExecutionColumn>, values: Vec<Value>) -> DataResult {
    if columns.len() != values.len() {
        warn!(
            headers = columns.len(),
            values = values.len(),
            "Column metadata and value count differ"
        );
    }

    DataResult {
        headers: columns.into_iter().map(Header::from).collect(),
        raw_data: values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::{AttributeDisplayFormColumn, MetricColumn, MetricContent, ObjectMeta};
    use serde_json::json;

    fn attr(id: &str) -> ExecutionColumn {
        ExecutionColumn::AttributeDisplayForm(AttributeDisplayFormColumn {
            meta: ObjectMeta {
                identifier: id.to_string(),
                uri: format!("/uri/{id}"),
                title: Some("title".to_string()),
            },
        })
    }

    fn metric(id: &str) -> ExecutionColumn {
        ExecutionColumn::Metric(MetricColumn {
            meta: ObjectMeta {
                identifier: id.to_string(),
                uri: format!("/uri/{id}"),
                title: None,
            },
            content: MetricContent {
                format: Some("#00".to_string()),
            },
        })
    }

    #[test]
    fn test_headers_follow_column_order() {
        let result = assemble(vec![attr("attrId"), metric("metricId")], vec![json!("a"), json!(1)]);

        assert_eq!(result.headers[0].id(), "attrId");
        assert_eq!(result.headers[1].id(), "metricId");
        assert_eq!(result.raw_data, vec![json!("a"), json!(1)]);
    }

    #[test]
    fn test_header_metadata() {
        let result = assemble(vec![attr("a"), metric("m")], vec![]);
        assert_eq!(
            result.headers[0],
            Header::Attribute {
                id: "a".to_string(),
                uri: "/uri/a".to_string(),
                title: Some("title".to_string()),
            }
        );
        assert_eq!(
            result.headers[1],
            Header::Metric {
                id: "m".to_string(),
                uri: "/uri/m".to_string(),
                format: Some("#00".to_string()),
            }
        );
    }

    #[test]
    fn test_mismatch_passes_through() {
        let result = assemble(vec![attr("a")], vec![json!(1), json!(2), json!(3)]);
        assert_eq!(result.headers.len(), 1);
        assert_eq!(result.raw_data.len(), 3);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(assemble(vec![metric("m")], vec![json!(4)])).unwrap();
        assert_eq!(json["headers"][0]["id"], "m");
        assert_eq!(json["headers"][0]["format"], "#00");
        assert_eq!(json["rawData"][0], 4);
    }
}
