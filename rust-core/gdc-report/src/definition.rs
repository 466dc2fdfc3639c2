// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Report definition documents.
//!
//! A report definition describes a grid: attribute columns in request order,
//! followed by a single `"metricGroup"` marker column when any metrics are
//! requested. The metrics themselves are listed separately under
//! `content.grid.metrics`, again in request order.
//!
//! ```text
//! [attr A, metric X, attr B, metric Y]
//!   columns: [{attribute: A}, {attribute: B}, "metricGroup"]
//!   metrics: [{uri: X}, {uri: Y}]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::element::Element;

/// Literal marker occupying the metric column position in a grid.
pub const METRIC_GROUP: &str = "metricGroup";

/// Title given to definitions built without an explicit one.
pub const DEFAULT_TITLE: &str = "Untitled report definition";

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

/// Top-level report definition document, wrapped as the service expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDefinition {
    pub report_definition: ReportDefinitionBody,
}

impl ReportDefinition {
    /// Shortcut to `reportDefinition.content.grid`.
    pub fn grid(&self) -> &Grid {
        &self.report_definition.content.grid
    }

    pub fn title(&self) -> &str {
        &self.report_definition.meta.title
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDefinitionBody {
    pub content: ReportContent,
    pub meta: ReportMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportContent {
    /// Always `"grid"` for definitions produced here.
    pub format: String,
    pub grid: Grid,
    #[serde(default)]
    pub filters: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub title: String,
}

/// The grid layout: which columns, rows and metrics the report computes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub columns: Vec<GridColumn>,
    #[serde(default)]
    pub rows: Vec<GridColumn>,
    pub metrics: Vec<GridMetric>,
    #[serde(default)]
    pub sort: GridSort,
    #[serde(default)]
    pub column_widths: Vec<Value>,
}

impl Grid {
    /// Number of `"metricGroup"` markers among the columns.
    pub fn metric_group_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_metric_group()).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridSort {
    pub columns: Vec<Value>,
    pub rows: Vec<Value>,
}

/// A grid column: an attribute reference or the metric group marker.
///
/// Serializes as `{"attribute": {"uri": ..., "totals": []}}` or as the bare
/// string `"metricGroup"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GridColumn {
    Attribute { attribute: GridAttribute },
    Marker(ColumnMarker),
}

impl GridColumn {
    pub fn attribute(uri: impl Into<String>) -> Self {
        GridColumn::Attribute {
            attribute: GridAttribute {
                uri: uri.into(),
                totals: Vec::new(),
            },
        }
    }

    pub fn metric_group() -> Self {
        GridColumn::Marker(ColumnMarker::MetricGroup)
    }

    pub fn is_metric_group(&self) -> bool {
        matches!(self, GridColumn::Marker(ColumnMarker::MetricGroup))
    }

    /// URI of the referenced attribute, `None` for the marker.
    pub fn attribute_uri(&self) -> Option<&str> {
        match self {
            GridColumn::Attribute { attribute } => Some(&attribute.uri),
            GridColumn::Marker(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridAttribute {
    pub uri: String,
    #[serde(default)]
    pub totals: Vec<String>,
}

/// Synthetic column markers. Serialized as plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnMarker {
    MetricGroup,
}

/// One requested metric in the grid's metric group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMetric {
    pub uri: String,
    #[serde(default)]
    pub alias: String,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build a report definition with the default title.
///
/// Pure and synchronous; see the module docs for the column layout.
pub fn build_report_definition(elements: &[Element]) -> ReportDefinition {
    ReportDefinitionBuilder::new().elements(elements).build()
}

/// Incremental builder for [`ReportDefinition`].
#[derive(Debug, Clone)]
pub struct ReportDefinitionBuilder {
    title: String,
    elements: Vec<Element>,
}

impl Default for ReportDefinitionBuilder {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            elements: Vec::new(),
        }
    }
}

impl ReportDefinitionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append one element; order of calls defines column order.
    pub fn element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn elements(mut self, elements: &[Element]) -> Self {
        self.elements.extend_from_slice(elements);
        self
    }

    pub fn build(self) -> ReportDefinition {
        let mut columns = Vec::new();
        let mut metrics = Vec::new();

        for element in self.elements {
            match element {
                Element::Attribute { uri } => columns.push(GridColumn::attribute(uri)),
                Element::Metric { uri } => metrics.push(GridMetric {
                    uri,
                    alias: String::new(),
                }),
            }
        }

        if !metrics.is_empty() {
            columns.push(GridColumn::metric_group());
        }

        debug!(
            columns = columns.len(),
            metrics = metrics.len(),
            "Built report definition"
        );

        ReportDefinition {
            report_definition: ReportDefinitionBody {
                content: ReportContent {
                    format: "grid".to_string(),
                    grid: Grid {
                        columns,
                        metrics,
                        ..Default::default()
                    },
                    filters: Vec::new(),
                },
                meta: ReportMeta { title: self.title },
            },
        }
    }
}
