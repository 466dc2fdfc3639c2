// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Element descriptors.
//!
//! An element names one requested column of a report: either an attribute
//! (rendered as its own grid column) or a metric (collected into the shared
//! metric group). The variant set is closed; loosely typed `{type, uri}`
//! records go through [`RawElement`] so an unrecognised tag surfaces as
//! [`ReportError::UnknownElementType`] instead of being dropped.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// One requested report column, identified by its metadata URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// An attribute (or attribute display form) reference.
    Attribute { uri: String },
    /// A metric reference.
    Metric { uri: String },
}

impl Element {
    pub fn attribute(uri: impl Into<String>) -> Self {
        Element::Attribute { uri: uri.into() }
    }

    pub fn metric(uri: impl Into<String>) -> Self {
        Element::Metric { uri: uri.into() }
    }

    /// The remote metadata URI this element refers to.
    pub fn uri(&self) -> &str {
        match self {
            Element::Attribute { uri } | Element::Metric { uri } => uri,
        }
    }

    pub fn is_metric(&self) -> bool {
        matches!(self, Element::Metric { .. })
    }

    /// Parse a JSON array of `{type, uri}` records, preserving order.
    ///
    /// Every record goes through `TryFrom<RawElement>`; an empty URI is
    /// reported at its position in the array.
    pub fn parse_list(json: &str) -> Result<Vec<Element>> {
        let raw: Vec<RawElement> = serde_json::from_str(json)?;
        raw.into_iter()
            .enumerate()
            .map(|(position, record)| {
                Element::try_from(record).map_err(|err| match err {
                    ReportError::EmptyUri { .. } => ReportError::EmptyUri { position },
                    other => other,
                })
            })
            .collect()
    }
}

/// Untyped element record as it arrives from loosely typed callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
}

impl TryFrom<RawElement> for Element {
    type Error = ReportError;

    /// Rejects an unknown tag, then an empty URI. A standalone record
    /// reports its empty URI at position 0.
    fn try_from(raw: RawElement) -> Result<Self> {
        let element = match raw.kind.as_str() {
            "attribute" => Element::Attribute { uri: raw.uri },
            "metric" => Element::Metric { uri: raw.uri },
            _ => return Err(ReportError::UnknownElementType(raw.kind)),
        };
        if element.uri().is_empty() {
            return Err(ReportError::EmptyUri { position: 0 });
        }
        Ok(element)
    }
}
