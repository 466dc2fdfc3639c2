// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Resource paths on the analytics service.

pub const LOGIN: &str = "/gdc/account/login";
pub const TOKEN: &str = "/gdc/account/token";
pub const BOOTSTRAP: &str = "/gdc/app/account/bootstrap";

/// Executions collection of a project.
pub fn executions(project_id: &str) -> String {
    format!("/gdc/internal/projects/{project_id}/experimental/executions")
}

/// Last non-empty path segment of a resource reference.
///
/// `/gdc/project/project_hash` yields `project_hash`; a trailing slash is
/// ignored.
pub fn last_segment(reference: &str) -> Option<&str> {
    reference
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}
