// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>
//! Bootstrap-based lookup tests.

mod support;

use gdc_client::GdcError;
use serde_json::json;
use support::{json_response, scripted_client};

#[tokio::test]
async fn test_current_project_id_is_last_segment() {
    let (client, transport) = scripted_client([json_response(
        200,
        json!({"bootstrapResource": {"current": {"project": {"links": {"self": "/gdc/project/project_hash"}}}}}),
    )]);

    let project_id = client.get_current_project_id().await.unwrap();

    assert_eq!(project_id, "project_hash");
    assert_eq!(transport.requests()[0].path, "/gdc/app/account/bootstrap");
}

#[tokio::test]
async fn test_current_project_lookup_rejected() {
    let (client, _) = scripted_client([json_response(401, json!({"error": "unauthorized"}))]);

    let err = client.get_current_project_id().await.unwrap_err();

    assert!(matches!(err, GdcError::Lookup { status: 401, .. }));
}

#[tokio::test]
async fn test_missing_current_project_is_lookup_failure() {
    let body = json!({"bootstrapResource": {"current": {"project": null}}});
    let (client, _) = scripted_client([json_response(200, body.clone())]);

    let err = client.get_current_project_id().await.unwrap_err();

    assert_eq!(err.status(), Some(200));
    assert_eq!(err.body(), Some(&body));
}

#[tokio::test]
async fn test_current_profile_uri() {
    let (client, _) = scripted_client([json_response(
        200,
        json!({"bootstrapResource": {
            "current": {},
            "accountSetting": {"links": {"self": "/gdc/account/profile/abcd"}}
        }}),
    )]);

    assert_eq!(
        client.get_current_profile_uri().await.unwrap(),
        "/gdc/account/profile/abcd"
    );
}

#[tokio::test]
async fn test_bootstrap_returns_typed_resource() {
    let (client, _) = scripted_client([json_response(
        200,
        json!({"bootstrapResource": {"current": {"project": {"links": {"self": "/gdc/project/p1"}}}}}),
    )]);

    let resource = client.bootstrap().await.unwrap();

    assert_eq!(
        resource.current.project.unwrap().links.self_uri,
        "/gdc/project/p1"
    );
}
