// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{clean_database, create_test_app, populate_database_with_fixtures};
use axum::http::StatusCode;
use serde_json::{json, Value};

/// 测试部分更新会员
///
/// 验证仅提供名与邮箱时，响应中两者被更新，
/// 而标识符、姓与密码保持种子值不变
#[tokio::test]
async fn test_put_member_by_id() {
    let app = create_test_app().await;
    clean_database(&app).await;
    populate_database_with_fixtures(&app).await;

    let request_body = json!({
        "firstName": "Dominique",
        "email": "dominique.iturria@gmail.com"
    });

    let response = app
        .server
        .put("/api/members/3.jsonld")
        .add_header("content-type", "application/ld+json")
        .bytes(request_body.to_string().into())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let expected = json!({
        "@context": "/api/contexts/Member",
        "@id": "/api/members/3",
        "@type": "Member",
        "id": 3,
        "firstName": "Dominique",
        "lastName": "Iturria",
        "email": "dominique.iturria@gmail.com",
        "password": "54OHND3UBG5Z"
    });
    assert_eq!(response.json::<Value>(), expected);
}

/// 测试更新后的记录可被再次读取
#[tokio::test]
async fn test_put_member_by_id_persists_changes() {
    let app = create_test_app().await;
    clean_database(&app).await;
    populate_database_with_fixtures(&app).await;

    let response = app
        .server
        .put("/api/members/3.jsonld")
        .add_header("content-type", "application/ld+json")
        .bytes(json!({ "firstName": "Dominique" }).to_string().into())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let follow_up = app.server.get("/api/members/3.jsonld").await;
    let body = follow_up.json::<Value>();

    assert_eq!(body["firstName"], json!("Dominique"));
    assert_eq!(body["lastName"], json!("Iturria"));
}

/// 测试更新不存在的会员
#[tokio::test]
async fn test_put_member_by_id_not_found() {
    let app = create_test_app().await;
    clean_database(&app).await;

    let response = app
        .server
        .put("/api/members/3.jsonld")
        .add_header("content-type", "application/ld+json")
        .bytes(json!({ "firstName": "Dominique" }).to_string().into())
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
