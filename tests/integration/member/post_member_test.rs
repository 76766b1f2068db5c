// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{clean_database, create_test_app};
use axum::http::StatusCode;
use serde_json::{json, Value};

/// 测试创建会员
///
/// 验证在空表上创建会员返回201，响应原样回显请求字段
/// 并分配标识符1
#[tokio::test]
async fn test_post_member() {
    let app = create_test_app().await;
    clean_database(&app).await;

    let request_body = json!({
        "firstName": "Bernard",
        "lastName": "Dupont",
        "email": "bernard.dupont@gmail.com",
        "password": "QGFQ45FGQ554FQ755Q2DFGQGG"
    });

    let response = app
        .server
        .post("/api/members.jsonld")
        .add_header("content-type", "application/ld+json")
        .bytes(request_body.to_string().into())
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let expected = json!({
        "@context": "/api/contexts/Member",
        "@id": "/api/members/1",
        "@type": "Member",
        "id": 1,
        "firstName": "Bernard",
        "lastName": "Dupont",
        "email": "bernard.dupont@gmail.com",
        "password": "QGFQ45FGQ554FQ755Q2DFGQGG"
    });
    assert_eq!(response.json::<Value>(), expected);
}

/// 测试缺少Content-Type的创建请求
#[tokio::test]
async fn test_post_member_without_content_type() {
    let app = create_test_app().await;
    clean_database(&app).await;

    let response = app
        .server
        .post("/api/members.jsonld")
        .bytes(json!({ "firstName": "Bernard" }).to_string().into())
        .await;

    assert_eq!(response.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

/// 测试请求体不是合法JSON时的创建请求
#[tokio::test]
async fn test_post_member_with_malformed_body() {
    let app = create_test_app().await;
    clean_database(&app).await;

    let response = app
        .server
        .post("/api/members.jsonld")
        .add_header("content-type", "application/ld+json")
        .bytes("{not json".into())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
