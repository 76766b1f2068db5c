// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::member_repo_impl::MemberRepositoryImpl;
use crate::presentation::handlers::member_handler;
use crate::presentation::ld::Ld;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use serde_json::json;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/api", get(entrypoint))
        .route("/api/contexts/{short_name}", get(context_document));

    let member_routes = Router::new()
        .route(
            "/api/members",
            get(member_handler::list_members::<MemberRepositoryImpl>)
                .post(member_handler::create_member::<MemberRepositoryImpl>),
        )
        .route(
            "/api/members.jsonld",
            get(member_handler::list_members::<MemberRepositoryImpl>)
                .post(member_handler::create_member::<MemberRepositoryImpl>),
        )
        .route(
            "/api/members/{id}",
            get(member_handler::get_member::<MemberRepositoryImpl>)
                .put(member_handler::update_member::<MemberRepositoryImpl>)
                .delete(member_handler::delete_member::<MemberRepositoryImpl>),
        );

    Router::new().merge(public_routes).merge(member_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// API入口文档端点
///
/// 返回列出全部资源集合的JSON-LD入口文档
pub async fn entrypoint() -> Ld<serde_json::Value> {
    Ld(json!({
        "@context": "/api/contexts/Entrypoint",
        "@id": "/api",
        "@type": "Entrypoint",
        "member": "/api/members"
    }))
}

/// JSON-LD上下文文档端点
///
/// 按资源短名称返回对应的上下文文档
pub async fn context_document(Path(short_name): Path<String>) -> Response {
    let name = short_name.strip_suffix(".jsonld").unwrap_or(&short_name);

    match name {
        "Member" => Ld(json!({
            "@context": {
                "@vocab": "/api/docs.jsonld#",
                "hydra": "http://www.w3.org/ns/hydra/core#",
                "firstName": "Member/firstName",
                "lastName": "Member/lastName",
                "email": "Member/email",
                "password": "Member/password"
            }
        }))
        .into_response(),
        "Entrypoint" => Ld(json!({
            "@context": {
                "@vocab": "/api/docs.jsonld#",
                "hydra": "http://www.w3.org/ns/hydra/core#",
                "member": "Entrypoint/member"
            }
        }))
        .into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" }))).into_response(),
    }
}
