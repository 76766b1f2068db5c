// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::models::member::Member;

/// JSON-LD响应的Content-Type
pub const LD_JSON_CONTENT_TYPE: &str = "application/ld+json; charset=utf-8";

/// JSON-LD请求体提取器与响应包装器
///
/// 提取请求体时接受 application/ld+json 与 application/json；
/// 作为响应时以 application/ld+json 序列化负载
pub struct Ld<T>(pub T);

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    content_type.starts_with("application/ld+json") || content_type.starts_with("application/json")
}

impl<T, S> FromRequest<S> for Ld<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err((
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(json!({ "error": "Expected request with Content-Type: application/ld+json" })),
            )
                .into_response());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Ld(value)),
            Err(err) => Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()),
        }
    }
}

impl<T> IntoResponse for Ld<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, LD_JSON_CONTENT_TYPE)], body).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),
        }
    }
}

/// 会员的JSON-LD单体文档
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDocument {
    /// 上下文文档IRI
    #[serde(rename = "@context")]
    pub context: String,
    /// 资源IRI
    #[serde(rename = "@id")]
    pub iri: String,
    /// 资源类型
    #[serde(rename = "@type")]
    pub document_type: String,
    /// 会员标识符
    pub id: i32,
    /// 名
    pub first_name: String,
    /// 姓
    pub last_name: String,
    /// 电子邮箱地址
    pub email: String,
    /// 密码，按存储内容原样回显
    pub password: String,
}

impl From<Member> for MemberDocument {
    fn from(member: Member) -> Self {
        Self {
            context: "/api/contexts/Member".to_string(),
            iri: format!("/api/members/{}", member.id),
            document_type: "Member".to_string(),
            id: member.id,
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            password: member.password,
        }
    }
}

/// 会员集合的Hydra文档
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCollection {
    /// 上下文文档IRI
    #[serde(rename = "@context")]
    pub context: String,
    /// 集合IRI
    #[serde(rename = "@id")]
    pub iri: String,
    /// 集合类型
    #[serde(rename = "@type")]
    pub document_type: String,
    /// 集合成员
    #[serde(rename = "hydra:member")]
    pub member: Vec<MemberDocument>,
    /// 成员总数
    #[serde(rename = "hydra:totalItems")]
    pub total_items: u64,
}

impl MemberCollection {
    /// 从会员列表构造集合文档
    pub fn new(members: Vec<Member>) -> Self {
        let member: Vec<MemberDocument> = members.into_iter().map(Into::into).collect();
        let total_items = member.len() as u64;

        Self {
            context: "/api/contexts/Member".to_string(),
            iri: "/api/members".to_string(),
            document_type: "hydra:Collection".to_string(),
            member,
            total_items,
        }
    }
}
