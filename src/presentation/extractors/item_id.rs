// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// 资源项路径标识符
///
/// 解析路径中的数字标识符，允许携带可选的格式后缀
/// （如 /api/members/3.jsonld）
#[derive(Debug, Clone, Copy)]
pub struct ItemId(pub i32);

/// 去除可选格式后缀后解析标识符
pub fn parse_item_id(raw: &str) -> Option<i32> {
    let trimmed = raw
        .strip_suffix(".jsonld")
        .or_else(|| raw.strip_suffix(".json"))
        .unwrap_or(raw);

    trimmed.parse::<i32>().ok()
}

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(rejection) => return Err(rejection.into_response()),
        };

        match parse_item_id(&raw) {
            Some(id) => Ok(ItemId(id)),
            None => {
                let status = StatusCode::NOT_FOUND;
                let body = Json(json!({ "error": "Not Found" }));
                Err((status, body).into_response())
            }
        }
    }
}
