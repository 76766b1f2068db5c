// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::models::member::{MemberDraft, MemberPatch};
use crate::domain::repositories::member_repository::{MemberRepository, RepositoryError};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::item_id::ItemId;
use crate::presentation::ld::{Ld, MemberCollection, MemberDocument};

/// 创建会员的请求DTO
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    /// 名
    pub first_name: String,
    /// 姓
    pub last_name: String,
    /// 电子邮箱地址
    pub email: String,
    /// 密码
    pub password: String,
}

impl From<CreateMemberRequest> for MemberDraft {
    fn from(request: CreateMemberRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: request.password,
        }
    }
}

/// 部分更新会员的请求DTO
///
/// 省略的字段保持原值
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateMemberRequest {
    /// 名
    pub first_name: Option<String>,
    /// 姓
    pub last_name: Option<String>,
    /// 电子邮箱地址
    pub email: Option<String>,
    /// 密码
    pub password: Option<String>,
}

impl From<UpdateMemberRequest> for MemberPatch {
    fn from(request: UpdateMemberRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: request.password,
        }
    }
}

/// 列出全部会员
///
/// 以Hydra集合文档返回按标识符升序排列的全部会员
pub async fn list_members<M>(
    Extension(member_repo): Extension<Arc<M>>,
) -> Result<Ld<MemberCollection>, AppError>
where
    M: MemberRepository + 'static,
{
    let members = member_repo.list().await?;

    Ok(Ld(MemberCollection::new(members)))
}

/// 创建新会员
///
/// 返回201与包含已分配标识符的单体文档
pub async fn create_member<M>(
    Extension(member_repo): Extension<Arc<M>>,
    Ld(request): Ld<CreateMemberRequest>,
) -> Result<impl IntoResponse, AppError>
where
    M: MemberRepository + 'static,
{
    let member = member_repo.create(&request.into()).await?;

    Ok((StatusCode::CREATED, Ld(MemberDocument::from(member))))
}

/// 根据ID获取会员
pub async fn get_member<M>(
    Extension(member_repo): Extension<Arc<M>>,
    ItemId(id): ItemId,
) -> Result<Ld<MemberDocument>, AppError>
where
    M: MemberRepository + 'static,
{
    let member = member_repo
        .find_by_id(id)
        .await?
        .ok_or(RepositoryError::NotFound)?;

    Ok(Ld(member.into()))
}

/// 部分更新会员
///
/// 仅覆盖请求中提供的字段，标识符与未提供的字段保持不变
pub async fn update_member<M>(
    Extension(member_repo): Extension<Arc<M>>,
    ItemId(id): ItemId,
    Ld(request): Ld<UpdateMemberRequest>,
) -> Result<Ld<MemberDocument>, AppError>
where
    M: MemberRepository + 'static,
{
    let member = member_repo.update(id, &request.into()).await?;

    Ok(Ld(member.into()))
}

/// 删除会员
///
/// 成功时返回204与空响应体
pub async fn delete_member<M>(
    Extension(member_repo): Extension<Arc<M>>,
    ItemId(id): ItemId,
) -> Result<StatusCode, AppError>
where
    M: MemberRepository + 'static,
{
    member_repo.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
