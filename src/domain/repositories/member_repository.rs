// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::member::{Member, MemberDraft, MemberPatch};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 会员仓库特质
///
/// 定义会员数据访问接口
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// 创建新会员，返回包含已分配标识符的记录
    async fn create(&self, draft: &MemberDraft) -> Result<Member, RepositoryError>;
    /// 根据ID查找会员
    async fn find_by_id(&self, id: i32) -> Result<Option<Member>, RepositoryError>;
    /// 按标识符升序列出全部会员
    async fn list(&self) -> Result<Vec<Member>, RepositoryError>;
    /// 部分更新会员，仅覆盖提供的字段
    async fn update(&self, id: i32, patch: &MemberPatch) -> Result<Member, RepositoryError>;
    /// 删除会员
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
