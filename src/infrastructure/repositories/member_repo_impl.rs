// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::member::{Member, MemberDraft, MemberPatch};
use crate::domain::repositories::member_repository::{MemberRepository, RepositoryError};
use crate::infrastructure::database::entities::member;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 会员仓库实现
#[derive(Clone)]
pub struct MemberRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl MemberRepositoryImpl {
    /// 创建新的会员仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberRepository for MemberRepositoryImpl {
    async fn create(&self, draft: &MemberDraft) -> Result<Member, RepositoryError> {
        let model = member::ActiveModel {
            first_name: Set(draft.first_name.clone()),
            last_name: Set(draft.last_name.clone()),
            email: Set(draft.email.clone()),
            password: Set(draft.password.clone()),
            ..Default::default()
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Member>, RepositoryError> {
        let model = member::Entity::find_by_id(id).one(self.db.as_ref()).await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Member>, RepositoryError> {
        let models = member::Entity::find()
            .order_by_asc(member::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, patch: &MemberPatch) -> Result<Member, RepositoryError> {
        let model = member::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if patch.is_empty() {
            return Ok(model.into());
        }

        let mut active: member::ActiveModel = model.into();
        if let Some(first_name) = &patch.first_name {
            active.first_name = Set(first_name.clone());
        }
        if let Some(last_name) = &patch.last_name {
            active.last_name = Set(last_name.clone());
        }
        if let Some(email) = &patch.email {
            active.email = Set(email.clone());
        }
        if let Some(password) = &patch.password {
            active.password = Set(password.clone());
        }

        let updated = active.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = member::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

impl From<member::Model> for Member {
    fn from(model: member::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            password: model.password,
        }
    }
}
