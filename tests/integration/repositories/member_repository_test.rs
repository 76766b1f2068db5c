// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{clean_database, create_test_app, populate_database_with_fixtures};
use membrs::domain::models::member::{MemberDraft, MemberPatch};
use membrs::domain::repositories::member_repository::{MemberRepository, RepositoryError};
use membrs::infrastructure::repositories::member_repo_impl::MemberRepositoryImpl;

/// 测试仓库的创建与查询
#[tokio::test]
async fn test_create_and_find_member() {
    let app = create_test_app().await;
    clean_database(&app).await;
    let repo = MemberRepositoryImpl::new(app.db.clone());

    let draft = MemberDraft {
        first_name: "Bernard".to_string(),
        last_name: "Dupont".to_string(),
        email: "bernard.dupont@gmail.com".to_string(),
        password: "UG552YD4R9LU".to_string(),
    };

    let created = repo.create(&draft).await.expect("Failed to create member");
    assert_eq!(created.id, 1);
    assert_eq!(created.first_name, "Bernard");

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to query member");
    assert_eq!(found, Some(created));
}

/// 测试列表按标识符升序返回
#[tokio::test]
async fn test_list_orders_by_identifier() {
    let app = create_test_app().await;
    clean_database(&app).await;
    populate_database_with_fixtures(&app).await;
    let repo = MemberRepositoryImpl::new(app.db.clone());

    let members = repo.list().await.expect("Failed to list members");

    let ids: Vec<i32> = members.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

/// 测试部分更新仅覆盖提供的字段
#[tokio::test]
async fn test_update_merges_partial_fields() {
    let app = create_test_app().await;
    clean_database(&app).await;
    populate_database_with_fixtures(&app).await;
    let repo = MemberRepositoryImpl::new(app.db.clone());

    let patch = MemberPatch {
        first_name: Some("Dominique".to_string()),
        email: Some("dominique.iturria@gmail.com".to_string()),
        ..Default::default()
    };

    let updated = repo.update(3, &patch).await.expect("Failed to update member");

    assert_eq!(updated.id, 3);
    assert_eq!(updated.first_name, "Dominique");
    assert_eq!(updated.last_name, "Iturria");
    assert_eq!(updated.email, "dominique.iturria@gmail.com");
    assert_eq!(updated.password, "54OHND3UBG5Z");
}

/// 测试空的部分更新保持记录不变
#[tokio::test]
async fn test_update_with_empty_patch_keeps_record() {
    let app = create_test_app().await;
    clean_database(&app).await;
    populate_database_with_fixtures(&app).await;
    let repo = MemberRepositoryImpl::new(app.db.clone());

    let updated = repo
        .update(3, &MemberPatch::default())
        .await
        .expect("Failed to update member");

    assert_eq!(updated.first_name, "Txomin");
    assert_eq!(updated.last_name, "Iturria");
}

/// 测试更新不存在的会员
#[tokio::test]
async fn test_update_missing_member_returns_not_found() {
    let app = create_test_app().await;
    clean_database(&app).await;
    let repo = MemberRepositoryImpl::new(app.db.clone());

    let result = repo.update(3, &MemberPatch::default()).await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

/// 测试删除与重复删除
#[tokio::test]
async fn test_delete_member() {
    let app = create_test_app().await;
    clean_database(&app).await;
    populate_database_with_fixtures(&app).await;
    let repo = MemberRepositoryImpl::new(app.db.clone());

    repo.delete(3).await.expect("Failed to delete member");

    let found = repo.find_by_id(3).await.expect("Failed to query member");
    assert_eq!(found, None);

    let result = repo.delete(3).await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}
