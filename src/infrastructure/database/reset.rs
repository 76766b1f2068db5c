// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::database::entities::member;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, Statement};

/// 清空所有已映射实体表中的数据
///
/// 任何删除失败都会直接向调用方传播，由其中止后续的准备步骤
pub async fn purge(db: &DatabaseConnection) -> Result<(), DbErr> {
    member::Entity::delete_many().exec(db).await?;
    Ok(())
}

/// 重置指定表的自增计数器
///
/// 按数据库后端分派对应的重置语句，调用方无需关心具体存储引擎
pub async fn reset_auto_increment(db: &DatabaseConnection, table: &str) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let sql = match backend {
        DbBackend::Sqlite => format!("DELETE FROM sqlite_sequence WHERE name = '{}'", table),
        DbBackend::Postgres => format!("ALTER SEQUENCE {}_id_seq RESTART WITH 1", table),
        DbBackend::MySql => format!("ALTER TABLE {} AUTO_INCREMENT = 1", table),
    };

    db.execute(Statement::from_string(backend, sql)).await?;
    Ok(())
}

/// 清空数据库并重置指定表的自增计数器
///
/// 依赖确定性标识符的测试必须在装载夹具前调用本函数
pub async fn clean(db: &DatabaseConnection, table: &str) -> Result<(), DbErr> {
    purge(db).await?;
    reset_auto_increment(db, table).await
}
