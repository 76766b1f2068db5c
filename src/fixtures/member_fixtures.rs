// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::database::entities::member;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

/// 会员夹具记录：名、姓、邮箱、密码
pub const MEMBER_RECORDS: [(&str, &str, &str, &str); 5] = [
    ("Bernard", "Dupont", "bernard.dupont@gmail.com", "UG552YD4R9LU"),
    (
        "Mirentxu",
        "Etchegarray",
        "mirentxu.etchegarray@gmail.com",
        "CFVES25UGH63",
    ),
    ("Txomin", "Iturria", "txomin.iturria@gmail.com", "54OHND3UBG5Z"),
    (
        "Bixente",
        "Olagaray",
        "bixente.olagaray@gmail.com",
        "GBNH52E698AS",
    ),
    ("Maite", "Bideondo", "maite.bideondo@gmail.com", "GN2485SECNU4"),
];

/// 会员测试夹具
///
/// 按声明顺序将固定的五条会员记录插入数据库。
/// 在已重置自增计数器的空表上装载时，记录获得1到5的连续标识符。
pub struct MemberFixtures;

impl MemberFixtures {
    /// 装载全部夹具记录
    ///
    /// 逐条插入，不做去重与校验；任何一条插入失败都会
    /// 立即返回错误并中止装载
    pub async fn load(db: &DatabaseConnection) -> Result<(), DbErr> {
        for (first_name, last_name, email, password) in MEMBER_RECORDS {
            let model = member::ActiveModel {
                first_name: Set(first_name.to_string()),
                last_name: Set(last_name.to_string()),
                email: Set(email.to_string()),
                password: Set(password.to_string()),
                ..Default::default()
            };
            model.insert(db).await?;
        }

        Ok(())
    }
}
