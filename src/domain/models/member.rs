// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 会员实体
///
/// 表示一条已持久化的会员记录。标识符由存储引擎在创建时
/// 按插入顺序递增分配，一经分配即保持唯一且稳定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// 会员唯一标识符
    pub id: i32,
    /// 名
    pub first_name: String,
    /// 姓
    pub last_name: String,
    /// 电子邮箱地址
    pub email: String,
    /// 密码，以明文存储并在API响应中原样回显
    pub password: String,
}

/// 待创建的会员数据
///
/// 包含创建一个新会员所需的全部字段，标识符由存储引擎分配
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDraft {
    /// 名
    pub first_name: String,
    /// 姓
    pub last_name: String,
    /// 电子邮箱地址
    pub email: String,
    /// 密码
    pub password: String,
}

/// 会员部分更新数据
///
/// 仅覆盖提供的字段，未提供的字段保持原值不变
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberPatch {
    /// 名
    pub first_name: Option<String>,
    /// 姓
    pub last_name: Option<String>,
    /// 电子邮箱地址
    pub email: Option<String>,
    /// 密码
    pub password: Option<String>,
}

impl MemberPatch {
    /// 判断是否未提供任何字段
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
    }
}
