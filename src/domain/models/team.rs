// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 团队实体
///
/// 团队名称全局唯一，同时充当团队的身份标识。
/// 口令只以 argon2 哈希的形式保存，注册后团队不可修改，也不会被删除。
#[derive(Debug, Clone)]
pub struct Team {
    /// 团队唯一标识符
    pub id: Uuid,
    /// 团队名称
    pub name: String,
    /// 口令的 PHC 格式哈希
    pub passcode_hash: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// 使用已经计算好的口令哈希创建团队
    pub fn new(name: String, passcode_hash: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            name,
            passcode_hash,
            created_at: Utc::now(),
        }
    }
}
