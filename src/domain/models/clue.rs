// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 线索实体
///
/// 表示一个团队扫描并保存的二维码内容。`(text, team_name)` 组合唯一，
/// 比较时使用精确的字符串相等，不做大小写或空白的归一化。
/// 线索创建后不会被修改或删除。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clue {
    /// 线索唯一标识符，按时间有序（UUIDv7）
    pub id: Uuid,
    /// 二维码内容
    pub text: String,
    /// 所属团队名称
    pub team_name: String,
    /// 附加说明
    pub additional_text: Option<String>,
    /// 关联媒体的路径
    pub image_path: Option<String>,
    /// 媒体类型，约定为 image、video 或 gif，但不做强制校验
    pub media_type: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 待保存的线索
///
/// 同时用作客户端提交线索时的请求体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClue {
    pub text: String,
    pub team_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl NewClue {
    /// 只包含二维码内容和团队名称的线索
    pub fn new(text: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            team_name: team_name.into(),
            ..Default::default()
        }
    }
}

impl Clue {
    /// 根据待保存的线索生成新的线索实体
    ///
    /// # 参数
    ///
    /// * `new_clue` - 客户端提交的线索内容
    ///
    /// # 返回值
    ///
    /// 返回一个新的线索实例，包含生成的唯一ID和当前时间戳
    pub fn new(new_clue: NewClue) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: new_clue.text,
            team_name: new_clue.team_name,
            additional_text: new_clue.additional_text,
            image_path: new_clue.image_path,
            media_type: new_clue.media_type,
            created_at: Utc::now(),
        }
    }
}
