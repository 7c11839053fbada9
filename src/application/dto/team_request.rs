// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 团队注册与登录的请求数据传输对象
///
/// 字段缺失、为 null 或为空字符串都视为未填写
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct TeamCredentialsRequestDto {
    /// 团队名称
    #[validate(
        required(message = "Team name and passcode are required."),
        length(min = 1, message = "Team name and passcode are required.")
    )]
    pub name: Option<String>,
    /// 团队口令
    #[validate(
        required(message = "Team name and passcode are required."),
        length(min = 1, message = "Team name and passcode are required.")
    )]
    pub passcode: Option<String>,
}

impl TeamCredentialsRequestDto {
    /// 取出名称和口令，应在校验通过后调用
    pub fn into_credentials(self) -> (String, String) {
        (
            self.name.unwrap_or_default(),
            self.passcode.unwrap_or_default(),
        )
    }
}

/// 注册或登录成功后的响应
///
/// `token` 是服务端签发的会话令牌，提交线索时作为 Bearer 令牌携带
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSessionResponseDto {
    pub message: String,
    pub team_name: String,
    pub token: String,
}

/// 团队查询响应
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamNameResponseDto {
    pub team_name: String,
}
