// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 数据传输对象模块
///
/// 定义应用程序层的数据传输对象
/// 用于在API请求和领域模型之间传输数据
pub mod clue_request;
pub mod team_request;

/// 统一的消息响应体，所有错误响应都使用该格式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponseDto {
    pub message: String,
}
