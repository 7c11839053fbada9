// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求提取器模块
///
/// - 会话令牌（session）：解析并校验 `Authorization: Bearer` 会话令牌
/// - 校验后的 JSON（validated_json）：解析请求体并执行字段校验
pub mod session;
pub mod validated_json;
