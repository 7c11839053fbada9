// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 安全模块
///
/// - 口令哈希（password）：argon2 加盐哈希与校验
/// - 会话令牌（session）：HMAC-SHA256 签名的团队会话令牌
pub mod password;
pub mod session;
