// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use thiserror::Error;

/// 口令处理错误
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("failed to hash passcode: {0}")]
    Hash(String),
    #[error("stored passcode hash is malformed: {0}")]
    MalformedHash(String),
}

/// 团队不存在时用于校验的哈希
///
/// 参数与 `Argon2::default()` 相同，哈希值全为零，任何口令都无法匹配。
/// 对它做一次完整校验，使未知团队与口令错误的耗时一致。
pub const UNKNOWN_TEAM_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$Y2x1ZWh1bnQtZHVtbXktc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// 使用随机盐计算口令的 argon2 哈希
///
/// 返回 PHC 格式字符串，包含算法参数和盐
pub fn hash_passcode(passcode: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(passcode.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

/// 校验口令是否与保存的哈希匹配
///
/// 哈希本身无法解析时返回错误，口令不匹配时返回 `Ok(false)`
pub fn verify_passcode(passcode: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash =
        PasswordHash::new(stored_hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(passcode.as_bytes(), &parsed_hash)
        .is_ok())
}
