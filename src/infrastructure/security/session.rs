// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{AuthSettings, MAX_SESSION_TTL_SECS};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// 会话令牌校验错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("malformed session token")]
    Malformed,
    #[error("session token signature mismatch")]
    BadSignature,
    #[error("session token expired")]
    Expired,
}

/// 令牌中携带的会话声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// 团队名称
    pub team_name: String,
    /// 过期时间
    pub expires_at: DateTime<Utc>,
}

/// 会话令牌签发与校验器
///
/// 令牌格式为 `base64url(team_name).expires_unix.hex(hmac)`，
/// 签名覆盖前两段内容。
pub struct SessionSigner {
    secret: Vec<u8>,
    ttl: Duration,
}

impl SessionSigner {
    /// 创建新的签发器
    ///
    /// 有效期超过 [`MAX_SESSION_TTL_SECS`] 时按上限处理
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        if ttl_secs > MAX_SESSION_TTL_SECS {
            warn!(
                "Session TTL of {}s exceeds the maximum, using {}s",
                ttl_secs, MAX_SESSION_TTL_SECS
            );
        }
        let ttl_secs = ttl_secs.min(MAX_SESSION_TTL_SECS) as i64;

        Self {
            secret: secret.as_bytes().to_vec(),
            ttl: Duration::try_seconds(ttl_secs).unwrap_or(Duration::MAX),
        }
    }

    /// 根据认证配置创建签发器
    pub fn from_settings(settings: &AuthSettings) -> Self {
        Self::new(&settings.session_secret, settings.session_ttl_secs)
    }

    /// 为团队签发会话令牌
    pub fn issue(&self, team_name: &str) -> String {
        self.issue_at(team_name, Utc::now())
    }

    /// 校验会话令牌并返回其中的声明
    pub fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        self.verify_at(token, Utc::now())
    }

    fn issue_at(&self, team_name: &str, now: DateTime<Utc>) -> String {
        let payload = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(team_name.as_bytes()),
            now.checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC)
                .timestamp()
        );
        let signature = hex::encode(self.mac(&payload).finalize().into_bytes());
        format!("{}.{}", payload, signature)
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, SessionError> {
        let mut parts = token.splitn(3, '.');
        let (encoded_name, expires, signature) = match (parts.next(), parts.next(), parts.next())
        {
            (Some(name), Some(expires), Some(signature)) => (name, expires, signature),
            _ => return Err(SessionError::Malformed),
        };

        let signature = hex::decode(signature).map_err(|_| SessionError::Malformed)?;
        self.mac(&format!("{}.{}", encoded_name, expires))
            .verify_slice(&signature)
            .map_err(|_| SessionError::BadSignature)?;

        let expires_at = expires
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .ok_or(SessionError::Malformed)?;
        if expires_at <= now {
            return Err(SessionError::Expired);
        }

        let team_name = URL_SAFE_NO_PAD
            .decode(encoded_name)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or(SessionError::Malformed)?;

        Ok(SessionClaims {
            team_name,
            expires_at,
        })
    }

    fn mac(&self, payload: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        mac
    }
}
