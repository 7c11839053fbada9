// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use std::sync::Arc;
use tracing::debug;

use crate::infrastructure::security::session::{SessionClaims, SessionSigner};
use crate::presentation::errors::AppError;

/// 请求中可选的团队会话
///
/// 没有 `Authorization` 头时为 `None`；携带了令牌但无效时直接拒绝请求
#[derive(Debug, Clone)]
pub struct TeamSession(pub Option<SessionClaims>);

impl TeamSession {
    /// 检查会话是否允许以 `team_name` 的身份操作
    ///
    /// # 参数
    ///
    /// * `team_name` - 请求中声明的团队名称
    /// * `require_session` - 没有会话时是否拒绝
    pub fn authorize(&self, team_name: &str, require_session: bool) -> Result<(), AppError> {
        match &self.0 {
            Some(claims) if claims.team_name == team_name => Ok(()),
            Some(claims) => {
                debug!(
                    "Session for team {} used to act as team {}",
                    claims.team_name, team_name
                );
                Err(AppError::Unauthorized(
                    "Session does not match team.".to_string(),
                ))
            }
            None if require_session => {
                Err(AppError::Unauthorized("Session required.".to_string()))
            }
            None => Ok(()),
        }
    }
}

impl<S> FromRequestParts<S> for TeamSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = match parts.headers.get(header::AUTHORIZATION) {
            Some(value) => value,
            None => return Ok(TeamSession(None)),
        };

        let token = auth_header
            .to_str()
            .ok()
            .and_then(bearer_token)
            .ok_or_else(|| AppError::Unauthorized("Invalid or expired session.".to_string()))?;

        let signer = parts
            .extensions
            .get::<Arc<SessionSigner>>()
            .cloned()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("session signer not configured")))?;

        match signer.verify(token) {
            Ok(claims) => Ok(TeamSession(Some(claims))),
            Err(e) => {
                tracing::warn!("Rejected session token: {}", e);
                Err(AppError::Unauthorized(
                    "Invalid or expired session.".to_string(),
                ))
            }
        }
    }
}

/// 从 `Authorization` 头中取出 Bearer 令牌，认证方案不区分大小写
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
