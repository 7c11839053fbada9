// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::team::Team;
use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::services::ServiceError;
use crate::infrastructure::metrics::{TEAMS_REGISTERED_TOTAL, TEAM_LOGINS_TOTAL};
use crate::infrastructure::security::password;
use std::sync::Arc;

/// 团队服务
///
/// 处理团队相关的业务逻辑：注册、登录和查找。
/// 口令哈希与校验较耗 CPU，放在阻塞线程池中执行。
pub struct TeamService {
    team_repo: Arc<dyn TeamRepository>,
}

impl TeamService {
    /// 创建新的团队服务实例
    pub fn new(team_repo: Arc<dyn TeamRepository>) -> Self {
        Self { team_repo }
    }

    /// 注册新团队
    ///
    /// # 参数
    ///
    /// * `name` - 团队名称，全局唯一
    /// * `passcode` - 团队口令，只保存其哈希
    ///
    /// # 返回值
    ///
    /// * `Ok(Team)` - 新创建的团队
    /// * `Err(ServiceError::DuplicateTeam)` - 名称已被占用，与口令无关
    pub async fn register(&self, name: &str, passcode: &str) -> Result<Team, ServiceError> {
        if name.is_empty() || passcode.is_empty() {
            return Err(ServiceError::MissingCredentials);
        }

        let passcode = passcode.to_owned();
        let passcode_hash = tokio::task::spawn_blocking(move || password::hash_passcode(&passcode))
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))??;

        let team = Team::new(name.to_owned(), passcode_hash);
        match self.team_repo.create(&team).await {
            Ok(team) => {
                metrics::counter!(TEAMS_REGISTERED_TOTAL).increment(1);
                tracing::info!("Team registered: {}", team.name);
                Ok(team)
            }
            Err(RepositoryError::AlreadyExists) => {
                tracing::debug!("Rejected duplicate team name: {}", name);
                Err(ServiceError::DuplicateTeam)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 使用名称和口令登录
    ///
    /// 名称不存在与口令错误返回同一个错误，调用方无法区分
    pub async fn login(&self, name: &str, passcode: &str) -> Result<Team, ServiceError> {
        if name.is_empty() || passcode.is_empty() {
            return Err(ServiceError::MissingCredentials);
        }

        let team = self.team_repo.find_by_name(name).await?;

        // Unknown teams still pay for a full verification
        let passcode = passcode.to_owned();
        let stored_hash = team
            .as_ref()
            .map(|team| team.passcode_hash.clone())
            .unwrap_or_else(|| password::UNKNOWN_TEAM_HASH.to_string());
        let matches = tokio::task::spawn_blocking(move || {
            password::verify_passcode(&passcode, &stored_hash)
        })
        .await
        .map_err(|e| ServiceError::Internal(e.to_string()))??;

        match team {
            Some(team) if matches => {
                metrics::counter!(TEAM_LOGINS_TOTAL, "outcome" => "accepted").increment(1);
                Ok(team)
            }
            _ => {
                metrics::counter!(TEAM_LOGINS_TOTAL, "outcome" => "rejected").increment(1);
                Err(ServiceError::InvalidCredentials)
            }
        }
    }

    /// 按名称查找团队
    pub async fn find(&self, name: &str) -> Result<Team, ServiceError> {
        self.team_repo
            .find_by_name(name)
            .await?
            .ok_or(ServiceError::TeamNotFound)
    }
}

#[cfg(test)]
#[path = "team_service_test.rs"]
mod tests;
