// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::clue::{Clue, NewClue};
use crate::domain::repositories::clue_repository::ClueRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::services::ServiceError;
use crate::infrastructure::metrics::CLUES_SUBMITTED_TOTAL;
use std::sync::Arc;

/// 线索服务
///
/// 保存团队扫描到的线索并按团队列出。
/// 不校验 `team_name` 是否对应已注册的团队。
pub struct ClueService {
    clue_repo: Arc<dyn ClueRepository>,
}

impl ClueService {
    /// 创建新的线索服务实例
    pub fn new(clue_repo: Arc<dyn ClueRepository>) -> Self {
        Self { clue_repo }
    }

    /// 保存线索
    ///
    /// 同一团队再次提交完全相同的内容会被拒绝，且不会产生第二条记录
    ///
    /// # 返回值
    ///
    /// * `Ok(Clue)` - 已保存的线索
    /// * `Err(ServiceError::DuplicateClue)` - 该团队已经保存过这条线索
    pub async fn submit(&self, new_clue: NewClue) -> Result<Clue, ServiceError> {
        if new_clue.text.is_empty() || new_clue.team_name.is_empty() {
            return Err(ServiceError::MissingClueFields);
        }

        let clue = Clue::new(new_clue);
        match self.clue_repo.create(&clue).await {
            Ok(saved) => {
                metrics::counter!(CLUES_SUBMITTED_TOTAL, "outcome" => "saved").increment(1);
                tracing::info!("Clue {} saved for team {}", saved.id, saved.team_name);
                Ok(saved)
            }
            Err(RepositoryError::AlreadyExists) => {
                metrics::counter!(CLUES_SUBMITTED_TOTAL, "outcome" => "duplicate").increment(1);
                tracing::debug!("Clue already saved for team {}", clue.team_name);
                Err(ServiceError::DuplicateClue)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 列出团队的全部线索，没有线索时返回空列表
    pub async fn list_for_team(&self, team_name: &str) -> Result<Vec<Clue>, ServiceError> {
        Ok(self.clue_repo.find_by_team_name(team_name).await?)
    }
}

#[cfg(test)]
#[path = "clue_service_test.rs"]
mod tests;
