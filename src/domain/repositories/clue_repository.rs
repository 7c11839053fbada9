// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::clue::Clue;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// 线索仓库特质
///
/// 定义线索数据访问接口
#[async_trait]
pub trait ClueRepository: Send + Sync {
    /// 保存新线索，同一团队的相同内容已存在时返回 `AlreadyExists`
    async fn create(&self, clue: &Clue) -> Result<Clue, RepositoryError>;
    /// 按保存顺序列出某个团队的全部线索
    async fn find_by_team_name(&self, team_name: &str) -> Result<Vec<Clue>, RepositoryError>;
}
