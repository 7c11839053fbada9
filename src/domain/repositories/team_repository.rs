// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::team::Team;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// 团队仓库特质
///
/// 定义团队数据访问接口
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// 创建新团队，名称已存在时返回 `AlreadyExists`
    async fn create(&self, team: &Team) -> Result<Team, RepositoryError>;
    /// 根据名称精确查找团队
    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, RepositoryError>;
}
