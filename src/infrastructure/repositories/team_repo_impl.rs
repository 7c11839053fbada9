// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::team::Team;
use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::team;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 团队仓库实现
#[derive(Clone)]
pub struct TeamRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl TeamRepositoryImpl {
    /// 创建新的团队仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for TeamRepositoryImpl {
    async fn create(&self, team: &Team) -> Result<Team, RepositoryError> {
        let model = team::ActiveModel {
            id: Set(team.id),
            name: Set(team.name.clone()),
            passcode_hash: Set(team.passcode_hash.clone()),
            created_at: Set(team.created_at.into()),
        };

        let saved = model
            .insert(self.db.as_ref())
            .await
            .map_err(RepositoryError::from_insert)?;

        Ok(saved.into())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, RepositoryError> {
        let model = team::Entity::find()
            .filter(team::Column::Name.eq(name))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }
}

impl From<team::Model> for Team {
    fn from(model: team::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            passcode_hash: model.passcode_hash,
            created_at: model.created_at.into(),
        }
    }
}
