// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::clue::Clue;
use crate::domain::repositories::clue_repository::ClueRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::clue;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 线索仓库实现
#[derive(Clone)]
pub struct ClueRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl ClueRepositoryImpl {
    /// 创建新的线索仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClueRepository for ClueRepositoryImpl {
    async fn create(&self, clue: &Clue) -> Result<Clue, RepositoryError> {
        let model = clue::ActiveModel {
            id: Set(clue.id),
            text: Set(clue.text.clone()),
            team_name: Set(clue.team_name.clone()),
            additional_text: Set(clue.additional_text.clone()),
            image_path: Set(clue.image_path.clone()),
            media_type: Set(clue.media_type.clone()),
            created_at: Set(clue.created_at.into()),
        };

        // No existence check first: the unique index reports the duplicate atomically
        let saved = model
            .insert(self.db.as_ref())
            .await
            .map_err(RepositoryError::from_insert)?;

        Ok(saved.into())
    }

    async fn find_by_team_name(&self, team_name: &str) -> Result<Vec<Clue>, RepositoryError> {
        let models = clue::Entity::find()
            .filter(clue::Column::TeamName.eq(team_name))
            .order_by_asc(clue::Column::CreatedAt)
            .order_by_asc(clue::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

impl From<clue::Model> for Clue {
    fn from(model: clue::Model) -> Self {
        Self {
            id: model.id,
            text: model.text,
            team_name: model.team_name,
            additional_text: model.additional_text,
            image_path: model.image_path,
            media_type: model.media_type,
            created_at: model.created_at.into(),
        }
    }
}
