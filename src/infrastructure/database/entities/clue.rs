// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// 线索数据库实体模型
///
/// 对应数据库中的 clues 表，`(text, team_name)` 上有唯一索引。
/// `team_name` 只是按名称引用团队，没有外键关系。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "clues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub team_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub additional_text: Option<String>,
    pub image_path: Option<String>,
    pub media_type: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
