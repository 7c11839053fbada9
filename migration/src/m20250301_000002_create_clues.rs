// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建 clues 表
///
/// `(text, team_name)` 上的唯一索引保证同一团队不能重复保存同一条线索，
/// 冲突由数据库在插入时原子地报告。
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clues::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clues::Text).text().not_null())
                    .col(ColumnDef::new(Clues::TeamName).string().not_null())
                    .col(ColumnDef::new(Clues::AdditionalText).text().null())
                    .col(ColumnDef::new(Clues::ImagePath).string().null())
                    .col(ColumnDef::new(Clues::MediaType).string().null())
                    .col(
                        ColumnDef::new(Clues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clues_text_team_name_unique")
                    .table(Clues::Table)
                    .col(Clues::Text)
                    .col(Clues::TeamName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Listing is always filtered by team
        manager
            .create_index(
                Index::create()
                    .name("idx_clues_team_name_created_at")
                    .table(Clues::Table)
                    .col(Clues::TeamName)
                    .col(Clues::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_clues_team_name_created_at").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_clues_text_team_name_unique").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Clues::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Clues {
    Table,
    Id,
    Text,
    TeamName,
    AdditionalText,
    ImagePath,
    MediaType,
    CreatedAt,
}
