// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::RepositoryError;
use crate::infrastructure::security::password::PasswordError;
use thiserror::Error;

/// 领域服务模块
///
/// - 团队服务（team_service）：注册、登录与查找团队
/// - 线索服务（clue_service）：保存线索与按团队列出线索
pub mod clue_service;
pub mod team_service;

/// 领域服务错误
///
/// 面向用户的错误的 `Display` 即为返回给客户端的消息
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Team name and passcode are required.")]
    MissingCredentials,

    #[error("Clue text and team name are required.")]
    MissingClueFields,

    #[error("Team name already exists.")]
    DuplicateTeam,

    #[error("Invalid team name or passcode.")]
    InvalidCredentials,

    #[error("Team not found")]
    TeamNotFound,

    #[error("Clue already saved.")]
    DuplicateClue,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Passcode error: {0}")]
    Password(#[from] PasswordError),

    #[error("Internal error: {0}")]
    Internal(String),
}
