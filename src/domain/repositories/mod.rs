// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 团队仓库（team_repository）：注册与按名称查找团队
/// - 线索仓库（clue_repository）：保存线索并按团队列出线索
///
/// 唯一性（团队名称、线索与团队的组合）由存储层的唯一约束保证，
/// 仓库在插入冲突时返回 `RepositoryError::AlreadyExists`。
pub mod clue_repository;
pub mod team_repository;

pub use crate::utils::errors::RepositoryError;
