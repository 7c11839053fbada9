// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("数据库错误: {0}")]
    Database(#[from] DbErr),

    /// 违反唯一约束
    #[error("数据已存在")]
    AlreadyExists,
}

impl RepositoryError {
    /// 将插入时的数据库错误转换为仓库错误
    ///
    /// 唯一约束冲突被识别为 [`RepositoryError::AlreadyExists`]，其余错误原样保留
    pub fn from_insert(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => RepositoryError::AlreadyExists,
            _ => RepositoryError::Database(err),
        }
    }
}
