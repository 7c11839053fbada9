// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::application::dto::MessageResponseDto;
use crate::domain::repositories::RepositoryError;
use crate::domain::services::ServiceError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，统一映射为状态码和 `{"message": ...}` 响应体
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求体格式错误或必填字段缺失
    #[error("{0}")]
    Validation(String),
    /// 团队名称或线索重复
    #[error("{0}")]
    Conflict(String),
    /// 名称或口令不正确
    #[error("{0}")]
    InvalidCredentials(String),
    /// 会话令牌缺失、无效或与团队不符
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    /// 基础设施错误，细节只写入日志
    #[error("Server error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// 状态码映射
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) | AppError::InvalidCredentials(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(ref err) = self {
            error!("Request failed: {:?}", err);
        }

        let status = self.status();
        let body = Json(MessageResponseDto {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::MissingCredentials | ServiceError::MissingClueFields => {
                AppError::Validation(message)
            }
            ServiceError::DuplicateTeam | ServiceError::DuplicateClue => AppError::Conflict(message),
            ServiceError::InvalidCredentials => AppError::InvalidCredentials(message),
            ServiceError::TeamNotFound => AppError::NotFound(message),
            ServiceError::Repository(e) => AppError::Internal(e.into()),
            ServiceError::Password(e) => AppError::Internal(e.into()),
            ServiceError::Internal(e) => AppError::Internal(anyhow::anyhow!(e)),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Internal(err.into())
    }
}
