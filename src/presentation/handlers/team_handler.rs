// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;
use tracing::info;

use crate::application::dto::team_request::{
    TeamCredentialsRequestDto, TeamNameResponseDto, TeamSessionResponseDto,
};
use crate::domain::services::team_service::TeamService;
use crate::infrastructure::security::session::SessionSigner;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::validated_json::ValidatedJson;

/// 注册新团队
///
/// 成功返回 201 和会话令牌；名称已存在时返回 400
pub async fn create_team(
    Extension(team_service): Extension<Arc<TeamService>>,
    Extension(session_signer): Extension<Arc<SessionSigner>>,
    ValidatedJson(request): ValidatedJson<TeamCredentialsRequestDto>,
) -> Result<(StatusCode, Json<TeamSessionResponseDto>), AppError> {
    let (name, passcode) = request.into_credentials();
    let team = team_service.register(&name, &passcode).await?;

    Ok((
        StatusCode::CREATED,
        Json(TeamSessionResponseDto {
            message: "Team created successfully.".to_string(),
            token: session_signer.issue(&team.name),
            team_name: team.name,
        }),
    ))
}

/// 团队登录
///
/// 名称或口令不匹配时统一返回 400
pub async fn login_team(
    Extension(team_service): Extension<Arc<TeamService>>,
    Extension(session_signer): Extension<Arc<SessionSigner>>,
    ValidatedJson(request): ValidatedJson<TeamCredentialsRequestDto>,
) -> Result<Json<TeamSessionResponseDto>, AppError> {
    let (name, passcode) = request.into_credentials();
    let team = team_service.login(&name, &passcode).await?;
    info!("Team logged in: {}", team.name);

    Ok(Json(TeamSessionResponseDto {
        message: "Login successful.".to_string(),
        token: session_signer.issue(&team.name),
        team_name: team.name,
    }))
}

/// 按名称查询团队
pub async fn get_team(
    Extension(team_service): Extension<Arc<TeamService>>,
    Path(name): Path<String>,
) -> Result<Json<TeamNameResponseDto>, AppError> {
    let team = team_service.find(&name).await?;
    Ok(Json(TeamNameResponseDto {
        team_name: team.name,
    }))
}
