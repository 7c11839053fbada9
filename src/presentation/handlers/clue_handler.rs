// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::application::dto::clue_request::CreateClueRequestDto;
use crate::config::settings::Settings;
use crate::domain::models::clue::Clue;
use crate::domain::services::clue_service::ClueService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::session::TeamSession;
use crate::presentation::extractors::validated_json::ValidatedJson;

/// 保存线索
///
/// 成功返回 201 和保存的记录；同一团队重复提交相同内容返回 400
pub async fn create_clue(
    Extension(clue_service): Extension<Arc<ClueService>>,
    Extension(settings): Extension<Arc<Settings>>,
    session: TeamSession,
    ValidatedJson(request): ValidatedJson<CreateClueRequestDto>,
) -> Result<(StatusCode, Json<Clue>), AppError> {
    let new_clue = request.into_new_clue();
    session.authorize(&new_clue.team_name, settings.auth.require_session)?;

    let clue = clue_service.submit(new_clue).await?;
    Ok((StatusCode::CREATED, Json(clue)))
}

/// 列出团队的全部线索
pub async fn list_clues(
    Extension(clue_service): Extension<Arc<ClueService>>,
    Path(team_name): Path<String>,
) -> Result<Json<Vec<Clue>>, AppError> {
    let clues = clue_service.list_for_team(&team_name).await?;
    Ok(Json(clues))
}
