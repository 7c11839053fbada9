// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{CorsSettings, Settings};
use crate::domain::repositories::clue_repository::ClueRepository;
use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::services::clue_service::ClueService;
use crate::domain::services::team_service::TeamService;
use crate::infrastructure::repositories::clue_repo_impl::ClueRepositoryImpl;
use crate::infrastructure::repositories::team_repo_impl::TeamRepositoryImpl;
use crate::infrastructure::security::session::SessionSigner;
use crate::presentation::handlers::{clue_handler, team_handler};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// 创建应用路由
///
/// # 返回值
///
/// 返回未挂载依赖的路由
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/teams", post(team_handler::create_team))
        .route("/teams/login", post(team_handler::login_team))
        .route("/teams/{name}", get(team_handler::get_team))
        .route("/clues", post(clue_handler::create_clue))
        .route("/clues/{team_name}", get(clue_handler::list_clues))
}

/// 组装完整的应用
///
/// 创建仓库和服务，并以 `Extension` 的形式注入到路由中，
/// 同时挂载跨域和请求日志中间件
pub fn build_app(db: Arc<DatabaseConnection>, settings: Arc<Settings>) -> Router {
    let team_repo: Arc<dyn TeamRepository> = Arc::new(TeamRepositoryImpl::new(db.clone()));
    let clue_repo: Arc<dyn ClueRepository> = Arc::new(ClueRepositoryImpl::new(db));

    let team_service = Arc::new(TeamService::new(team_repo));
    let clue_service = Arc::new(ClueService::new(clue_repo));
    let session_signer = Arc::new(SessionSigner::from_settings(&settings.auth));

    routes()
        .layer(Extension(team_service))
        .layer(Extension(clue_service))
        .layer(Extension(session_signer))
        .layer(cors_layer(&settings.cors))
        .layer(Extension(settings))
        .layer(TraceLayer::new_for_http())
}

/// 跨域中间件
///
/// 未配置来源时允许任意来源
fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
