// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error};
use url::Url;

use crate::application::dto::team_request::{
    TeamCredentialsRequestDto, TeamNameResponseDto, TeamSessionResponseDto,
};
use crate::application::dto::MessageResponseDto;
use crate::domain::models::clue::{Clue, NewClue};
use crate::domain::services::ServiceError;

/// 客户端错误
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Clue already saved.")]
    AlreadySaved,
    #[error("Team name already exists.")]
    DuplicateTeam,
    #[error("Invalid team name or passcode.")]
    InvalidCredentials,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("rejected: {0}")]
    Validation(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("no team session, register or log in first")]
    NoSession,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// 客户端记住的团队身份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSession {
    pub team_name: String,
    pub token: String,
}

/// 寻宝游戏 API 客户端
///
/// 注册或登录成功后记住团队会话，之后提交线索时自动使用该团队名称
/// 并携带 Bearer 令牌。
#[derive(Debug, Clone)]
pub struct ClueHuntClient {
    http: reqwest::Client,
    base_url: Url,
    session: Option<TeamSession>,
}

impl ClueHuntClient {
    /// 创建指向 `base_url` 的客户端
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            session: None,
        })
    }

    /// 使用已有的团队会话
    pub fn with_session(mut self, session: TeamSession) -> Self {
        self.session = Some(session);
        self
    }

    /// 当前团队会话
    pub fn session(&self) -> Option<&TeamSession> {
        self.session.as_ref()
    }

    /// 注册团队，成功后记住会话
    pub async fn create_team(
        &mut self,
        name: &str,
        passcode: &str,
    ) -> Result<&TeamSession, ClientError> {
        let response = self
            .http
            .post(self.endpoint(&["teams"])?)
            .json(&credentials(name, passcode))
            .send()
            .await?;

        let body: TeamSessionResponseDto = match response.status() {
            StatusCode::CREATED => response.json().await?,
            StatusCode::BAD_REQUEST => {
                let message = error_message(response).await;
                return Err(if message == ServiceError::DuplicateTeam.to_string() {
                    ClientError::DuplicateTeam
                } else {
                    ClientError::Validation(message)
                });
            }
            _ => return Err(unexpected(response).await),
        };

        Ok(self.remember(body))
    }

    /// 团队登录，成功后记住会话
    pub async fn login(&mut self, name: &str, passcode: &str) -> Result<&TeamSession, ClientError> {
        let response = self
            .http
            .post(self.endpoint(&["teams", "login"])?)
            .json(&credentials(name, passcode))
            .send()
            .await?;

        let body: TeamSessionResponseDto = match response.status() {
            StatusCode::OK => response.json().await?,
            StatusCode::BAD_REQUEST => {
                let message = error_message(response).await;
                return Err(if message == ServiceError::InvalidCredentials.to_string() {
                    ClientError::InvalidCredentials
                } else {
                    ClientError::Validation(message)
                });
            }
            _ => return Err(unexpected(response).await),
        };

        Ok(self.remember(body))
    }

    /// 查询团队是否存在，返回团队名称
    pub async fn get_team(&self, name: &str) -> Result<String, ClientError> {
        let response = self.http.get(self.endpoint(&["teams", name])?).send().await?;
        let body: TeamNameResponseDto = expect_json(response, StatusCode::OK).await?;
        Ok(body.team_name)
    }

    /// 以当前团队的身份提交一条线索
    pub async fn submit_clue(&self, text: &str) -> Result<Clue, ClientError> {
        let session = self.session.as_ref().ok_or(ClientError::NoSession)?;
        self.submit_new_clue(&NewClue::new(text, session.team_name.clone()))
            .await
    }

    /// 提交包含附加信息的线索
    ///
    /// 有会话时携带 Bearer 令牌
    pub async fn submit_new_clue(&self, new_clue: &NewClue) -> Result<Clue, ClientError> {
        let mut request = self.http.post(self.endpoint(&["clues"])?).json(new_clue);
        if let Some(session) = &self.session {
            request = request.bearer_auth(&session.token);
        }
        let response = request.send().await?;

        match response.status() {
            StatusCode::CREATED => Ok(response.json().await?),
            StatusCode::BAD_REQUEST => {
                let message = error_message(response).await;
                Err(if message == ServiceError::DuplicateClue.to_string() {
                    ClientError::AlreadySaved
                } else {
                    ClientError::Validation(message)
                })
            }
            _ => Err(unexpected(response).await),
        }
    }

    /// 列出团队的全部线索
    pub async fn list_clues(&self, team_name: &str) -> Result<Vec<Clue>, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&["clues", team_name])?)
            .send()
            .await?;
        expect_json(response, StatusCode::OK).await
    }

    fn remember(&mut self, body: TeamSessionResponseDto) -> &TeamSession {
        debug!("Acting as team {}", body.team_name);
        self.session.insert(TeamSession {
            team_name: body.team_name,
            token: body.token,
        })
    }

    /// 拼接接口地址，每个路径段都会被转义
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn credentials(name: &str, passcode: &str) -> TeamCredentialsRequestDto {
    TeamCredentialsRequestDto {
        name: Some(name.to_string()),
        passcode: Some(passcode.to_string()),
    }
}

async fn expect_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T, ClientError> {
    if response.status() == expected {
        Ok(response.json().await?)
    } else {
        Err(unexpected(response).await)
    }
}

/// 读取错误响应体中的 `message`，读不到时退回状态码的描述
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<MessageResponseDto>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string(),
    }
}

async fn unexpected(response: Response) -> ClientError {
    let status = response.status();
    let message = error_message(response).await;
    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        _ => {
            error!("Unexpected response {}: {}", status, message);
            ClientError::Server {
                status: status.as_u16(),
                message,
            }
        }
    }
}
