// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::api_client::{ClientError, ClueHuntClient};
use crate::domain::models::clue::Clue;

/// 线索的提交目标
///
/// 扫描会话只依赖该接口，测试中可以替换为内存实现
#[async_trait]
pub trait ClueSink: Send + Sync {
    /// 以当前团队的身份提交一条线索
    async fn submit(&self, text: &str) -> Result<Clue, ClientError>;
}

#[async_trait]
impl ClueSink for ClueHuntClient {
    async fn submit(&self, text: &str) -> Result<Clue, ClientError> {
        self.submit_clue(text).await
    }
}

/// 扫描会话状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// 摄像头未开启
    Idle,
    /// 正在等待扫码库解码
    Scanning,
    /// 已解码，等待用户确认是否保存
    AwaitingConfirmation { payload: String },
}

impl ScanState {
    fn name(&self) -> &'static str {
        match self {
            ScanState::Idle => "idle",
            ScanState::Scanning => "scanning",
            ScanState::AwaitingConfirmation { .. } => "awaiting_confirmation",
        }
    }
}

/// 确认提交的结果
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// 线索已保存
    Saved(Clue),
    /// 该团队已经保存过这条线索
    AlreadySaved,
    /// 提交失败
    Failed(String),
}

/// 扫描会话错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScanError {
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

/// 一次摄像头会话的扫描状态机
///
/// ```text
/// Idle --start--> Scanning --on_decoded--> AwaitingConfirmation
///   ^                ^                          |
///   |                +-------confirm/dismiss----+
///   +------------------stop (any state)
/// ```
///
/// 只有处于 `Scanning` 时才接受解码结果，
/// 等待确认期间扫码库继续回调的内容会被忽略。
pub struct ScanSession<S> {
    sink: S,
    state: ScanState,
}

impl<S: ClueSink> ScanSession<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            state: ScanState::Idle,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// 开启摄像头，进入扫描状态
    pub fn start(&mut self) -> Result<(), ScanError> {
        match self.state {
            ScanState::Idle => {
                self.state = ScanState::Scanning;
                debug!("Scan session started");
                Ok(())
            }
            _ => Err(self.invalid("start")),
        }
    }

    /// 接收扫码库解码出的内容
    ///
    /// 返回是否接受了该内容；不在扫描状态时返回 `false`
    pub fn on_decoded(&mut self, payload: impl Into<String>) -> bool {
        if self.state != ScanState::Scanning {
            return false;
        }

        let payload = payload.into();
        debug!("Decoded payload: {}", payload);
        self.state = ScanState::AwaitingConfirmation { payload };
        true
    }

    /// 确认保存当前内容
    ///
    /// 无论提交结果如何，之后都回到扫描状态
    pub async fn confirm(&mut self) -> Result<ScanOutcome, ScanError> {
        let payload = match &self.state {
            ScanState::AwaitingConfirmation { payload } => payload.clone(),
            _ => return Err(self.invalid("confirm")),
        };

        let outcome = match self.sink.submit(&payload).await {
            Ok(clue) => {
                info!("Clue saved: {}", clue.text);
                ScanOutcome::Saved(clue)
            }
            Err(ClientError::AlreadySaved) => ScanOutcome::AlreadySaved,
            Err(e) => {
                warn!("Failed to save clue: {}", e);
                ScanOutcome::Failed(e.to_string())
            }
        };

        self.state = ScanState::Scanning;
        Ok(outcome)
    }

    /// 放弃当前内容，继续扫描
    pub fn dismiss(&mut self) -> Result<(), ScanError> {
        match self.state {
            ScanState::AwaitingConfirmation { .. } => {
                self.state = ScanState::Scanning;
                Ok(())
            }
            _ => Err(self.invalid("dismiss")),
        }
    }

    /// 关闭摄像头
    pub fn stop(&mut self) {
        if self.state != ScanState::Idle {
            debug!("Scan session stopped");
        }
        self.state = ScanState::Idle;
    }

    fn invalid(&self, action: &'static str) -> ScanError {
        ScanError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}
