// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 客户端模块
///
/// - API 客户端（api_client）：调用团队与线索接口，记住当前团队的会话
/// - 扫描会话（scan_session）：每个摄像头会话一个状态机，
///   接收外部扫码库解码出的内容，等待确认后提交线索
///
/// 二维码的解码本身由外部扫码库完成，不在本模块范围内。
pub mod api_client;
pub mod scan_session;

pub use api_client::{ClientError, ClueHuntClient, TeamSession};
pub use scan_session::{ClueSink, ScanError, ScanOutcome, ScanSession, ScanState};
