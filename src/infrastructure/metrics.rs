// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 注册团队的计数器
pub const TEAMS_REGISTERED_TOTAL: &str = "teams_registered_total";
/// 团队登录的计数器，按 `outcome` 标签区分成功与失败
pub const TEAM_LOGINS_TOTAL: &str = "team_logins_total";
/// 线索提交的计数器，按 `outcome` 标签区分保存与重复
pub const CLUES_SUBMITTED_TOTAL: &str = "clues_submitted_total";

/// 初始化指标系统
///
/// 未启用时不安装导出器，`metrics` 宏会退化为空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}", e);
        return;
    }

    describe_counter!(TEAMS_REGISTERED_TOTAL, "Total number of teams registered");
    describe_counter!(TEAM_LOGINS_TOTAL, "Total number of team login attempts");
    describe_counter!(CLUES_SUBMITTED_TOTAL, "Total number of clue submissions");

    info!("Metrics exporter listening on {}", addr);
}
