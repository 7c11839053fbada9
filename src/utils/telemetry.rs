// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 默认日志过滤规则，可用 `RUST_LOG` 覆盖
const DEFAULT_FILTER: &str = "info,cluehunt=debug,tower_http=debug";

/// 初始化日志
///
/// `CLUEHUNT_LOG_FORMAT=json` 时输出 JSON 行，便于日志采集；否则输出可读文本
pub fn init_telemetry() {
    let json = std::env::var("CLUEHUNT_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(fmt::layer))
        .init();
}
