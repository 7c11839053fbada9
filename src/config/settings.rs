// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// 默认的会话签名密钥，仅用于本地开发
pub const DEFAULT_SESSION_SECRET: &str = "change-me-session-secret";

/// 会话令牌有效期上限（秒），一年
pub const MAX_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 365;

/// 应用程序配置设置
///
/// 包含服务器、数据库、会话认证、跨域和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 会话认证配置
    pub auth: AuthSettings,
    /// 跨域配置
    pub cors: CorsSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 会话认证配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// 会话令牌签名密钥
    pub session_secret: String,
    /// 会话令牌有效期（秒）
    pub session_ttl_secs: u64,
    /// 提交线索时是否必须携带会话令牌
    pub require_session: bool,
}

/// 跨域配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// 允许的来源列表，为空时允许任意来源
    pub allowed_origins: Vec<String>,
}

/// Prometheus 指标配置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用指标导出
    pub enabled: bool,
    /// 指标导出监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、配置文件和环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let settings: Self = Self::builder()?.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 检查取值范围
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ttl = self.auth.session_ttl_secs;
        if ttl == 0 || ttl > MAX_SESSION_TTL_SECS {
            return Err(ConfigError::Message(format!(
                "auth.session_ttl_secs must be between 1 and {}, got {}",
                MAX_SESSION_TTL_SECS, ttl
            )));
        }
        Ok(())
    }

    /// 返回已填充默认值和配置源的构建器
    ///
    /// 调用方可以在此基础上继续 `set_override`，测试中用它替换数据库地址等配置
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB settings
            .set_default("database.url", "sqlite://cluehunt.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default session settings
            .set_default("auth.session_secret", DEFAULT_SESSION_SECRET)?
            .set_default("auth.session_ttl_secs", 60 * 60 * 12)?
            .set_default("auth.require_session", false)?
            // Default CORS settings
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            // Default metrics settings
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("CLUEHUNT")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            );

        Ok(builder)
    }

    /// 监听地址
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
