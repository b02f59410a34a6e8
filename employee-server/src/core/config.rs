use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Storage backend selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// SQLite table accessed through sqlx
    Sqlite,
    /// Lock-guarded list owned by the server state
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "sql" => Ok(Self::Sqlite),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(ConfigError::Invalid {
                key: "STORAGE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration errors abort startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8081 | HTTP 服务端口 |
/// | STORAGE_BACKEND | sqlite | sqlite 或 memory |
/// | DATABASE_URL | sqlite://data/employees.db | SQLite 连接串 |
/// | DB_MAX_CONNECTIONS | 5 | 连接池大小 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 日志 |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// STORAGE_BACKEND=memory HTTP_PORT=9000 cargo run -p employee-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    pub storage_backend: StorageBackend,
    /// SQLite URL, ignored by the memory backend
    pub database_url: String,
    pub db_max_connections: u32,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    ///
    /// Unset keys take their default; set but unparsable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            http_host: var("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: parse_or(var("HTTP_PORT"), "HTTP_PORT", 8081)?,
            storage_backend: match var("STORAGE_BACKEND") {
                Some(v) => v.parse()?,
                None => StorageBackend::Sqlite,
            },
            database_url: var("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://data/employees.db".into()),
            db_max_connections: parse_or(var("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", 5)?,
            request_timeout_ms: parse_or(var("REQUEST_TIMEOUT_MS"), "REQUEST_TIMEOUT_MS", 30_000)?,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: parse_or(var("LOG_JSON"), "LOG_JSON", false)?,
            log_dir: var("LOG_DIR"),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        })
    }

    /// 使用指定的存储后端覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_backend(backend: StorageBackend, database_url: impl Into<String>) -> Self {
        Self {
            storage_backend: backend,
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_host: "0.0.0.0".into(),
            http_port: 8081,
            storage_backend: StorageBackend::Sqlite,
            database_url: "sqlite://data/employees.db".into(),
            db_max_connections: 5,
            request_timeout_ms: 30_000,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            environment: "development".into(),
        }
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: v }),
        None => Ok(default),
    }
}
