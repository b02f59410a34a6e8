use thiserror::Error;

use crate::core::config::ConfigError;
use crate::db::RepoError;

/// Startup and lifecycle errors
///
/// Request-level failures never surface here; handlers turn them into
/// responses through `AppError`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("存储初始化失败: {0}")]
    Storage(#[from] RepoError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
