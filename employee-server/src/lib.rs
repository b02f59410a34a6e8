//! Employee Server - 员工管理 HTTP 服务
//!
//! # 架构概述
//!
//! 请求经路由分发到处理器，处理器调用存储适配器后返回 JSON：
//!
//! ```text
//! router → handler → EmployeeStore (sqlite | memory) → JSON response
//! ```
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、错误、服务器生命周期
//! ├── db/            # 存储初始化和员工仓库
//! ├── api/           # HTTP 路由和处理器
//! ├── server/        # 中间件
//! └── utils/         # 日志和错误类型
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod server;
pub mod utils;

// Re-export 公共类型
pub use api::build_app;
pub use crate::core::{Config, Server, ServerState, StorageBackend};
pub use db::{EmployeeStore, MemoryStore, SqliteStore};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
