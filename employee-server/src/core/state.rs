use std::sync::Arc;

use crate::core::{Config, Result};
use crate::db::{self, EmployeeStore};

/// 服务器状态 - 持有配置和员工存储的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一次。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | store | Arc<dyn EmployeeStore> | 员工存储 (sqlite 或 memory) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: Arc<dyn EmployeeStore>,
}

impl ServerState {
    /// 按配置打开存储 (sqlite 会先完成库和表的初始化)
    pub async fn initialize(config: &Config) -> Result<Self> {
        let (store, report) = db::open_store(config).await?;
        if let Some(report) = report {
            tracing::info!(
                url = %config.database_url,
                database_created = report.database_created,
                table_created = report.table_created,
                "Storage bootstrap finished"
            );
        }
        Ok(Self::with_store(config.clone(), store))
    }

    /// 使用已有存储构建状态 (测试场景)
    pub fn with_store(config: Config, store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
