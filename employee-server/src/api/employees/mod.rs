//! Employee API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/v1/employees | GET | 员工列表 |
//! | /api/v1/employees | POST | 创建员工 |
//! | /api/v1/employees/{id} | GET | 获取员工 |
//! | /api/v1/employees/{id} | PUT | 更新员工 (空字段保持不变) |
//! | /api/v1/employees/{id} | DELETE | 删除员工 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/v1/employees",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/v1/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
