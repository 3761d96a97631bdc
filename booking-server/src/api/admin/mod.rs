//! Admin API 模块
//!
//! 后台管理接口。原系统的管理页面没有服务端鉴权，
//! 这里保持同样的公开路由，鉴权由部署层 (反向代理) 负责。
//!
//! - [`bookings`] - 预订列表与审核动作
//! - [`slots`] - 时段可用性
//! - [`dashboard`] - 看板计数
//! - [`reports`] - 汇总报表

pub mod bookings;
pub mod dashboard;
pub mod reports;
pub mod slots;

use axum::Router;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(bookings::router())
        .merge(slots::router())
        .merge(dashboard::router())
        .merge(reports::router())
}
