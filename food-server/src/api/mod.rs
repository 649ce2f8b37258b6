//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查接口
//! - [`restaurants`] - 餐厅和菜单接口
//! - [`orders`] - 订单接口
//! - [`pages`] - 静态页面和资源

pub mod health;
pub mod orders;
pub mod pages;
pub mod restaurants;

use axum::Router;

use crate::core::ServerState;

/// Compose all routers; static pages are served from `public_dir`
pub fn router(public_dir: &str) -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(restaurants::router())
        .merge(orders::router())
        .merge(pages::router(public_dir))
}
