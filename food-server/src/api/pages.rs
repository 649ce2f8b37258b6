//! 静态页面和资源
//!
//! The browser client (HTML shell pages plus cart/render scripts) is
//! served straight from the public directory; nothing here is part of the
//! API surface. A missing directory simply turns every page route into a
//! 404 and leaves the JSON API fully functional.

use std::path::PathBuf;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::core::ServerState;

pub fn router(public_dir: &str) -> Router<ServerState> {
    let dir = PathBuf::from(public_dir);

    Router::new()
        .route_service("/", ServeFile::new(dir.join("index.html")))
        .route_service("/restaurant/{id}", ServeFile::new(dir.join("restaurant.html")))
        .route_service("/cart", ServeFile::new(dir.join("cart.html")))
        .route_service("/orders", ServeFile::new(dir.join("orders.html")))
        .fallback_service(ServeDir::new(dir))
}
