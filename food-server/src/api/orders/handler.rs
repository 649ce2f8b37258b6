//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use shared::models::{Order, OrderCreate, OrderStatus};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Response for a placed order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlaced {
    pub message: &'static str,
    pub order_id: String,
}

/// Payload for a status change
///
/// The status arrives as a plain string so unknown values surface as a
/// 400 validation error rather than a body-decode rejection.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /api/orders - 获取所有订单 (最新在前)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders.list().await?;
    Ok(Json(orders))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.orders.get(&id).await?;
    Ok(Json(order))
}

/// POST /api/orders - 下单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderPlaced>)> {
    let order_id = state.orders.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderPlaced {
            message: "Order placed successfully",
            order_id,
        }),
    ))
}

/// PATCH /api/orders/:id/status - 更新订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<MessageResponse>> {
    let status: OrderStatus = payload.status.parse().map_err(AppError::Validation)?;

    state.orders.update_status(&id, status).await?;

    Ok(Json(MessageResponse {
        message: "Order status updated",
    }))
}
