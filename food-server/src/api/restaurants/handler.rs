//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::Restaurant;

use crate::core::ServerState;
use crate::db::repository::RestaurantStore;
use crate::utils::AppResult;

/// GET /api/restaurants - 获取所有餐厅
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants = state.stores.restaurants.find_all().await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/:id - 获取单个餐厅
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = state.stores.restaurants.find_by_id(&id).await?;
    Ok(Json(restaurant))
}
