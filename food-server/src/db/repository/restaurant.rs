//! Restaurant Store (SurrealDB)

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::models::{MenuItem, Restaurant, RestaurantCreate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{RepoError, RepoResult, RestaurantStore, record_key};

const RESTAURANT_TABLE: &str = "restaurant";

/// Native record shape - stays inside this module. The stored
/// `created_at` only drives ordering and is not read back.
#[derive(Debug, Deserialize)]
struct RestaurantRecord {
    id: RecordId,
    name: String,
    cuisine: String,
    rating: f64,
    delivery_time: String,
    #[serde(default)]
    image: String,
    menu: Vec<MenuItem>,
}

/// Content written on create (no id - SurrealDB assigns it)
#[derive(Debug, Serialize)]
struct RestaurantContent {
    name: String,
    cuisine: String,
    rating: f64,
    delivery_time: String,
    image: String,
    menu: Vec<MenuItem>,
    /// Epoch millis; insertion order key
    created_at: i64,
}

impl RestaurantRecord {
    fn into_entity(self) -> Restaurant {
        Restaurant {
            id: record_key(&self.id),
            name: self.name,
            cuisine: self.cuisine,
            rating: self.rating,
            delivery_time: self.delivery_time,
            image: self.image,
            menu: self.menu,
        }
    }
}

#[derive(Clone)]
pub struct SurrealRestaurantStore {
    db: Surreal<Db>,
}

impl SurrealRestaurantStore {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantStore for SurrealRestaurantStore {
    async fn find_all(&self) -> RepoResult<Vec<Restaurant>> {
        let records: Vec<RestaurantRecord> = self
            .db
            .query("SELECT * FROM restaurant ORDER BY created_at ASC")
            .await?
            .take(0)?;
        Ok(records.into_iter().map(RestaurantRecord::into_entity).collect())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Restaurant> {
        let record: Option<RestaurantRecord> = self.db.select((RESTAURANT_TABLE, id)).await?;
        record
            .map(RestaurantRecord::into_entity)
            .ok_or_else(|| RepoError::NotFound(format!("Restaurant {id} not found")))
    }

    async fn create(&self, data: RestaurantCreate) -> RepoResult<String> {
        let content = RestaurantContent {
            name: data.name,
            cuisine: data.cuisine,
            rating: data.rating,
            delivery_time: data.delivery_time,
            image: data.image,
            menu: data.menu,
            created_at: Utc::now().timestamp_millis(),
        };

        let created: Option<RestaurantRecord> = self
            .db
            .create(RESTAURANT_TABLE)
            .content(content)
            .await?;

        created
            .map(|r| record_key(&r.id))
            .ok_or_else(|| RepoError::Database("Failed to create restaurant".to_string()))
    }

    async fn count(&self) -> RepoResult<usize> {
        let mut result = self
            .db
            .query("SELECT count() FROM restaurant GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0) as usize)
    }
}
