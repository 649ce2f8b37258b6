//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Menu item embedded in a restaurant
///
/// The `id` is only unique within its restaurant's menu, not globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Price in currency unit (non-negative)
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// Restaurant entity with embedded menu
///
/// The id serializes as `_id` for client compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    /// Free-text delivery estimate, e.g. "30-40 min"
    pub delivery_time: String,
    #[serde(default)]
    pub image: String,
    /// Insertion-ordered menu
    pub menu: Vec<MenuItem>,
}

/// Creation payload - the store assigns id and creation timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCreate {
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    pub delivery_time: String,
    #[serde(default)]
    pub image: String,
    pub menu: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurant_serializes_with_underscore_id_and_camel_case() {
        let r = Restaurant {
            id: "abc123".into(),
            name: "Pizza Paradise".into(),
            cuisine: "Italian".into(),
            rating: 4.5,
            delivery_time: "30-40 min".into(),
            image: String::new(),
            menu: vec![MenuItem {
                id: 1,
                name: "Margherita Pizza".into(),
                price: 12.99,
                description: "Classic tomato and mozzarella".into(),
                image: String::new(),
            }],
        };

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["_id"], "abc123");
        assert_eq!(json["deliveryTime"], "30-40 min");
        assert!(json.get("delivery_time").is_none());
        assert_eq!(json["menu"][0]["id"], 1);
    }

    #[test]
    fn menu_item_image_defaults_to_empty() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id": 2, "name": "Samosa", "price": 5.99, "description": "Crispy pastry with filling"}"#,
        )
        .unwrap();
        assert_eq!(item.image, "");
    }
}
