//! Sample Data Seeding
//!
//! Restaurants are created once at startup from the fixed set below if the
//! collection is empty. Running against a non-empty collection is a no-op,
//! so repeated startups (and the ephemeral backend, which starts empty on
//! every boot) converge on exactly this catalog.

use shared::models::{MenuItem, RestaurantCreate};

use super::repository::{RepoResult, RestaurantStore};

fn item(id: i64, name: &str, price: f64, description: &str, image: &str) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        price,
        description: description.to_string(),
        image: image.to_string(),
    }
}

fn restaurant(
    name: &str,
    cuisine: &str,
    rating: f64,
    delivery_time: &str,
    image: &str,
    menu: Vec<MenuItem>,
) -> RestaurantCreate {
    RestaurantCreate {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        rating,
        delivery_time: delivery_time.to_string(),
        image: image.to_string(),
        menu,
    }
}

/// The fixed seed catalog: six restaurants, four menu items each
pub fn sample_restaurants() -> Vec<RestaurantCreate> {
    vec![
        restaurant(
            "Pizza Paradise",
            "Italian",
            4.5,
            "30-40 min",
            "https://images.unsplash.com/photo-1513104890138-7c749659a591?w=400&h=300&fit=crop",
            vec![
                item(1, "Margherita Pizza", 12.99, "Classic tomato and mozzarella", "https://images.unsplash.com/photo-1574071318508-1cdbab80d002?w=300&h=200&fit=crop"),
                item(2, "Pepperoni Pizza", 14.99, "Loaded with pepperoni", "https://images.unsplash.com/photo-1628840042765-356cda07504e?w=300&h=200&fit=crop"),
                item(3, "Veggie Supreme", 13.99, "Fresh vegetables and cheese", "https://images.unsplash.com/photo-1571997478779-2adcbbe9ab2f?w=300&h=200&fit=crop"),
                item(4, "BBQ Chicken Pizza", 15.99, "BBQ sauce and grilled chicken", "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=300&h=200&fit=crop"),
            ],
        ),
        restaurant(
            "Burger House",
            "American",
            4.3,
            "25-35 min",
            "https://images.unsplash.com/photo-1571091718767-18b5b1457add?w=400&h=300&fit=crop",
            vec![
                item(1, "Classic Burger", 9.99, "Beef patty with lettuce and tomato", "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=300&h=200&fit=crop"),
                item(2, "Cheese Burger", 10.99, "Double cheese, beef patty", "https://images.unsplash.com/photo-1572802419224-296b0aeee0d9?w=300&h=200&fit=crop"),
                item(3, "Chicken Burger", 10.49, "Crispy chicken fillet", "https://images.unsplash.com/photo-1606755962773-d324e0a13086?w=300&h=200&fit=crop"),
                item(4, "Veggie Burger", 8.99, "Plant-based patty", "https://images.unsplash.com/photo-1525059696034-4967a729002a?w=300&h=200&fit=crop"),
            ],
        ),
        restaurant(
            "Sushi Master",
            "Japanese",
            4.7,
            "40-50 min",
            "https://images.unsplash.com/photo-1579584425555-c3ce17fd4351?w=400&h=300&fit=crop",
            vec![
                item(1, "California Roll", 11.99, "Crab, avocado, cucumber", "https://images.unsplash.com/photo-1579584425555-c3ce17fd4351?w=300&h=200&fit=crop"),
                item(2, "Salmon Nigiri", 13.99, "Fresh salmon over rice", "https://images.unsplash.com/photo-1617196034796-73dfa7b1fd56?w=300&h=200&fit=crop"),
                item(3, "Tuna Roll", 12.99, "Fresh tuna and seaweed", "https://images.unsplash.com/photo-1564489563601-c53cfc451e93?w=300&h=200&fit=crop"),
                item(4, "Tempura Roll", 14.99, "Shrimp tempura roll", "https://images.unsplash.com/photo-1579584425555-c3ce17fd4351?w=300&h=200&fit=crop"),
            ],
        ),
        restaurant(
            "Taco Fiesta",
            "Mexican",
            4.4,
            "20-30 min",
            "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?w=400&h=300&fit=crop",
            vec![
                item(1, "Beef Tacos", 8.99, "Three seasoned beef tacos", "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?w=300&h=200&fit=crop"),
                item(2, "Chicken Quesadilla", 9.99, "Grilled chicken and cheese", "https://images.unsplash.com/photo-1599974979242-c1cb95082431?w=300&h=200&fit=crop"),
                item(3, "Burrito Bowl", 11.99, "Rice, beans, meat, and toppings", "https://images.unsplash.com/photo-1626700051175-6818013e1d4f?w=300&h=200&fit=crop"),
                item(4, "Nachos Supreme", 10.99, "Loaded nachos", "https://images.unsplash.com/photo-1582169296194-e4d644c48063?w=300&h=200&fit=crop"),
            ],
        ),
        restaurant(
            "Curry Corner",
            "Indian",
            4.6,
            "35-45 min",
            "https://images.unsplash.com/photo-1585937421612-70a008356fbe?w=400&h=300&fit=crop",
            vec![
                item(1, "Butter Chicken", 13.99, "Creamy tomato curry", "https://images.unsplash.com/photo-1603894584373-5ac82b2ae398?w=300&h=200&fit=crop"),
                item(2, "Tikka Masala", 12.99, "Spiced curry with naan", "https://images.unsplash.com/photo-1565557623262-b51c2513a641?w=300&h=200&fit=crop"),
                item(3, "Biryani", 14.99, "Fragrant rice with meat", "https://images.unsplash.com/photo-1563379091339-03b21ab4a4f8?w=300&h=200&fit=crop"),
                item(4, "Samosa", 5.99, "Crispy pastry with filling", "https://images.unsplash.com/photo-1601050690597-df0568f70950?w=300&h=200&fit=crop"),
            ],
        ),
        restaurant(
            "Pasta Palace",
            "Italian",
            4.5,
            "30-40 min",
            "https://images.unsplash.com/photo-1621996346565-e3dbc646d9a9?w=400&h=300&fit=crop",
            vec![
                item(1, "Spaghetti Carbonara", 12.99, "Creamy pasta with bacon", "https://images.unsplash.com/photo-1612874742237-6526221588e3?w=300&h=200&fit=crop"),
                item(2, "Fettuccine Alfredo", 11.99, "Rich and creamy", "https://images.unsplash.com/photo-1645112411341-6c4fd023714a?w=300&h=200&fit=crop"),
                item(3, "Penne Arrabbiata", 10.99, "Spicy tomato sauce", "https://images.unsplash.com/photo-1621996346565-e3dbc646d9a9?w=300&h=200&fit=crop"),
                item(4, "Lasagna", 13.99, "Layers of pasta and meat", "https://images.unsplash.com/photo-1574894709920-11b28e7367e3?w=300&h=200&fit=crop"),
            ],
        ),
    ]
}

/// Seed the catalog if and only if the collection is empty.
/// Returns the number of restaurants inserted (0 on a non-empty store).
pub async fn initialize_sample_data(store: &dyn RestaurantStore) -> RepoResult<usize> {
    if store.count().await? > 0 {
        return Ok(0);
    }

    let catalog = sample_restaurants();
    let mut inserted = 0;
    for data in catalog {
        store.create(data).await?;
        inserted += 1;
    }

    tracing::info!(count = inserted, "Sample restaurant data initialized");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::MemRestaurantStore;

    #[test]
    fn catalog_is_six_restaurants_of_four_items() {
        let catalog = sample_restaurants();
        assert_eq!(catalog.len(), 6);
        for r in &catalog {
            assert_eq!(r.menu.len(), 4, "{} should have four menu items", r.name);
            for item in &r.menu {
                assert!(item.price > 0.0);
            }
        }
    }

    #[tokio::test]
    async fn seeding_twice_leaves_exactly_six() {
        let store = MemRestaurantStore::new();

        let first = initialize_sample_data(&store).await.unwrap();
        assert_eq!(first, 6);

        let second = initialize_sample_data(&store).await.unwrap();
        assert_eq!(second, 0);

        assert_eq!(store.count().await.unwrap(), 6);
    }
}
