//! Shopping recommendations. Deliberately mock data: a fixed set of three
//! entries, no retailer integration.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShoppingSuggestion {
    pub name: &'static str,
    pub category: &'static str,
    pub price: &'static str,
    pub link: &'static str,
}

/// `GET /api/v1/shopping/suggestions`
pub async fn list_suggestions() -> Json<Vec<ShoppingSuggestion>> {
    Json(vec![
        ShoppingSuggestion {
            name: "Classic White Sneakers",
            category: "Shoes",
            price: "$79.99",
            link: "https://example.com",
        },
        ShoppingSuggestion {
            name: "Leather Belt",
            category: "Accessories",
            price: "$45.00",
            link: "https://example.com",
        },
        ShoppingSuggestion {
            name: "Denim Jacket",
            category: "Outerwear",
            price: "$89.99",
            link: "https://example.com",
        },
    ])
}
