//! Demo catalog models
//!
//! Fixed, read-only records served by the public listing endpoints. There is
//! no persistence behind these; the API returns a canned set on every call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A demo user record returned by `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A demo product record returned by `GET /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

/// The canned user listing.
pub fn demo_users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User {
            id: 1,
            name: "Mario Rossi".to_string(),
            email: "mario@example.com".to_string(),
            created_at: now,
        },
        User {
            id: 2,
            name: "Laura Bianchi".to_string(),
            email: "laura@example.com".to_string(),
            created_at: now,
        },
        User {
            id: 3,
            name: "Giuseppe Verdi".to_string(),
            email: "giuseppe@example.com".to_string(),
            created_at: now,
        },
    ]
}

/// The canned product listing.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: 999.99,
            stock: 15,
        },
        Product {
            id: 2,
            name: "Mouse".to_string(),
            price: 29.99,
            stock: 100,
        },
        Product {
            id: 3,
            name: "Tastiera".to_string(),
            price: 79.99,
            stock: 50,
        },
        Product {
            id: 4,
            name: "Monitor".to_string(),
            price: 299.99,
            stock: 25,
        },
    ]
}
