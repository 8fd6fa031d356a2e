use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product as reported by the backend. The client never mutates a
/// product in place; admin edits go through [`NewProduct`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub purchase_price: Decimal,
    pub sale_price: Decimal,
    /// Server-derived: sale price minus purchase price.
    pub margin: Decimal,
    pub stock: i32,
    pub is_visible: bool,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload. Margin and timestamps are computed server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub purchase_price: Decimal,
    pub sale_price: Decimal,
    pub stock: i32,
    pub is_visible: bool,
    pub images: Vec<String>,
}
