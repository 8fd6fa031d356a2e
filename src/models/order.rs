use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order lifecycle. Transitions are decided by the backend; the client only
/// requests them, and only when the current status admits the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Proceeded,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Proceed,
    Cancel,
}

impl OrderStatus {
    pub fn can_proceed(self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    pub fn can_cancel(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Proceeded)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }

    pub fn allows(self, action: OrderAction) -> bool {
        match action {
            OrderAction::Proceed => self.can_proceed(),
            OrderAction::Cancel => self.can_cancel(),
        }
    }

    /// The actions a view may offer for an order in this status.
    pub fn available_actions(self) -> &'static [OrderAction] {
        match self {
            OrderStatus::Pending => &[OrderAction::Proceed, OrderAction::Cancel],
            OrderStatus::Proceeded => &[OrderAction::Cancel],
            OrderStatus::Cancelled => &[],
        }
    }
}

/// Minimal product reference embedded in an order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemProduct {
    pub id: String,
    pub name: String,
}

/// A line on a placed order. `price` is the sale price captured at order
/// time and never changes, even if the catalog price later does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub quantity: i32,
    pub price: Decimal,
    pub product: OrderItemProduct,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub user: OrderUser,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub order_items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}

// Request types

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub product_id: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemInput>,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_offers_both_actions() {
        let actions = OrderStatus::Pending.available_actions();
        assert_eq!(actions, &[OrderAction::Proceed, OrderAction::Cancel]);
    }

    #[test]
    fn proceeded_offers_only_cancel() {
        let actions = OrderStatus::Proceeded.available_actions();
        assert_eq!(actions, &[OrderAction::Cancel]);
        assert!(!OrderStatus::Proceeded.allows(OrderAction::Proceed));
    }

    #[test]
    fn cancelled_is_terminal() {
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(OrderStatus::Cancelled.available_actions().is_empty());
    }

    #[test]
    fn status_round_trips_wire_casing() {
        let status: OrderStatus = serde_json::from_str("\"PROCEEDED\"").unwrap();
        assert_eq!(status, OrderStatus::Proceeded);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"PROCEEDED\"");
    }

    #[test]
    fn create_request_uses_backend_field_names() {
        let request = CreateOrderRequest {
            items: vec![OrderItemInput {
                product_id: "p1".to_string(),
                quantity: 2,
            }],
            address: "12 Rustaveli Ave".to_string(),
            city: "Tbilisi".to_string(),
            zip_code: "0108".to_string(),
            phone: "+995 555 123456".to_string(),
            notes: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["items"][0]["productId"], "p1");
        assert_eq!(json["zipCode"], "0108");
        assert!(json.get("notes").is_none());
    }
}
