use rust_decimal::{dec, Decimal};

use crate::models::{Order, OrderStatus};

/// Cost is approximated as 60% of the sale price per item. A placeholder
/// until order items carry the purchase price, not a ledger.
const COST_RATIO: Decimal = dec!(0.6);

/// Display-only aggregation over the full order list, recomputed on every
/// load. Owns no persistent data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesReport {
    pub total_orders: usize,
    pub completed_orders: usize,
    pub cancelled_orders: usize,
    pub total_revenue: Decimal,
    pub total_cost: Decimal,
    pub profit: Decimal,
}

impl SalesReport {
    pub fn from_orders(orders: &[Order]) -> Self {
        let completed = orders
            .iter()
            .filter(|order| order.status == OrderStatus::Proceeded);

        let total_revenue: Decimal = completed.clone().map(|order| order.total_amount).sum();

        let total_cost: Decimal = completed
            .flat_map(|order| &order.order_items)
            .map(|item| item.price * Decimal::from(item.quantity) * COST_RATIO)
            .sum();

        Self {
            total_orders: orders.len(),
            completed_orders: orders
                .iter()
                .filter(|order| order.status == OrderStatus::Proceeded)
                .count(),
            cancelled_orders: orders
                .iter()
                .filter(|order| order.status == OrderStatus::Cancelled)
                .count(),
            total_revenue,
            total_cost,
            profit: total_revenue - total_cost,
        }
    }

    pub fn is_profit(&self) -> bool {
        self.profit >= Decimal::ZERO
    }
}
