use rust_decimal::Decimal;
use serde::Deserialize;

/// Backend-computed dashboard figures; the client displays them as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_orders: i64,
    pub total_revenue: Decimal,
    pub total_profit: Decimal,
    pub total_loss: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub orders_per_day: Vec<ChartPoint>,
    pub revenue_per_day: Vec<ChartPoint>,
    pub profit_per_day: Vec<ChartPoint>,
}
