use crate::{
    api::ApiClient,
    error::Result,
    models::{DashboardCharts, DashboardSummary},
};

const DEFAULT_CHART_WINDOW_DAYS: u32 = 30;

pub async fn summary(client: &ApiClient) -> Result<DashboardSummary> {
    client.get("/dashboard/summary").await
}

/// Chart series for the given window; falls back to the standard 30 day
/// window when none is given.
pub async fn charts(client: &ApiClient, days: Option<u32>) -> Result<DashboardCharts> {
    client
        .get_query("/dashboard/charts", &[("days", chart_window(days))])
        .await
}

fn chart_window(days: Option<u32>) -> u32 {
    days.unwrap_or(DEFAULT_CHART_WINDOW_DAYS)
}
