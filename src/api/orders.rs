use crate::{
    api::ApiClient,
    error::Result,
    models::{CreateOrderRequest, Order},
};

pub async fn list(client: &ApiClient) -> Result<Vec<Order>> {
    client.get("/orders").await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<Order> {
    client.get(&format!("/orders/{}", id)).await
}

/// Single atomic request; stock re-validation, price lock-in and the total
/// are all computed server-side.
pub async fn create(client: &ApiClient, request: &CreateOrderRequest) -> Result<Order> {
    client.post("/orders", request).await
}

pub async fn proceed(client: &ApiClient, id: &str) -> Result<Order> {
    client.patch(&format!("/orders/{}/proceed", id)).await
}

pub async fn cancel(client: &ApiClient, id: &str) -> Result<Order> {
    client.patch(&format!("/orders/{}/cancel", id)).await
}
