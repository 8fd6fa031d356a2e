use crate::{
    api::ApiClient,
    error::Result,
    models::{NewProduct, Product},
};

pub async fn list(client: &ApiClient) -> Result<Vec<Product>> {
    client.get("/products").await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<Product> {
    client.get(&format!("/products/{}", id)).await
}

pub async fn create(client: &ApiClient, product: &NewProduct) -> Result<Product> {
    client.post("/products", product).await
}

pub async fn update(client: &ApiClient, id: &str, product: &NewProduct) -> Result<Product> {
    client.put(&format!("/products/{}", id), product).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<()> {
    client.delete(&format!("/products/{}", id)).await
}
