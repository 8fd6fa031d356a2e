use crate::{
    api::ApiClient,
    error::Result,
    models::{NewUser, User, UserUpdate},
};

pub async fn list(client: &ApiClient) -> Result<Vec<User>> {
    client.get("/users").await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<User> {
    client.get(&format!("/users/{}", id)).await
}

pub async fn create(client: &ApiClient, user: &NewUser) -> Result<User> {
    client.post("/users", user).await
}

pub async fn update(client: &ApiClient, id: &str, update: &UserUpdate) -> Result<User> {
    client.put(&format!("/users/{}", id), update).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<()> {
    client.delete(&format!("/users/{}", id)).await
}
