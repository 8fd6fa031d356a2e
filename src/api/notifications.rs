use crate::{
    api::ApiClient,
    error::Result,
    models::{Notification, NotificationQuery},
};

pub async fn list(client: &ApiClient, query: &NotificationQuery) -> Result<Vec<Notification>> {
    client.get_query("/notifications", query).await
}

pub async fn mark_read(client: &ApiClient, id: &str) -> Result<()> {
    client.patch_unit(&format!("/notifications/{}/read", id)).await
}
