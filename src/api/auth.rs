use serde_json::json;

use crate::{
    api::ApiClient,
    error::Result,
    models::{AuthResponse, ProfileUpdate, User},
};

/// Signs in and stores the returned token on the client's session.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<AuthResponse> {
    let auth: AuthResponse = client
        .post("/auth/login", &json!({ "email": email, "password": password }))
        .await?;

    client.session().set_token(&auth.token);
    tracing::info!("Signed in as {}", auth.user.email);
    Ok(auth)
}

/// Registers a new account; the backend signs the account in immediately,
/// so the returned token is stored like a login.
pub async fn register(
    client: &ApiClient,
    email: &str,
    password: &str,
    name: &str,
) -> Result<AuthResponse> {
    let auth: AuthResponse = client
        .post(
            "/auth/register",
            &json!({ "email": email, "password": password, "name": name }),
        )
        .await?;

    client.session().set_token(&auth.token);
    Ok(auth)
}

pub async fn current_user(client: &ApiClient) -> Result<User> {
    client.get("/users/me").await
}

pub async fn update_profile(client: &ApiClient, update: &ProfileUpdate) -> Result<User> {
    client.put("/auth/profile", update).await
}

pub async fn update_password(
    client: &ApiClient,
    old_password: &str,
    new_password: &str,
) -> Result<()> {
    client
        .put_unit(
            "/auth/password",
            &json!({ "oldPassword": old_password, "newPassword": new_password }),
        )
        .await
}

pub async fn reset_password(client: &ApiClient, email: &str, new_password: &str) -> Result<()> {
    client
        .post_unit(
            "/auth/reset-password",
            &json!({ "email": email, "newPassword": new_password }),
        )
        .await
}

/// Purely local: the backend holds no session state beyond the token itself.
pub fn logout(client: &ApiClient) {
    client.session().clear();
}
