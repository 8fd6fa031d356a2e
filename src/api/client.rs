use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    session::Session,
};

/// Every successful response is `{"data": <payload>}`; lists are plain JSON
/// arrays inside `data`. Anything else is a contract violation surfaced as a
/// decode error rather than guessed at.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error bodies carry a `message` when the backend produced the failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            session: Session::new(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.http.get(self.url(path))).await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.http.get(self.url(path)).query(query)).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    pub(crate) async fn put_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send_unit(self.http.put(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send_unit(self.http.post(self.url(path)).json(body))
            .await
    }

    /// Bodyless PATCH returning the updated resource; used for the order
    /// status transitions.
    pub(crate) async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.http.patch(self.url(path))).await
    }

    pub(crate) async fn patch_unit(&self, path: &str) -> Result<()> {
        self.send_unit(self.http.patch(self.url(path))).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send_unit(self.http.delete(self.url(path))).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.dispatch(request).await?;
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    async fn send_unit(&self, request: RequestBuilder) -> Result<()> {
        self.dispatch(request).await?;
        Ok(())
    }

    async fn dispatch(&self, mut request: RequestBuilder) -> Result<reqwest::Response> {
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Global 401 handling: drop the session before surfacing the
            // error so the caller lands on the login view signed out.
            self.session.clear();
            tracing::warn!("Received 401, clearing session");
            let message = error_message(response).await;
            return Err(AppError::Unauthorized(
                message.unwrap_or_else(|| "Session expired".to_string()),
            ));
        }

        if !status.is_success() {
            let message = error_message(response)
                .await
                .unwrap_or_else(|| "Request failed".to_string());
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

async fn error_message(response: reqwest::Response) -> Option<String> {
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.message)
}
