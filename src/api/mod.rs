pub mod auth;
mod client;
pub mod dashboard;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod users;

pub use client::ApiClient;
