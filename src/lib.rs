pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod orders;
pub mod session;

pub use api::ApiClient;
pub use cart::Cart;
pub use config::AppConfig;
pub use error::{AppError, Result};
