use storefront_client::{api, dashboard::SalesReport, ApiClient, AppConfig};
use tracing::Level;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build API client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, &client).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

/// Smoke pass against a running backend: sign in when credentials are
/// configured, list the catalog, and summarise the order book.
async fn run(config: &AppConfig, client: &ApiClient) -> storefront_client::Result<()> {
    if let Some(login) = &config.login {
        let auth = api::auth::login(client, &login.email, &login.password).await?;
        tracing::info!("Signed in as {} ({:?})", auth.user.name, auth.user.role);
    }

    let products = api::products::list(client).await?;
    tracing::info!("Catalog: {} products", products.len());
    for product in products.iter().filter(|p| p.is_visible).take(10) {
        tracing::info!(
            "  {}: {} (stock {})",
            product.name,
            product.sale_price,
            product.stock
        );
    }

    if client.session().is_authenticated() {
        let orders = api::orders::list(client).await?;
        let report = SalesReport::from_orders(&orders);
        tracing::info!(
            "Orders: {} total, {} completed, {} cancelled",
            report.total_orders,
            report.completed_orders,
            report.cancelled_orders
        );
        tracing::info!(
            "Revenue {}, cost {}, net {}",
            report.total_revenue,
            report.total_cost,
            report.profit
        );
    }

    Ok(())
}
