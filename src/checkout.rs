use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    api::{self, ApiClient},
    cart::Cart,
    error::{AppError, Result},
    models::{CreateOrderRequest, Order, OrderItemInput},
};

/// Shipping details collected at checkout. Notes are the only optional
/// field.
#[derive(Debug, Clone)]
pub struct ShippingDetails {
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub phone: String,
    pub notes: Option<String>,
}

impl ShippingDetails {
    fn validate(&self) -> Result<()> {
        require(&self.address, "Address is required")?;
        require(&self.city, "City is required")?;
        require(&self.zip_code, "Zip code is required")?;
        require(&self.phone, "Phone number is required")?;
        Ok(())
    }
}

fn require(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}

/// Turns the cart into the order-creation payload. All local validation
/// happens here, before any network call: an empty cart is rejected, and a
/// single entry without a resolvable product id rejects the whole
/// submission.
pub fn build_order_request(cart: &Cart, shipping: &ShippingDetails) -> Result<CreateOrderRequest> {
    if cart.is_empty() {
        return Err(AppError::Validation("Your cart is empty".to_string()));
    }

    shipping.validate()?;

    let mut items = Vec::with_capacity(cart.len());
    for entry in cart.items() {
        if entry.product.id.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "Cart item {} has no product id; refresh the catalog and try again",
                entry.product.name
            )));
        }
        items.push(OrderItemInput {
            product_id: entry.product.id.clone(),
            quantity: entry.quantity,
        });
    }

    Ok(CreateOrderRequest {
        items,
        address: shipping.address.clone(),
        city: shipping.city.clone(),
        zip_code: shipping.zip_code.clone(),
        phone: shipping.phone.clone(),
        notes: shipping.notes.clone(),
    })
}

/// Order submission flow. Holds the in-flight flag that keeps a second
/// submit from firing while one is outstanding, which is what the checkout
/// form's disabled submit button enforces in the UI.
#[derive(Debug, Default)]
pub struct Checkout {
    in_flight: AtomicBool,
}

impl Checkout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates locally, submits the order as one atomic request, and
    /// clears the cart only after the backend confirms. On any failure the
    /// cart is left untouched so the user can retry without re-entering
    /// items.
    pub async fn submit(
        &self,
        client: &ApiClient,
        cart: &mut Cart,
        shipping: &ShippingDetails,
    ) -> Result<Order> {
        let request = build_order_request(cart, shipping)?;
        let _guard = self.begin()?;

        let order = api::orders::create(client, &request).await?;

        cart.clear();
        tracing::info!("Order {} placed, total {}", order.id, order.total_amount);
        Ok(order)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<SubmitGuard<'_>> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(AppError::Validation(
                "An order is already being submitted".to_string(),
            ));
        }
        Ok(SubmitGuard {
            flag: &self.in_flight,
        })
    }
}

/// Releases the in-flight flag on both success and failure paths.
struct SubmitGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::dec;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use crate::config::{ApiConfig, AppConfig};
    use crate::models::Product;

    use super::*;

    fn product(id: &str, stock: i32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: String::new(),
            purchase_price: dec!(40),
            sale_price: dec!(100),
            margin: dec!(60),
            stock,
            is_visible: true,
            images: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn shipping() -> ShippingDetails {
        ShippingDetails {
            address: "12 Rustaveli Ave".to_string(),
            city: "Tbilisi".to_string(),
            zip_code: "0108".to_string(),
            phone: "+995 555 123456".to_string(),
            notes: None,
        }
    }

    #[test]
    fn empty_cart_is_rejected_before_any_request_is_built() {
        let cart = Cart::new();
        let err = build_order_request(&cart, &shipping()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn missing_product_id_rejects_the_whole_submission() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 5), 1).unwrap();
        cart.add(&product("", 5), 1).unwrap();

        let err = build_order_request(&cart, &shipping()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn blank_shipping_fields_are_rejected() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 5), 1).unwrap();

        let mut details = shipping();
        details.city = "  ".to_string();

        let err = build_order_request(&cart, &details).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn request_maps_entries_to_id_and_quantity() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 5), 2).unwrap();
        cart.add(&product("p2", 5), 1).unwrap();

        let request = build_order_request(&cart, &shipping()).unwrap();

        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[0].product_id, "p1");
        assert_eq!(request.items[0].quantity, 2);
        assert_eq!(request.items[1].product_id, "p2");
    }

    #[test]
    fn second_submission_is_blocked_while_one_is_in_flight() {
        let checkout = Checkout::new();

        let guard = checkout.begin().unwrap();
        assert!(checkout.is_in_flight());
        assert!(checkout.begin().is_err());

        drop(guard);
        assert!(!checkout.is_in_flight());
        assert!(checkout.begin().is_ok());
    }

    // One-shot HTTP server for exercising submit end to end: accepts a
    // single connection, drains the request, replies with the canned
    // response, and closes.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];

            // Read headers plus the content-length body before replying so
            // the client never hits a closed socket mid-write.
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);

                if let Some(header_end) =
                    request.windows(4).position(|w| w == b"\r\n\r\n")
                {
                    let headers = String::from_utf8_lossy(&request[..header_end]);
                    let content_length = headers
                        .lines()
                        .filter_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            if name.eq_ignore_ascii_case("content-length") {
                                value.trim().parse::<usize>().ok()
                            } else {
                                None
                            }
                        })
                        .next()
                        .unwrap_or(0);

                    if request.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> ApiClient {
        let config = AppConfig {
            api: ApiConfig {
                base_url,
                timeout_secs: 5,
            },
            login: None,
        };
        ApiClient::new(&config).unwrap()
    }

    const ORDER_BODY: &str = r#"{"data":{
        "id": "o1",
        "userId": "u1",
        "user": {"id": "u1", "name": "Nino", "email": "nino@example.com"},
        "status": "PENDING",
        "totalAmount": 200,
        "orderItems": [],
        "createdAt": "2024-01-10T08:00:00Z"
    }}"#;

    #[tokio::test]
    async fn successful_submission_clears_the_cart() {
        let base_url = serve_once("200 OK", ORDER_BODY).await;
        let client = client_for(base_url);

        let mut cart = Cart::new();
        cart.add(&product("p1", 5), 2).unwrap();

        let order = Checkout::new()
            .submit(&client, &mut cart, &shipping())
            .await
            .unwrap();

        assert_eq!(order.id, "o1");
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn failed_submission_leaves_the_cart_untouched() {
        let base_url =
            serve_once("400 Bad Request", r#"{"message":"Insufficient stock"}"#).await;
        let client = client_for(base_url);

        let mut cart = Cart::new();
        cart.add(&product("p1", 5), 2).unwrap();

        let err = Checkout::new()
            .submit(&client, &mut cart, &shipping())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Api { status: 400, .. }));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total(), dec!(200));
    }
}
