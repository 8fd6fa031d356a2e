use crate::{
    api::{self, ApiClient},
    error::{AppError, Result},
    models::{Order, OrderAction},
};

/// The client-held order list, always a reflection of what the backend last
/// reported. Status is never computed locally: a transition is requested,
/// and whatever record the server returns replaces the stored one.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &ApiClient) -> Result<()> {
        self.orders = api::orders::list(client).await?;
        tracing::debug!("Loaded {} orders", self.orders.len());
        Ok(())
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// The actions a view may offer for this order; empty when the order is
    /// unknown or its status admits none.
    pub fn available_actions(&self, id: &str) -> &'static [OrderAction] {
        self.get(id)
            .map(|order| order.status.available_actions())
            .unwrap_or(&[])
    }

    /// Requests the PENDING -> PROCEEDED transition. Rejected locally when
    /// the stored status does not admit it; a backend rejection (for example
    /// another admin got there first) surfaces as an API error and leaves
    /// the list unchanged.
    pub async fn proceed(&mut self, client: &ApiClient, id: &str) -> Result<()> {
        self.ensure_allowed(id, OrderAction::Proceed)?;
        let updated = api::orders::proceed(client, id).await?;
        self.substitute(updated);
        Ok(())
    }

    /// Requests cancellation; valid from PENDING and PROCEEDED.
    pub async fn cancel(&mut self, client: &ApiClient, id: &str) -> Result<()> {
        self.ensure_allowed(id, OrderAction::Cancel)?;
        let updated = api::orders::cancel(client, id).await?;
        self.substitute(updated);
        Ok(())
    }

    fn ensure_allowed(&self, id: &str, action: OrderAction) -> Result<()> {
        let order = self
            .get(id)
            .ok_or_else(|| AppError::Validation(format!("Order {} is not loaded", id)))?;

        if !order.status.allows(action) {
            let verb = match action {
                OrderAction::Proceed => "proceeded",
                OrderAction::Cancel => "cancelled",
            };
            return Err(AppError::Validation(format!(
                "Order {} can no longer be {}",
                id, verb
            )));
        }

        Ok(())
    }

    /// Replaces the stored record with the server's response. If the order
    /// left the list while the request was in flight (the view was torn
    /// down or the list was refreshed), the response is discarded silently.
    fn substitute(&mut self, updated: Order) {
        match self.orders.iter_mut().find(|order| order.id == updated.id) {
            Some(slot) => *slot = updated,
            None => tracing::debug!("Dropping update for order {} no longer in list", updated.id),
        }
    }
}
