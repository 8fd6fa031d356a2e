use rust_decimal::Decimal;

use crate::{
    error::{AppError, Result},
    models::Product,
};

/// A selected product with its quantity. The product snapshot reflects the
/// catalog as last seen; the recorded price only becomes final on checkout.
#[derive(Debug, Clone)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: i32,
}

impl CartEntry {
    pub fn line_total(&self) -> Decimal {
        self.product.sale_price * Decimal::from(self.quantity)
    }
}

/// Client-local cart. Entries are ordered by insertion and keyed by product
/// id: re-adding a product increments its quantity instead of appending a
/// second entry. No I/O happens here.
#[derive(Debug, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of `product`. Fails without touching the cart when
    /// the quantity is below one or the combined quantity would exceed the
    /// product's last-known stock. Stock is not re-checked against the live
    /// catalog; the backend has the final say at submission.
    pub fn add(&mut self, product: &Product, quantity: i32) -> Result<()> {
        if quantity < 1 {
            return Err(AppError::Validation(format!(
                "Quantity for {} must be at least 1",
                product.name
            )));
        }

        match self.entry_mut(&product.id) {
            Some(entry) => {
                // checked_add: an absurd requested quantity must reject, not
                // overflow past the stock guard.
                match entry.quantity.checked_add(quantity) {
                    Some(combined) if combined <= product.stock => {
                        entry.quantity = combined;
                        // Refresh the snapshot so the cart reflects current
                        // pricing.
                        entry.product = product.clone();
                    }
                    _ => {
                        return Err(AppError::Validation(format!(
                            "Only {} of {} in stock",
                            product.stock, product.name
                        )));
                    }
                }
            }
            None => {
                if quantity > product.stock {
                    return Err(AppError::Validation(format!(
                        "Only {} of {} in stock",
                        product.stock, product.name
                    )));
                }
                self.entries.push(CartEntry {
                    product: product.clone(),
                    quantity,
                });
            }
        }

        Ok(())
    }

    /// Removes the entry for `product_id`; no-op when absent.
    pub fn remove(&mut self, product_id: &str) {
        self.entries.retain(|entry| entry.product.id != product_id);
    }

    /// Sets the quantity for `product_id`, clamped to the entry's last-known
    /// stock. A quantity below one removes the entry. Unknown ids are a
    /// no-op.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i32) {
        if quantity < 1 {
            self.remove(product_id);
            return;
        }

        if let Some(entry) = self.entry_mut(product_id) {
            entry.quantity = quantity.min(entry.product.stock);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Recomputed from the entries on every call; there is no cached running
    /// total to drift out of sync.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    pub fn items(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, product_id: &str) -> Option<&mut CartEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.product.id == product_id)
    }
}
