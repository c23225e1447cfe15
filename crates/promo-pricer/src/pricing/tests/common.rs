use std::sync::{Arc, Mutex};

use crate::pricing::domain::SaleRecord;
use crate::pricing::repository::{PricedSale, RepositoryError, SaleRepository};

/// Record that qualifies for no standard rule: small quantity, plain
/// product, cash payment, dates far from expiry and from March 23rd.
pub(super) fn plain_record() -> SaleRecord {
    SaleRecord {
        timestamp: "2024-06-10T09:30:00".to_string(),
        product_name: "Bread - Rye".to_string(),
        expiry_date: "2024-12-01".to_string(),
        quantity: 2,
        unit_price: 3.5,
        channel: "in-store".to_string(),
        payment_method: "Cash".to_string(),
        discount: 0.0,
        final_price: 0.0,
    }
}

pub(super) fn record_with(
    product: &str,
    quantity: u32,
    unit_price: f64,
    payment: &str,
) -> SaleRecord {
    SaleRecord {
        product_name: product.to_string(),
        quantity,
        unit_price,
        payment_method: payment.to_string(),
        ..plain_record()
    }
}

pub(super) fn dated_record(timestamp: &str, expiry_date: &str) -> SaleRecord {
    SaleRecord {
        timestamp: timestamp.to_string(),
        expiry_date: expiry_date.to_string(),
        ..plain_record()
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    saved: Arc<Mutex<Vec<PricedSale>>>,
}

impl MemoryStore {
    pub(super) fn saved(&self) -> Vec<PricedSale> {
        self.saved.lock().expect("store mutex poisoned").clone()
    }
}

impl SaleRepository for MemoryStore {
    fn save(&self, sale: &PricedSale) -> Result<(), RepositoryError> {
        self.saved
            .lock()
            .expect("store mutex poisoned")
            .push(sale.clone());
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl SaleRepository for UnavailableStore {
    fn save(&self, _sale: &PricedSale) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}
