use std::str::FromStr;
use std::sync::Arc;

use tracing::{error, info, warn};

use super::domain::SaleRecord;
use super::evaluation::DiscountEngine;
use super::import::ImportError;
use super::repository::{PricedSale, SaleRepository};

/// Batch behavior when a feed row cannot be read into a `SaleRecord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedRowPolicy {
    /// Fail the whole batch on the first bad row.
    #[default]
    Abort,
    /// Log the bad row, skip it, and keep pricing.
    Reject,
}

impl FromStr for MalformedRowPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" | "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown malformed-row policy '{other}' (expected abort or skip)"
            )),
        }
    }
}

/// Service composing the feed, the discount engine, and the repository.
pub struct BatchPricer<R> {
    repository: Arc<R>,
    engine: DiscountEngine,
    on_malformed: MalformedRowPolicy,
}

impl<R> BatchPricer<R>
where
    R: SaleRepository + 'static,
{
    pub fn new(repository: Arc<R>, on_malformed: MalformedRowPolicy) -> Self {
        Self::with_engine(repository, DiscountEngine::standard(), on_malformed)
    }

    pub fn with_engine(
        repository: Arc<R>,
        engine: DiscountEngine,
        on_malformed: MalformedRowPolicy,
    ) -> Self {
        Self {
            repository,
            engine,
            on_malformed,
        }
    }

    pub fn engine(&self) -> &DiscountEngine {
        &self.engine
    }

    /// Price every row of a feed in order.
    ///
    /// Persistence failures are logged and counted, never fatal; malformed
    /// rows follow the configured policy.
    pub fn price_batch<I>(&self, rows: I) -> Result<BatchSummary, BatchError>
    where
        I: IntoIterator<Item = Result<SaleRecord, ImportError>>,
    {
        let mut summary = BatchSummary::default();

        for row in rows {
            let record = match row {
                Ok(record) => record,
                Err(err) => match self.on_malformed {
                    MalformedRowPolicy::Abort => return Err(BatchError::Import(err)),
                    MalformedRowPolicy::Reject => {
                        warn!(error = %err, "skipping malformed sales row");
                        summary.skipped += 1;
                        continue;
                    }
                },
            };

            let sale = price_sale(&self.engine, record);
            summary.priced += 1;
            summary.gross_total += sale.record.gross();
            summary.net_total += sale.record.final_price;

            if let Err(err) = self.repository.save(&sale) {
                error!(
                    error = %err,
                    product = %sale.record.product_name,
                    "failed to persist priced sale, continuing"
                );
                summary.save_failures += 1;
            }
        }

        info!(
            priced = summary.priced,
            skipped = summary.skipped,
            save_failures = summary.save_failures,
            "sales batch complete"
        );
        Ok(summary)
    }
}

/// Evaluate and settle a single record, returning the storable bundle.
pub fn price_sale(engine: &DiscountEngine, record: SaleRecord) -> PricedSale {
    let breakdown = engine.evaluate(&record);
    let record = record.settle(breakdown.discount);
    info!(
        product = %record.product_name,
        discount = record.discount,
        final_price = record.final_price,
        "sale priced"
    );

    PricedSale { record, breakdown }
}

/// Aggregate counters for one processed feed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BatchSummary {
    pub priced: usize,
    pub skipped: usize,
    pub save_failures: usize,
    pub gross_total: f64,
    pub net_total: f64,
}

/// Error raised by the batch service.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Import(#[from] ImportError),
}
