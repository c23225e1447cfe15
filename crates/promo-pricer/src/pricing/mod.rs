//! Sales pricing pipeline: records, discount rules, evaluation, and
//! persistence.
//!
//! `DiscountEngine` settles a discount percentage per record from a fixed
//! rule catalog; `BatchPricer` drives whole feeds through the engine and a
//! `SaleRepository`.

pub mod domain;
pub mod evaluation;
pub mod import;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::SaleRecord;
pub use evaluation::{
    standard_rules, DiscountBreakdown, DiscountEngine, DiscountRule, RuleContribution,
};
pub use import::{ImportError, SaleCsvSource};
pub use repository::{
    CsvSaleStore, JsonlSaleStore, PricedSale, RepositoryError, SaleRepository,
};
pub use service::{price_sale, BatchError, BatchPricer, BatchSummary, MalformedRowPolicy};
