//! Batch pricing engine for retail sales records.
//!
//! Feeds arrive as CSV, each row is evaluated against an ordered catalog of
//! promotional discount rules, and the top qualifying contributions settle
//! into one discount percentage applied to the line total. Every decision is
//! logged through `tracing` and carried on the result for audits.

pub mod config;
pub mod error;
pub mod pricing;
pub mod telemetry;
