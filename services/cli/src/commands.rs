use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::Args;
use tracing::info;

use promo_pricer::config::AppConfig;
use promo_pricer::error::AppError;
use promo_pricer::pricing::{
    price_sale, BatchPricer, DiscountEngine, MalformedRowPolicy, SaleCsvSource, SaleRecord,
};
use promo_pricer::telemetry;

use crate::infra::{FileStore, OutputFormat};

#[derive(Args, Debug)]
pub(crate) struct RunArgs {
    /// Sales feed to price (CSV with a header row)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Destination for the settled records
    #[arg(long)]
    pub(crate) output: PathBuf,
    /// Output encoding
    #[arg(long, value_enum, default_value = "csv")]
    pub(crate) format: OutputFormat,
    /// What to do with rows that fail to parse; overrides APP_ON_MALFORMED
    #[arg(long, value_parser = crate::infra::parse_policy)]
    pub(crate) on_malformed: Option<MalformedRowPolicy>,
}

#[derive(Args, Debug)]
pub(crate) struct ExplainArgs {
    /// Product name, e.g. "Cheese - Aged"
    #[arg(long)]
    pub(crate) product: String,
    /// Units sold
    #[arg(long)]
    pub(crate) quantity: u32,
    /// Price per unit
    #[arg(long)]
    pub(crate) unit_price: f64,
    /// Payment method as recorded on the transaction
    #[arg(long, default_value = "Cash")]
    pub(crate) payment: String,
    /// Sales channel
    #[arg(long, default_value = "in-store")]
    pub(crate) channel: String,
    /// Transaction timestamp (ISO 8601). Defaults to now.
    #[arg(long)]
    pub(crate) timestamp: Option<String>,
    /// Product expiry date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub(crate) expiry: String,
    /// Print the full priced sale as JSON instead of the summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_batch(args: RunArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let RunArgs {
        input,
        output,
        format,
        on_malformed,
    } = args;
    let on_malformed = on_malformed.unwrap_or(config.batch.on_malformed);

    info!(
        input = %input.display(),
        output = %output.display(),
        "pricing sales feed"
    );

    let store = Arc::new(FileStore::create(&output, format)?);
    let pricer = BatchPricer::new(store, on_malformed);
    let rows = SaleCsvSource::from_path(&input)?;

    let summary = pricer.price_batch(rows)?;

    println!("Sales feed priced");
    println!("- {} record(s) -> {}", summary.priced, output.display());
    if summary.skipped > 0 {
        println!("- {} malformed row(s) skipped", summary.skipped);
    }
    if summary.save_failures > 0 {
        println!(
            "- {} record(s) could not be persisted (see logs)",
            summary.save_failures
        );
    }
    println!(
        "- gross {:.2} -> net {:.2}",
        summary.gross_total, summary.net_total
    );

    Ok(())
}

pub(crate) fn run_explain(args: ExplainArgs) -> Result<(), AppError> {
    let record = sale_from_args(&args);
    let engine = DiscountEngine::standard();
    let sale = price_sale(&engine, record);

    if args.json {
        match serde_json::to_string_pretty(&sale) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("priced sale payload unavailable: {err}"),
        }
        return Ok(());
    }

    println!(
        "{} x{} @ {:.2} ({})",
        sale.record.product_name,
        sale.record.quantity,
        sale.record.unit_price,
        sale.record.payment_method
    );
    if sale.breakdown.contributions.is_empty() {
        println!("No discount rules qualified");
    } else {
        println!("Qualifying rules:");
        for contribution in &sale.breakdown.contributions {
            println!("  - {}: {:.1}", contribution.rule, contribution.value);
        }
    }
    println!("Discount: {:.2}%", sale.record.discount);
    println!(
        "Final price: {:.2} (gross {:.2})",
        sale.record.final_price,
        sale.record.gross()
    );

    Ok(())
}

fn sale_from_args(args: &ExplainArgs) -> SaleRecord {
    let timestamp = args
        .timestamp
        .clone()
        .unwrap_or_else(|| Local::now().format("%Y-%m-%dT%H:%M:%S").to_string());

    SaleRecord {
        timestamp,
        product_name: args.product.clone(),
        expiry_date: args.expiry.clone(),
        quantity: args.quantity,
        unit_price: args.unit_price,
        channel: args.channel.clone(),
        payment_method: args.payment.clone(),
        discount: 0.0,
        final_price: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explain_args() -> ExplainArgs {
        ExplainArgs {
            product: "Cheese - Aged".to_string(),
            quantity: 10,
            unit_price: 20.0,
            payment: "Visa".to_string(),
            channel: "in-store".to_string(),
            timestamp: Some("2024-06-10T09:30:00".to_string()),
            expiry: String::new(),
            json: false,
        }
    }

    #[test]
    fn sale_from_args_builds_an_unpriced_record() {
        let record = sale_from_args(&explain_args());

        assert_eq!(record.product_name, "Cheese - Aged");
        assert_eq!(record.quantity, 10);
        assert_eq!(record.discount, 0.0);
        assert_eq!(record.final_price, 0.0);
    }

    #[test]
    fn missing_timestamp_defaults_to_a_parseable_date() {
        let mut args = explain_args();
        args.timestamp = None;

        let record = sale_from_args(&args);

        assert!(record.transaction_date().is_some());
    }

    #[test]
    fn explained_sale_matches_the_batch_pipeline() {
        let engine = DiscountEngine::standard();
        let sale = price_sale(&engine, sale_from_args(&explain_args()));

        assert_eq!(sale.record.discount, 8.5);
        assert_eq!(sale.record.final_price, 183.0);
    }
}
