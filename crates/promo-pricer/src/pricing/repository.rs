use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;

use super::domain::SaleRecord;
use super::evaluation::DiscountBreakdown;

/// Repository record pairing the settled sale with the contribution trail
/// that produced its discount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedSale {
    pub record: SaleRecord,
    pub breakdown: DiscountBreakdown,
}

impl PricedSale {
    pub fn saved_amount(&self) -> f64 {
        self.record.gross() - self.record.final_price
    }
}

/// Storage abstraction so the batch service can be exercised in isolation.
pub trait SaleRepository: Send + Sync {
    fn save(&self, sale: &PricedSale) -> Result<(), RepositoryError>;
}

/// Error enumeration for persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("could not write record: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not encode record row: {0}")]
    Csv(#[from] csv::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Writes settled records as CSV rows with the computed columns filled in.
/// The breakdown is not part of the row format.
#[derive(Debug)]
pub struct CsvSaleStore {
    writer: Mutex<csv::Writer<File>>,
}

impl CsvSaleStore {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let writer = csv::Writer::from_path(path)?;
        Ok(Self {
            writer: Mutex::new(writer),
        })
    }
}

impl SaleRepository for CsvSaleStore {
    fn save(&self, sale: &PricedSale) -> Result<(), RepositoryError> {
        let mut writer = self.writer.lock().expect("csv store mutex poisoned");
        writer.serialize(&sale.record)?;
        writer.flush()?;
        Ok(())
    }
}

/// Writes one JSON object per line, breakdown included, for downstream
/// audit tooling.
#[derive(Debug)]
pub struct JsonlSaleStore {
    writer: Mutex<BufWriter<File>>,
}

impl JsonlSaleStore {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let file = File::create(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl SaleRepository for JsonlSaleStore {
    fn save(&self, sale: &PricedSale) -> Result<(), RepositoryError> {
        let mut writer = self.writer.lock().expect("jsonl store mutex poisoned");
        serde_json::to_writer(&mut *writer, sale)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
