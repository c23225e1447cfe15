use std::path::Path;

use promo_pricer::pricing::{
    CsvSaleStore, JsonlSaleStore, MalformedRowPolicy, PricedSale, RepositoryError, SaleRepository,
};

/// Output encodings selectable from the command line.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
pub(crate) enum OutputFormat {
    /// Settled records as CSV rows
    #[default]
    Csv,
    /// One JSON object per sale, breakdown included
    Jsonl,
}

/// File-backed store selected by the `--format` flag.
pub(crate) enum FileStore {
    Csv(CsvSaleStore),
    Jsonl(JsonlSaleStore),
}

impl FileStore {
    pub(crate) fn create(path: &Path, format: OutputFormat) -> Result<Self, RepositoryError> {
        match format {
            OutputFormat::Csv => Ok(Self::Csv(CsvSaleStore::create(path)?)),
            OutputFormat::Jsonl => Ok(Self::Jsonl(JsonlSaleStore::create(path)?)),
        }
    }
}

impl SaleRepository for FileStore {
    fn save(&self, sale: &PricedSale) -> Result<(), RepositoryError> {
        match self {
            FileStore::Csv(store) => store.save(sale),
            FileStore::Jsonl(store) => store.save(sale),
        }
    }
}

pub(crate) fn parse_policy(raw: &str) -> Result<MalformedRowPolicy, String> {
    raw.parse()
}
