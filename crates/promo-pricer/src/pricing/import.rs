use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::domain::SaleRecord;

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read sales feed: {}", err),
            ImportError::Csv(err) => write!(f, "invalid sales row: {}", err),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Streaming source of sales records from a headered CSV feed.
///
/// Rows surface individually as `Result<SaleRecord, ImportError>` so the
/// batch service decides what a malformed row means; one bad line never
/// hides the lines after it.
pub struct SaleCsvSource<R: Read> {
    rows: csv::DeserializeRecordsIntoIter<R, SaleRecord>,
}

impl<R: Read> std::fmt::Debug for SaleCsvSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaleCsvSource").finish_non_exhaustive()
    }
}

impl SaleCsvSource<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> SaleCsvSource<R> {
    pub fn from_reader(reader: R) -> Self {
        let rows = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader)
            .into_deserialize();
        Self { rows }
    }
}

impl<R: Read> Iterator for SaleCsvSource<R> {
    type Item = Result<SaleRecord, ImportError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|row| row.map_err(ImportError::from))
    }
}
