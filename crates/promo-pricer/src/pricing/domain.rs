use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const ISO_DATE: &str = "%Y-%m-%d";

/// One retail transaction line as it arrives from the sales feed.
///
/// The date-bearing fields stay raw strings. Rules parse them on demand and
/// treat anything unparseable as "does not apply", so one bad column never
/// poisons the rest of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub timestamp: String,
    pub product_name: String,
    pub expiry_date: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub channel: String,
    pub payment_method: String,
    /// Settled discount percentage; 0 until the record is priced.
    #[serde(default)]
    pub discount: f64,
    /// Line total after discount; 0 until the record is priced.
    #[serde(default)]
    pub final_price: f64,
}

impl SaleRecord {
    /// Calendar date of the sale: the text before the first `T` of the
    /// timestamp parsed as `YYYY-MM-DD`, the whole field when no `T` exists.
    pub fn transaction_date(&self) -> Option<NaiveDate> {
        let date_part = self.timestamp.split('T').next().unwrap_or_default();
        NaiveDate::parse_from_str(date_part, ISO_DATE).ok()
    }

    /// Product expiry parsed as `YYYY-MM-DD`.
    pub fn expiry(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.expiry_date, ISO_DATE).ok()
    }

    /// Undiscounted line total.
    pub fn gross(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Pricing step: the same record with `discount` applied and
    /// `final_price` populated. All other fields carry over unchanged.
    pub fn settle(self, discount: f64) -> SaleRecord {
        let final_price = self.gross() * (1.0 - discount / 100.0);
        SaleRecord {
            discount,
            final_price,
            ..self
        }
    }
}
