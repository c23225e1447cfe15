use chrono::Datelike;

use super::super::domain::SaleRecord;

/// Days-to-expiry window that earns the urgency discount.
const EXPIRY_WINDOW_DAYS: i64 = 30;

const CHEESE_DISCOUNT: f64 = 10.0;
const WINE_DISCOUNT: f64 = 5.0;
const VISA_DISCOUNT: f64 = 5.0;
const CALENDAR_DISCOUNT: f64 = 50.0;

fn days_to_expiry(record: &SaleRecord) -> Option<i64> {
    let sold = record.transaction_date()?;
    let expires = record.expiry()?;
    Some(expires.signed_duration_since(sold).num_days())
}

pub(crate) fn expiry_window_qualifies(record: &SaleRecord) -> bool {
    matches!(days_to_expiry(record), Some(days) if days > 0 && days < EXPIRY_WINDOW_DAYS)
}

/// Grows as expiry nears: 1.0 at 29 days out, 29.0 the day before expiry.
pub(crate) fn expiry_window_value(record: &SaleRecord) -> f64 {
    let days = days_to_expiry(record).unwrap_or(EXPIRY_WINDOW_DAYS);
    (EXPIRY_WINDOW_DAYS - days) as f64
}

pub(crate) fn category_prefix_qualifies(record: &SaleRecord) -> bool {
    let name = record.product_name.to_lowercase();
    name.starts_with("cheese") || name.starts_with("wine")
}

/// Looks up the text before the first `" - "` separator. Qualification is
/// case-insensitive but this lookup is not, so `"cheese - soft"` qualifies
/// yet contributes 0.0. Long-standing behavior, pinned by tests.
pub(crate) fn category_prefix_value(record: &SaleRecord) -> f64 {
    let category = record.product_name.split(" - ").next().unwrap_or_default();
    match category {
        "Cheese" => CHEESE_DISCOUNT,
        "Wine" => WINE_DISCOUNT,
        _ => 0.0,
    }
}

pub(crate) fn visa_payment_qualifies(record: &SaleRecord) -> bool {
    record.payment_method == "Visa"
}

pub(crate) fn visa_payment_value(_record: &SaleRecord) -> f64 {
    VISA_DISCOUNT
}

pub(crate) fn quantity_tier_qualifies(record: &SaleRecord) -> bool {
    record.quantity > 5
}

pub(crate) fn quantity_tier_value(record: &SaleRecord) -> f64 {
    match record.quantity {
        6..=9 => 5.0,
        10..=14 => 7.0,
        _ => 10.0,
    }
}

/// Anniversary promotion: March 23rd of any year.
pub(crate) fn calendar_date_qualifies(record: &SaleRecord) -> bool {
    matches!(
        record.transaction_date(),
        Some(date) if date.month() == 3 && date.day() == 23
    )
}

pub(crate) fn calendar_date_value(_record: &SaleRecord) -> f64 {
    CALENDAR_DISCOUNT
}
