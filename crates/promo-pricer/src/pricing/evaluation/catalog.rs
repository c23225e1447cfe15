use super::super::domain::SaleRecord;
use super::rules;

/// One promotional policy: a qualification predicate plus the percentage it
/// contributes when that predicate holds.
///
/// `value` is only defined for qualifying records; the engine never invokes
/// it unless `qualifies` returned true.
#[derive(Debug, Clone, Copy)]
pub struct DiscountRule {
    pub name: &'static str,
    pub qualifies: fn(&SaleRecord) -> bool,
    pub value: fn(&SaleRecord) -> f64,
}

/// The standard rule set, in audit order. Extending the catalog means
/// appending a `DiscountRule` here; the engine itself never changes.
pub fn standard_rules() -> Vec<DiscountRule> {
    vec![
        DiscountRule {
            name: "expiry-window",
            qualifies: rules::expiry_window_qualifies,
            value: rules::expiry_window_value,
        },
        DiscountRule {
            name: "category-prefix",
            qualifies: rules::category_prefix_qualifies,
            value: rules::category_prefix_value,
        },
        DiscountRule {
            name: "payment-method",
            qualifies: rules::visa_payment_qualifies,
            value: rules::visa_payment_value,
        },
        DiscountRule {
            name: "quantity-tier",
            qualifies: rules::quantity_tier_qualifies,
            value: rules::quantity_tier_value,
        },
        DiscountRule {
            name: "calendar-date",
            qualifies: rules::calendar_date_qualifies,
            value: rules::calendar_date_value,
        },
    ]
}
