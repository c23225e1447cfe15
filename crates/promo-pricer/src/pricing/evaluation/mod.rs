mod catalog;
mod policy;
mod rules;

pub use catalog::{standard_rules, DiscountRule};

use serde::Serialize;
use tracing::info;

use super::domain::SaleRecord;

/// Stateless evaluator that applies a rule catalog to one record at a time.
pub struct DiscountEngine {
    rules: Vec<DiscountRule>,
}

impl DiscountEngine {
    /// Engine over the standard catalog.
    pub fn standard() -> Self {
        Self::with_rules(standard_rules())
    }

    /// Engine over a caller-supplied catalog, evaluated in the order given.
    pub fn with_rules(rules: Vec<DiscountRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[DiscountRule] {
        &self.rules
    }

    /// Qualify every rule against the record, compute the qualifying values,
    /// and settle them into one discount percentage.
    ///
    /// Each decision point is logged; the returned breakdown carries the same
    /// trail so callers can audit an evaluation without a subscriber.
    pub fn evaluate(&self, record: &SaleRecord) -> DiscountBreakdown {
        let mut qualifying = Vec::new();
        for rule in &self.rules {
            if (rule.qualifies)(record) {
                info!(
                    rule = rule.name,
                    product = %record.product_name,
                    "discount rule qualifies"
                );
                qualifying.push(rule);
            }
        }

        if qualifying.is_empty() {
            info!(product = %record.product_name, "no discount rules qualified");
            return DiscountBreakdown {
                contributions: Vec::new(),
                discount: 0.0,
            };
        }

        let contributions: Vec<RuleContribution> = qualifying
            .into_iter()
            .map(|rule| {
                let value = (rule.value)(record);
                info!(rule = rule.name, value, "discount contribution computed");
                RuleContribution {
                    rule: rule.name,
                    value,
                }
            })
            .collect();

        let values: Vec<f64> = contributions.iter().map(|c| c.value).collect();
        let discount = policy::settle(&values);
        info!(
            discount,
            qualifying = contributions.len(),
            "discount settled from top contributions"
        );

        DiscountBreakdown {
            contributions,
            discount,
        }
    }
}

impl Default for DiscountEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Discrete contribution to an evaluation, allowing transparent audits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleContribution {
    pub rule: &'static str,
    pub value: f64,
}

/// Evaluation output: every qualifying rule's value plus the settled
/// discount percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountBreakdown {
    pub contributions: Vec<RuleContribution>,
    pub discount: f64,
}

impl DiscountBreakdown {
    /// Rule names that qualified, in catalog order.
    pub fn qualifying_rules(&self) -> Vec<&'static str> {
        self.contributions.iter().map(|c| c.rule).collect()
    }
}
