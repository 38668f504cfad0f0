use serde::{Deserialize, Serialize};

/// Profit/loss statistics for one analysis category.
///
/// Invariants maintained by the analytics service:
/// `net_income == profit + loss`, `profit >= 0`, `loss <= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBucket {
    /// Display label ("新股", "可转债", ...)
    pub label: String,

    /// Number of holdings routed into this category
    pub count: usize,

    /// Sum of positive net profit/loss values
    pub profit: f64,

    /// Sum of negative net profit/loss values
    pub loss: f64,

    /// profit + loss
    pub net_income: f64,
}

impl CategoryBucket {
    /// A zeroed bucket with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count: 0,
            profit: 0.0,
            loss: 0.0,
            net_income: 0.0,
        }
    }
}

/// Output of the portfolio aggregator: the fixed category buckets in
/// display order plus totals for percentage-of-total rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioBreakdown {
    pub buckets: Vec<CategoryBucket>,

    /// Sum of `profit` across all emitted buckets
    pub total_profit: f64,

    /// Sum of `loss` across all emitted buckets
    pub total_loss: f64,
}

impl PortfolioBreakdown {
    /// This bucket's share of total profit, in percent.
    /// Returns 0.0 when the total is exactly zero (no NaN/Infinity).
    pub fn profit_ratio(&self, bucket: &CategoryBucket) -> f64 {
        if self.total_profit == 0.0 {
            0.0
        } else {
            bucket.profit / self.total_profit * 100.0
        }
    }

    /// This bucket's share of total loss, in percent.
    /// Returns 0.0 when the total is exactly zero (no NaN/Infinity).
    pub fn loss_ratio(&self, bucket: &CategoryBucket) -> f64 {
        if self.total_loss == 0.0 {
            0.0
        } else {
            bucket.loss / self.total_loss * 100.0
        }
    }
}
