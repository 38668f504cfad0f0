use crate::models::analytics::{CategoryBucket, PortfolioBreakdown};
use crate::models::holding::{HoldingRecord, InstrumentType};

/// Label of the newly-listed bucket; `is_new` holdings land here no
/// matter what their instrument type says.
const NEW_LISTING_LABEL: &str = "新股";

/// Label of the synthetic reverse-repo income bucket.
const REVERSE_REPO_LABEL: &str = "逆回购";

/// The non-new categories, in display order. Holdings whose type is
/// outside this table are routed to no bucket at all.
const CATEGORIES: [(&str, InstrumentType); 8] = [
    ("沪市（非新股）", InstrumentType::ShanghaiMain),
    ("深市（非新股）", InstrumentType::ShenzhenMain),
    ("创业板（非新股）", InstrumentType::ChiNext),
    ("科创板（非新股）", InstrumentType::Star),
    ("北交所（非新股）", InstrumentType::Beijing),
    ("分级基金", InstrumentType::FundTiered),
    ("场内基金", InstrumentType::FundListed),
    ("可转债", InstrumentType::ConvertibleBond),
];

/// Groups holdings into the fixed category buckets and sums per-bucket
/// profit and loss.
///
/// Pure business logic — no I/O, no shared state. Accumulation follows
/// input order, so identical input always produces bit-identical sums.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Classify every holding and accumulate per-bucket statistics.
    ///
    /// Routing: `is_new` → the newly-listed bucket, regardless of type;
    /// otherwise exact type match against [`CATEGORIES`]. Positive net
    /// P/L adds to `profit`, negative to `loss`, zero to neither; count
    /// increments for every routed holding.
    ///
    /// When `other_cash_income` is non-zero a synthetic reverse-repo
    /// bucket is appended (count 1, all of it profit). Totals sum over
    /// every emitted bucket, the synthetic one included.
    pub fn breakdown(
        &self,
        holdings: &[HoldingRecord],
        other_cash_income: f64,
    ) -> PortfolioBreakdown {
        let mut buckets: Vec<CategoryBucket> = Vec::with_capacity(CATEGORIES.len() + 2);
        buckets.push(CategoryBucket::new(NEW_LISTING_LABEL));
        for (label, _) in &CATEGORIES {
            buckets.push(CategoryBucket::new(*label));
        }

        for holding in holdings {
            let idx = if holding.is_new {
                Some(0)
            } else {
                CATEGORIES
                    .iter()
                    .position(|(_, ty)| *ty == holding.instrument_type)
                    .map(|i| i + 1)
            };
            // Types outside the category table contribute nowhere.
            let Some(idx) = idx else { continue };

            let bucket = &mut buckets[idx];
            if holding.net_profit_loss > 0.0 {
                bucket.profit += holding.net_profit_loss;
            }
            if holding.net_profit_loss < 0.0 {
                bucket.loss += holding.net_profit_loss;
            }
            bucket.count += 1;
        }

        for bucket in &mut buckets {
            bucket.net_income = bucket.profit + bucket.loss;
        }

        if other_cash_income != 0.0 {
            buckets.push(CategoryBucket {
                label: REVERSE_REPO_LABEL.to_string(),
                count: 1,
                profit: other_cash_income,
                loss: 0.0,
                net_income: other_cash_income,
            });
        }

        let total_profit = buckets.iter().map(|b| b.profit).sum();
        let total_loss = buckets.iter().map(|b| b.loss).sum();

        PortfolioBreakdown {
            buckets,
            total_profit,
            total_loss,
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
