// ═══════════════════════════════════════════════════════════════════
// Analytics Tests — AnalyticsService bucketing, totals, ratios
// ═══════════════════════════════════════════════════════════════════

use stock_manager_core::models::analytics::{CategoryBucket, PortfolioBreakdown};
use stock_manager_core::models::holding::{HoldingRecord, InstrumentType};
use stock_manager_core::services::analytics_service::AnalyticsService;

fn record(code: &str, is_new: bool, ty: InstrumentType, pnl: f64) -> HoldingRecord {
    HoldingRecord::new(code, is_new, ty, pnl)
}

fn bucket<'a>(breakdown: &'a PortfolioBreakdown, label: &str) -> &'a CategoryBucket {
    breakdown
        .buckets
        .iter()
        .find(|b| b.label == label)
        .unwrap_or_else(|| panic!("no bucket labelled {label}"))
}

// ═══════════════════════════════════════════════════════════════════
//  Empty input
// ═══════════════════════════════════════════════════════════════════

mod empty {
    use super::*;

    #[test]
    fn yields_nine_zeroed_buckets() {
        let breakdown = AnalyticsService::new().breakdown(&[], 0.0);
        assert_eq!(breakdown.buckets.len(), 9);
        for b in &breakdown.buckets {
            assert_eq!(b.count, 0);
            assert_eq!(b.profit, 0.0);
            assert_eq!(b.loss, 0.0);
            assert_eq!(b.net_income, 0.0);
        }
        assert_eq!(breakdown.total_profit, 0.0);
        assert_eq!(breakdown.total_loss, 0.0);
    }

    #[test]
    fn omits_reverse_repo_when_income_is_zero() {
        let breakdown = AnalyticsService::new().breakdown(&[], 0.0);
        assert!(breakdown.buckets.iter().all(|b| b.label != "逆回购"));
    }

    #[test]
    fn bucket_order_is_fixed() {
        let breakdown = AnalyticsService::new().breakdown(&[], 0.0);
        let labels: Vec<&str> = breakdown.buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "新股",
                "沪市（非新股）",
                "深市（非新股）",
                "创业板（非新股）",
                "科创板（非新股）",
                "北交所（非新股）",
                "分级基金",
                "场内基金",
                "可转债",
            ]
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Classification
// ═══════════════════════════════════════════════════════════════════

mod classification {
    use super::*;

    #[test]
    fn routes_by_instrument_type() {
        let holdings = vec![
            record("600036", false, InstrumentType::ShanghaiMain, 120.0),
            record("000001", false, InstrumentType::ShenzhenMain, -30.0),
            record("113050", false, InstrumentType::ConvertibleBond, 15.0),
        ];
        let breakdown = AnalyticsService::new().breakdown(&holdings, 0.0);

        assert_eq!(bucket(&breakdown, "沪市（非新股）").count, 1);
        assert_eq!(bucket(&breakdown, "沪市（非新股）").profit, 120.0);
        assert_eq!(bucket(&breakdown, "深市（非新股）").loss, -30.0);
        assert_eq!(bucket(&breakdown, "可转债").profit, 15.0);
    }

    #[test]
    fn new_listing_flag_overrides_instrument_type() {
        let holdings = vec![record("113099", true, InstrumentType::ConvertibleBond, 88.0)];
        let breakdown = AnalyticsService::new().breakdown(&holdings, 0.0);

        assert_eq!(bucket(&breakdown, "新股").count, 1);
        assert_eq!(bucket(&breakdown, "新股").profit, 88.0);
        assert_eq!(bucket(&breakdown, "可转债").count, 0);
        assert_eq!(bucket(&breakdown, "可转债").profit, 0.0);
    }

    #[test]
    fn unrecognized_type_is_dropped_everywhere() {
        let holdings = vec![
            record("AAPL", false, InstrumentType::Other("US".into()), 999.0),
            record("600036", false, InstrumentType::ShanghaiMain, 10.0),
        ];
        let breakdown = AnalyticsService::new().breakdown(&holdings, 0.0);

        let total_count: usize = breakdown.buckets.iter().map(|b| b.count).sum();
        assert_eq!(total_count, 1);
        assert_eq!(breakdown.total_profit, 10.0);
        assert_eq!(breakdown.total_loss, 0.0);
    }

    #[test]
    fn zero_pnl_counts_but_moves_no_money() {
        let holdings = vec![record("600000", false, InstrumentType::ShanghaiMain, 0.0)];
        let breakdown = AnalyticsService::new().breakdown(&holdings, 0.0);

        let b = bucket(&breakdown, "沪市（非新股）");
        assert_eq!(b.count, 1);
        assert_eq!(b.profit, 0.0);
        assert_eq!(b.loss, 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Accumulation invariants
// ═══════════════════════════════════════════════════════════════════

mod invariants {
    use super::*;

    fn mixed_portfolio() -> Vec<HoldingRecord> {
        vec![
            record("600036", false, InstrumentType::ShanghaiMain, 310.55),
            record("601318", false, InstrumentType::ShanghaiMain, -120.10),
            record("000858", false, InstrumentType::ShenzhenMain, 75.25),
            record("300750", false, InstrumentType::ChiNext, -410.00),
            record("688981", false, InstrumentType::Star, 12.34),
            record("832566", false, InstrumentType::Beijing, -1.99),
            record("150019", false, InstrumentType::FundTiered, 8.88),
            record("510300", false, InstrumentType::FundListed, 0.0),
            record("113050", false, InstrumentType::ConvertibleBond, -66.60),
            record("787001", true, InstrumentType::Star, 450.00),
            record("730001", true, InstrumentType::ShanghaiMain, -5.00),
        ]
    }

    #[test]
    fn net_income_equals_profit_plus_loss() {
        let breakdown = AnalyticsService::new().breakdown(&mixed_portfolio(), 42.0);
        for b in &breakdown.buckets {
            assert_eq!(b.net_income, b.profit + b.loss, "bucket {}", b.label);
        }
    }

    #[test]
    fn profit_nonnegative_loss_nonpositive() {
        let breakdown = AnalyticsService::new().breakdown(&mixed_portfolio(), 42.0);
        for b in &breakdown.buckets {
            assert!(b.profit >= 0.0, "bucket {}", b.label);
            assert!(b.loss <= 0.0, "bucket {}", b.label);
        }
    }

    #[test]
    fn totals_are_the_bucket_sums() {
        let breakdown = AnalyticsService::new().breakdown(&mixed_portfolio(), 42.0);
        let profit_sum: f64 = breakdown.buckets.iter().map(|b| b.profit).sum();
        let loss_sum: f64 = breakdown.buckets.iter().map(|b| b.loss).sum();
        assert_eq!(breakdown.total_profit, profit_sum);
        assert_eq!(breakdown.total_loss, loss_sum);
    }

    #[test]
    fn mixed_signs_split_within_one_bucket() {
        let breakdown = AnalyticsService::new().breakdown(&mixed_portfolio(), 0.0);
        let b = bucket(&breakdown, "沪市（非新股）");
        assert_eq!(b.count, 2);
        assert_eq!(b.profit, 310.55);
        assert_eq!(b.loss, -120.10);
        assert_eq!(b.net_income, 310.55 + (-120.10));
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let service = AnalyticsService::new();
        let a = service.breakdown(&mixed_portfolio(), 42.0);
        let b = service.breakdown(&mixed_portfolio(), 42.0);
        assert_eq!(a, b);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Reverse repo
// ═══════════════════════════════════════════════════════════════════

mod reverse_repo {
    use super::*;

    #[test]
    fn appended_when_income_is_nonzero() {
        let breakdown = AnalyticsService::new().breakdown(&[], 50.0);
        assert_eq!(breakdown.buckets.len(), 10);
        let repo = bucket(&breakdown, "逆回购");
        assert_eq!(repo.count, 1);
        assert_eq!(repo.profit, 50.0);
        assert_eq!(repo.loss, 0.0);
        assert_eq!(repo.net_income, 50.0);
    }

    #[test]
    fn repo_income_is_part_of_the_totals() {
        let holdings = vec![record("600036", false, InstrumentType::ShanghaiMain, 100.0)];
        let breakdown = AnalyticsService::new().breakdown(&holdings, 50.0);
        assert_eq!(breakdown.total_profit, 150.0);
        assert_eq!(breakdown.total_loss, 0.0);
    }

    #[test]
    fn repo_is_always_the_last_bucket() {
        let breakdown = AnalyticsService::new().breakdown(&[], 1.0);
        assert_eq!(breakdown.buckets.last().map(|b| b.label.as_str()), Some("逆回购"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Ratio helpers
// ═══════════════════════════════════════════════════════════════════

mod ratios {
    use super::*;

    #[test]
    fn zero_totals_give_zero_ratios() {
        let breakdown = AnalyticsService::new().breakdown(&[], 0.0);
        for b in &breakdown.buckets {
            assert_eq!(breakdown.profit_ratio(b), 0.0);
            assert_eq!(breakdown.loss_ratio(b), 0.0);
        }
    }

    #[test]
    fn single_bucket_owns_the_whole_total() {
        let holdings = vec![record("600036", false, InstrumentType::ShanghaiMain, 100.0)];
        let breakdown = AnalyticsService::new().breakdown(&holdings, 0.0);
        let b = bucket(&breakdown, "沪市（非新股）");
        assert_eq!(breakdown.profit_ratio(b), 100.0);
    }

    #[test]
    fn ratios_split_proportionally() {
        let holdings = vec![
            record("600036", false, InstrumentType::ShanghaiMain, 75.0),
            record("000001", false, InstrumentType::ShenzhenMain, 25.0),
        ];
        let breakdown = AnalyticsService::new().breakdown(&holdings, 0.0);
        assert_eq!(breakdown.profit_ratio(bucket(&breakdown, "沪市（非新股）")), 75.0);
        assert_eq!(breakdown.profit_ratio(bucket(&breakdown, "深市（非新股）")), 25.0);
    }

    #[test]
    fn loss_ratio_uses_the_loss_total() {
        let holdings = vec![
            record("600036", false, InstrumentType::ShanghaiMain, -80.0),
            record("000001", false, InstrumentType::ShenzhenMain, -20.0),
        ];
        let breakdown = AnalyticsService::new().breakdown(&holdings, 0.0);
        assert_eq!(breakdown.loss_ratio(bucket(&breakdown, "沪市（非新股）")), 80.0);
    }
}
