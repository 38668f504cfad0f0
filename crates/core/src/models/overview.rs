use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// One external cash movement (deposit/withdrawal) of the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowRecord {
    pub date: NaiveDate,

    /// Positive = deposit into the account, negative = withdrawal
    pub amount: f64,
}

/// Account-level figures as served by the backend. All values are
/// computed server-side; the dashboard only displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOverview {
    /// Unrealized profit/loss across open positions
    pub offset_current: f64,

    /// Lifetime profit/loss (realized + unrealized)
    pub offset_total: f64,

    /// Market value of all positions
    pub total_value: f64,

    /// Today's profit/loss
    pub offset_today: f64,

    /// Free cash in the brokerage account
    pub total_cash: f64,

    /// Accumulated reverse-repo / interest income, maintained via
    /// `POST /api/updateIncomeCash`
    pub income_cash: f64,

    /// Net external deposits
    pub origin_cash: f64,

    /// totalValue + totalCash
    pub total_asset: f64,

    pub total_cost: f64,

    #[serde(default, rename = "cashFlowList")]
    pub cash_flow: Vec<CashFlowRecord>,

    /// Annualized XIRR, preformatted by the backend ("12.34%")
    pub xirr_annualized: String,
}

/// The full payload of `GET /api/`: every holding plus the account
/// overview, fetched in one round trip per dashboard refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    #[serde(rename = "stocks")]
    pub holdings: Vec<Holding>,

    #[serde(rename = "overall")]
    pub overview: AccountOverview,
}
