pub mod api;
pub mod calendar;
pub mod errors;
pub mod models;
pub mod services;

use chrono::NaiveDateTime;

use api::traits::BackendApi;
use calendar::{HolidayCalendar, StaticHolidayCalendar};
use errors::CoreError;
use models::{
    analytics::PortfolioBreakdown,
    holding::{Holding, HoldingRecord},
    overview::{AccountOverview, PortfolioSnapshot},
    session::TradingTimeStatus,
};
use services::{analytics_service::AnalyticsService, session_service::SessionService};

/// Main entry point for the Stock Manager dashboard core.
///
/// Holds the most recent portfolio snapshot plus the pure computation
/// services the views render from. The surrounding UI owns the refresh
/// cadence: it calls [`refresh`](Self::refresh) per data reload and
/// [`trading_status`](Self::trading_status) from a once-a-minute timer.
#[must_use]
pub struct StockManager {
    snapshot: Option<PortfolioSnapshot>,
    analytics_service: AnalyticsService,
    session_service: SessionService,
    calendar: Box<dyn HolidayCalendar>,
}

impl std::fmt::Debug for StockManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockManager")
            .field("holdings", &self.holdings().len())
            .field("has_snapshot", &self.snapshot.is_some())
            .finish()
    }
}

impl StockManager {
    /// Build with a caller-supplied holiday calendar.
    pub fn new(calendar: Box<dyn HolidayCalendar>) -> Self {
        Self {
            snapshot: None,
            analytics_service: AnalyticsService::new(),
            session_service: SessionService::new(),
            calendar,
        }
    }

    /// Build with the built-in Chinese exchange closure table.
    pub fn with_chinese_calendar() -> Self {
        Self::new(Box::new(StaticHolidayCalendar::chinese_exchange()))
    }

    // ── Data refresh ────────────────────────────────────────────────

    /// Fetch the portfolio from the backend and keep it as the current
    /// snapshot. On error the previous snapshot stays in place.
    pub async fn refresh(&mut self, backend: &dyn BackendApi) -> Result<(), CoreError> {
        self.snapshot = Some(backend.fetch_portfolio().await?);
        Ok(())
    }

    /// Push a new income-cash figure to the backend and mirror it into
    /// the held snapshot so the next breakdown reflects it immediately.
    pub async fn update_income_cash(
        &mut self,
        backend: &dyn BackendApi,
        income_cash: f64,
    ) -> Result<(), CoreError> {
        backend.update_income_cash(income_cash).await?;
        if let Some(snapshot) = &mut self.snapshot {
            snapshot.overview.income_cash = income_cash;
        }
        Ok(())
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn snapshot(&self) -> Option<&PortfolioSnapshot> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn overview(&self) -> Option<&AccountOverview> {
        self.snapshot.as_ref().map(|s| &s.overview)
    }

    /// The held positions; empty until the first successful refresh.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        self.snapshot
            .as_ref()
            .map(|s| s.holdings.as_slice())
            .unwrap_or(&[])
    }

    // ── Computation ─────────────────────────────────────────────────

    /// Category breakdown of the current snapshot. The overview's
    /// income-cash figure feeds the synthetic reverse-repo bucket; with
    /// no snapshot this is the all-zero breakdown.
    #[must_use]
    pub fn breakdown(&self) -> PortfolioBreakdown {
        let records: Vec<HoldingRecord> = self.holdings().iter().map(Holding::to_record).collect();
        let income_cash = self.overview().map(|o| o.income_cash).unwrap_or(0.0);
        self.analytics_service.breakdown(&records, income_cash)
    }

    /// Session-clock query against the held holiday calendar.
    #[must_use]
    pub fn trading_status(&self, now: NaiveDateTime) -> TradingTimeStatus {
        self.session_service.trading_status(now, self.calendar.as_ref())
    }
}
