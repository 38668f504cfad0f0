use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::overview::PortfolioSnapshot;
use crate::models::user::{CurrentUser, LoginResult};

/// Trait abstraction over the REST backend.
///
/// The dashboard core talks to the backend only through this trait, so
/// tests (and any future transport) can swap in a mock without touching
/// the rest of the crate.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait BackendApi: Send + Sync {
    /// `POST /api/login` — establishes the session cookie.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, CoreError>;

    /// `POST /api/logout`
    async fn logout(&self) -> Result<(), CoreError>;

    /// `GET /api/currentUser`
    async fn current_user(&self) -> Result<CurrentUser, CoreError>;

    /// `GET /api/` — every holding plus the account overview.
    async fn fetch_portfolio(&self) -> Result<PortfolioSnapshot, CoreError>;

    /// `POST /api/updateIncomeCash` — overwrite the accumulated
    /// reverse-repo / interest income figure.
    async fn update_income_cash(&self, income_cash: f64) -> Result<(), CoreError>;

    /// `POST /api/divident` — admin: apply pending dividend/rights
    /// adjustments; returns the backend's adjustment log lines.
    /// (The endpoint spelling is the backend's, kept verbatim.)
    async fn trigger_dividend(&self) -> Result<Vec<String>, CoreError>;
}
