use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::BackendApi;
use crate::errors::CoreError;
use crate::models::overview::PortfolioSnapshot;
use crate::models::settings::ClientConfig;
use crate::models::user::{CurrentUser, LoginResult};

/// Business status codes used by every backend response envelope.
pub const STATUS_SUCCESS: i64 = 1;
pub const STATUS_ERROR: i64 = 0;
pub const STATUS_UNAUTHORIZED: i64 = 302;

/// Map a backend business status to a library error.
pub fn check_status(status: i64, message: Option<String>) -> Result<(), CoreError> {
    match status {
        STATUS_SUCCESS => Ok(()),
        STATUS_UNAUTHORIZED => Err(CoreError::Unauthorized),
        other => Err(CoreError::Backend {
            status: other,
            message: message.unwrap_or_default(),
        }),
    }
}

/// `BackendApi` over HTTP.
///
/// Auth is a Django session cookie; the client keeps a cookie store so
/// one `login` call authenticates everything after it. All endpoints
/// answer `{status, message?, ...}` with the business codes above, HTTP
/// 200 even on business errors.
pub struct RestBackend {
    client: Client,
    base_url: String,
}

impl RestBackend {
    pub fn new(config: &ClientConfig) -> Self {
        let builder = Client::builder().cookie_store(true);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

// ── Backend response envelopes ──────────────────────────────────────

#[derive(Deserialize)]
struct StatusResponse {
    status: i64,
    message: Option<String>,
}

#[derive(Deserialize)]
struct LoginResponse {
    status: i64,
    message: Option<String>,
    #[serde(rename = "currentAuthority")]
    current_authority: Option<String>,
}

#[derive(Deserialize)]
struct UserResponse {
    status: i64,
    message: Option<String>,
    info: Option<CurrentUser>,
}

#[derive(Deserialize)]
struct PortfolioResponse {
    status: i64,
    message: Option<String>,
    data: Option<PortfolioSnapshot>,
}

#[derive(Deserialize)]
struct DividendResponse {
    status: i64,
    message: Option<String>,
    data: Option<Vec<String>>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl BackendApi for RestBackend {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, CoreError> {
        let resp: LoginResponse = self
            .client
            .post(self.url("/api/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?
            .json()
            .await?;
        check_status(resp.status, resp.message)?;
        Ok(LoginResult {
            current_authority: resp.current_authority,
        })
    }

    async fn logout(&self) -> Result<(), CoreError> {
        let resp: StatusResponse = self
            .client
            .post(self.url("/api/logout"))
            .send()
            .await?
            .json()
            .await?;
        check_status(resp.status, resp.message)
    }

    async fn current_user(&self) -> Result<CurrentUser, CoreError> {
        let resp: UserResponse = self
            .client
            .get(self.url("/api/currentUser"))
            .send()
            .await?
            .json()
            .await?;
        check_status(resp.status, resp.message)?;
        resp.info.ok_or(CoreError::MissingData("currentUser.info"))
    }

    async fn fetch_portfolio(&self) -> Result<PortfolioSnapshot, CoreError> {
        let resp: PortfolioResponse = self
            .client
            .get(self.url("/api/"))
            .send()
            .await?
            .json()
            .await?;
        check_status(resp.status, resp.message)?;
        resp.data.ok_or(CoreError::MissingData("portfolio.data"))
    }

    async fn update_income_cash(&self, income_cash: f64) -> Result<(), CoreError> {
        let resp: StatusResponse = self
            .client
            .post(self.url("/api/updateIncomeCash"))
            .json(&json!({ "incomeCash": income_cash }))
            .send()
            .await?
            .json()
            .await?;
        check_status(resp.status, resp.message)
    }

    async fn trigger_dividend(&self) -> Result<Vec<String>, CoreError> {
        let resp: DividendResponse = self
            .client
            .post(self.url("/api/divident"))
            .send()
            .await?
            .json()
            .await?;
        check_status(resp.status, resp.message)?;
        // An empty adjustment run legitimately returns no data.
        Ok(resp.data.unwrap_or_default())
    }
}
