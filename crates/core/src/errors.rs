use thiserror::Error;

/// Unified error type for the entire stock-manager-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// The pure computation services (session clock, portfolio analytics)
/// are total functions and never produce a `CoreError`; every variant
/// here originates at the REST boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Backend / Network ───────────────────────────────────────────
    /// The backend answered with a non-success business status.
    #[error("Backend error (status {status}): {message}")]
    Backend { status: i64, message: String },

    /// Business status 302: not logged in or the session cookie expired.
    #[error("Not logged in or session expired")]
    Unauthorized,

    #[error("Network error: {0}")]
    Network(String),

    // ── Payload decoding ────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The backend reported success but omitted the expected payload.
    #[error("Backend response missing payload: {0}")]
    MissingData(&'static str),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CoreError::Deserialization(e.to_string())
        } else {
            CoreError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
