use serde::{Deserialize, Serialize};

/// The logged-in user as reported by `GET /api/currentUser`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub name: String,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    /// Authority level ("admin" unlocks the adjustment endpoints)
    #[serde(default)]
    pub access: Option<String>,
}

/// Successful login payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    #[serde(default)]
    pub current_authority: Option<String>,
}
