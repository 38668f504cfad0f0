pub mod analytics;
pub mod holding;
pub mod overview;
pub mod session;
pub mod settings;
pub mod user;
