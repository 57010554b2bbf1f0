//! Utility Module
//!
//! - [`AppError`] / [`AppResult`] - application error type and result alias
//! - logging setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};

/// Current time as Unix epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
