//! Shared types for the catalog admin system
//!
//! Wire-level models and response envelopes used by both the server
//! and the client crates.

pub mod models;
pub mod query;
pub mod response;

// Re-exports
pub use models::{BannerImage, Category, CategoryRename, Product};
pub use query::{ProductListParams, ProductPage, SortOrder};
pub use response::ApiResponse;
