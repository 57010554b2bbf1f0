//! API Routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`products`] - product management
//! - [`categories`] - category management
//! - [`banner_images`] - storefront banner images

pub mod banner_images;
pub mod categories;
pub mod health;
pub mod products;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
