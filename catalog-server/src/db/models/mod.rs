//! Persisted record types
//!
//! These are the storage-side shapes; the wire-level models live in the
//! `shared` crate and are produced via `From` conversions.

pub mod banner_image;
pub mod category;
pub mod product;

pub use banner_image::{BannerImage, BannerImageCreate};
pub use category::{Category, CategoryCreate, CategoryRename, CategoryUpdate};
pub use product::{Product, ProductCreate, ProductUpdate};
