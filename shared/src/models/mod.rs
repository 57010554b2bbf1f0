//! Catalog entity models (wire representation)

pub mod banner_image;
pub mod category;
pub mod product;

pub use banner_image::BannerImage;
pub use category::{Category, CategoryRename};
pub use product::Product;
