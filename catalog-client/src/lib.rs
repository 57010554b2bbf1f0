//! Catalog Client - typed access to the catalog server API
//!
//! [`HttpClient`] wraps the REST endpoints; [`ProductListView`] holds
//! the paged listing state an admin UI drives.

pub mod config;
pub mod error;
pub mod http;
pub mod listing;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, ImageFile, NewProduct, ProductChanges};
pub use listing::{FetchTicket, ProductListView};
