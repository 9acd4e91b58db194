//! Mercato Storefront library.
//!
//! The state layer of the storefront: a read-only product catalog, the cart
//! and wishlist engines, the catalog query pipeline, the mock session, and
//! the image URL resolution layer. Every engine persists its snapshot to a
//! durable local key-value store and rehydrates from it at startup.
//!
//! There is no HTTP surface here; the view layer (the `mercato` CLI, or any
//! other frontend) constructs an [`state::AppState`] and calls engine
//! operations directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod images;
pub mod orders;
pub mod query;
pub mod session;
pub mod state;
pub mod storage;
pub mod wishlist;

pub use cart::{Cart, CartLine, CartStore};
pub use catalog::{Catalog, ColorVariant, Product};
pub use config::{ConfigError, StorefrontConfig};
pub use error::StoreError;
pub use images::{ImageError, ImageSlot, ImageStore};
pub use orders::{Order, OrderStatus};
pub use query::{ProductPage, QueryParams, SortOrder, run_query};
pub use session::{SessionError, SessionStore, SessionUser};
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use wishlist::{Wishlist, WishlistStore};
