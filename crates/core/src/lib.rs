//! Mercato Core - Shared types library.
//!
//! This crate provides common types used across all Mercato components:
//! - `storefront` - Cart, wishlist, catalog, session, and image engines
//! - `cli` - Command-line storefront client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! async code. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   product categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
