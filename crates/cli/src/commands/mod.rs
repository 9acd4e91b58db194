//! CLI command handlers.
//!
//! Each submodule owns one subcommand group and is a thin view over the
//! storefront engines: parse arguments, call the engine, print the result.

use thiserror::Error;

use mercato_core::ProductId;

pub mod account;
pub mod cart;
pub mod images;
pub mod products;
pub mod wishlist;

/// Errors raised by command handlers before or after engine calls.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command needs an active session.
    #[error("not logged in - run `mercato account login <email>` first")]
    NotAuthenticated,

    /// A product id did not match the catalog.
    #[error("no product with id {0}")]
    UnknownProduct(ProductId),

    /// A price flag was negative.
    #[error("invalid price: {0}")]
    InvalidPrice(#[from] mercato_core::PriceError),

    /// An engine rejected the operation.
    #[error(transparent)]
    Store(#[from] mercato_storefront::StoreError),
}

impl From<mercato_storefront::ImageError> for CliError {
    fn from(e: mercato_storefront::ImageError) -> Self {
        Self::Store(e.into())
    }
}

impl From<mercato_storefront::SessionError> for CliError {
    fn from(e: mercato_storefront::SessionError) -> Self {
        Self::Store(e.into())
    }
}

/// Guard for screens the original gates behind login.
pub fn require_session(state: &mercato_storefront::AppState) -> Result<(), CliError> {
    if state.session.is_authenticated() {
        Ok(())
    } else {
        Err(CliError::NotAuthenticated)
    }
}
