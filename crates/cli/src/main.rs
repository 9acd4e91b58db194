//! Mercato CLI - the storefront's command-line view layer.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! mercato products list --search tea --sort price-ascending
//!
//! # Manage the cart
//! mercato cart add 3 --quantity 2
//! mercato cart show
//!
//! # Wishlist
//! mercato wishlist toggle 7
//!
//! # Session (mock - any email logs in)
//! mercato account login jane@example.com
//! mercato account show
//!
//! # Admin image overrides (requires an active session)
//! mercato images set product https://cdn.example/42.jpg --key 42
//! ```
//!
//! All state lives in the data directory (`MERCATO_DATA_DIR`, default
//! `./data`); each invocation rehydrates from it and writes back through.

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI's output belongs on stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use mercato_storefront::{AppState, StorefrontConfig};

mod commands;

#[derive(Parser)]
#[command(name = "mercato")]
#[command(author, version, about = "Mercato storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: commands::products::ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: commands::wishlist::WishlistAction,
    },
    /// Log in, register, and view the account
    Account {
        #[command(subcommand)]
        action: commands::account::AccountAction,
    },
    /// Resolve and override image URLs
    Images {
        #[command(subcommand)]
        action: commands::images::ImagesAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut state = AppState::open(config)?;

    match cli.command {
        Commands::Products { action } => commands::products::run(&state, &action)?,
        Commands::Cart { action } => commands::cart::run(&mut state, &action)?,
        Commands::Wishlist { action } => commands::wishlist::run(&mut state, &action)?,
        Commands::Account { action } => commands::account::run(&mut state, action).await?,
        Commands::Images { action } => commands::images::run(&mut state, action)?,
    }
    Ok(())
}
