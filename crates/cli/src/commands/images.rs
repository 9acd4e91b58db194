//! Image override commands.
//!
//! `resolve` is open to everyone (every screen calls it); the editing
//! commands are the admin surface and require an active session.

use clap::Subcommand;

use mercato_storefront::{AppState, ImageSlot};

use super::{CliError, require_session};

#[derive(Debug, Subcommand)]
pub enum ImagesAction {
    /// Resolve a slot (and key) to its current URL
    Resolve {
        /// Image slot: home-hero, about-hero, category, product, or logo
        slot: ImageSlot,

        /// Key for the category (slug) and product (id) slots
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Store an override URL for a slot
    Set {
        /// Image slot
        slot: ImageSlot,

        /// The URL to store (stored as-is, not validated)
        url: String,

        /// Key for the category (slug) and product (id) slots
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Remove an override, restoring the fallback
    Unset {
        /// Image slot
        slot: ImageSlot,

        /// Key for the category (slug) and product (id) slots
        #[arg(short, long)]
        key: Option<String>,
    },
    /// List all stored overrides
    List,
}

pub fn run(state: &mut AppState, action: ImagesAction) -> Result<(), CliError> {
    match action {
        ImagesAction::Resolve { slot, key } => {
            println!("{}", state.images.resolve(slot, key.as_deref()));
        }
        ImagesAction::Set { slot, url, key } => {
            require_session(state)?;
            state.images.set_override(slot, key.as_deref(), url)?;
            println!("Saved.");
        }
        ImagesAction::Unset { slot, key } => {
            require_session(state)?;
            state.images.remove_override(slot, key.as_deref())?;
            println!("Removed.");
        }
        ImagesAction::List => {
            require_session(state)?;
            let rows = state.images.overrides();
            if rows.is_empty() {
                println!("No overrides stored; every slot uses its fallback.");
            }
            for (slot, key, url) in rows {
                match key {
                    Some(key) => println!("{slot} [{key}] -> {url}"),
                    None => println!("{slot} -> {url}"),
                }
            }
        }
    }
    Ok(())
}
