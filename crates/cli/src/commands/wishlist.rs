//! Wishlist commands.

use clap::Subcommand;

use mercato_core::ProductId;
use mercato_storefront::AppState;

use super::CliError;

#[derive(Debug, Subcommand)]
pub enum WishlistAction {
    /// Add a product id (no-op if already present)
    Add {
        /// Product id
        id: i32,
    },
    /// Remove a product id
    Remove {
        /// Product id
        id: i32,
    },
    /// Flip a product id's membership
    Toggle {
        /// Product id
        id: i32,
    },
    /// List wished products
    List,
    /// Remove everything
    Clear,
}

pub fn run(state: &mut AppState, action: &WishlistAction) -> Result<(), CliError> {
    match action {
        WishlistAction::Add { id } => {
            state.wishlist.add(ProductId::new(*id));
            list(state);
        }
        WishlistAction::Remove { id } => {
            state.wishlist.remove(ProductId::new(*id));
            list(state);
        }
        WishlistAction::Toggle { id } => {
            let id = ProductId::new(*id);
            if state.wishlist.toggle(id) {
                println!("Added {id} to wishlist.");
            } else {
                println!("Removed {id} from wishlist.");
            }
        }
        WishlistAction::List => list(state),
        WishlistAction::Clear => {
            state.wishlist.clear();
            println!("Wishlist cleared.");
        }
    }
    Ok(())
}

fn list(state: &AppState) {
    let wishlist = state.wishlist.wishlist();
    if wishlist.is_empty() {
        println!("Your wishlist is empty.");
        return;
    }
    for &id in wishlist.ids() {
        // Wishlist entries are bare ids; the product may not exist if the
        // catalog changed between sessions.
        match state.catalog().get(id) {
            Some(product) => println!(
                "{:>3}  {:<28} {:>10} birr",
                product.id, product.name, product.price
            ),
            None => println!("{id:>3}  (no longer in the catalog)"),
        }
    }
}
