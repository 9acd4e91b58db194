//! Cart commands.

use clap::Subcommand;

use mercato_core::ProductId;
use mercato_storefront::{AppState, CartLine};

use super::CliError;

#[derive(Debug, Subcommand)]
pub enum CartAction {
    /// Add a product to the cart (merges with an existing line)
    Add {
        /// Product id
        id: i32,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product's line from the cart
    Remove {
        /// Product id
        id: i32,
    },
    /// Set a line's quantity (0 removes the line)
    Update {
        /// Product id
        id: i32,

        /// New quantity
        quantity: u32,
    },
    /// Show the cart contents
    Show,
    /// Remove every line
    Clear,
}

pub fn run(state: &mut AppState, action: &CartAction) -> Result<(), CliError> {
    match action {
        CartAction::Add { id, quantity } => {
            let id = ProductId::new(*id);
            let product = state
                .catalog()
                .get(id)
                .ok_or(CliError::UnknownProduct(id))?
                .clone();
            state.cart.add(CartLine::new(&product, *quantity));
            println!("Added {} x{quantity} to cart.", product.name);
            show(state);
        }
        CartAction::Remove { id } => {
            state.cart.remove(ProductId::new(*id));
            show(state);
        }
        CartAction::Update { id, quantity } => {
            state.cart.set_quantity(ProductId::new(*id), *quantity);
            show(state);
        }
        CartAction::Show => show(state),
        CartAction::Clear => {
            state.cart.clear();
            println!("Cart cleared.");
        }
    }
    Ok(())
}

fn show(state: &AppState) {
    let cart = state.cart.cart();
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for line in cart.lines() {
        println!(
            "{:>3}  {:<28} {:>4} x {:>10} = {:>10} birr",
            line.product_id,
            line.name,
            line.quantity,
            line.price,
            line.line_total()
        );
    }
    println!();
    println!(
        "{} item(s), total {} birr",
        state.cart.count(),
        state.cart.total()
    );
}
