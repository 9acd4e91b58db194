//! Account commands: the mock login/register flow and the account screen.

use clap::Subcommand;

use mercato_storefront::orders::sample_orders;
use mercato_storefront::AppState;

use super::CliError;

#[derive(Debug, Subcommand)]
pub enum AccountAction {
    /// Log in with an email (mock - always succeeds)
    Login {
        /// Email address; the display name is derived from its local part
        email: String,
    },
    /// Register with an email and display name (mock - always succeeds)
    Register {
        /// Email address
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// End the session
    Logout,
    /// Show the signed-in user and order history
    Show,
}

pub async fn run(state: &mut AppState, action: AccountAction) -> Result<(), CliError> {
    match action {
        AccountAction::Login { email } => {
            let user = state.session.login(&email).await?;
            println!("Welcome back, {}!", user.name);
        }
        AccountAction::Register { email, name } => {
            let user = state.session.register(&email, &name).await?;
            println!("Welcome, {}!", user.name);
        }
        AccountAction::Logout => {
            state.session.logout();
            println!("Logged out.");
        }
        AccountAction::Show => show(state)?,
    }
    Ok(())
}

fn show(state: &AppState) -> Result<(), CliError> {
    // The account screen is gated behind login.
    let Some(user) = state.session.current() else {
        return Err(CliError::NotAuthenticated);
    };

    println!("{} <{}>", user.name, user.email);
    println!();
    println!("Order history:");
    for order in sample_orders() {
        println!(
            "  {}  {}  {:<10} {:>4} item(s)  {:>10} birr",
            order.id,
            order.date.format("%B %-d, %Y"),
            order.status,
            order.items,
            order.total
        );
    }
    Ok(())
}
