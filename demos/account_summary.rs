//! Account summary example.
//!
//! Reads credentials from `~/.config/prosper-api/config.toml` (with
//! `PROSPER_API_*` environment overrides), then prints the account's cash
//! and its invested principal by rating.
//!
//! Run with: cargo run --example account_summary

use prosper_rs::models::ProsperRating;
use prosper_rs::ProsperClient;

#[tokio::main]
async fn main() -> prosper_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = ProsperClient::from_default_config()?;
    let account = client.accounts().get().await?;

    println!("Available cash:      {:?}", account.available_cash_balance);
    println!("Total account value: {:?}", account.total_account_value);
    println!("Pending deposit:     {:?}", account.pending_deposit);

    if let Some(invested) = &account.invested_notes {
        println!("\nInvested by rating:");
        for rating in ProsperRating::SEARCHABLE {
            if let Some(amount) = invested.get(*rating) {
                println!("  {:>3}: {}", rating, amount);
            }
        }
    }

    Ok(())
}
