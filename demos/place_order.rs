//! Order placement example.
//!
//! Bids $25 on the listing given on the command line, then polls the
//! orders list until the order completes.
//!
//! Run with: cargo run --example place_order -- <listing id>
//!
//! WARNING: this places a real bid.

use std::time::Duration;

use rust_decimal_macros::dec;

use prosper_rs::models::ListOrdersRequest;
use prosper_rs::{Error, ProsperClient};

#[tokio::main]
async fn main() -> prosper_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let listing_id: i64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .ok_or_else(|| Error::InvalidInput("usage: place_order <listing id>".to_string()))?;

    let client = ProsperClient::from_default_config()?;

    let order = client.orders().place(listing_id, dec!(25)).await?;
    println!("Submitted order {} ({:?})", order.order_id, order.order_status);

    for _ in 0..10 {
        tokio::time::sleep(Duration::from_secs(5)).await;

        let orders = client.orders().list(&ListOrdersRequest::default()).await?;
        let Some(current) = orders.result.iter().find(|o| o.order_id == order.order_id) else {
            continue;
        };
        for bid in &current.bid_requests {
            println!(
                "  listing {}: {:?} / {:?}",
                bid.listing_id, bid.bid_status, bid.bid_result
            );
        }
        if current.is_completed() {
            println!("Order completed");
            break;
        }
    }

    Ok(())
}
