//! Listing search example.
//!
//! Streams every biddable A and B listing with a lender yield of at least
//! 10%, highest yield first.
//!
//! Run with: cargo run --example search_listings

use futures_util::StreamExt;
use rust_decimal_macros::dec;

use prosper_rs::models::{Bounds, ProsperRating, SearchListingsRequest};
use prosper_rs::ProsperClient;

#[tokio::main]
async fn main() -> prosper_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = ProsperClient::from_default_config()?;

    let request = SearchListingsRequest {
        prosper_rating: vec![ProsperRating::A, ProsperRating::B],
        lender_yield: Bounds::at_least(dec!(0.10)),
        ..Default::default()
    };

    let mut listings = client.listings().search_stream(request, 50);
    let mut count = 0;
    while let Some(listing) = listings.next().await {
        let listing = listing?;
        count += 1;
        println!(
            "{:>10}  {:>4}  yield {:<8}  {}",
            listing.listing_number,
            listing.prosper_rating.map(|r| r.to_string()).unwrap_or_default(),
            listing.lender_yield.map(|y| y.to_string()).unwrap_or_default(),
            listing.listing_title.as_deref().unwrap_or("-"),
        );
    }

    println!("\n{} listing(s)", count);
    Ok(())
}
