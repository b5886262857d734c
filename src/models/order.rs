//! Order and bid models.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::decode::{Amount, EnumValue, Timestamp};
use crate::define_record;
use crate::models::{BidResult, BidStatus, OrderStatus, BID_RESULT, BID_STATUS, ORDER_STATUS};

define_record! {
    /// An order of one or more bids on listings.
    pub struct Order as ORDER {
        /// Order identifier
        order_id: String => Str,
        /// Bids in the order
        bid_requests: Vec<BidRequest> => [Record(BID_REQUEST)],
        /// Total requested
        order_amount: Option<Amount> => Number,
        /// Total placed
        order_amount_placed: Option<Amount> => Number,
        /// Total invested
        order_amount_invested: Option<Amount> => Number,
        /// Order status
        order_status: Option<EnumValue<OrderStatus>> => Enum(ORDER_STATUS),
        /// Originating channel, e.g. "AI" for API orders
        source: Option<String> => Str,
        /// When the order was submitted
        order_date: Option<Timestamp> => DateTime,
    }
}

define_record! {
    /// A bid on a single listing.
    pub struct BidRequest as BID_REQUEST {
        /// Listing bid on
        listing_id: i64 => Integer,
        /// Amount requested
        bid_amount: Amount => Number,
        /// Bid status
        bid_status: Option<EnumValue<BidStatus>> => Enum(BID_STATUS),
        /// Bid outcome once processed
        bid_result: Option<EnumValue<BidResult>> => Enum(BID_RESULT),
        /// Amount actually placed
        bid_amount_placed: Option<Amount> => Number,
    }
}

impl Order {
    /// Returns `true` once every bid has been processed.
    pub fn is_completed(&self) -> bool {
        self.order_status.as_ref().and_then(EnumValue::known) == Some(OrderStatus::Completed)
    }
}

/// Request body for submitting an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    /// Bids to place
    pub bid_requests: Vec<NewBid>,
}

/// A bid to place on a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NewBid {
    /// Listing to bid on
    pub listing_id: i64,
    /// Amount to bid
    #[serde(with = "rust_decimal::serde::float")]
    pub bid_amount: Decimal,
}

impl NewOrder {
    /// An order with a single bid.
    pub fn single(listing_id: i64, bid_amount: Decimal) -> Self {
        Self {
            bid_requests: vec![NewBid {
                listing_id,
                bid_amount,
            }],
        }
    }
}
