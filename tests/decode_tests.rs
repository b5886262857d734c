//! Decoding of recorded API payloads.

mod common;

use chrono::{Datelike, NaiveDate, Timelike};
use rust_decimal_macros::dec;

use prosper_rs::decode::{Amount, DateValue, DecodeConfig, EnumValue, ModelDeserializer, RawWire, Timestamp};
use prosper_rs::models::{
    Account, BidResult, BidStatus, BorrowerState, FicoScore, IncomeRange, ListLoansResponse,
    ListNotesResponse, ListOrdersResponse, ListPaymentsResponse, ListingCategory, ListingStatus,
    Occupation, ProsperRating, SearchListingsResponse,
};

use common::fixture;

fn deserializer() -> ModelDeserializer {
    common::init_logging();
    ModelDeserializer::new(DecodeConfig::default())
}

#[test]
fn test_listing_with_nested_credit_values() {
    let page: SearchListingsResponse = deserializer()
        .deserialize_as(&fixture("search_listings.json"))
        .unwrap();
    let listing = &page.result[0];

    assert_eq!(listing.listing_number, 11111111);
    assert_eq!(listing.lender_yield, Some(Amount::Decimal(dec!(0.1295))));
    assert_eq!(listing.occupation, Some(EnumValue::Known(Occupation::NurseRn)));
    assert_eq!(listing.listing_category_id, Some(EnumValue::Known(ListingCategory::Other)));
    assert_eq!(listing.income_range, Some(EnumValue::Known(IncomeRange::Over100000)));
    assert_eq!(listing.listing_status, Some(EnumValue::Known(ListingStatus::Cancelled)));
    assert_eq!(listing.borrower_state, Some(EnumValue::Known(BorrowerState::AL)));
    assert_eq!(listing.prosper_rating, Some(EnumValue::Known(ProsperRating::AA)));
    assert_eq!(listing.has_mortgage, Some(true));

    let start = listing.listing_start_date.as_ref().and_then(Timestamp::parsed).unwrap();
    assert_eq!((start.hour(), start.minute(), start.second()), (22, 0, 47));

    let credit = listing.credit_bureau_values_transunion_indexed.as_ref().unwrap();
    assert_eq!(credit.fico_score, Some(EnumValue::Known(FicoScore::From780To799)));
    assert_eq!(credit.g094s_number_of_public_record_bankruptcies, Some(Amount::Decimal(dec!(-4))));
    assert_eq!(credit.re101s_revolving_balance, Some(Amount::Decimal(dec!(6565))));
}

#[test]
fn test_notes_dates_and_unrated_notes() {
    let page: ListNotesResponse = deserializer()
        .deserialize_as(&fixture("list_notes.json"))
        .unwrap();
    let note = &page.result[0];

    assert_eq!(note.loan_note_id, "35659-26");
    assert_eq!(note.prosper_rating, Some(EnumValue::Known(ProsperRating::NotApplicable)));
    assert_eq!(note.service_fees_paid_pro_rata_share, Some(Amount::Decimal(dec!(-0.589991))));
    assert_eq!(
        note.origination_date.as_ref().and_then(DateValue::parsed),
        NaiveDate::from_ymd_opt(2008, 8, 19)
    );
    assert_eq!(note.is_sold, Some(false));
}

#[test]
fn test_account_rating_buckets() {
    let account: Account = deserializer()
        .deserialize_as(&fixture("account.json"))
        .unwrap();

    let invested = account.invested_notes.unwrap();
    assert_eq!(invested.e, Some(Amount::Decimal(dec!(1111.056157))));
    assert_eq!(invested.aa, Some(Amount::Decimal(dec!(111.641243))));
    assert_eq!(account.last_withdraw_amount, Some(Amount::Decimal(dec!(-14.31))));
    let withdrawn = account.last_withdraw_date.as_ref().and_then(Timestamp::parsed).unwrap();
    assert_eq!(withdrawn.year(), 2012);
}

#[test]
fn test_orders_resolve_bid_enums() {
    let page: ListOrdersResponse = deserializer()
        .deserialize_as(&fixture("list_orders.json"))
        .unwrap();
    let bid = &page.result[0].bid_requests[0];

    assert_eq!(bid.bid_status, Some(EnumValue::Known(BidStatus::Invested)));
    assert_eq!(bid.bid_result, Some(EnumValue::Known(BidResult::BidSucceeded)));
    assert_eq!(bid.bid_amount_placed, Some(Amount::Decimal(dec!(25))));
}

#[test]
fn test_loans() {
    let page: ListLoansResponse = deserializer()
        .deserialize_as(&fixture("list_loans.json"))
        .unwrap();
    let loan = &page.result[0];

    assert_eq!(loan.loan_number, 11111);
    assert_eq!(loan.service_fees_paid, Some(Amount::Decimal(dec!(-37.59))));
    assert_eq!(loan.loan_status_description.as_deref(), Some("COMPLETED"));
    assert_eq!(loan.loan_default_reason_description, None);
}

#[test]
fn test_payments_string_amounts_and_iso_timestamps() {
    let page: ListPaymentsResponse = deserializer()
        .deserialize_as(&fixture("list_payments.json"))
        .unwrap();
    assert_eq!(page.total_count, 2);

    let payment = &page.result[0];
    assert_eq!(payment.transaction_id, 318744581);
    assert_eq!(payment.principal_amount, Some(Amount::Decimal(dec!(0.2169))));
    assert_eq!(payment.resulting_principal_balance, Some(Amount::Decimal(dec!(26.0107))));
    assert_eq!(payment.prior_match_back_id, None);
    assert_eq!(payment.post_days_past_due, None);

    let available = payment.funds_available_date.as_ref().and_then(Timestamp::parsed).unwrap();
    assert_eq!((available.month(), available.day(), available.hour()), (2, 3, 8));
}

#[test]
fn test_float_mode() {
    let serde = ModelDeserializer::new(DecodeConfig::default().with_decimals(false));
    let account: Account = serde.deserialize_as(&fixture("account.json")).unwrap();

    assert_eq!(account.available_cash_balance, Some(Amount::Float(111.1111)));
    assert_eq!(account.invested_notes.unwrap().na, Some(Amount::Float(0.0)));
}

#[test]
fn test_conversions_disabled_keep_wire_values() {
    let serde = ModelDeserializer::new(DecodeConfig::default().with_dates(false).with_enums(false));
    let page: ListNotesResponse = serde.deserialize_as(&fixture("list_notes.json")).unwrap();
    let note = &page.result[0];

    assert_eq!(note.prosper_rating, Some(EnumValue::Raw(RawWire::Str("N/A".to_string()))));
    assert_eq!(note.origination_date, Some(DateValue::Raw("2008-08-19".to_string())));
    // Raw values still resolve on demand.
    assert_eq!(
        note.prosper_rating.as_ref().and_then(EnumValue::resolve),
        Some(ProsperRating::NotApplicable)
    );
}

#[test]
fn test_unknown_listing_field_fails_typed_decode() {
    let input = fixture("search_listings.json").replacen(
        "\"listing_number\": 11111111,",
        "\"listing_number\": 11111111, \"brand_new_field\": 1,",
        1,
    );
    assert!(deserializer().deserialize_as::<SearchListingsResponse>(&input).is_err());
}
