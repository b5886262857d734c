//! Endpoint tests for `ProsperClient` against a mock Prosper API.

mod common;

use std::time::Duration;

use futures_util::StreamExt;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prosper_rs::decode::{Amount, EnumValue};
use prosper_rs::models::{
    BidStatus, ListLoansRequest, ListNotesRequest, ListOrdersRequest, ListPaymentsRequest,
    OrderStatus, ProsperRating, SearchListingsRequest,
};
use prosper_rs::{Error, ProsperClient, RetryConfig};

use common::*;

fn note(loan_note_id: &str) -> serde_json::Value {
    json!({"loan_note_id": loan_note_id, "prosper_rating": "A", "principal_balance_pro_rata_share": 25.0})
}

fn notes_page(notes: Vec<serde_json::Value>, total_count: i64) -> ResponseTemplate {
    let result_count = notes.len();
    ResponseTemplate::new(200).set_body_json(json!({
        "result_count": result_count,
        "total_count": total_count,
        "result": notes,
    }))
}

#[tokio::test]
async fn test_get_account() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server, dir.path()).await;

    Mock::given(method("GET"))
        .and(path("/v1/accounts/prosper/"))
        .and(header("authorization", "bearer test_token"))
        .and(header("accept", "application/json"))
        .respond_with(json_response(fixture("account.json")))
        .expect(1)
        .mount(&server)
        .await;

    let account = client.accounts().get().await.unwrap();
    assert_eq!(account.total_account_value, Some(Amount::Decimal(dec!(1111.11))));
    assert_eq!(
        account.invested_notes.unwrap().get(ProsperRating::E),
        Some(&Amount::Decimal(dec!(1111.056157)))
    );
}

#[tokio::test]
async fn test_search_listings_sends_default_filters() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server, dir.path()).await;

    Mock::given(method("GET"))
        .and(path("/listingsvc/v2/listings/"))
        .and(query_param("sort_by", "lender_yield desc"))
        .and(query_param("biddable", "true"))
        .and(query_param("prosper_rating", "AA,A,B,C,D,E,HR"))
        .and(query_param_is_missing("invested"))
        .respond_with(json_response(fixture("search_listings.json")))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .listings()
        .search(&SearchListingsRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.result[0].listing_number, 11111111);
    assert_eq!(page.result[0].borrower_rate, Some(Amount::Decimal(dec!(0.1395))));
}

#[tokio::test]
async fn test_search_listings_invested_filter() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server, dir.path()).await;

    Mock::given(method("GET"))
        .and(path("/listingsvc/v2/listings/"))
        .and(query_param("invested", "true"))
        .and(query_param("limit", "10"))
        .respond_with(json_response(fixture("search_listings.json")))
        .expect(1)
        .mount(&server)
        .await;

    let request = SearchListingsRequest {
        invested: Some(true),
        limit: Some(10),
        ..Default::default()
    };
    let page = client.listings().search(&request).await.unwrap();
    assert_eq!(page.result.len(), 1);
}

#[tokio::test]
async fn test_list_notes() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server, dir.path()).await;

    Mock::given(method("GET"))
        .and(path("/v1/notes/"))
        .and(query_param("sort_by", "prosper_rating desc"))
        .and(query_param_is_missing("limit"))
        .and(query_param_is_missing("offset"))
        .respond_with(json_response(fixture("list_notes.json")))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.notes().list(&ListNotesRequest::default()).await.unwrap();
    assert_eq!(page.result.len(), 1);
    assert_eq!(
        page.result[0].principal_balance_pro_rata_share,
        Some(Amount::Decimal(dec!(69.738100)))
    );
}

#[tokio::test]
async fn test_place_order() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server, dir.path()).await;

    Mock::given(method("POST"))
        .and(path("/v1/orders/"))
        .and(header("authorization", "bearer test_token"))
        .and(body_string_contains(r#""listing_id":11111111"#))
        .and(body_string_contains(r#""bid_amount":25"#))
        .respond_with(json_response(fixture("order.json")))
        .expect(1)
        .mount(&server)
        .await;

    let order = client.orders().place(11111111, dec!(25)).await.unwrap();
    assert_eq!(order.order_id, "AAAAAAAA-AAAA-AAAA-AAAA-AAAAAAAAAAA");
    assert_eq!(order.bid_requests[0].bid_status, Some(EnumValue::Known(BidStatus::Pending)));
    assert_eq!(order.order_status, Some(EnumValue::Known(OrderStatus::InProgress)));
}

#[tokio::test]
async fn test_list_orders() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server, dir.path()).await;

    Mock::given(method("GET"))
        .and(path("/v1/orders/"))
        .and(query_param("sort_by", "prosper_rating desc"))
        .respond_with(json_response(fixture("list_orders.json")))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.orders().list(&ListOrdersRequest::default()).await.unwrap();
    assert_eq!(page.result.len(), 1);
    assert!(page.result[0].is_completed());
}

#[tokio::test]
async fn test_list_loans() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server, dir.path()).await;

    Mock::given(method("GET"))
        .and(path("/v1/loans/"))
        .and(query_param("sort_by", "prosper_rating desc"))
        .respond_with(json_response(fixture("list_loans.json")))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.loans().list(&ListLoansRequest::default()).await.unwrap();
    assert_eq!(page.result.len(), 1);
    assert_eq!(page.result[0].loan_number, 11111);
}

#[tokio::test]
async fn test_list_payments() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server, dir.path()).await;

    Mock::given(method("GET"))
        .and(path("/loans/payments"))
        .and(query_param("loan_number", "2300367"))
        .and(query_param_is_missing("transaction_effective_date"))
        .respond_with(json_response(fixture("list_payments.json")))
        .expect(1)
        .mount(&server)
        .await;

    let request = ListPaymentsRequest {
        loan_number: vec![2300367],
        ..Default::default()
    };
    let page = client.payments().list(&request).await.unwrap();
    assert_eq!(page.result.len(), 2);
    assert_eq!(page.result[0].loan_number, 2300367);
    assert_eq!(page.result[0].payment_amount, Some(Amount::Decimal(dec!(0.7812))));
}

#[tokio::test]
async fn test_list_stream_walks_every_page() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server, dir.path()).await;

    Mock::given(method("GET"))
        .and(path("/v1/notes/"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "2"))
        .respond_with(notes_page(vec![note("1-1"), note("1-2")], 3))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/notes/"))
        .and(query_param("offset", "2"))
        .and(query_param("limit", "2"))
        .respond_with(notes_page(vec![note("1-3")], 3))
        .expect(1)
        .mount(&server)
        .await;

    let ids: Vec<String> = client
        .notes()
        .list_stream(ListNotesRequest::default(), 2)
        .map(|note| note.unwrap().loan_note_id)
        .collect()
        .await;
    assert_eq!(ids, vec!["1-1", "1-2", "1-3"]);
}

#[tokio::test]
async fn test_server_error_is_retried() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    init_logging();
    mount_password_grant(&server, "test_token").await;
    let client = ProsperClient::with_auth(
        config(dir.path()),
        token_manager(&server, dir.path()),
        client_config(&server).with_retry(
            RetryConfig::default()
                .with_max_retries(2)
                .with_initial_backoff(Duration::from_millis(5)),
        ),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/accounts/prosper/"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/prosper/"))
        .respond_with(json_response(fixture("account.json")))
        .expect(1)
        .mount(&server)
        .await;

    let account = client.accounts().get().await.unwrap();
    assert_eq!(account.available_cash_balance, Some(Amount::Decimal(dec!(111.1111))));
}

#[tokio::test]
async fn test_not_found_is_api_error() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server, dir.path()).await;

    Mock::given(method("GET"))
        .and(path("/v1/accounts/prosper/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "No such account"})))
        .expect(1)
        .mount(&server)
        .await;

    match client.accounts().get().await {
        Err(Error::Api { status, message, .. }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "No such account");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rate_limited_response() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server, dir.path()).await;

    Mock::given(method("GET"))
        .and(path("/v1/accounts/prosper/"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.accounts().get().await.unwrap_err();
    assert!(matches!(err, Error::RateLimited { retry_after_secs: 7 }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_unauthorized_drops_token() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server, dir.path()).await;

    Mock::given(method("GET"))
        .and(path("/v1/loans/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_token"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.loans().list(&ListLoansRequest::default()).await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(client.auth().current_token().await, None);
}

#[tokio::test]
async fn test_no_token_fails_without_calling_api() {
    init_logging();
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/prosper/"))
        .respond_with(json_response(fixture("account.json")))
        .expect(0)
        .mount(&server)
        .await;

    let client = ProsperClient::with_auth(
        config(dir.path()),
        token_manager(&server, dir.path()),
        client_config(&server),
    )
    .unwrap();
    let err = client.accounts().get().await.unwrap_err();
    assert!(matches!(err, Error::Authentication(_)));
}

#[tokio::test]
async fn test_malformed_base_url_is_rejected() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    let result = ProsperClient::with_auth(
        config(dir.path()),
        token_manager(&server, dir.path()),
        client_config(&server).with_base_url("not a url"),
    );
    assert!(matches!(result, Err(Error::UrlParse(_))));
}
