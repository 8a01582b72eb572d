//! Integration tests for the mocks crate
//!
//! Drives `mockall` mocks of an API client with the argument-checking
//! responses and matchers, the way view tests use them.

use api_model_stubs::{overrides, BriefStub, SupplierStub};
use mockall::mock;
use mocks::*;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
struct HttpError(u16);

mock! {
    ApiClient {
        fn get_brief(&self, brief_id: u64) -> Value;
        fn find_briefs(&self, query: (String, u32)) -> Result<Vec<Value>, HttpError>;
        fn update_supplier(&self, update: (u64, Value)) -> Result<Value, HttpError>;
        fn brief_ids(&self, status: String) -> std::vec::IntoIter<u64>;
    }
}

#[test]
fn test_returning_a_stub_for_the_expected_id() {
    let brief = BriefStub::new(overrides! { "id" => 4321, "status" => "live" }).single_result_response();

    let mut client = MockApiClient::new();
    client
        .expect_get_brief()
        .times(1)
        .returning(assert_args_and_return(brief.clone(), 4321_u64));

    let response = client.get_brief(4321);
    assert_eq!(response, brief);
    assert_eq!(response["briefs"]["publishedAt"], json!("2016-03-29T10:11:14.000000Z"));
}

#[test]
#[should_panic(expected = "unexpected arguments")]
fn test_wrong_id_fails_at_the_call() {
    let mut client = MockApiClient::new();
    client
        .expect_get_brief()
        .returning(assert_args_and_return(BriefStub::default().single_result_response(), 4321_u64));

    client.get_brief(1234);
}

#[test]
fn test_raising_for_the_expected_query() {
    let mut client = MockApiClient::new();
    client
        .expect_find_briefs()
        .returning(assert_args_and_raise(HttpError(503), ("digital-specialists".to_string(), 2_u32)));

    assert_eq!(client.find_briefs(("digital-specialists".to_string(), 2)), Err(HttpError(503)));
}

#[test]
fn test_return_or_raise_with_a_matcher_on_the_payload() {
    let supplier = SupplierStub::new(overrides! { "id" => 886665 }).single_result_response();

    let mut client = MockApiClient::new();
    client
        .expect_update_supplier()
        .withf(|(_, fields)| *fields == AnySupersetOf::new(json!({"name": "Kev's Pies"})))
        .returning(assert_args_and_return_or_raise(
            supplier.clone(),
            HttpError(400),
            (886665_u64, json!({"name": "Kev's Pies", "description": "Pies"})),
        ));

    let updated = client.update_supplier((886665, json!({"name": "Kev's Pies", "description": "Pies"})));
    assert_eq!(updated, Ok(supplier));

    let rejected = client.update_supplier((886665, json!({"name": "Kev's Pies"})));
    assert_eq!(rejected, Err(HttpError(400)));
}

#[test]
fn test_iterators_restart_per_call() {
    let mut client = MockApiClient::new();
    client
        .expect_brief_ids()
        .times(2)
        .returning(assert_args_and_return_iter_over(vec![1_u64, 2, 3], "live".to_string()));

    let mut first = client.brief_ids("live".to_string());
    assert_eq!(first.next(), Some(1));
    let second: Vec<u64> = client.brief_ids("live".to_string()).collect();
    assert_eq!(second, [1, 2, 3]);
    assert_eq!(first.collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn test_matchers_loosen_stub_comparisons() {
    let brief = BriefStub::new(overrides! { "status" => "withdrawn" }).into_response();

    assert_eq!(brief, AnySupersetOf::new(json!({"status": "withdrawn", "id": 1234})));
    assert_eq!(brief["withdrawnAt"], AnyStringMatching::new(r"\d{4}-\d{2}-\d{2}T").unwrap());
    assert_eq!(brief["users"], RestrictedAny::new(|users: &Value| users.as_array().is_some_and(|u| u.len() == 1)));
}

#[test]
fn test_fixtures_carry_signatures() {
    assert!(valid_pdf().get_ref().starts_with(&mocks::fixtures::PDF_SIGNATURE));
    assert!(valid_jpg().get_ref().starts_with(&mocks::fixtures::JPEG_SIGNATURE));
}
