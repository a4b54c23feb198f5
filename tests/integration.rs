//! Integration tests for the leave accrual API.
//!
//! This test suite drives the HTTP router end to end:
//! - Accrual across every tenure tier
//! - Defaulting the reference date from the clock
//! - Days since a date
//! - Leave balances against deductions
//! - Overtime and meal-cost summaries
//! - Error cases

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use leave_engine::api::{AppState, create_router};
use leave_engine::clock::FixedClock;
use leave_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

const TODAY: &str = "2024-06-15";

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    let today = NaiveDate::from_str(TODAY).unwrap();
    AppState::new(config, Arc::new(FixedClock(today)))
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn post_raw(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(create_router_for_test(), uri, body.to_string()).await
}

async fn accrual(hire_date: &str, reference_date: &str) -> Value {
    let (status, result) = post_json(
        "/accrual",
        json!({ "hire_date": hire_date, "reference_date": reference_date }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", result);
    result
}

fn assert_decimal_field(result: &Value, field: &str, expected: &str) {
    let actual = result[field]
        .as_str()
        .unwrap_or_else(|| panic!("field '{}' missing in {}", field, result));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

// =============================================================================
// SECTION 1: Accrual Tiers
// =============================================================================

#[tokio::test]
async fn test_same_year_accrual() {
    // 166 days -> floor(166 / 30) = 5
    let result = accrual("2024-01-01", "2024-06-15").await;

    assert_decimal_field(&result, "accrued_leave", "5");
    assert_eq!(result["breakdown"]["days_since_hire"], 166);
    assert_eq!(result["breakdown"]["tier"], "same_year_monthly");
}

#[tokio::test]
async fn test_first_year_crossing_calendar_year() {
    // 306 days -> 10 monthly + 12.6 pro-rated
    let result = accrual("2023-03-01", "2024-01-01").await;

    assert_decimal_field(&result, "accrued_leave", "22.6");
    assert_eq!(result["breakdown"]["tier"], "first_year_monthly");
}

#[tokio::test]
async fn test_first_annual_grant() {
    // 366 days, one boundary -> 11 + 12.6
    let result = accrual("2023-03-01", "2024-03-01").await;

    assert_decimal_field(&result, "accrued_leave", "23.6");
    assert_eq!(result["breakdown"]["days_since_hire"], 366);
    assert_eq!(result["breakdown"]["years_crossed"], 1);
    assert_decimal_field(&result["breakdown"], "prorated_grant", "12.6");
}

#[tokio::test]
async fn test_two_boundaries_use_matured_formula() {
    let result = accrual("2023-03-01", "2025-01-01").await;

    assert_decimal_field(&result, "accrued_leave", "39.6");
    assert_eq!(result["breakdown"]["tier"], "matured_grants");
}

#[tokio::test]
async fn test_three_boundaries_use_annual_formula() {
    let result = accrual("2023-03-01", "2026-01-01").await;

    assert_decimal_field(&result, "accrued_leave", "53.6");
    assert_eq!(result["breakdown"]["tier"], "annual_grants");
}

#[tokio::test]
async fn test_four_boundaries_use_matured_formula() {
    let result = accrual("2023-03-01", "2027-01-01").await;

    assert_decimal_field(&result, "accrued_leave", "69.6");
}

#[tokio::test]
async fn test_zero_tenure_accrues_nothing() {
    let result = accrual("2024-05-05", "2024-05-05").await;

    assert_decimal_field(&result, "accrued_leave", "0");
}

#[tokio::test]
async fn test_breakdown_includes_audit_steps() {
    let result = accrual("2023-03-01", "2024-03-01").await;
    let steps = result["breakdown"]["audit_steps"].as_array().unwrap();

    let rule_ids: Vec<_> = steps
        .iter()
        .map(|step| step["rule_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        rule_ids,
        vec!["prorated_first_year_grant", "tenure_classification", "tier_formula"]
    );
    assert_eq!(steps[2]["reasoning"], "11 + 12.6 = 23.6");
}

// =============================================================================
// SECTION 2: Reference Date Defaults
// =============================================================================

#[tokio::test]
async fn test_missing_reference_date_uses_clock() {
    let (status, result) = post_json("/accrual", json!({ "hire_date": "2024-01-01" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["reference_date"], TODAY);
    assert_decimal_field(&result, "accrued_leave", "5");
}

#[tokio::test]
async fn test_empty_hire_date_accrues_nothing_without_breakdown() {
    let (status, result) = post_json("/accrual", json!({ "hire_date": "" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "accrued_leave", "0");
    assert!(result.get("breakdown").is_none());
}

// =============================================================================
// SECTION 3: Days Since
// =============================================================================

#[tokio::test]
async fn test_days_since_explicit_reference() {
    let (status, result) = post_json(
        "/days-since",
        json!({ "date": "2024-01-01", "reference_date": "2024-01-02" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days"], 1);
}

#[tokio::test]
async fn test_days_since_defaults_to_today() {
    let (status, result) = post_json("/days-since", json!({ "date": "2024-01-01" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days"], 166);
    assert_eq!(result["reference_date"], TODAY);
}

#[tokio::test]
async fn test_days_since_future_date_is_negative() {
    let (_, result) = post_json("/days-since", json!({ "date": "2024-06-20" })).await;

    assert_eq!(result["days"], -5);
}

#[tokio::test]
async fn test_days_since_empty_date_is_zero() {
    let (status, result) = post_json("/days-since", json!({ "date": "" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days"], 0);
}

// =============================================================================
// SECTION 4: Leave Balance
// =============================================================================

#[tokio::test]
async fn test_leave_balance_subtracts_deductions() {
    let (status, result) = post_json(
        "/leave-balance",
        json!({
            "hire_date": "2023-03-01",
            "reference_date": "2024-03-01",
            "deductions": [
                { "date": "2023-08-14", "deduction": "1", "memo": "summer" },
                { "date": "2023-12-22", "deduction": "0.5" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "accrued", "23.6");
    assert_decimal_field(&result, "used", "1.5");
    assert_decimal_field(&result, "remaining", "22.1");
}

#[tokio::test]
async fn test_leave_balance_lists_deductions_oldest_first() {
    let (status, result) = post_json(
        "/leave-balance",
        json!({
            "hire_date": "2023-03-01",
            "reference_date": "2024-03-01",
            "deductions": [
                { "date": "2023-12-22", "deduction": "0.5" },
                { "date": "2023-05-02", "deduction": "1" },
                { "date": "2023-08-14", "deduction": "1", "memo": "summer" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let dates: Vec<_> = result["deductions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2023-05-02", "2023-08-14", "2023-12-22"]);
    assert_eq!(result["deductions"][1]["memo"], "summer");
}

#[tokio::test]
async fn test_leave_balance_rejects_overflowing_deductions() {
    let (status, result) = post_json(
        "/leave-balance",
        json!({
            "hire_date": "2023-03-01",
            "deductions": [
                { "date": "2023-08-14", "deduction": "79228162514264337593543950335" },
                { "date": "2023-12-22", "deduction": "79228162514264337593543950335" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_LEDGER_ENTRY");
}

#[tokio::test]
async fn test_leave_balance_rejects_negative_deduction() {
    let (status, result) = post_json(
        "/leave-balance",
        json!({
            "hire_date": "2023-03-01",
            "deductions": [{ "date": "2023-08-14", "deduction": "-1" }]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_LEDGER_ENTRY");
}

// =============================================================================
// SECTION 5: Overtime and Meal Costs
// =============================================================================

#[tokio::test]
async fn test_overtime_summary_for_month() {
    let (status, result) = post_json(
        "/overtime/summary",
        json!({
            "month": "2024-05",
            "entries": [
                { "id": "ot_1", "date": "2024-05-02", "hours": 1, "minutes": 30 },
                { "id": "ot_2", "date": "2024-05-20", "hours": 2, "minutes": 45 },
                { "id": "ot_3", "date": "2024-06-01", "hours": 3 }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["entry_count"], 2);
    assert_eq!(result["total_minutes"], 255);
    assert_eq!(result["formatted"], "4h 15m");
}

#[tokio::test]
async fn test_overtime_summary_rejects_bad_minutes() {
    let (status, result) = post_json(
        "/overtime/summary",
        json!({ "entries": [{ "id": "ot_1", "date": "2024-05-02", "hours": 1, "minutes": 75 }] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_LEDGER_ENTRY");
}

#[tokio::test]
async fn test_meal_cost_summary() {
    let (status, result) = post_json(
        "/meal-costs/summary",
        json!({
            "entries": [
                { "id": "m1", "date": "2024-05-02", "price": "9000" },
                { "id": "m2", "date": "2024-05-03", "price": "12500" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "total", "21500");
    assert_eq!(result["formatted"], "21,500");
    assert_eq!(result["entry_count"], 2);
}

#[tokio::test]
async fn test_meal_cost_summary_rejects_overflowing_total() {
    let (status, result) = post_json(
        "/meal-costs/summary",
        json!({
            "entries": [
                { "id": "m1", "date": "2024-05-02", "price": "79228162514264337593543950335" },
                { "id": "m2", "date": "2024-05-03", "price": "79228162514264337593543950335" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_LEDGER_ENTRY");
    assert!(result["message"].as_str().unwrap().contains("m2"));
}

// =============================================================================
// SECTION 6: Error Cases
// =============================================================================

#[tokio::test]
async fn test_invalid_hire_date_returns_400() {
    let (status, result) = post_json(
        "/accrual",
        json!({ "hire_date": "2023-02-29", "reference_date": "2024-01-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE");
    assert!(result["message"].as_str().unwrap().contains("2023-02-29"));
}

#[tokio::test]
async fn test_invalid_reference_date_returns_400() {
    let (status, result) = post_json(
        "/accrual",
        json!({ "hire_date": "2023-03-01", "reference_date": "03/01/2024" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE");
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (status, result) = post_raw(
        create_router_for_test(),
        "/accrual",
        "{ not json".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_ledger_field_returns_validation_error() {
    let (status, result) = post_json(
        "/meal-costs/summary",
        json!({ "entries": [{ "id": "m1", "date": "2024-05-02" }] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}
