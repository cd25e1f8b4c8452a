//! HTTP-level integration tests for the timesheet batch endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_json, get, post_json, put_json, seed_employee, seed_project};
use serde_json::{json, Value};
use sqlx::PgPool;

const EMP: i64 = 1;
const PRJ: i64 = 10;
const URI: &str = "/api/v1/employees/1/timesheet";

// 2024-01-01 is a Monday.
const MONDAY: &str = "2024-01-01";
const TUESDAY: &str = "2024-01-02";
const WEDNESDAY: &str = "2024-01-03";
const SATURDAY: &str = "2024-01-06";

async fn seed(pool: &PgPool) {
    seed_employee(pool, EMP).await;
    seed_project(pool, PRJ, EMP).await;
}

fn entry(date: &str, hours: i32) -> Value {
    json!({"work_date": date, "hours": hours, "shift": 1, "prj_id": PRJ})
}

fn batch(entries: Vec<Value>) -> Value {
    json!({ "weekly_details": entries })
}

async fn stored_hours(pool: &PgPool, date: &str) -> Option<i32> {
    sqlx::query_scalar::<_, i32>(
        "SELECT hours FROM timesheet_entries WHERE emp_id = $1 AND work_date = $2::DATE",
    )
    .bind(EMP)
    .bind(date)
    .fetch_optional(pool)
    .await
    .unwrap()
}

async fn entry_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM timesheet_entries WHERE emp_id = $1")
        .bind(EMP)
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_week_returns_201_with_rows(pool: PgPool) {
    seed(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(MONDAY, 8), entry(TUESDAY, 6)]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["work_date"], MONDAY);
    assert_eq!(rows[0]["hours"], 8);
    assert!(rows[0]["s_no"].is_number());
    assert_eq!(entry_count(&pool).await, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn adding_same_day_twice_is_a_conflict(pool: PgPool) {
    seed(&pool).await;

    let first = post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(MONDAY, 4)]),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(TUESDAY, 4), entry(MONDAY, 2)]),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["error"], "Entry already exists for 2024-01-01");

    // Tuesday was not written either.
    assert_eq!(stored_hours(&pool, TUESDAY).await, None);
    assert_eq!(stored_hours(&pool, MONDAY).await, Some(4));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn weekend_entry_rejects_whole_batch(pool: PgPool) {
    seed(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(MONDAY, 8), entry(SATURDAY, 2)]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "2024-01-06 is not a workday. Please check your entry."
    );
    assert_eq!(entry_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn two_entries_on_one_monday_over_cap_write_nothing(pool: PgPool) {
    seed(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(MONDAY, 5), entry(MONDAY, 4)]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("2024-01-01"));
    assert_eq!(entry_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeated_date_under_cap_is_a_conflict(pool: PgPool) {
    seed(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(MONDAY, 3), entry(MONDAY, 4)]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(entry_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn nine_hours_in_one_entry_is_rejected(pool: PgPool) {
    seed(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(MONDAY, 9)]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(entry_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_batch_is_rejected(pool: PgPool) {
    seed(&pool).await;

    let response = post_json(common::build_test_app(pool), URI, batch(vec![])).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_project_rolls_back_batch(pool: PgPool) {
    seed(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![
            entry(MONDAY, 8),
            json!({"work_date": TUESDAY, "hours": 8, "shift": 1, "prj_id": 999}),
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(entry_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_for_unknown_employee_returns_404(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/employees/77/timesheet",
        batch(vec![entry(MONDAY, 8)]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_adds_hours_to_stored_entry(pool: PgPool) {
    seed(&pool).await;
    post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(TUESDAY, 3)]),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![json!({"work_date": TUESDAY, "hours": 4})]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["hours"], 7);
    assert_eq!(stored_hours(&pool, TUESDAY).await, Some(7));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_reaching_cap_exactly_succeeds(pool: PgPool) {
    seed(&pool).await;
    post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(TUESDAY, 3)]),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![json!({"work_date": TUESDAY, "hours": 5})]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(stored_hours(&pool, TUESDAY).await, Some(8));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_over_cap_leaves_stored_hours(pool: PgPool) {
    seed(&pool).await;
    post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(TUESDAY, 3)]),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![json!({"work_date": TUESDAY, "hours": 6})]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(stored_hours(&pool, TUESDAY).await, Some(3));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn oversized_increment_is_rejected_not_wrapped(pool: PgPool) {
    seed(&pool).await;
    post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(TUESDAY, 3)]),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![json!({"work_date": TUESDAY, "hours": i32::MAX})]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(stored_hours(&pool, TUESDAY).await, Some(3));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn oversized_same_day_entries_on_create_are_rejected(pool: PgPool) {
    seed(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(MONDAY, i32::MAX), entry(MONDAY, i32::MAX)]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(entry_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_on_weekend_is_rejected(pool: PgPool) {
    seed(&pool).await;
    post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(MONDAY, 3)]),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![
            json!({"work_date": MONDAY, "hours": 2}),
            json!({"work_date": SATURDAY, "hours": 2}),
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "2024-01-06 is not a workday. Please check your entry."
    );
    assert_eq!(stored_hours(&pool, MONDAY).await, Some(3));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_increment_rolls_back_earlier_ones(pool: PgPool) {
    seed(&pool).await;
    post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(MONDAY, 2), entry(TUESDAY, 7)]),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![
            json!({"work_date": MONDAY, "hours": 2}),
            json!({"work_date": TUESDAY, "hours": 2}),
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(stored_hours(&pool, MONDAY).await, Some(2));
    assert_eq!(stored_hours(&pool, TUESDAY).await, Some(7));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_without_any_stored_entry_returns_404(pool: PgPool) {
    seed(&pool).await;

    let response = put_json(
        common::build_test_app(pool),
        URI,
        batch(vec![json!({"work_date": MONDAY, "hours": 2})]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No such entries");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_naming_a_missing_day_rolls_back(pool: PgPool) {
    seed(&pool).await;
    post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(MONDAY, 2)]),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![
            json!({"work_date": MONDAY, "hours": 2}),
            json!({"work_date": WEDNESDAY, "hours": 2}),
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No such entry for 2024-01-03");
    assert_eq!(stored_hours(&pool, MONDAY).await, Some(2));
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_entries_in_date_order(pool: PgPool) {
    seed(&pool).await;
    post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(WEDNESDAY, 1), entry(MONDAY, 2), entry(TUESDAY, 3)]),
    )
    .await;

    let response = get(common::build_test_app(pool.clone()), URI).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let dates: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["work_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec![MONDAY, TUESDAY, WEDNESDAY]);

    let response = get(
        common::build_test_app(pool),
        &format!("{URI}?from={TUESDAY}&to={TUESDAY}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["hours"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_with_inverted_range_returns_400(pool: PgPool) {
    seed(&pool).await;

    let response = get(
        common::build_test_app(pool),
        &format!("{URI}?from={WEDNESDAY}&to={MONDAY}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Invalid range: 2024-01-03 is after 2024-01-01");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_without_entries_returns_404(pool: PgPool) {
    seed(&pool).await;

    let response = get(common::build_test_app(pool), URI).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No such entries");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_requested_days(pool: PgPool) {
    seed(&pool).await;
    post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(MONDAY, 2), entry(TUESDAY, 3)]),
    )
    .await;

    let response = delete_json(
        common::build_test_app(pool.clone()),
        URI,
        json!({"dates": [MONDAY]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(stored_hours(&pool, MONDAY).await, None);
    assert_eq!(stored_hours(&pool, TUESDAY).await, Some(3));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_with_missing_day_deletes_nothing(pool: PgPool) {
    seed(&pool).await;
    post_json(
        common::build_test_app(pool.clone()),
        URI,
        batch(vec![entry(MONDAY, 2)]),
    )
    .await;

    let response = delete_json(
        common::build_test_app(pool.clone()),
        URI,
        json!({"dates": [MONDAY, TUESDAY]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(stored_hours(&pool, MONDAY).await, Some(2));
}
