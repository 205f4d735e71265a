//! Integration tests for the `/users` profile endpoints and the admin
//! user listing.

mod common;

use axum::http::StatusCode;
use cloudrent_core::roles::Role;
use serde_json::json;
use sqlx::PgPool;

use common::{
    auth_token, body_json, build_test_app, create_test_user, get_auth, put_json_auth,
};

#[sqlx::test(migrations = "../db/migrations")]
async fn profile_returns_own_record_without_hash(pool: PgPool) {
    let user = create_test_user(&pool, "alice@example.com", Role::User).await;
    let token = auth_token(&user);
    let app = build_test_app(pool);

    let response = get_auth(&app, "/api/v1/users/profile", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["id"], user.id);
    assert_eq!(data["username"], "alice");
    assert_eq!(data["email"], "alice@example.com");
    assert_eq!(data["role"], "user");
    assert_eq!(data["is_active"], true);
    assert!(data.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn profile_patch_applies_only_present_fields(pool: PgPool) {
    let user = create_test_user(&pool, "alice@example.com", Role::User).await;
    let token = auth_token(&user);
    let app = build_test_app(pool);

    // Patch only the phone; the username must survive untouched.
    let response = put_json_auth(
        &app,
        "/api/v1/users/profile",
        &token,
        json!({ "phone": "555-0142" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["phone"], "555-0142");
    assert_eq!(body["data"]["username"], "alice");

    // Now patch only the username; the phone must survive.
    let response = put_json_auth(
        &app,
        "/api/v1/users/profile",
        &token,
        json!({ "username": "alice-renamed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["username"], "alice-renamed");
    assert_eq!(body["data"]["phone"], "555-0142");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_profile_patch_is_rejected(pool: PgPool) {
    let user = create_test_user(&pool, "alice@example.com", Role::User).await;
    let token = auth_token(&user);
    let app = build_test_app(pool);

    let response = put_json_auth(&app, "/api/v1/users/profile", &token, json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_username_patch_is_rejected(pool: PgPool) {
    let user = create_test_user(&pool, "alice@example.com", Role::User).await;
    let token = auth_token(&user);
    let app = build_test_app(pool);

    let response = put_json_auth(
        &app,
        "/api/v1/users/profile",
        &token,
        json!({ "username": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// Email is the login key; the patch shape simply has no email field, so a
// client sending one gets it ignored rather than applied.
#[sqlx::test(migrations = "../db/migrations")]
async fn profile_patch_cannot_change_email(pool: PgPool) {
    let user = create_test_user(&pool, "alice@example.com", Role::User).await;
    let token = auth_token(&user);
    let app = build_test_app(pool);

    let response = put_json_auth(
        &app,
        "/api/v1/users/profile",
        &token,
        json!({ "username": "alice2", "email": "hijack@example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["email"], "alice@example.com");
}

// ---------------------------------------------------------------------------
// Admin surface
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_can_list_users(pool: PgPool) {
    let admin = create_test_user(&pool, "root@example.com", Role::Admin).await;
    create_test_user(&pool, "alice@example.com", Role::User).await;
    let token = auth_token(&admin);
    let app = build_test_app(pool);

    let response = get_auth(&app, "/api/v1/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn regular_user_cannot_list_users(pool: PgPool) {
    let user = create_test_user(&pool, "alice@example.com", Role::User).await;
    let token = auth_token(&user);
    let app = build_test_app(pool);

    let response = get_auth(&app, "/api/v1/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn anonymous_cannot_list_users(pool: PgPool) {
    let app = build_test_app(pool);

    let response = common::get(&app, "/api/v1/admin/users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
