//! Integration tests for the public `/resources` catalog.

mod common;

use axum::http::StatusCode;
use cloudrent_core::resource::ResourceStatus;
use cloudrent_db::models::resource::CreateResource;
use cloudrent_db::repositories::ResourceRepo;
use sqlx::PgPool;

use common::{body_json, build_test_app, get};

async fn seed_listing(
    pool: &PgPool,
    name: &str,
    cpu_cores: i32,
    memory_gb: i32,
    storage_type: &str,
    status: ResourceStatus,
) -> cloudrent_db::models::resource::Resource {
    ResourceRepo::create(
        pool,
        &CreateResource {
            name: name.to_string(),
            description: Some(format!("{cpu_cores} cores, {memory_gb} GB")),
            cpu_cores,
            memory_gb,
            storage_gb: 100,
            storage_type: storage_type.to_string(),
            hourly_price_cents: 500,
            status,
        },
    )
    .await
    .expect("seeding should succeed")
}

#[sqlx::test(migrations = "../db/migrations")]
async fn catalog_is_public_and_lists_everything(pool: PgPool) {
    seed_listing(&pool, "vps-small", 2, 4, "ssd", ResourceStatus::Available).await;
    seed_listing(&pool, "vps-large", 8, 32, "nvme", ResourceStatus::Offline).await;
    let app = build_test_app(pool);

    let response = get(&app, "/api/v1/resources").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn catalog_filters_combine_conjunctively(pool: PgPool) {
    seed_listing(&pool, "vps-small", 2, 4, "ssd", ResourceStatus::Available).await;
    seed_listing(&pool, "vps-medium", 4, 8, "ssd", ResourceStatus::Available).await;
    seed_listing(&pool, "vps-large", 8, 32, "nvme", ResourceStatus::Available).await;
    let app = build_test_app(pool);

    let response = get(&app, "/api/v1/resources?cpu_cores=4&storage_type=ssd").await;
    let body = body_json(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "vps-medium");

    // A filter that matches nothing is an empty list, not an error.
    let response = get(&app, "/api/v1/resources?cpu_cores=64").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn catalog_keyword_matches_name_and_description(pool: PgPool) {
    seed_listing(&pool, "vps-small", 2, 4, "ssd", ResourceStatus::Available).await;
    seed_listing(&pool, "gpu-node", 16, 64, "nvme", ResourceStatus::Available).await;
    let app = build_test_app(pool);

    let response = get(&app, "/api/v1/resources?keyword=gpu").await;
    let body = body_json(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "gpu-node");

    // Case-insensitive, and also searches descriptions.
    let response = get(&app, "/api/v1/resources?keyword=64%20GB").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn catalog_status_filter(pool: PgPool) {
    seed_listing(&pool, "vps-small", 2, 4, "ssd", ResourceStatus::Available).await;
    seed_listing(&pool, "vps-retired", 2, 4, "ssd", ResourceStatus::Offline).await;
    let app = build_test_app(pool);

    let response = get(&app, "/api/v1/resources?status=offline").await;
    let body = body_json(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "vps-retired");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn hot_returns_at_most_three_available_listings(pool: PgPool) {
    for i in 0..5 {
        seed_listing(
            &pool,
            &format!("vps-{i}"),
            2,
            4,
            "ssd",
            ResourceStatus::Available,
        )
        .await;
    }
    seed_listing(&pool, "vps-offline", 2, 4, "ssd", ResourceStatus::Offline).await;
    let app = build_test_app(pool);

    let response = get(&app, "/api/v1/resources/hot").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r["status"] == "available"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn hot_with_sparse_catalog_returns_what_exists(pool: PgPool) {
    seed_listing(&pool, "vps-only", 2, 4, "ssd", ResourceStatus::Available).await;
    let app = build_test_app(pool);

    let response = get(&app, "/api/v1/resources/hot").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_returns_listing_or_404(pool: PgPool) {
    let listing = seed_listing(&pool, "vps-small", 2, 4, "ssd", ResourceStatus::Available).await;
    let app = build_test_app(pool);

    let response = get(&app, &format!("/api/v1/resources/{}", listing.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "vps-small");
    assert_eq!(body["data"]["hourly_price_cents"], 500);

    let response = get(&app, "/api/v1/resources/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_endpoint_reports_ok(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
