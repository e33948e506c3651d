//! Product listing and detail against a running server.

use lunev_shop_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_listing_has_numeric_prices_and_decoded_arrays() {
    let ctx = TestContext::new().expect("Failed to build test context");
    let id = ctx.seed_product(0).await.expect("Failed to seed product");

    let resp = ctx
        .client
        .get(ctx.url("/api/products"))
        .send()
        .await
        .expect("Failed to list products");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");

    let products = body["products"].as_array().expect("products is an array");
    assert_eq!(body["count"], products.len());
    assert!(products.iter().all(|p| p["price"].is_number()));

    let seeded = products
        .iter()
        .find(|p| p["product_id"] == id)
        .expect("seeded product is listed");
    assert_eq!(seeded["color_options"], serde_json::json!(["black", "white"]));
    assert!(seeded.get("bonus").is_none());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_by_id_with_bonus_label() {
    let ctx = TestContext::new().expect("Failed to build test context");
    let id = ctx.seed_product(1_500).await.expect("Failed to seed product");

    let resp = ctx
        .client
        .get(ctx.url(&format!("/api/product-by-id/{id}")))
        .send()
        .await
        .expect("Failed to get product");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let product = &body["product"];
    assert_eq!(product["product_id"], id);
    assert!(product["price"].is_number());
    assert_eq!(product["bonus"], "+1\u{a0}500 бонусов");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_by_id_without_bonus_has_no_label() {
    let ctx = TestContext::new().expect("Failed to build test context");
    let id = ctx.seed_product(0).await.expect("Failed to seed product");

    let body: Value = ctx
        .client
        .get(ctx.url(&format!("/api/product-by-id/{id}")))
        .send()
        .await
        .expect("Failed to get product")
        .json()
        .await
        .expect("Failed to parse response");

    assert!(body["product"].get("bonus").is_none());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_unknown_product_is_404() {
    let ctx = TestContext::new().expect("Failed to build test context");

    let resp = ctx
        .client
        .get(ctx.url(&format!("/api/product-by-id/{}", i32::MAX)))
        .send()
        .await
        .expect("Failed to get product");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
}
