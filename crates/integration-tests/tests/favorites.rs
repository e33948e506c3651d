//! Favorites flows against a running server.

use lunev_shop_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn fetch_favorites(ctx: &TestContext, user_id: i64) -> Vec<Value> {
    let body: Value = ctx
        .client
        .get(ctx.url(&format!("/api/favorites/user/{user_id}")))
        .send()
        .await
        .expect("Failed to fetch favorites")
        .json()
        .await
        .expect("Failed to parse favorites");
    assert_eq!(body["status"], "success");
    body["favorites"].as_array().cloned().unwrap_or_default()
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_adding_twice_keeps_one_row() {
    let ctx = TestContext::new().expect("Failed to build test context");
    let (user_id, _, _) = ctx.register_user().await.expect("Failed to register");
    let product_id = ctx.seed_product(0).await.expect("Failed to seed product");

    let mut messages = Vec::new();
    for _ in 0..2 {
        let resp = ctx
            .client
            .post(ctx.url("/api/favorites/add-item"))
            .json(&json!({"userId": user_id, "productId": product_id}))
            .send()
            .await
            .expect("Failed to add favorite");
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = resp.json().await.expect("Failed to parse response");
        assert_eq!(body["status"], "success");
        messages.push(body["message"].clone());
    }
    assert_ne!(messages[0], messages[1]);

    let favorites = fetch_favorites(&ctx, user_id).await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["product_id"], product_id);
    assert!(favorites[0]["price"].is_number());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_remove_is_idempotent() {
    let ctx = TestContext::new().expect("Failed to build test context");
    let (user_id, _, _) = ctx.register_user().await.expect("Failed to register");
    let product_id = ctx.seed_product(0).await.expect("Failed to seed product");

    ctx.client
        .post(ctx.url("/api/favorites/add-item"))
        .json(&json!({"userId": user_id, "productId": product_id}))
        .send()
        .await
        .expect("Failed to add favorite");

    for _ in 0..2 {
        let resp = ctx
            .client
            .delete(ctx.url("/api/favorites/remove-item"))
            .json(&json!({"userId": user_id, "productId": product_id}))
            .send()
            .await
            .expect("Failed to remove favorite");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    assert!(fetch_favorites(&ctx, user_id).await.is_empty());
}
