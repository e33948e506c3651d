//! Cart flows against a running server.

use lunev_shop_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn fetch_cart(ctx: &TestContext, user_id: i64) -> Vec<Value> {
    let body: Value = ctx
        .client
        .get(ctx.url(&format!("/api/cart/user/{user_id}")))
        .send()
        .await
        .expect("Failed to fetch cart")
        .json()
        .await
        .expect("Failed to parse cart");
    assert_eq!(body["status"], "success");
    body["cart"].as_array().cloned().unwrap_or_default()
}

async fn add(ctx: &TestContext, body: &Value) -> StatusCode {
    ctx.client
        .post(ctx.url("/api/cart/add-item"))
        .json(body)
        .send()
        .await
        .expect("Failed to add to cart")
        .status()
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_repeat_add_without_variant_increments_one_row() {
    let ctx = TestContext::new().expect("Failed to build test context");
    let (user_id, _, _) = ctx.register_user().await.expect("Failed to register");
    let product_id = ctx.seed_product(0).await.expect("Failed to seed product");

    let item = json!({"userId": user_id, "productId": product_id, "quantity": 1});
    assert_eq!(add(&ctx, &item).await, StatusCode::OK);
    assert_eq!(add(&ctx, &item).await, StatusCode::OK);

    let cart = fetch_cart(&ctx, user_id).await;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0]["quantity"], 2);
    assert!(cart[0]["selected_memory"].is_null());
    assert!(cart[0]["price"].is_number());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_variants_are_distinct_rows() {
    let ctx = TestContext::new().expect("Failed to build test context");
    let (user_id, _, _) = ctx.register_user().await.expect("Failed to register");
    let product_id = ctx.seed_product(0).await.expect("Failed to seed product");

    add(
        &ctx,
        &json!({"userId": user_id, "productId": product_id, "selectedMemory": "64GB"}),
    )
    .await;
    add(&ctx, &json!({"userId": user_id, "productId": product_id})).await;

    let cart = fetch_cart(&ctx, user_id).await;
    assert_eq!(cart.len(), 2);
    // Newest first
    assert!(cart[0]["selected_memory"].is_null());
    assert_eq!(cart[1]["selected_memory"], "64GB");
    assert!(cart.iter().all(|line| line["quantity"] == 1));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_add_unknown_product_is_404() {
    let ctx = TestContext::new().expect("Failed to build test context");
    let (user_id, _, _) = ctx.register_user().await.expect("Failed to register");

    let status = add(&ctx, &json!({"userId": user_id, "productId": i32::MAX})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_quantity_update_and_zero_removes() {
    let ctx = TestContext::new().expect("Failed to build test context");
    let (user_id, _, _) = ctx.register_user().await.expect("Failed to register");
    let product_id = ctx.seed_product(0).await.expect("Failed to seed product");

    add(
        &ctx,
        &json!({"userId": user_id, "productId": product_id, "selectedMemory": "128GB"}),
    )
    .await;

    let update = |quantity: i32| {
        ctx.client
            .put(ctx.url("/api/cart/update-quantity"))
            .json(&json!({
                "userId": user_id,
                "productId": product_id,
                "selectedMemory": "128GB",
                "quantity": quantity,
            }))
            .send()
    };

    let resp = update(5).await.expect("Failed to update quantity");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(fetch_cart(&ctx, user_id).await[0]["quantity"], 5);

    let resp = update(0).await.expect("Failed to update quantity");
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(fetch_cart(&ctx, user_id).await.is_empty());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_remove_item_and_missing_row_both_succeed() {
    let ctx = TestContext::new().expect("Failed to build test context");
    let (user_id, _, _) = ctx.register_user().await.expect("Failed to register");
    let product_id = ctx.seed_product(0).await.expect("Failed to seed product");

    add(&ctx, &json!({"userId": user_id, "productId": product_id})).await;

    for _ in 0..2 {
        let resp = ctx
            .client
            .delete(ctx.url("/api/cart/remove-item"))
            .json(&json!({"userId": user_id, "productId": product_id}))
            .send()
            .await
            .expect("Failed to remove item");
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = resp.json().await.expect("Failed to parse response");
        assert_eq!(body["status"], "success");
    }

    assert!(fetch_cart(&ctx, user_id).await.is_empty());
}
