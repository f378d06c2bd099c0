mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

// Every test skips cleanly when TEST_DATABASE_URL is unset; with it set, the
// suite runs against a freshly spawned server wired to that database.

#[tokio::test]
async fn category_create_then_list_roundtrip() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return Ok(());
    };
    let client = reqwest::Client::new();

    let kind = format!("Electronics-{}", Uuid::new_v4());
    let res = client
        .post(format!("{}/api/categories", server.base_url))
        .json(&json!({ "type": kind }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.json::<Value>().await?["success"], json!(true));

    let body = client
        .get(format!("{}/api/categories", server.base_url))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["success"], json!(true));
    let categories = body["categories"].as_array().unwrap();
    assert!(categories.iter().any(|c| c["type"] == json!(kind)));
    Ok(())
}

#[tokio::test]
async fn deleting_missing_product_is_failure_shaped() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return Ok(());
    };
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/api/products/{}", server.base_url, Uuid::new_v4()))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Product not found"));
    Ok(())
}

#[tokio::test]
async fn protected_routes_reject_missing_credentials() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return Ok(());
    };
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/adresses", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("No token provided"));
    Ok(())
}

#[tokio::test]
async fn address_partial_update_changes_only_present_fields() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return Ok(());
    };
    let client = reqwest::Client::new();
    let token = common::token_for(Uuid::new_v4())?;

    let res = client
        .post(format!("{}/api/adresses", server.base_url))
        .header("authorization", format!("Bearer {}", token))
        .json(&json!({ "city": "Paris", "country": "France", "zipCode": 75001 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = client
        .get(format!("{}/api/adresses", server.base_url))
        .header("authorization", format!("Bearer {}", token))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let id = body["adresses"][0]["id"].as_str().unwrap().to_string();

    let res = client
        .put(format!("{}/api/adresses/{}", server.base_url, id))
        .header("authorization", format!("Bearer {}", token))
        .json(&json!({ "city": "Lyon" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = client
        .get(format!("{}/api/adresses/{}", server.base_url, id))
        .header("authorization", format!("Bearer {}", token))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["adresse"]["city"], json!("Lyon"));
    assert_eq!(body["adresse"]["country"], json!("France"));
    assert_eq!(body["adresse"]["zipCode"], json!(75001));
    Ok(())
}

#[tokio::test]
async fn addresses_are_scoped_to_their_owner() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return Ok(());
    };
    let client = reqwest::Client::new();
    let owner_token = common::token_for(Uuid::new_v4())?;
    let intruder_token = common::token_for(Uuid::new_v4())?;

    let res = client
        .post(format!("{}/api/adresses", server.base_url))
        .header("authorization", format!("Bearer {}", owner_token))
        .json(&json!({ "city": "Marseille" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = client
        .get(format!("{}/api/adresses", server.base_url))
        .header("authorization", format!("Bearer {}", owner_token))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let id = body["adresses"][0]["id"].as_str().unwrap().to_string();

    // A different identity sees an empty list and cannot fetch, update or
    // delete the record
    let body = client
        .get(format!("{}/api/adresses", server.base_url))
        .header("authorization", format!("Bearer {}", intruder_token))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["adresses"], json!([]));

    let res = client
        .get(format!("{}/api/adresses/{}", server.base_url, id))
        .header("authorization", format!("Bearer {}", intruder_token))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .put(format!("{}/api/adresses/{}", server.base_url, id))
        .header("authorization", format!("Bearer {}", intruder_token))
        .json(&json!({ "city": "Nice" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/api/adresses/{}", server.base_url, id))
        .header("authorization", format!("Bearer {}", intruder_token))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // The owner still sees the record untouched
    let body = client
        .get(format!("{}/api/adresses/{}", server.base_url, id))
        .header("authorization", format!("Bearer {}", owner_token))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["adresse"]["city"], json!("Marseille"));
    Ok(())
}

#[tokio::test]
async fn product_list_embeds_owner_category_and_ratings() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return Ok(());
    };
    let client = reqwest::Client::new();

    let owner_name = format!("Marie-{}", Uuid::new_v4());
    client
        .post(format!("{}/api/owners", server.base_url))
        .json(&json!({ "name": owner_name, "about": "Bookseller" }))
        .send()
        .await?;
    let owners = client
        .get(format!("{}/api/owners", server.base_url))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let owner_id = owners["owners"]
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["name"] == json!(owner_name))
        .unwrap()["id"]
        .clone();

    let kind = format!("Books-{}", Uuid::new_v4());
    client
        .post(format!("{}/api/categories", server.base_url))
        .json(&json!({ "type": kind }))
        .send()
        .await?;
    let categories = client
        .get(format!("{}/api/categories", server.base_url))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let category_id = categories["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["type"] == json!(kind))
        .unwrap()["id"]
        .clone();

    let title = format!("Novel-{}", Uuid::new_v4());
    let res = client
        .post(format!("{}/api/products", server.base_url))
        .json(&json!({
            "ownerID": owner_id,
            "categoryID": category_id,
            "title": title,
            "stockQuantity": 4
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let products = client
        .get(format!("{}/api/products", server.base_url))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let product = products["products"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["title"] == json!(title))
        .unwrap()
        .clone();
    assert_eq!(product["owner"]["name"], json!(owner_name));
    assert_eq!(product["category"]["type"], json!(kind));
    assert_eq!(product["reviews"], json!([]));

    // A posted review surfaces as an embedded rating
    let token = common::token_for(Uuid::new_v4())?;
    let res = client
        .post(format!(
            "{}/api/reviews/{}",
            server.base_url,
            product["id"].as_str().unwrap()
        ))
        .header("authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "Great", "rating": 5 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let fetched = client
        .get(format!(
            "{}/api/products/{}",
            server.base_url,
            product["id"].as_str().unwrap()
        ))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(fetched["product"]["reviews"][0]["rating"], json!(5));
    Ok(())
}

#[tokio::test]
async fn orders_are_scoped_to_their_owner() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return Ok(());
    };
    let client = reqwest::Client::new();
    let owner_token = common::token_for(Uuid::new_v4())?;
    let intruder_token = common::token_for(Uuid::new_v4())?;

    let res = client
        .post(format!("{}/api/orders", server.base_url))
        .header("authorization", format!("Bearer {}", owner_token))
        .json(&json!({ "items": [{ "productId": Uuid::new_v4(), "quantity": 2 }] }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = client
        .get(format!("{}/api/orders", server.base_url))
        .header("authorization", format!("Bearer {}", owner_token))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let orders = body["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["items"][0]["quantity"], json!(2));
    let id = orders[0]["id"].as_str().unwrap().to_string();

    let body = client
        .get(format!("{}/api/orders", server.base_url))
        .header("authorization", format!("Bearer {}", intruder_token))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["orders"], json!([]));

    let res = client
        .get(format!("{}/api/orders/{}", server.base_url, id))
        .header("authorization", format!("Bearer {}", intruder_token))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn whoami_echoes_the_decoded_identity() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return Ok(());
    };
    let client = reqwest::Client::new();

    let sub = Uuid::new_v4();
    let token = common::token_for(sub)?;
    let body = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .header("x-access-token", token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["id"], json!(sub));
    Ok(())
}
