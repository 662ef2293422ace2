mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn signin_without_password_is_rejected() -> Result<()> {
    let server = common::start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/signin"))
        .json(&json!({ "username": "pharmacist" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Username and password required");
    Ok(())
}

#[tokio::test]
async fn signup_with_mismatched_passwords_is_rejected() -> Result<()> {
    let server = common::start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/signup"))
        .json(&json!({
            "full_name": "Nimal Perera",
            "name_with_initials": "N. Perera",
            "email": "nimal@example.com",
            "username": "nimal",
            "password": "one",
            "confirm_password": "two"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Passwords do not match");
    Ok(())
}

#[tokio::test]
async fn forgot_password_needs_email() -> Result<()> {
    let server = common::start_server().await?;
    let client = reqwest::Client::new();

    let res = client.post(server.url("/forgot-password")).json(&json!({})).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Email is required");
    Ok(())
}
