use clap::Args;
use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::{utils, OutputFormat};
use crate::client::ApiClient;

#[derive(Debug, Args, Serialize)]
pub struct SignupArgs {
    #[arg(long, help = "Full name")]
    pub full_name: String,
    #[arg(long, help = "Name with initials")]
    pub name_with_initials: String,
    #[arg(long, default_value = "", help = "National ID number")]
    pub nic: String,
    #[arg(long, help = "Email")]
    pub email: String,
    #[arg(help = "Username")]
    pub username: String,
    #[arg(long, help = "Password")]
    pub password: String,
    #[arg(long, help = "Password again")]
    pub confirm_password: String,
}

fn message_of(data: &Value, fallback: &str) -> String {
    data.get("message")
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

pub async fn signin(
    client: &ApiClient,
    username: &str,
    password: &str,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let data: Value = client
        .post("signin", &json!({ "username": username, "password": password }))
        .await?;
    utils::output_success(output_format, &message_of(&data, "Login successful"), Some(data))
}

pub async fn signup(
    client: &ApiClient,
    args: SignupArgs,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let data: Value = client.post("signup", &args).await?;
    utils::output_success(output_format, &message_of(&data, "Account created"), Some(data))
}

pub async fn forgot_password(
    client: &ApiClient,
    email: &str,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let data: Value = client.post("forgot-password", &json!({ "email": email })).await?;
    utils::output_success(output_format, &message_of(&data, "Contact the admin"), None)
}
