//! Auth Commands
//!
//! Login against the backend's form-encoded token endpoint.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::LoginResponse;

fn form_encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    let body = format!(
        "username={}&password={}",
        form_encode(username),
        form_encode(password)
    );
    let response = super::send(
        "POST",
        "/login",
        None,
        Some(("application/x-www-form-urlencoded", body)),
    )
    .await
    .map_err(|e| format!("Error fetching login token: {e}"))?;
    super::decode(response).await
}
