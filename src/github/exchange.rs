use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;

use crate::errors::{AppError, AppResult};

const GITHUB_API: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// GitHub rejects requests without a User-Agent.
pub fn http_client() -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .map_err(AppError::Network)
}

/// Exchanges the signed app JWT for an installation access token.
///
/// One POST, one attempt. No pagination, no rate-limit handling.
pub async fn fetch_installation_token(
    client: &reqwest::Client,
    installation_id: u64,
    assertion: &str,
) -> AppResult<String> {
    let url = format!("{GITHUB_API}/app/installations/{installation_id}/access_tokens");

    let response = client
        .post(&url)
        .header(AUTHORIZATION, format!("Bearer {assertion}"))
        .header(ACCEPT, GITHUB_ACCEPT)
        .send()
        .await
        .map_err(AppError::Network)?;

    let status = response.status();
    let body: Value = response.json().await.map_err(AppError::ResponseDecode)?;

    token_field(status, &body)
}

fn token_field(status: reqwest::StatusCode, body: &Value) -> AppResult<String> {
    match body.get("token") {
        Some(Value::String(token)) => Ok(token.clone()),
        Some(other) => Err(AppError::UnexpectedToken(format!(
            "token field is not a string: {other}"
        ))),
        // Error responses carry a "message" instead of a token; include it
        // and the status so auth failures are diagnosable.
        None => {
            let detail = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("response has no token field");
            Err(AppError::UnexpectedToken(format!("{status}: {detail}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;

    #[test]
    fn string_token_is_extracted() {
        let body = json!({"token": "abc123", "expires_at": "2026-01-01T00:00:00Z"});
        assert_eq!(token_field(StatusCode::CREATED, &body).unwrap(), "abc123");
    }

    #[test]
    fn non_string_token_is_rejected() {
        let body = json!({"token": 42});
        let err = token_field(StatusCode::CREATED, &body).unwrap_err();
        assert!(matches!(err, AppError::UnexpectedToken(_)), "got {err:?}");
    }

    #[test]
    fn missing_token_is_rejected() {
        let body = json!({});
        let err = token_field(StatusCode::OK, &body).unwrap_err();
        assert!(matches!(err, AppError::UnexpectedToken(_)), "got {err:?}");
    }

    #[test]
    fn auth_failure_reports_status_and_github_message() {
        let body = json!({"message": "Bad credentials"});
        let err = token_field(StatusCode::UNAUTHORIZED, &body).unwrap_err();

        let text = err.to_string();
        assert!(text.contains("401"), "text was: {text}");
        assert!(text.contains("Bad credentials"), "text was: {text}");
    }
}
