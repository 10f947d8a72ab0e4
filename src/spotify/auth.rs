use chrono::Utc;
use reqwest::Client;

use crate::{
    spotify::ApiError,
    types::{AccessToken, Credentials, TokenResponse},
};

/// Exchanges client credentials for an access token.
///
/// Performs the OAuth 2.0 client-credentials grant against `token_url` with a
/// form-encoded body of `grant_type`, `client_id` and `client_secret`. The
/// response status is not inspected: a rejected request surfaces as a body
/// without `access_token` and fails to decode.
///
/// # Returns
///
/// - `Ok(AccessToken)` - bearer token stamped with the time it was obtained
/// - `Err(ApiError)` - network failure or a response without `access_token`
///
/// # Example
///
/// ```
/// let client = Client::new();
/// let token = request_token(&client, "https://accounts.spotify.com/api/token", &creds).await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken, ApiError> {
    let res = client
        .post(token_url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ])
        .send()
        .await?;

    let json = res.json::<TokenResponse>().await?;
    if json.access_token.is_empty() {
        return Err(ApiError::Critical(
            "token endpoint returned an empty access_token".to_string(),
        ));
    }

    Ok(AccessToken {
        access_token: json.access_token,
        token_type: json.token_type.unwrap_or_else(|| "Bearer".to_string()),
        expires_in: json.expires_in.unwrap_or(3600),
        obtained_at: Utc::now(),
    })
}
