use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::types::Token;

/// Obtains an app access token with the OAuth 2.0 client-credentials grant.
///
/// Sends `grant_type=client_credentials` to `token_url`, authenticating the
/// application with HTTP Basic credentials built from the client id and
/// secret. The returned token carries no refresh token; it is used for the
/// duration of a single run.
///
/// # Arguments
///
/// * `client` - HTTP client shared with the API session
/// * `token_url` - Token endpoint, usually `https://accounts.spotify.com/api/token`
/// * `client_id` - Client id of the registered application
/// * `client_secret` - Client secret of the registered application
///
/// # Errors
///
/// Returns `reqwest::Error` for network failures, a non-2xx answer (for
/// example `400 invalid_client`) or an unparsable body.
///
/// # Example
///
/// ```
/// let client = reqwest::Client::new();
/// let token = client_credentials(&client, &config::spotify_apitoken_url(), &id, &secret).await?;
/// let session = SpotifySession::new(client, &config::spotify_apiurl(), &token.access_token);
/// ```
pub async fn client_credentials(
    client: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<Token, reqwest::Error> {
    let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));

    let res = client
        .post(token_url)
        .header("Authorization", format!("Basic {}", credentials))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    let mut token = res.json::<Token>().await?;
    token.obtained_at = Utc::now().timestamp() as u64;
    Ok(token)
}
