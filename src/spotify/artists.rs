use reqwest::Client;

use crate::types::{Artist, SearchArtistsResponse};

/// Searches the catalog for artists matching `query`.
///
/// Calls `GET {api_url}/search` with `q` and `type=artist`, bearer
/// authenticated, and returns the `artists.items` list in the order Spotify
/// ranked them. The query is URL encoded by reqwest.
///
/// # Returns
///
/// - `Ok(Vec<Artist>)` - possibly empty list of matches
/// - `Err(reqwest::Error)` - network error, non-success status or a body that
///   does not match the expected shape
///
/// # Example
///
/// ```
/// let artists = search_artists(&client, "https://api.spotify.com/v1", token, "Radiohead").await?;
/// if let Some(first) = artists.first() {
///     println!("{} ({})", first.name, first.id);
/// }
/// ```
pub async fn search_artists(
    client: &Client,
    api_url: &str,
    token: &str,
    query: &str,
) -> Result<Vec<Artist>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = api_url);

    let response = client
        .get(&api_url)
        .query(&[("q", query), ("type", "artist")])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SearchArtistsResponse>().await?;
    Ok(res.artists.items)
}
