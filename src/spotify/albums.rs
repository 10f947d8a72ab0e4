use reqwest::Client;

use crate::types::AlbumResponse;

pub const INCLUDE_GROUPS: &str = "album";
pub const MARKET: &str = "US";
pub const PAGE_LIMIT: u32 = 50;

/// Retrieves the first page of albums for an artist.
///
/// Calls `GET {api_url}/artists/{id}/albums` restricted to full-length albums
/// (`include_groups=album`) available in the US market, with a page size of
/// 50. Only that single page is fetched; the caller decides what to do with
/// the `next` link.
///
/// # Arguments
///
/// * `artist_id` - Spotify ID of the artist
/// * `token` - bearer token for the request
///
/// # Returns
///
/// - `Ok(AlbumResponse)` - the page as returned by Spotify, in API order
/// - `Err(reqwest::Error)` - network error, non-success status or malformed body
///
/// # Example
///
/// ```
/// let page = get_albums_for_artist(&client, api_url, token, "4Z8W4fKeB5YxbusRsdQVPb").await?;
/// println!("Fetched {} of {:?} albums", page.items.len(), page.total);
/// ```
pub async fn get_albums_for_artist(
    client: &Client,
    api_url: &str,
    token: &str,
    artist_id: &str,
) -> Result<AlbumResponse, reqwest::Error> {
    let api_url = format!("{uri}/artists/{id}/albums", uri = api_url, id = artist_id);
    let limit = PAGE_LIMIT.to_string();

    let response = client
        .get(&api_url)
        .query(&[
            ("include_groups", INCLUDE_GROUPS),
            ("market", MARKET),
            ("limit", limit.as_str()),
        ])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AlbumResponse>().await
}
