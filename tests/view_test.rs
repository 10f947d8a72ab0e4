use albumgrid::controller::ViewState;
use albumgrid::types::{Album, ExternalUrls, Image};
use albumgrid::view::*;

fn create_test_album(id: &str, name: &str, with_cover: bool) -> Album {
    Album {
        id: id.to_string(),
        name: name.to_string(),
        release_date: "1997-05-21".to_string(),
        images: if with_cover {
            vec![Image {
                url: format!("https://i.scdn.co/image/{}", id),
                height: None,
                width: None,
            }]
        } else {
            Vec::new()
        },
        external_urls: ExternalUrls {
            spotify: format!("https://open.spotify.com/album/{}", id),
        },
    }
}

fn state_with(albums: Vec<Album>) -> ViewState {
    ViewState {
        albums,
        authorized: true,
        ..Default::default()
    }
}

#[test]
fn test_project_loading_wins_over_albums() {
    let mut state = state_with(vec![create_test_album("1", "A", true)]);
    state.loading = true;
    assert_eq!(project(&state), View::Loading);
}

#[test]
fn test_project_idle_without_albums() {
    assert_eq!(project(&ViewState::default()), View::Idle);
}

#[test]
fn test_project_grid_keeps_order_and_fields() {
    let state = state_with(vec![
        create_test_album("1", "OK Computer", true),
        create_test_album("2", "Kid A", false),
    ]);

    let View::Grid(cards) = project(&state) else {
        panic!("expected grid");
    };

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].title, "OK Computer");
    assert_eq!(cards[0].release_date, "1997-05-21");
    assert_eq!(
        cards[0].cover_url.as_deref(),
        Some("https://i.scdn.co/image/1")
    );
    assert_eq!(cards[0].link, "https://open.spotify.com/album/1");
    assert_eq!(cards[1].title, "Kid A");
    assert_eq!(cards[1].cover_url, None);
}

#[test]
fn test_render_loading_and_idle() {
    assert_eq!(render(&View::Loading, Layout::Grid, 100), LOADING_MESSAGE);
    assert_eq!(render(&View::Idle, Layout::Grid, 100), "");
}

#[test]
fn test_render_grid_places_cards_side_by_side() {
    let cards: Vec<AlbumCard> = [
        create_test_album("1", "A", true),
        create_test_album("2", "B", true),
        create_test_album("3", "C", false),
    ]
    .iter()
    .map(AlbumCard::from)
    .collect();

    let out = render_grid(&cards, CARD_WIDTH * 2);

    assert!(out.lines().any(|l| l.contains("1. A") && l.contains("2. B")));
    assert!(!out.lines().any(|l| l.contains("2. B") && l.contains("3. C")));
    assert!(out.contains("Release Date:"));
    assert!(out.contains("Album Link:"));
    assert!(out.contains("https://open.spotify.com/album/1"));
    assert!(out.contains("(no cover)"));
}

#[test]
fn test_render_grid_narrow_terminal_stacks_cards() {
    let cards: Vec<AlbumCard> = [
        create_test_album("1", "A", true),
        create_test_album("2", "B", true),
    ]
    .iter()
    .map(AlbumCard::from)
    .collect();

    let out = render_grid(&cards, 10);

    assert!(out.contains("1. A"));
    assert!(out.contains("2. B"));
    assert!(!out.lines().any(|l| l.contains("1. A") && l.contains("2. B")));
}

#[test]
fn test_render_grid_empty() {
    assert_eq!(render_grid(&[], 100), "");
}

#[test]
fn test_render_table() {
    let cards = vec![AlbumCard::from(&create_test_album("1", "Pablo Honey", true))];
    let out = render_table(&cards);

    assert!(out.contains("release date"));
    assert!(out.contains("Pablo Honey"));
    assert!(out.contains("https://open.spotify.com/album/1"));
}

#[test]
fn test_render_json() {
    let cards = vec![
        AlbumCard::from(&create_test_album("1", "OK Computer", true)),
        AlbumCard::from(&create_test_album("2", "Kid A", false)),
    ];

    let parsed: serde_json::Value = serde_json::from_str(&render_json(&cards)).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "OK Computer");
    assert_eq!(items[1]["cover_url"], serde_json::Value::Null);
}
