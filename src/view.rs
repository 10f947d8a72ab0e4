//! Declarative rendering.
//!
//! [`project`] maps a [`ViewState`] to a [`View`]; the `render_*` functions turn
//! a view into text. None of them touch the controller.

use serde::Serialize;
use tabled::{Table, builder::Builder, settings::Style};

use crate::{
    controller::ViewState,
    types::{Album, AlbumTableRow},
    utils,
};

/// Characters a card occupies in the grid, borders included. Wide enough for
/// an unbroken Spotify cover URL.
pub const CARD_WIDTH: usize = 68;
const CARD_TEXT_WIDTH: usize = CARD_WIDTH - 4;

pub const LOADING_MESSAGE: &str = "Loading albums...";
pub const SEARCH_PLACEHOLDER: &str = "Search For Artist";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumCard {
    pub id: String,
    pub title: String,
    pub release_date: String,
    pub cover_url: Option<String>,
    pub link: String,
}

impl From<&Album> for AlbumCard {
    fn from(album: &Album) -> Self {
        AlbumCard {
            id: album.id.clone(),
            title: album.name.clone(),
            release_date: album.release_date.clone(),
            cover_url: album.cover_url().map(str::to_string),
            link: album.link().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading,
    Idle,
    Grid(Vec<AlbumCard>),
}

pub fn project(state: &ViewState) -> View {
    if state.loading {
        View::Loading
    } else if state.albums.is_empty() {
        View::Idle
    } else {
        View::Grid(state.albums.iter().map(AlbumCard::from).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Layout {
    /// Cards side by side, as many per row as the width allows
    #[default]
    Grid,
    /// One row per album
    Table,
    /// Machine readable
    Json,
}

pub fn render(view: &View, layout: Layout, width: usize) -> String {
    match view {
        View::Loading => LOADING_MESSAGE.to_string(),
        View::Idle => String::new(),
        View::Grid(cards) => match layout {
            Layout::Grid => render_grid(cards, width),
            Layout::Table => render_table(cards),
            Layout::Json => render_json(cards),
        },
    }
}

fn card_text(position: usize, card: &AlbumCard) -> String {
    // URLs stay whole so they can be copied or clicked
    let cover = card.cover_url.as_deref().unwrap_or("(no cover)");

    format!(
        "{position}. {title}\n\nRelease Date:\n{date}\n\nCover:\n{cover}\nAlbum Link:\n{link}",
        position = position,
        title = utils::truncate(&card.title, CARD_TEXT_WIDTH - 5),
        date = card.release_date,
        cover = cover,
        link = card.link,
    )
}

/// Lays cards out in rows of `width / CARD_WIDTH` cells, numbered from 1.
pub fn render_grid(cards: &[AlbumCard], width: usize) -> String {
    if cards.is_empty() {
        return String::new();
    }

    let columns = utils::grid_columns(width, CARD_WIDTH).min(cards.len());
    let mut builder = Builder::default();

    for (row, chunk) in cards.chunks(columns).enumerate() {
        let mut record: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(i, card)| card_text(row * columns + i + 1, card))
            .collect();
        record.resize(columns, String::new());
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

pub fn render_table(cards: &[AlbumCard]) -> String {
    let rows: Vec<AlbumTableRow> = cards
        .iter()
        .enumerate()
        .map(|(i, c)| AlbumTableRow {
            position: i + 1,
            name: c.title.clone(),
            release_date: c.release_date.clone(),
            link: c.link.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

pub fn render_json(cards: &[AlbumCard]) -> String {
    serde_json::to_string_pretty(cards).unwrap_or_else(|_| "[]".to_string())
}
