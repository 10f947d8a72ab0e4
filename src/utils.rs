use std::{collections::HashSet, env};

use crate::types::Album;

pub const DEFAULT_TERMINAL_WIDTH: usize = 100;

/// Collapses albums sharing a name, keeping the first occurrence in place.
pub fn remove_duplicate_albums(albums: &mut Vec<Album>) {
    let mut seen_names = HashSet::new();
    albums.retain(|album| seen_names.insert(album.name.clone()));
}

/// Trimmed query, or `None` when there is nothing to search for.
pub fn normalize_query(query: &str) -> Option<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Width to lay the grid out in: the explicit value, else `COLUMNS`, else
/// [`DEFAULT_TERMINAL_WIDTH`].
pub fn terminal_width(explicit: Option<usize>) -> usize {
    explicit
        .or_else(|| {
            env::var("COLUMNS")
                .ok()
                .and_then(|c| c.trim().parse::<usize>().ok())
        })
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Number of cards that fit side by side; never less than one.
pub fn grid_columns(width: usize, card_width: usize) -> usize {
    if card_width == 0 {
        return 1;
    }
    (width / card_width).max(1)
}

/// Cuts `text` to at most `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Parses the argument of an interactive `:open <n>` command (1-based).
pub fn parse_card_index(arg: &str, count: usize) -> Result<usize, String> {
    let n = arg
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a card number", arg.trim()))?;
    if n == 0 || n > count {
        return Err(format!("card {} does not exist (1-{})", n, count));
    }
    Ok(n - 1)
}
