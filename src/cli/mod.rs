//! # CLI Module
//!
//! Command-line front ends for the search controller.
//!
//! ## Commands
//!
//! - [`search`] - one-shot search: renders the albums of one artist and exits
//! - [`interactive`] - prompt loop; each line typed and confirmed with Enter
//!   is a search, `:open <n>` opens an album link, `:quit` leaves
//!
//! Both commands share the same bootstrap: credentials are read from the
//! environment, exchanged once for an access token, and a
//! [`SearchController`] is built around a [`SpotifyClient`]. Notifications
//! raised during a search are queued by [`TerminalNotifier`] and printed once
//! the loading spinner is gone.

mod interactive;
mod search;

pub use interactive::{Input, interactive, parse_input};
pub use search::search;

use std::{sync::Mutex, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config,
    controller::{Notice, Notifier, SearchController, SearchOutcome},
    error,
    management::TokenStore,
    spotify::SpotifyClient,
    view::{self, Layout},
    warning,
};

type Controller = SearchController<SpotifyClient, TerminalNotifier>;

/// Queues notices until [`TerminalNotifier::flush`] prints them.
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    pending: Mutex<Vec<Notice>>,
}

impl TerminalNotifier {
    pub fn flush(&self) -> Vec<Notice> {
        let notices = match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };

        for notice in &notices {
            warning!("{}", notice.message());
        }
        notices
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match self.pending.lock() {
            Ok(mut pending) => pending.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}

async fn bootstrap() -> Controller {
    let credentials = match config::credentials() {
        Ok(c) => c,
        Err(e) => error!(
            "Cannot load Spotify credentials: {}\nAdd them to {} or export them.",
            e,
            config::env_path().display()
        ),
    };

    let controller = SearchController::new(
        SpotifyClient::from_config(),
        TerminalNotifier::default(),
        TokenStore::new(),
    );
    controller.initialize(&credentials).await;
    controller
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(view::LOADING_MESSAGE);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Runs the bound query with a spinner and prints the queued notices after.
async fn run_submit(controller: &Controller) -> SearchOutcome {
    let pb = spinner();
    let outcome = controller.submit().await;
    pb.finish_and_clear();
    controller.notifier().flush();
    outcome
}

async fn print_albums(controller: &Controller, layout: Layout, width: usize) {
    let state = controller.snapshot().await;
    let rendered = view::render(&view::project(&state), layout, width);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
}

fn open_link(url: &str) {
    if webbrowser::open(url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        )
    }
}
