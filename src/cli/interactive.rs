use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    cli::{Controller, bootstrap, open_link, print_albums, run_submit},
    controller::SearchOutcome,
    info, success, utils,
    view::{Layout, SEARCH_PLACEHOLDER},
    warning,
};

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Search(String),
    Open(String),
    Help,
    Quit,
}

pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((":open" | ":o", arg)) => Input::Open(arg.trim().to_string()),
        _ => match trimmed {
            ":open" | ":o" => Input::Open(String::new()),
            ":quit" | ":q" | ":exit" => Input::Quit,
            ":help" | ":h" => Input::Help,
            _ => Input::Search(line.to_string()),
        },
    }
}

fn print_help() {
    info!("Type an artist name and press Enter to list their albums.");
    info!(":open <n>  open album <n> in the browser");
    info!(":quit      leave");
}

fn prompt() {
    print!("{} {} ", SEARCH_PLACEHOLDER.bold(), ">".blue().bold());
    let _ = std::io::stdout().flush();
}

async fn open_card(controller: &Controller, arg: &str) {
    let albums = controller.snapshot().await.albums;
    if albums.is_empty() {
        warning!("No albums to open. Search for an artist first.");
        return;
    }

    match utils::parse_card_index(arg, albums.len()) {
        Ok(index) => {
            let album = &albums[index];
            info!("Opening {}", album.name);
            open_link(album.link());
        }
        Err(e) => warning!("{}", e),
    }
}

pub async fn interactive(layout: Layout, width: Option<usize>) {
    let controller = bootstrap().await;
    let width = utils::terminal_width(width);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warning!("Cannot read input. Err: {}", e);
                break;
            }
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::Help => print_help(),
            Input::Open(arg) => open_card(&controller, &arg).await,
            Input::Search(text) => {
                controller.set_query(text).await;
                if let SearchOutcome::Completed(count) = run_submit(&controller).await {
                    print_albums(&controller, layout, width).await;
                    success!("Found {} albums.", count);
                }
            }
        }
    }
}
