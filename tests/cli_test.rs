use albumgrid::cli::{Input, TerminalNotifier, parse_input};
use albumgrid::config;
use albumgrid::controller::{Notice, Notifier};

#[test]
fn test_parse_input_search() {
    assert_eq!(
        parse_input("Radiohead"),
        Input::Search("Radiohead".to_string())
    );
    // whitespace is left for the controller to reject
    assert_eq!(parse_input("   "), Input::Search("   ".to_string()));
}

#[test]
fn test_parse_input_commands() {
    assert_eq!(parse_input(":quit"), Input::Quit);
    assert_eq!(parse_input(" :q "), Input::Quit);
    assert_eq!(parse_input(":help"), Input::Help);
    assert_eq!(parse_input(":open 3"), Input::Open("3".to_string()));
    assert_eq!(parse_input(":o   12 "), Input::Open("12".to_string()));
    assert_eq!(parse_input(":open"), Input::Open(String::new()));
}

#[test]
fn test_terminal_notifier_queues_until_flush() {
    let notifier = TerminalNotifier::default();
    notifier.notify(Notice::NoArtistFound);
    notifier.notify(Notice::SearchFailed);

    assert_eq!(
        notifier.flush(),
        vec![Notice::NoArtistFound, Notice::SearchFailed]
    );
    assert!(notifier.flush().is_empty());
}

#[test]
fn test_notice_messages() {
    assert_eq!(
        Notice::NoArtistFound.message(),
        "No artist found. Try another search."
    );
    assert_eq!(
        Notice::SearchFailed.message(),
        "Something went wrong. Please try again."
    );
}

#[test]
fn test_env_path_points_into_data_dir() {
    assert!(config::env_path().ends_with("albumgrid/.env"));
}
