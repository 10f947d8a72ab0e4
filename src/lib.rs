//! albumgrid library
//!
//! This library looks up an artist on Spotify with client-credentials OAuth,
//! fetches the artist's albums, removes duplicate titles and renders the result
//! as a grid of cards in the terminal.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `controller` - Search state and the search pipeline
//! - `logging` - Diagnostic logging setup
//! - `management` - Access token storage
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `view` - Projection of the search state to rendered output
//!
//! # Example
//!
//! ```
//! use albumgrid::{config, cli, view::Layout};
//!
//! #[tokio::main]
//! async fn main() -> albumgrid::Res<()> {
//!     config::load_env().await?;
//!     cli::search("Radiohead".to_string(), Layout::Grid, None, false).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod view;

/// Boxed-error result used by startup code (environment, logging).
///
/// Library operations that talk to Spotify return
/// [`spotify::ApiError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// ```
/// info!("Opening {}", album.name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a status line prefixed with a green `✓`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits with status 1.
///
/// Reserved for startup failures the program cannot continue from, such as
/// missing credentials. Search failures are reported through
/// [`controller::Notifier`] instead.
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // not reached
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a status line prefixed with a yellow `!`. This is how the two
/// search notices reach the user.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
