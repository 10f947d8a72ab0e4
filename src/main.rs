use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use albumgrid::{cli, config, error, logging, view::Layout, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Print diagnostic logs to stderr (RUST_LOG overrides)
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search an artist and list their albums
    Search(SearchOptions),

    /// Prompt for artists until :quit (default)
    Interactive(RenderOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Artist name
    #[clap(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Open every album link in the browser
    #[clap(long)]
    pub open: bool,

    #[command(flatten)]
    pub render: RenderOptions,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct RenderOptions {
    /// How to render the albums
    #[clap(long, value_enum, default_value_t = Layout::Grid)]
    pub layout: Layout,

    /// Terminal width used to size the grid (defaults to $COLUMNS)
    #[clap(long)]
    pub width: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        warning!("Cannot initialize logging. Err: {}", e);
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    match cli.command {
        Some(Command::Search(opt)) => {
            cli::search(
                opt.query.join(" "),
                opt.render.layout,
                opt.render.width,
                opt.open,
            )
            .await
        }
        Some(Command::Interactive(opt)) => cli::interactive(opt.layout, opt.width).await,
        None => cli::interactive(Layout::default(), None).await,
        Some(Command::Completions(opt)) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
