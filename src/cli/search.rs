use crate::{
    cli::{bootstrap, open_link, print_albums, run_submit},
    controller::SearchOutcome,
    info, success, utils,
    view::Layout,
    warning,
};

pub async fn search(query: String, layout: Layout, width: Option<usize>, open: bool) {
    let controller = bootstrap().await;
    controller.set_query(query).await;

    match run_submit(&controller).await {
        SearchOutcome::Skipped => warning!("Nothing to search for."),
        SearchOutcome::Completed(0) => info!("The artist has no albums."),
        SearchOutcome::Completed(count) => {
            print_albums(&controller, layout, utils::terminal_width(width)).await;
            if layout != Layout::Json {
                success!("Found {} albums.", count);
            }

            if open {
                for album in controller.snapshot().await.albums {
                    open_link(album.link());
                }
            }
        }
        SearchOutcome::NoArtist | SearchOutcome::Failed => std::process::exit(1),
        SearchOutcome::Superseded => {}
    }
}
