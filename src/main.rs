use color_eyre::Result;
use http_tui::app::{set_bracketed_paste, App};
use http_tui::{config::Config, logging};
use std::io::stdout;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    if let Err(e) = logging::init(&config.log.file) {
        eprintln!(
            "http-tui: logging disabled, cannot open {}: {e}",
            config.log.file.display()
        );
    }
    info!(methods = ?config.request.methods, "starting http-tui");

    let app = App::new(&config)?;

    let terminal = ratatui::init();
    let paste_enabled = set_bracketed_paste(&mut stdout(), true);
    let app_result = app.run(terminal).await;
    if paste_enabled {
        set_bracketed_paste(&mut stdout(), false);
    }
    ratatui::restore();

    app_result
}
