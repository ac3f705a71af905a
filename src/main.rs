mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use controller::AppController;
use model::{AppModel, HttpGateway};
use view::AppView;

const DEFAULT_API_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Viberfy Client Starting ===");

    let api_url =
        std::env::var("VIBERFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let site_url = std::env::var("VIBERFY_SITE_URL").unwrap_or_else(|_| api_url.clone());
    let token = std::env::var("VIBERFY_TOKEN").ok().filter(|t| !t.is_empty());

    // A stored token is the initial signed-in signal; the identity fetch may
    // still downgrade it once we ask the backend who we are.
    let initial_auth = token.is_some();
    tracing::debug!(api_url = %api_url, initial_auth, "Configuration loaded");

    let gateway = Arc::new(HttpGateway::new(&api_url, token)?);
    let model = Arc::new(AppModel::new(initial_auth));
    let controller = AppController::new(model.clone(), gateway, site_url);

    controller.load_track_grid().await;

    let controller_for_identity = controller.clone();
    tokio::spawn(async move {
        controller_for_identity.refresh_identity().await;
    });

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Viberfy client shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let playback = model.playback_view().await;
        let liked_overlay = model.liked_overlay().await;
        let ui_state = model.get_ui_state().await;
        let session = model.get_session().await;
        let content_state = model.get_content_state().await;
        let should_quit = model.should_quit().await;

        terminal.draw(|f| {
            AppView::render(f, &playback, &liked_overlay, &ui_state, &session, &content_state);
        })?;

        // Short poll keeps the playback bar responsive while intents run
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = controller.handle_key_event(key).await;
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
