use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Mutex, time::Duration};

/// Course materials browser for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir (materials-tui-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Open a route directly, e.g. "term-3" or "/materials/term-3/<folder id>"
    route: Option<String>,
}

mod app;
mod handlers;
mod ui;

use materials_tui::api::DriveClient;
use materials_tui::config::{self, Config};
use materials_tui::logic::path::Route;
use materials_tui::model;
use materials_tui::registry::TermRegistry;
use materials_tui::services::{self, ApiRequest, ApiResponse};
use materials_tui::utils;
use ui::icons::{IconMode, IconRenderer, IconTheme};

pub struct App {
    pub model: model::Model,

    registry: TermRegistry,
    api_tx: tokio::sync::mpsc::UnboundedSender<ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<ApiResponse>,
    icon_renderer: IconRenderer,

    open_command: Option<String>,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let client = match config.request_timeout_secs {
            Some(secs) => DriveClient::with_timeout(
                config.api_base_url.clone(),
                config.api_key.clone(),
                Duration::from_secs(secs),
            )?,
            None => DriveClient::new(config.api_base_url.clone(), config.api_key.clone()),
        };

        let (api_tx, api_rx) = services::spawn_api_service(client, config.parallel_breadcrumbs);

        let icon_renderer = IconRenderer::new(
            IconMode::from_config(&config.icon_mode),
            IconTheme::default(),
        );

        let registry = TermRegistry::new(&config.term_folders);
        {
            let unconfigured: Vec<&str> = registry
                .terms()
                .into_iter()
                .filter(|term| !term.is_configured())
                .map(|term| term.slug.as_str())
                .collect();
            if !unconfigured.is_empty() {
                tracing::warn!(terms = ?unconfigured, "no folder configured for some terms");
            }
        }

        Ok(Self {
            model: model::Model::new(config.vim_mode),
            registry,
            api_tx,
            api_rx,
            icon_renderer,
            open_command: config.open_command,
        })
    }

    pub fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response);
    }
}

fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::debug!("Debug mode enabled");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;

    let config_path = config::get_config_path(args.config)?;
    match &config_path {
        Some(path) => tracing::debug!(path = %path.display(), "loading config"),
        None => tracing::debug!("no config file found, using environment only"),
    }

    let mut config = config::load(config_path.as_ref())?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let mut app = App::new(config)?;

    if let Some(route) = args.route.as_deref().and_then(Route::parse) {
        app.navigate(route);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    handlers::handle_key(app, key)?;
                }
            }
        }
    }

    Ok(())
}
