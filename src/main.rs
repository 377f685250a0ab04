use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

/// Filter overlay for browsing lease offers by make, model, and more
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/leasefilter-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, /)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Load reference data from this catalog file instead of the configured source
    #[arg(long)]
    catalog: Option<String>,
}

mod app;
mod handlers;
mod messages;
mod ui;

use leasefilter::cache::CacheDb;
use leasefilter::config::Config;
use leasefilter::model::Model;
use leasefilter::scroll::ScrollPersister;
use leasefilter::services::{self, CatalogRequest, CatalogResponse};
use messages::Msg;

pub struct App {
    pub model: Model,

    cache: CacheDb,
    scroll: ScrollPersister,
    catalog_tx: mpsc::UnboundedSender<CatalogRequest>,
    catalog_rx: mpsc::UnboundedReceiver<CatalogResponse>,

    /// Minimum age before the catalog is fetched again
    stale_after: Duration,
}

impl App {
    fn new(config: &Config, source: leasefilter::catalog::CatalogSource) -> Result<Self> {
        let cache = CacheDb::new()?;
        let (catalog_tx, catalog_rx) = services::spawn_catalog_service(source);

        let mut model = Model::new(config.vim_mode);

        // Show the last snapshot right away; a refresh replaces it when stale
        match cache.get_catalog() {
            Ok(Some((catalog, fetched_at))) => {
                tracing::debug!("using catalog snapshot from {}", fetched_at);
                model.catalog.apply_loaded(catalog, fetched_at);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to read catalog snapshot: {}", e),
        }

        let mut app = Self::with_parts(
            model,
            cache,
            ScrollPersister::new(config.scroll_debounce()),
            catalog_tx,
            catalog_rx,
            config.stale_after(),
        );
        app.request_catalog_refresh(false);

        Ok(app)
    }

    fn with_parts(
        model: Model,
        cache: CacheDb,
        scroll: ScrollPersister,
        catalog_tx: mpsc::UnboundedSender<CatalogRequest>,
        catalog_rx: mpsc::UnboundedReceiver<CatalogResponse>,
        stale_after: Duration,
    ) -> Self {
        Self {
            model,
            cache,
            scroll,
            catalog_tx,
            catalog_rx,
            stale_after,
        }
    }

    /// Process one message (Elm-style update)
    fn update(&mut self, msg: Msg) -> Result<()> {
        match msg {
            Msg::KeyPress(key) => handlers::handle_key(self, key),
            Msg::Catalog(response) => handlers::handle_catalog_response(self, response),
            Msg::Tick => self.on_tick(),
        }
        Ok(())
    }

    fn on_tick(&mut self) {
        if self.model.ui.should_dismiss_toast() {
            self.model.ui.dismiss_toast();
        }

        if let Err(e) = self.scroll.flush_if_due(&self.cache, Instant::now()) {
            tracing::warn!("Failed to persist scroll positions: {}", e);
        }

        self.request_catalog_refresh(false);
    }

    /// Ask the catalog service for fresh data.
    /// Without `force` this only happens once the staleness window has passed.
    fn request_catalog_refresh(&mut self, force: bool) {
        let catalog = &self.model.catalog;
        if catalog.load_state.is_loading() {
            return;
        }

        let now = chrono::Utc::now();
        // Failed attempts count too, so a broken source is not polled every tick
        let stale = leasefilter::logic::freshness::is_stale(
            catalog.last_activity(),
            now,
            self.stale_after,
        );
        if !(force || stale) {
            return;
        }

        if self.catalog_tx.send(CatalogRequest::Refresh).is_ok() {
            self.model.catalog.begin_loading(now);
        }
    }

    /// Drain finished catalog loads without blocking
    fn pending_catalog_messages(&mut self) -> Vec<Msg> {
        let mut messages = Vec::new();
        while let Ok(response) = self.catalog_rx.try_recv() {
            messages.push(Msg::Catalog(response));
        }
        messages
    }

    fn shutdown(&mut self) {
        self.remember_scroll_offset();
        if let Err(e) = self.scroll.flush(&self.cache) {
            tracing::warn!("Failed to persist scroll positions on exit: {}", e);
        }
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/leasefilter/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("leasefilter").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn missing_config_error() -> anyhow::Error {
    let expected_path = match dirs::config_dir() {
        Some(config_dir) => config_dir
            .join("leasefilter")
            .join("config.yaml")
            .display()
            .to_string(),
        None => "~/.config/leasefilter/config.yaml".to_string(),
    };

    anyhow::anyhow!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location, or --catalog <file>.",
        expected_path
    )
}

fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let log_path = leasefilter::utils::get_debug_log_path();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open debug log {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.debug)?;
    tracing::debug!("Debug mode enabled");

    // Load configuration; a --catalog file alone is enough to run
    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            tracing::debug!("Loading config from: {:?}", path);
            Config::load(&path)?
        }
        None if args.catalog.is_some() => Config::from_yaml("{}")?,
        None => return Err(missing_config_error()),
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(catalog) = args.catalog {
        config.catalog_file = Some(catalog);
    }

    let source = config.catalog_source()?;
    tracing::debug!("Catalog source: {}", source.describe());

    let mut app = App::new(&config, source)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);
    app.shutdown();

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;
        app.remember_scroll_offset();

        if app.model.ui.should_quit {
            break;
        }

        for msg in app.pending_catalog_messages() {
            app.update(msg)?;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.update(Msg::KeyPress(key))?;
            }
        }

        app.update(Msg::Tick)?;
    }

    Ok(())
}
