use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
};

use city_suggest::app::App;
use city_suggest::config::{self, Config};
use city_suggest::search::{ReferencePoint, SearchClient, SearchWorker};

/// Interactive city-name autocomplete for the terminal
#[derive(Parser, Debug)]
#[command(name = "city-suggest", version, about)]
struct Args {
    /// Base URL of the city search service
    #[arg(long)]
    endpoint: Option<String>,

    /// Quiet period after the last keystroke before searching
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Rank results by distance from this point
    #[arg(
        long,
        value_name = "LNG,LAT",
        value_parser = parse_reference_point,
        allow_hyphen_values = true
    )]
    near: Option<ReferencePoint>,

    /// Read configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn parse_reference_point(s: &str) -> Result<ReferencePoint, String> {
    ReferencePoint::parse(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    init_logging();

    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(warning) = &loaded.warning {
        eprintln!("Warning: {}", warning);
    }
    let config = apply_overrides(loaded.config, &args);

    // Validate everything before touching the terminal
    let near = match args.near {
        Some(point) => Some(point),
        None => config
            .search
            .near
            .as_ref()
            .map(|near| ReferencePoint::new(near.lng, near.lat))
            .transpose()?,
    };
    let client = SearchClient::new(&config.search)?.with_reference_point(near);
    log::info!("Searching {}", client.search_url());

    let (worker, request_tx, response_rx) = SearchWorker::spawn(client)?;

    let mut app = App::new(&config);
    app.config_warning = loaded.warning;
    app.widget.set_channels(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    if let Err(e) = execute!(std::io::stdout(), EnableMouseCapture) {
        log::warn!("Mouse capture unavailable: {}", e);
    }

    let result = run(terminal, &mut app);

    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    worker.shutdown();

    result?;

    if let Some(output) = app.output() {
        println!("{}", output);
    }
    Ok(())
}

fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(endpoint) = &args.endpoint {
        config.search.endpoint = endpoint.clone();
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.search.debounce_ms = debounce_ms;
    }
    config
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file in the temp dir; the terminal belongs to the TUI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("city-suggest-debug.log");
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
fn init_logging() {}
