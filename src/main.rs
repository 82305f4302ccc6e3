use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use wordsuggest::app::App;
use wordsuggest::config::{self, ConfigResult};
use wordsuggest::controller::SuggestionController;
use wordsuggest::source::HttpSource;

/// Upper bound on how long the loop waits for input between ticks
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Interactive word autocomplete backed by a remote suggestion service
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Suggestion endpoint (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Quiet period after the last keystroke before fetching, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Maximum number of suggestions to request
    #[arg(long)]
    limit: Option<usize>,

    /// Path to a config file (default: ~/.config/wordsuggest/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    let mut suggest_config = config.suggest;
    if let Some(endpoint) = args.endpoint {
        suggest_config.endpoint = endpoint;
    }
    if let Some(debounce_ms) = args.debounce_ms {
        suggest_config.debounce_ms = debounce_ms;
    }
    if let Some(limit) = args.limit {
        suggest_config.result_limit = limit;
    }
    suggest_config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("Failed to start async runtime")?;
    let _guard = runtime.enter();

    let source = HttpSource::new(&suggest_config.endpoint, suggest_config.timeout())?;
    log::info!("Using suggestion endpoint {}", source.base_url());
    let controller = SuggestionController::new(
        source,
        suggest_config.controller_options(),
        runtime.handle().clone(),
    );
    let app = App::new(controller, warning);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    release_mouse(&mut std::io::stdout());
    ratatui::restore();

    result
}

/// Turn mouse reporting back off, logging instead of failing on error
fn release_mouse<W: Write>(out: &mut W) {
    if let Err(e) = execute!(out, DisableMouseCapture) {
        log::warn!("Failed to disable mouse capture: {}", e);
    }
}

fn init_logging(log_file: Option<&std::path::Path>) -> Result<()> {
    // The TUI owns the terminal, so logs only go to a file when asked for
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .wrap_err_with(|| format!("Failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App<HttpSource>) -> Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|frame| app.render(frame))?;
            needs_redraw = false;
        }

        // Wake up in time for a pending debounce deadline
        let timeout = app
            .suggest
            .time_until_due()
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));

        if event::poll(timeout)? {
            needs_redraw |= app.handle_event(event::read()?);
        }

        needs_redraw |= app.on_tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
