//! vesselboard - terminal dashboard for vessel earnings.
//!
//! Usage:
//!   vesselboard                        # built-in fleet, interactive
//!   vesselboard --data fleet.json      # rows from a JSON file
//!   vesselboard --config board.json    # table options from a JSON file
//!   vesselboard --dump --filter hafnia # print the first page and exit

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

use vesselboard::config::{ConfigError, DashboardConfig};
use vesselboard::models::{VesselSource, vessel_columns};
use vesselboard::table::{DataTable, TableAction};
use vesselboard::tui::{App, AppState};
use vesselboard::view::render_plain;

/// UI tick; drives toast expiry and the loading delay.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Terminal dashboard for vessel earnings.
#[derive(Parser)]
#[command(name = "vesselboard", about = "Vessel earnings dashboard")]
struct Args {
    /// JSON config file. Flags below override its values.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON array of vessels. Default: built-in mock fleet.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Initial filter text for the bound column.
    #[arg(long, value_name = "TEXT")]
    filter: Option<String>,

    /// Rows per page. Must be one of the configured page size options.
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Cap on selected rows.
    #[arg(long, value_name = "N")]
    max_selection: Option<usize>,

    /// Print the first page as plain text and exit.
    #[arg(long)]
    dump: bool,

    /// Write logs to this file in interactive mode.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber. `RUST_LOG` wins over `-v`/`-q`.
fn init_logging(verbose: u8, quiet: bool, dump: bool, log_file: Option<&PathBuf>) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vesselboard={}", level)));

    if dump {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    // The interactive UI owns stdout and stderr
    let Some(path) = log_file else {
        return;
    };
    match File::create(path) {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(e) => eprintln!("Warning: cannot open log file '{}': {}", path.display(), e),
    }
}

/// Defaults, then the config file, then flags.
fn build_config(args: &Args) -> Result<DashboardConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(max) = args.max_selection {
        config.table.max_rows_selection = max;
    }
    if let Some(size) = args.page_size {
        config.table.page_size = size;
    }
    config.validate()?;
    Ok(config)
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet, args.dump, args.log_file.as_ref());

    let config = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "bad configuration");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    debug!(?config, "configuration");

    let source = match &args.data {
        Some(path) => VesselSource::File(path.clone()),
        None => VesselSource::Mock,
    };
    let rows = match source.load() {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, "cannot load vessels");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    info!(count = rows.len(), "vessels loaded");

    let mut table = DataTable::new(rows, vessel_columns(), config.table.clone());
    if let Some(text) = &args.filter {
        table.dispatch(TableAction::SetFilter(text.clone()));
    }

    if args.dump {
        print!("{}", render_plain(&table.view_model()));
        return;
    }

    let today = chrono::Local::now().date_naive();
    let mut state = AppState::new(table, &config, today);
    if let Some(text) = &args.filter {
        state.filter_input = text.clone();
    }

    let app = App::new(source, state);
    if let Err(e) = app.run(TICK_RATE) {
        error!(error = %e, "terminal error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
