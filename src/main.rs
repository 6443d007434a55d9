//! dashkit command line entry point

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use dashkit_config::{Config, ConfigError};
use dashkit_core::{
    format_currency, format_date_to_local, generate_pagination, generate_y_axis, CoreError,
    RevenuePoint,
};
use dashkit_search::{pagination_links, Location, MemoryNavigator, Navigator, SearchControl};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

const DEFAULT_CONFIG: &str = "dashkit.yaml";

#[derive(Parser, Debug)]
#[command(name = "dashkit")]
#[command(version = "0.1.0")]
#[command(about = "Formatting, chart axis and pagination helpers for admin dashboards", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format an amount in cents as US dollars
    Currency {
        #[arg(allow_hyphen_values = true)]
        cents: i64,
    },
    /// Format an ISO date for display
    Date {
        iso_date: String,
        /// Locale tag, e.g. de-DE (defaults to formatting.locale)
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Build the revenue chart y axis from a JSON or YAML list of {label, value}
    Axis { file: PathBuf },
    /// Print the items of a pagination control
    Paginate {
        current: usize,
        total: usize,
        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
        /// Also print the link of every page relative to this location
        #[arg(long)]
        url: Option<String>,
    },
    /// Apply search terms to a location as if typed into the search field
    Search {
        url: String,
        /// Successive field values; only the last one within the quiet period applies
        terms: Vec<String>,
        /// Pause between two keystrokes
        #[arg(long, default_value_t = 0)]
        interval_ms: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = load_config(&args.config)?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();
    log::debug!("Config: locale={}, debounce={}ms", config.formatting.locale, config.search.debounce_ms);

    let Some(command) = args.command else {
        return Err(anyhow!("no command given, see --help"));
    };

    match command {
        Command::Currency { cents } => println!("{}", format_currency(cents)),
        Command::Date { iso_date, locale } => {
            let locale = locale.unwrap_or_else(|| config.formatting.locale.clone());
            let text = format_date_to_local(&iso_date, Some(&locale)).map_err(report)?;
            println!("{}", text);
        }
        Command::Axis { file } => {
            let points = read_revenue(&file)?;
            log::info!("Loaded {} revenue points from {}", points.len(), file.display());
            let axis = generate_y_axis(&points).map_err(report)?;
            println!("{}", serde_json::to_string_pretty(&axis)?);
        }
        Command::Paginate { current, total, json, url } => {
            let tokens = generate_pagination(current, total).map_err(report)?;
            if json {
                println!("{}", serde_json::to_string(&tokens)?);
            } else {
                let line: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
                println!("{}", line.join(" "));
            }
            if let Some(url) = url {
                let location = Location::parse(&url)?.with_page(current);
                for (token, href) in pagination_links(&location, &tokens) {
                    println!("{}\t{}", token, href.unwrap_or_default());
                }
            }
        }
        Command::Search { url, terms, interval_ms } => {
            let location = Location::parse(&url)?;
            let rt = Runtime::new()?;
            let result = rt.block_on(simulate_search(&config, location, terms, interval_ms));
            println!("{}", result);
        }
    }

    Ok(())
}

/// A missing file at the default path means "use defaults"; anything else must load.
fn load_config(path: &Path) -> anyhow::Result<Config> {
    match Config::load(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound { .. }) if path == Path::new(DEFAULT_CONFIG) => Ok(Config::default()),
        Err(e) => Err(anyhow!("{}", e.to_details())),
    }
}

fn read_revenue(path: &Path) -> anyhow::Result<Vec<RevenuePoint>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let is_json = path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    let points: Vec<RevenuePoint> = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(points)
}

async fn simulate_search(config: &Config, location: Location, terms: Vec<String>, interval_ms: u64) -> Location {
    // no keystroke, no navigation
    if terms.is_empty() {
        return location;
    }

    let keystrokes = terms.len();
    let delay = Duration::from_millis(config.search.debounce_ms);
    let navigator = Arc::new(MemoryNavigator::new(location));
    let search = SearchControl::with_delay(config.search.placeholder.clone(), Arc::clone(&navigator), delay);

    for term in terms {
        search.on_input(term);
        tokio::time::sleep(Duration::from_millis(interval_ms)).await;
    }
    tokio::time::sleep(delay + Duration::from_millis(10)).await;
    search.flush().await;

    let history = navigator.history().await;
    log::info!("{} navigation(s) after {} keystroke(s)", history.len(), keystrokes);
    navigator.current().await
}

fn report(error: CoreError) -> anyhow::Error {
    log::warn!(target: "dashkit::cli", "{} ({})", error.code(), error.severity());
    anyhow!("{}", error.to_details())
}
