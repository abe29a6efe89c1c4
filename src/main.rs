use petmatch_algo::config::Settings;
use petmatch_algo::core::Ranker;
use petmatch_algo::services::MemoryStore;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so stdout carries only the feed
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match format {
        "json" => subscriber.json().init(),
        "pretty" => subscriber.pretty().init(),
        _ => subscriber.init(),
    }
}

/// Rank the feed for the user named by the first argument (anonymous when
/// omitted) and print it as JSON.
fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);
    info!("Configuration loaded successfully");

    let store = match &settings.catalog.snapshot_path {
        Some(path) => match MemoryStore::load_snapshot(path, settings.catalog.include_seed) {
            Ok(store) => store,
            Err(e) => {
                error!("Failed to load snapshot {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None if settings.catalog.include_seed => MemoryStore::with_seed_catalog(),
        None => MemoryStore::new(),
    };

    let windows = match settings.freshness_windows() {
        Ok(windows) => windows,
        Err(e) => {
            error!("Invalid freshness windows: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let ranker = match Ranker::new(settings.weights(), windows) {
        Ok(ranker) => ranker,
        Err(e) => {
            error!("Invalid scoring weights: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Ranker initialized with weights: {:?}", ranker.weights());

    let user_id = std::env::args().nth(1);
    let feed = ranker.feed(&store, &store, user_id.as_deref());

    info!(
        "Ranked {} pets for {}",
        feed.total_results,
        feed.user_id.as_deref().unwrap_or("anonymous visitor")
    );

    match serde_json::to_string_pretty(&feed) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize feed: {}", e);
            ExitCode::FAILURE
        }
    }
}
