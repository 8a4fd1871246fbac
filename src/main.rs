use std::fs::File;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use weathernews::Idiom;
use weathernews::core::action::{Action, Effect, update};
use weathernews::core::config::{self, CliOverrides, ResolvedConfig};
use weathernews::core::state::App;
use weathernews::core::view::{plain_text, results_view};
use weathernews::feed::{FeedSource, HttpFeedSource, orchestrator};

#[derive(Parser)]
#[command(
    name = "weathernews",
    about = "Weather & news dashboard demonstrating fetch strategies"
)]
struct Args {
    /// Fetch idiom to start with
    #[arg(short, long, value_enum)]
    idiom: Option<Idiom>,

    /// Fetch once, print the result and exit
    #[arg(long)]
    once: bool,

    /// Start idle instead of fetching immediately
    #[arg(long)]
    no_fetch: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            (config::DashboardConfig::default(), Some(e))
        }
    };
    let cli = CliOverrides {
        idiom: args.idiom,
        fetch_on_start: args.no_fetch.then_some(false),
    };
    let resolved = config::resolve(&file_config, cli);

    // Initialize file logger
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!(
        "weathernews starting: idiom={}, once={}",
        resolved.idiom.key(),
        args.once
    );
    if let Some(e) = &config_error {
        log::warn!("Config not loaded: {}", e);
    }
    log::debug!("Resolved config: {:?}", resolved);

    let source = HttpFeedSource::new(resolved.endpoints.clone(), resolved.request_timeout)
        .map_err(std::io::Error::other)?;

    if args.once {
        let ok = run_once(&resolved, &source).await;
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    weathernews::tui::run(&resolved, Arc::new(source))
}

/// Single fetch straight to stdout. Returns false if the fetch failed.
async fn run_once(config: &ResolvedConfig, source: &dyn FeedSource) -> bool {
    let mut app = App::new(config.idiom);
    let Effect::SpawnFetch { idiom, generation } = update(&mut app, Action::Select(config.idiom))
    else {
        return false;
    };

    // The callback idiom is sequential underneath; awaiting it directly is equivalent
    let started = Instant::now();
    let result = orchestrator::fetch(source, idiom.strategy()).await;
    update(
        &mut app,
        Action::FetchCompleted {
            generation,
            result,
            elapsed: started.elapsed(),
        },
    );

    println!(
        "Pattern: {} ({})",
        app.idiom.label(),
        app.idiom.strategy().label()
    );
    if let Some(elapsed) = app.last_elapsed {
        println!("Elapsed: {}ms", elapsed.as_millis());
    }
    match app.error() {
        Some(error) => {
            eprintln!("Error: {error}");
            false
        }
        None => {
            println!("{}", plain_text(&results_view(&app)));
            true
        }
    }
}
