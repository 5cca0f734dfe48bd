//! Mention - A terminal client for the Mention social network
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mention::api::get_source;
use mention::trends::TrendAggregator;

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments. The TUI drives its own worker runtime, so only
    // the async CLI paths need one here.
    match parse_args()? {
        Command::Run => run_tui(),
        Command::Demo => run_demo(),
        Command::Trends { sample } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(trends_cli(sample))
        }
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
    }
}

/// CLI commands
enum Command {
    Run,
    Demo,
    Trends { sample: bool },
    Help,
    Version,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Run);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),
        "--demo" | "demo" => Ok(Command::Demo),

        "trends" => {
            let sample = args.iter().any(|a| a == "--sample" || a == "-s");
            Ok(Command::Trends { sample })
        }

        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'mention --help' for usage"
        )),
    }
}

fn print_help() {
    let config_path = mention::Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r"{}
📣 Mention - A terminal client for the Mention social network

USAGE:
    mention                            Launch TUI
    mention [COMMAND]

COMMANDS:
    demo                               Launch TUI with sample data
    trends [OPTIONS]                   Refresh and print trending topics
      Options:
        -s, --sample                   Use built-in sample data

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

KEYBINDINGS (TUI):
    Navigation
      j/↓           Move down
      k/↑           Move up
      h/l           Switch panel
      Tab           Switch view
      g/G           Jump to top/bottom

    Actions
      n             New post (compose)
      L             Like/unlike
      s             Share post
      o             Open in browser

    Search
      /             Edit query
      1/2/3         Toggle content filters
      4/5           Premium sort toggles
      r             Refresh trends

    View
      t             Change theme
      ?             Help

CONFIG:
    {}

HOMEPAGE:
    {}
",
        mention::LOGO,
        config_path,
        mention::REPO_URL
    );
}

fn print_version() {
    println!("mention {}", mention::VERSION);
}

fn run_tui() -> Result<()> {
    mention::app::run()
}

fn run_demo() -> Result<()> {
    mention::app::run_demo()
}

/// Refresh the trend list and print it (exercises the full fetch,
/// normalize, cache pipeline)
async fn trends_cli(sample: bool) -> Result<()> {
    let config = mention::Config::load()?;
    let db = mention::Database::open()?;

    let source = get_source(&config.api_url, sample);
    let mut aggregator = TrendAggregator::with_cached(db.load_trends()?.unwrap_or_default());

    println!("📈 Trends");
    println!("{}", "─".repeat(40));

    let trends = aggregator.refresh(&source, &db).await?;

    for trend in trends {
        println!("{:<24} {} Posts", trend.topic, trend.count_total);
    }

    Ok(())
}
