use std::path::PathBuf;

use anyhow::Context;
use calendar::{
    host::Host,
    router::{history_mode, router_with_mode},
};
use calendar_cli_config::{CalendarConfig, BASE_PATH_ENV};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CALENDAR_LOG";

/// Build the calendar router and navigate it headlessly.
#[derive(Parser, Debug)]
#[clap(name = "calendar", version)]
struct Args {
    /// The base path the app is served under. Empty serves from the root.
    #[clap(long, env = BASE_PATH_ENV)]
    base_path: Option<String>,

    /// Navigate with `#` fragments instead of real paths.
    #[clap(long)]
    hash: bool,

    /// The directory to look for `Calendar.toml` in.
    #[clap(long, default_value = ".")]
    config: PathBuf,

    /// Locations to open, in order. Defaults to the app root.
    paths: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = CalendarConfig::load(&args.config)
        .with_context(|| format!("failed to load config from {}", args.config.display()))?
        .unwrap_or_default();

    let mode = history_mode(&config, args.hash, args.base_path.clone())?;

    let router = router_with_mode(mode);
    tracing::info!(history = %router.history_mode(), base = router.history_mode().base(), "router built");

    let root = router.history_mode().href("/");
    let mut host = Host::install(&router, &root);
    report(host.mounted().map(|m| (m.name, m.href.as_str())), &root);

    for path in &args.paths {
        match host.open(path.as_str()) {
            Ok(mounted) => report(mounted.map(|m| (m.name, m.href.as_str())), path),
            Err(err) => tracing::error!("{err}"),
        }
    }

    Ok(())
}

fn report(mounted: Option<(Option<&'static str>, &str)>, requested: &str) {
    match mounted {
        Some((name, href)) => println!("{href} -> {}", name.unwrap_or("<fallback>")),
        None => println!("{requested} -> <nothing mounted>"),
    }
}
