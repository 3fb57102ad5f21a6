use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nagstats::config::AppConfig;
use nagstats::{aggregator, main_config, render, version};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Statistics from a Nagios-compatible daemon's status file.
#[derive(Parser)]
#[command(name = "nagstats", version, about)]
struct Cli {
    /// Daemon main config used to find the status file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Status file to read; skips the main config lookup.
    #[arg(short, long)]
    statsfile: Option<PathBuf>,

    /// Print MRTG values instead of the report.
    #[arg(short, long)]
    mrtg: bool,

    /// Comma-separated MRTG variables.
    #[arg(short, long, value_name = "VARS")]
    data: Option<String>,

    /// Written after each MRTG value.
    #[arg(short = 'D', long)]
    delimiter: Option<String>,

    /// Print the snapshot as JSON.
    #[arg(short, long, conflicts_with = "mrtg")]
    json: bool,

    /// Print license terms and exit.
    #[arg(short = 'L', long)]
    license: bool,

    /// Log filter (trace, debug, info, warn, error or EnvFilter directives).
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(cli: &Cli, app_config: &AppConfig) -> Result<()> {
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&app_config.logging.filter))
            .context("invalid logging.filter")?,
    };
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// `--statsfile`, then `--config`, then the app config's paths.
fn resolve_status_file(cli: &Cli, app_config: &AppConfig) -> Result<PathBuf> {
    if let Some(path) = &cli.statsfile {
        return Ok(path.clone());
    }
    if cli.config.is_none()
        && let Some(path) = &app_config.paths.status_file
    {
        return Ok(path.clone());
    }
    let main_config = cli
        .config
        .as_ref()
        .unwrap_or(&app_config.paths.main_config_file);
    main_config::locate_status_file(main_config)
        .with_context(|| format!("locating status file via {}", main_config.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.license {
        print!("{}", version::license());
        return Ok(());
    }

    let app_config = AppConfig::load()?;
    init_tracing(&cli, &app_config)?;

    let status_file = resolve_status_file(&cli, &app_config)?;
    let now = chrono::Utc::now().timestamp();
    let snapshot = aggregator::read_status_file(&status_file, now)
        .with_context(|| format!("reading status file {}", status_file.display()))?;

    if cli.mrtg {
        let variables = cli
            .data
            .as_deref()
            .or(app_config.output.mrtg_variables.as_deref())
            .context("MRTG mode needs a variable list (--data or output.mrtg_variables)")?;
        let delimiter = cli
            .delimiter
            .as_deref()
            .unwrap_or(&app_config.output.mrtg_delimiter);
        print!("{}", render::render_mrtg(&snapshot, variables, delimiter, now));
    } else if cli.json {
        println!("{}", render::render_json(&snapshot)?);
    } else {
        println!("{}", version::banner());
        print!("{}", render::render_report(&snapshot, &status_file, now));
    }

    Ok(())
}
