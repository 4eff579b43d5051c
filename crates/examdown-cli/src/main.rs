use anyhow::{Context, Result};
use clap::Parser;
use examdown_config::Config;
use examdown_engine::{BuildReport, SiteOptions, build_site};
use std::path::PathBuf;
use std::process::ExitCode;

/// Build the exam problem site from an index and its markdown sources
#[derive(Parser, Debug)]
#[command(name = "examdown", version)]
struct Cli {
    /// Directory holding index.json and the per-subject sources
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory the pages and hub are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Config file to read instead of ~/.config/examdown/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(cli) {
        Ok(report) => {
            log::info!(
                "Total: {} items ({} problems, {} solutions), {} written, {} skipped",
                report.total(),
                report.problems,
                report.solutions,
                report.written,
                report.skipped
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<BuildReport> {
    let options = resolve_options(&cli)?;
    log::info!(
        "Building site from {} into {}",
        options.data_dir.display(),
        options.output_dir.display()
    );
    build_site(&options).with_context(|| {
        format!(
            "failed to build site from {}",
            options.data_dir.display()
        )
    })
}

/// Flags win over the config file, which wins over the built-in defaults.
fn resolve_options(cli: &Cli) -> Result<SiteOptions> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from_path(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    let config = match config {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None => {
            if cli.config.is_some() {
                anyhow::bail!("config file {} does not exist", config_path.display());
            }
            Config::default()
        }
    };

    Ok(SiteOptions {
        data_dir: cli.data_dir.clone().unwrap_or(config.data_dir),
        output_dir: cli.output_dir.clone().unwrap_or(config.output_dir),
        site_title: config.site_title,
    })
}
