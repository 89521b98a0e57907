use clap::Parser;
use colored::Colorize;
use miette::Result;
use std::path::PathBuf;
use tracing::info;

use tsdeadcode::analysis::ReachabilityMode;
use tsdeadcode::config::Config;
use tsdeadcode::engine::DeadCodeEngine;
use tsdeadcode::report::{ReportFormat, Reporter};

/// tsdeadcode - Fast dead code detection for TypeScript/JavaScript projects
#[derive(Parser, Debug)]
#[command(name = "tsdeadcode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the project directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the JSON report
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Console output format; the JSON file is written either way
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Directory names to skip (can be specified multiple times)
    #[arg(short, long = "exclude-dir", value_name = "NAME")]
    exclude_dir: Vec<String>,

    /// Extra root file basenames (can be specified multiple times)
    #[arg(long = "root-file", value_name = "NAME")]
    root_file: Vec<String>,

    /// Import alias prefix, e.g. "@/"
    #[arg(long, value_name = "PREFIX")]
    alias_prefix: Option<String>,

    /// Directory the alias prefix maps to, relative to the project root
    #[arg(long, value_name = "DIR")]
    alias_target: Option<PathBuf>,

    /// How liveness propagates from root files
    #[arg(long, value_enum)]
    reachability: Option<Reachability>,

    /// Print analysis warnings after the report
    #[arg(long)]
    show_warnings: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Reachability {
    Transitive,
    OneHop,
}

impl From<Reachability> for ReachabilityMode {
    fn from(mode: Reachability) -> Self {
        match mode {
            Reachability::Transitive => ReachabilityMode::Transitive,
            Reachability::OneHop => ReachabilityMode::OneHop,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("tsdeadcode v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    run_analysis(&config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::from_default_locations(&cli.path)?
    };

    // Override with CLI arguments
    config.excluded_dirs.extend(cli.exclude_dir.iter().cloned());
    config.root_basenames.extend(cli.root_file.iter().cloned());
    if let Some(prefix) = &cli.alias_prefix {
        config.alias.prefix = prefix.clone();
    }
    if let Some(target) = &cli.alias_target {
        config.alias.target = target.clone();
    }
    if let Some(mode) = cli.reachability {
        config.reachability = mode.into();
    }
    if let Some(output) = &cli.output {
        config.report.output = output.clone();
    }

    Ok(config)
}

fn run_analysis(config: &Config, cli: &Cli) -> Result<()> {
    let show_progress = !cli.quiet && matches!(cli.format, OutputFormat::Terminal);
    let run = DeadCodeEngine::new(config)
        .with_progress(show_progress)
        .run(&cli.path)?;

    let reporter = Reporter::new(
        cli.format.into(),
        config.report.output.clone(),
        config.report.max_examples,
    );
    reporter.report(&run.report)?;

    if cli.show_warnings && !run.warnings.is_empty() {
        eprintln!();
        eprintln!("{}", format!("{} warnings:", run.warnings.len()).yellow().bold());
        for warning in &run.warnings {
            eprintln!("  {} {}", format!("[{}]", warning.category()).dimmed(), warning);
        }
    }

    if !cli.quiet && matches!(cli.format, OutputFormat::Terminal) {
        println!();
        println!(
            "{}",
            format!(
                "Analyzed {} files ({} roots, {} import edges) in {:.2}s",
                run.stats.files_indexed,
                run.stats.roots,
                run.stats.import_edges,
                run.stats.elapsed.as_secs_f64()
            )
            .dimmed()
        );
        println!("Report written to: {}", config.report.output.display());
    }

    Ok(())
}
