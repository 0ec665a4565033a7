use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use alternating_disks::config::{AppConfig, OutputFormat};
use alternating_disks::report::{self, RunReport};
use alternating_disks::sorting::Algorithm;
use alternating_disks::DiskRow;

/// Solve the alternating disks problem with the alternate and lawnmower algorithms.
#[derive(Parser)]
#[command(name = "disks", about = "Sort alternating light/dark disks with adjacent swaps")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, global = true, default_value = "disks.toml")]
    config: PathBuf,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort one canonical row and print the before/after rows and swap counts
    Run {
        /// Number of light disks (the row holds twice as many disks)
        #[arg(long)]
        light_count: Option<usize>,

        /// Algorithm to run
        #[arg(long, value_enum)]
        algorithm: Option<AlgorithmChoice>,
    },
    /// Time the configured algorithms over increasing row sizes
    Sweep {
        /// Largest light disk count to time
        #[arg(long)]
        max: Option<usize>,

        /// Increment between row sizes
        #[arg(long)]
        step: Option<usize>,

        /// Runs per size; the fastest is reported
        #[arg(long)]
        repetitions: Option<usize>,
    },
    /// Write a config file holding all default values
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmChoice {
    Alternate,
    Lawnmower,
    Both,
}

impl AlgorithmChoice {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Alternate => vec![Algorithm::Alternate],
            AlgorithmChoice::Lawnmower => vec![Algorithm::Lawnmower],
            AlgorithmChoice::Both => Algorithm::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::InitConfig { force } => init_config(&cli.config, force),
        Command::Run {
            light_count,
            algorithm,
        } => {
            let mut app_config = load_config(&cli.config, cli.json)?;
            if let Some(light_count) = light_count {
                app_config.run.light_count = light_count;
            }
            if let Some(choice) = algorithm {
                app_config.run.algorithms = choice.algorithms();
            }
            app_config.validate().context("invalid run settings")?;
            run(&app_config)
        }
        Command::Sweep {
            max,
            step,
            repetitions,
        } => {
            let mut app_config = load_config(&cli.config, cli.json)?;
            if let Some(max) = max {
                app_config.sweep.max_light_count = max;
            }
            if let Some(step) = step {
                app_config.sweep.step = step;
            }
            if let Some(repetitions) = repetitions {
                app_config.sweep.repetitions = repetitions;
            }
            app_config.validate().context("invalid sweep settings")?;
            sweep(&app_config)
        }
    }
}

fn load_config(path: &Path, json: bool) -> Result<AppConfig> {
    let mut app_config = AppConfig::load_or_default(path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    if json {
        app_config.output.format = OutputFormat::Json;
    }
    Ok(app_config)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &AppConfig) -> Result<()> {
    let before = DiskRow::try_new(config.run.light_count)?;
    let reports: Vec<RunReport> = config
        .run
        .algorithms
        .iter()
        .map(|&algorithm| {
            let result = algorithm.run(&before);
            RunReport::from_result(algorithm, &before, &result)
        })
        .collect();

    for report in &reports {
        if !report.is_optimal() {
            tracing::warn!(
                algorithm = report.algorithm.name(),
                swap_count = report.swap_count,
                expected = report.expected_swap_count,
                "result is not an optimal sort"
            );
        }
    }

    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            for report in &reports {
                println!("{report}");
            }
        }
    }
    Ok(())
}

fn sweep(config: &AppConfig) -> Result<()> {
    tracing::info!(
        max_light_count = config.sweep.max_light_count,
        step = config.sweep.step,
        "starting sweep"
    );
    let rows = report::sweep(&config.sweep, &config.run.algorithms);
    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => print!("{}", report::sweep_table(&rows)),
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "config file '{}' already exists (use --force to overwrite)",
            path.display()
        );
    }
    std::fs::write(path, AppConfig::default_toml())
        .with_context(|| format!("writing config to {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
