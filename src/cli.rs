//! Command-line interface for brickload.

use clap::{Parser, Subcommand};
use goose::config::{GooseConfiguration, GooseDefault};
use goose::metrics::GooseMetrics;
use goose::prelude::*;
use log::warn;
use std::path::PathBuf;

use crate::client::ApiClient;
use crate::config::LoadConfig;
use crate::images;
use crate::observe;
use crate::report;
use crate::scenario;
use crate::seed;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Load-test scenarios and database seeder for the brick marketplace API.
///
/// The target service is named by the TARGET_URL environment variable or a
/// brickload.yaml config file; `run` drives the goose load scenarios
/// against it, `seed` populates it with reference data first.
#[derive(Parser)]
#[command(name = "brickload")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the load scenarios against the target service
    Run(RunArgs),
    /// Populate the target service with reference data
    Seed(SeedArgs),
}

/// Arguments for the run command.
#[derive(Parser)]
pub struct RunArgs {
    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target base URL (overrides TARGET_URL and the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Number of virtual users (default: one per CPU core)
    #[arg(short, long)]
    pub users: Option<usize>,

    /// How long to run, in seconds (default: until interrupted)
    #[arg(short = 't', long)]
    pub run_time: Option<usize>,

    /// Write an HTML report to this path after the run
    #[arg(long)]
    pub report_file: Option<String>,
}

/// Arguments for the seed command.
#[derive(Parser)]
pub struct SeedArgs {
    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target base URL (overrides TARGET_URL and the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Number of users to register (overrides the config)
    #[arg(long)]
    pub users: Option<usize>,

    /// Number of catalog items to create (overrides the config)
    #[arg(long)]
    pub lego_sets: Option<usize>,
}

/// Run the load scenarios.
pub fn run_attack(args: &RunArgs) -> anyhow::Result<i32> {
    let config = LoadConfig::resolve(args.config.as_deref(), args.host.as_deref())?;

    let images = images::init(&config.images_dir)?;
    if images.is_empty() {
        warn!(
            "no images in {}; uploads will carry no attachments",
            config.images_dir.display()
        );
    }
    scenario::init(&config);

    let runtime = tokio::runtime::Runtime::new()?;
    let _metrics = runtime.block_on(execute_attack(&config, args))?;

    report::print_run_summary(&observe::snapshot());
    Ok(EXIT_SUCCESS)
}

/// Build and execute the goose attack. Goose's own CLI parsing is skipped
/// so clap keeps ownership of the process arguments; everything goose
/// needs arrives via defaults.
async fn execute_attack(config: &LoadConfig, args: &RunArgs) -> Result<GooseMetrics, GooseError> {
    let mut attack = GooseAttack::initialize_with_config(GooseConfiguration::default())?;
    for flow in scenario::scenarios() {
        attack = attack.register_scenario(flow);
    }

    let mut attack = attack.set_default(GooseDefault::Host, config.base_url_trimmed())?;
    if let Some(users) = args.users {
        attack = attack.set_default(GooseDefault::Users, users)?;
    }
    if let Some(seconds) = args.run_time {
        attack = attack.set_default(GooseDefault::RunTime, seconds)?;
    }
    if let Some(report_file) = &args.report_file {
        attack = attack.set_default(GooseDefault::ReportFile, report_file.as_str())?;
    }

    attack.execute().await
}

/// Run the seeder.
pub fn run_seed(args: &SeedArgs) -> anyhow::Result<i32> {
    let mut config = LoadConfig::resolve(args.config.as_deref(), args.host.as_deref())?;
    if let Some(users) = args.users {
        config.seed.users = users;
    }
    if let Some(lego_sets) = args.lego_sets {
        config.seed.lego_sets = lego_sets;
    }

    let images = images::init(&config.images_dir)?;
    if images.is_empty() {
        warn!(
            "no images in {}; uploads will carry no attachments",
            config.images_dir.display()
        );
    }

    let client = ApiClient::new(&config);
    let runtime = tokio::runtime::Runtime::new()?;
    let summary = runtime.block_on(seed::run(&client, images, &config.seed));

    report::print_seed_summary(&summary);

    let failures = summary.user_failures
        + summary.lego_set_failures
        + summary.comment_failures
        + summary.listing_failures
        + summary.bid_failures;
    if failures > 0 {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}
