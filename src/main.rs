use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use std::path::{Path, PathBuf};

use disk_scheduling::{
    Config, ConfigOverrides, Cylinder, DiskScheduler, SchedulerError, export_to_csv_with_path,
    read_requests,
};

/// Total head movement of FCFS, SCAN and C-SCAN for a list of cylinder requests
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Head position before service begins
    #[arg(allow_negative_numbers = true)]
    initial_head_position: Cylinder,

    /// File with one cylinder number per line [env: DISK_SCHEDULING_REQUESTS_FILE]
    #[arg(short, long)]
    requests: Option<PathBuf>,

    /// Number of cylinders on the disk [env: DISK_SCHEDULING_MAX_CYLINDER]
    #[arg(short, long)]
    max_cylinder: Option<Cylinder>,

    /// Also write the totals to a CSV report in this directory [env: DISK_SCHEDULING_OUTPUT_DIR]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Log the order in which each policy visits the cylinders
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    debug!("Configuration: {config:?}");

    let requests = match read_requests(&config.requests_file) {
        Ok(requests) => requests,
        Err(e) => {
            report_load_error(&config.requests_file, &e);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} requests from {}",
        requests.len(),
        config.requests_file.display()
    );

    let scheduler = DiskScheduler::new(config.max_cylinder)?;
    let start = cli.initial_head_position;
    if !(0..config.max_cylinder).contains(&start) {
        info!(
            "Initial head position {start} is outside the disk (0..{})",
            config.max_cylinder
        );
    }

    let results = scheduler.evaluate_all(&requests, start);
    for result in &results {
        println!(
            "{} Total Head Movements: {}",
            result.policy.label(),
            result.total_movement
        );
        if cli.verbose {
            let order = scheduler.service_order(result.policy, &requests, start);
            info!("{} service order: {order:?}", result.policy);
        }
    }

    if let Some(dir) = &config.output_dir {
        let path = export_to_csv_with_path(&results, dir)
            .with_context(|| format!("Failed to write report to {}", dir.display()))?;
        info!("Report saved to: {}", path.display());
    }

    Ok(())
}

/// Command line flags win, the environment fills in the rest
fn resolve_config(cli: &Cli) -> Result<Config> {
    let overrides = ConfigOverrides {
        requests_file: cli.requests.clone(),
        max_cylinder: cli.max_cylinder,
        output_dir: cli.output_dir.clone(),
    };
    Ok(Config::from_env_with(overrides)?)
}

fn report_load_error(path: &Path, err: &SchedulerError) {
    match err {
        SchedulerError::RequestFileNotFound { .. } => {
            error!("Error: The file '{}' was not found.", path.display());
        }
        e if e.is_invalid_data() => {
            error!("Error: The file '{}' contains invalid data.", path.display());
            error!("{e}");
        }
        e => error!("Error: Failed to read '{}': {e}", path.display()),
    }
}
