// ED Scenario Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/ed-scenario-simulator
// ```
//
// Or with a reproducible, smaller scenario:
//
// ```console
// $ ./target/release/ed-scenario-simulator --num-patients 100 --staff-count 5 --days 7 --seed 42 --verbose
// ```

use anyhow::{Context, Result};
use clap::Parser;
use ed_scenario_simulator::simulation::{
    GenerationSummary, LoggingConfig, SimulationOrchestrator,
};
use ed_scenario_simulator::types::config::CliArgs;
use ed_scenario_simulator::types::SimulationConfig;
use ed_scenario_simulator::TableExporter;
use std::process;
use tracing::{error, info, Level};

fn main() {
    let args = CliArgs::parse();

    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Guard must outlive the run so file logs are flushed
    let _log_guard = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(
    args: &CliArgs,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>, Box<dyn std::error::Error + Send + Sync>>
{
    let level = if args.debug {
        Level::DEBUG
    } else if args.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let mut logging = LoggingConfig::new().with_level(level);
    if args.debug || args.verbose {
        logging = logging.with_span_events();
    }
    if args.log_json {
        logging = logging.with_json_format();
    }
    if let Some(directory) = &args.log_dir {
        logging = logging.with_file_logging(directory.clone());
    }
    logging.init()
}

fn run(args: CliArgs) -> Result<()> {
    info!("Starting ED Scenario Simulator");

    let dry_run = args.dry_run;
    let no_export = args.no_export;

    let config =
        SimulationConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    let format = config.get_output_format()?;

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no data will be generated.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_configuration_summary(&config);

    let orchestrator =
        SimulationOrchestrator::new(config.clone()).context("Failed to initialize simulation")?;
    let tables = orchestrator.run().context("Scenario generation failed")?;

    eprintln!("{}", GenerationSummary::from_tables(&tables));
    eprintln!();

    if no_export {
        info!("Export skipped");
        return Ok(());
    }

    let exporter = TableExporter::new(&config.output_dir, format);
    let paths = exporter
        .export(&tables)
        .with_context(|| format!("Failed to export tables to {}", config.output_dir))?;

    for path in &paths {
        eprintln!("Wrote {}", path.display());
    }
    eprintln!("Reproduce this run with --seed {}", tables.seed);

    info!("ED Scenario Simulator completed successfully");
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Patients: {}", config.num_patients);
    eprintln!("  Staff Count: {}", config.staff_count);
    eprintln!("  Days: {}", config.days);
    eprintln!("  Start Date: {}", config.start_date);
    eprintln!("  Output Format: {}", config.output_format);
    eprintln!("  Output Directory: {}", config.output_dir);
    match config.seed {
        Some(seed) => eprintln!("  Random Seed: {}", seed),
        None => eprintln!("  Random Seed: drawn at startup"),
    }
    eprintln!(
        "  Expected Rows: {} patients, {} shifts, {} bed utilization",
        config.num_patients,
        config.staff_count * config.days * 2,
        config.num_patients
    );
    eprintln!();
}
