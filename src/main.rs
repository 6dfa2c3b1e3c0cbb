use asos::cli;
use asos::config;
use asos::engine;
use asos::error::AsosError;
use asos::report;
use asos::types::reading::UsageReading;
use asos::types::report::PolicyReport;
use clap::Parser;
use std::path::PathBuf;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, AsosError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let root = cli.config_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = config::load_config(&root)?.unwrap_or_default();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let reading = UsageReading {
                electricity_kwh: cmd.electricity,
                water_liters: cmd.water,
                waste_kg: cmd.waste,
                transport: cmd.transport,
            };
            reading.validate()?;

            let mut result = engine::compute_score(&reading, &config);
            if let Some(boost) = cmd.boost {
                result.score = engine::apply_policy_boost(result.score, boost);
            }

            let rendered = report::render_score(&result, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Policy(cmd) => {
            if cmd.list {
                let rendered = report::render_catalog(&config.policies, output_format(cmd.format))?;
                println!("{rendered}");
                return Ok(exit_code::SUCCESS);
            }

            let impact = engine::policy_impact(&cmd.select, &config.policies);
            let policy_report = PolicyReport {
                selected: cmd.select,
                total_impact_percent: impact,
                relative: engine::relative_impact(impact),
                projected: engine::project_baseline(&config.baseline, impact),
                baseline: config.baseline,
            };

            let rendered = report::render_policy(&policy_report, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Community(cmd) => {
            if !cmd.strength.is_finite() {
                return Err(AsosError::InvalidInput(
                    "strength must be a finite number".to_string(),
                ));
            }

            let impact = engine::simulate_community(cmd.strength, &config.community);
            let rendered = report::render_community(&impact, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            let code = match e {
                AsosError::InvalidInput(_) => exit_code::INVALID_INPUT,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
