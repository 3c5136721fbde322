use clap::Parser;
use ip_validators::config::{init_logging, Config};
use ip_validators::locale::Maketext;
use ip_validators::output::{format_result, to_json, Report};
use ip_validators::DEFAULT_REGISTRY;
use std::error::Error;

/// Validate IPv4 addresses, IPv6 addresses and IPv4 CIDR ranges.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Validator to run [default: $IP_VALIDATORS_DEFAULT or cidr4]
    #[arg(short, long)]
    validator: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// List registered validators and exit
    #[arg(long)]
    list: bool,

    /// Values to validate
    values: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logging(&config)?;
    let cli = Cli::parse();
    log::info!("#Start main()");

    if cli.list {
        for name in DEFAULT_REGISTRY.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let validator = cli.validator.unwrap_or(config.default_validator);
    let width = cli.values.iter().map(|v| v.chars().count() + 2).max().unwrap_or(0);

    let mut reports = Vec::with_capacity(cli.values.len());
    for value in &cli.values {
        let result = DEFAULT_REGISTRY.validate(&validator, Some(value), None)?;
        if !cli.json {
            println!("{}", format_result(value, &validator, &result, &Maketext, width));
        }
        reports.push(Report::new(value, &validator, &result, &Maketext));
    }

    if cli.json {
        println!("{}", to_json(&reports)?);
    }

    if reports.iter().all(|r| r.is_valid) {
        Ok(())
    } else {
        std::process::exit(1)
    }
}
