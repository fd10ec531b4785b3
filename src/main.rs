mod cli;
mod config;
mod error;
mod waiting;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    // 1. Resolve config path (overridable via --config)
    let cfg_path = cli.config.unwrap_or_else(config::global_config_path);

    // 2. Load layered config
    let cfg = config::load(&cfg_path)?;

    match cli.command {
        Commands::Demo(args) => {
            waiting::run(&cfg, &cfg.demo.sample, args)?;
        }
        Commands::Run(args) => {
            let readings = waiting::readings::parse(&args.readings)?;
            waiting::run(&cfg, &readings, args.report)?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
    }

    Ok(())
}
