use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use s5_config::{CreateOutcome, DEFAULT_FILE_NAME, create_config};
use s5_config_dialoguer::DialoguerPrompter;
use tracing_subscriber::EnvFilter;

/// Create a config.toml for an S5 server or client node.
#[derive(Parser, Debug)]
#[command(name = "s5-config", version)]
struct Cli {
    /// File to write the generated config to
    #[arg(default_value = DEFAULT_FILE_NAME)]
    file: PathBuf,

    /// Prompt without colors
    #[arg(long)]
    plain: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout belongs to the prompts.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let mut prompter = if cli.plain {
        DialoguerPrompter::plain()
    } else {
        DialoguerPrompter::new()
    };

    let outcome = match create_config(&mut prompter, &cli.file) {
        Ok(outcome) => outcome,
        Err(err) if err.is_cancelled() => CreateOutcome::Canceled,
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Config creating failed for {}", cli.file.display()));
        }
    };

    match &outcome {
        CreateOutcome::Canceled => println!("Configuration canceled."),
        CreateOutcome::Successful { role, path } => {
            println!("\n\n{role} configuration saved to {}\n", path.display());
        }
    }
    println!("Config creating {}", outcome.as_str());

    Ok(())
}
