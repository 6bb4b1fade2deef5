//! Claim Copilot - Command-Line Binary
//!
//! # Usage
//!
//! ```bash
//! # Interactive menu
//! cargo run --bin claim-copilot
//!
//! # Process a file without saving
//! cargo run --bin claim-copilot -- run claim.txt --no-save
//!
//! # Synthetic dataset
//! cargo run --bin claim-copilot -- generate --count 500 --seed 7 --out data/claims.jsonl
//! ```
//!
//! # Environment Variables
//!
//! * `COPILOT_OPENAI_API_KEY` / `OPENAI_API_KEY` - Language-model API key (unset: degraded mode)
//! * `COPILOT_MODEL` - Chat model (default: gpt-4o-mini)
//! * `COPILOT_BASE_URL` - API root (default: https://api.openai.com/v1)
//! * `COPILOT_REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 60)
//! * `COPILOT_RECOGNIZER` - `pattern` or `disabled` (default: pattern)
//! * `COPILOT_OUTPUT_DIR` - Where claim_result.json goes (default: outputs)
//! * `COPILOT_SAVE_OUTPUT` - Save results (default: true)
//! * `COPILOT_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::fs::{self, File};
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::CoreError;
use interface_cli::dataset::write_dataset;
use interface_cli::input::read_source;
use interface_cli::menu::run_interactive;
use interface_cli::{Cli, Command, Copilot, CopilotConfig};

fn main() -> Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CopilotConfig::from_env().context("Failed to load configuration")?;
    config.validate()?;

    init_tracing(&config.log_level);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let copilot = Copilot::from_config(&config);
            run_interactive(&copilot)?;
        }
        Command::Run {
            input,
            no_save,
            output_dir,
        } => {
            let text = read_source(&input).with_context(|| format!("Could not read {}", input))?;
            let save_dir = if no_save {
                None
            } else {
                output_dir.or_else(|| config.save_dir())
            };
            let copilot = Copilot::from_config(&config).with_save_dir(save_dir);
            copilot.process(&text, &mut io::stdout().lock())?;
        }
        Command::Generate { count, seed, out } => {
            if count == 0 {
                return Err(CoreError::validation("count must be greater than zero").into());
            }
            let written = if out.as_os_str() == "-" {
                write_dataset(&mut io::stdout().lock(), count, seed)?
            } else {
                if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                let file = File::create(&out)
                    .with_context(|| format!("Could not create {}", out.display()))?;
                write_dataset(&mut BufWriter::new(file), count, seed)?
            };
            tracing::info!(written, seed, out = %out.display(), "Synthetic dataset written");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr; stdout
/// carries reports and dataset lines.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .init();
}
