//! Argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Turns free-text insurance claims into structured, triaged, summarized
/// records
#[derive(Debug, Parser)]
#[command(name = "claim-copilot", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Menu-driven session (default)
    Interactive,

    /// Process one claim from a text file, or `-` for stdin
    Run {
        input: String,

        /// Do not write claim_result.json
        #[arg(long)]
        no_save: bool,

        /// Directory for claim_result.json
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Write a synthetic claim dataset as JSON lines
    Generate {
        #[arg(long, default_value_t = 10_000)]
        count: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file, or `-` for stdout
        #[arg(long, default_value = "data/claims.jsonl")]
        out: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["claim-copilot"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from(["claim-copilot", "run", "claim.txt", "--no-save"]).unwrap();
        match cli.command {
            Some(Command::Run { input, no_save, output_dir }) => {
                assert_eq!(input, "claim.txt");
                assert!(no_save);
                assert!(output_dir.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["claim-copilot", "generate"]).unwrap();
        match cli.command {
            Some(Command::Generate { count, seed, out }) => {
                assert_eq!(count, 10_000);
                assert_eq!(seed, 42);
                assert_eq!(out, PathBuf::from("data/claims.jsonl"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
