//! stackplan CLI - deployment manifest assembler
//!
//! Usage: stackplan <COMMAND>
//!
//! Commands:
//!   synth   Assemble the deployment manifest from a context document
//!   check   Validate a context document without writing anything

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Synth {
            context,
            profile,
            region,
            out,
            print,
        } => commands::cmd_synth(
            context,
            profile,
            region,
            out,
            print,
            cli.json,
            cli.verbose,
        ),
        Commands::Check {
            context,
            profile,
            region,
        } => commands::cmd_check(context, profile, region, cli.json, cli.verbose),
    }
}
