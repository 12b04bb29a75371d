use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// stackplan - deployment manifest assembler
#[derive(Parser, Debug)]
#[command(name = "stackplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble the deployment manifest from a context document
    Synth {
        /// Path to the context document
        #[arg(short, long)]
        context: Option<PathBuf>,

        /// Deployment profile to select (profile contexts only)
        #[arg(short, long)]
        profile: Option<String>,

        /// Region within the selected profile
        #[arg(short, long)]
        region: Option<String>,

        /// Path the manifest is written to
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the manifest to stdout instead of writing a file
        #[arg(long)]
        print: bool,
    },

    /// Validate a context document without writing anything
    Check {
        /// Path to the context document
        #[arg(short, long)]
        context: Option<PathBuf>,

        /// Deployment profile to select (profile contexts only)
        #[arg(short, long)]
        profile: Option<String>,

        /// Region within the selected profile
        #[arg(short, long)]
        region: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_synth_flags() {
        let cli = Cli::parse_from([
            "stackplan",
            "synth",
            "--context",
            "deploy/context.json",
            "--profile",
            "prod",
            "--region",
            "us-east-1",
            "--print",
        ]);

        match cli.command {
            Commands::Synth {
                context,
                profile,
                region,
                print,
                ..
            } => {
                assert_eq!(context, Some(PathBuf::from("deploy/context.json")));
                assert_eq!(profile.as_deref(), Some("prod"));
                assert_eq!(region.as_deref(), Some("us-east-1"));
                assert!(print);
            }
            _ => panic!("expected synth command"),
        }
    }

    #[test]
    fn test_global_json_flag_after_subcommand() {
        let cli = Cli::parse_from(["stackplan", "check", "--json"]);
        assert!(cli.json);
    }
}
