//! Command implementations for the stackplan CLI

mod check;
mod synth;

pub use check::cmd_check;
pub use synth::cmd_synth;

use std::path::{Path, PathBuf};

use stackplan::{Config, ContextWarning, Verbosity};

/// Effective settings for one invocation: CLI flags layered over config
pub(crate) struct Invocation {
    pub context_path: PathBuf,
    pub profile: Option<String>,
    pub region: Option<String>,
    pub config: Config,
    pub verbosity: Verbosity,
}

impl Invocation {
    /// Resolve CLI flags against the configuration hierarchy
    pub fn new(
        context: Option<PathBuf>,
        profile: Option<String>,
        region: Option<String>,
        verbose: u8,
        project_root: &Path,
    ) -> Self {
        let config = Config::load_or_default(Some(project_root));
        let verbosity = match verbose {
            0 => config.output.verbosity,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };

        Self {
            context_path: context.unwrap_or_else(|| config.synth.context.clone()),
            profile: profile.or_else(|| config.profile.name.clone()),
            region: region.or_else(|| config.profile.region.clone()),
            config,
            verbosity,
        }
    }

    pub fn quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }
}

/// Print unknown-key warnings to stderr
pub(crate) fn report_context_warnings(warnings: &[ContextWarning], quiet: bool) {
    if quiet {
        return;
    }
    for warning in warnings {
        match &warning.suggestion {
            Some(suggestion) => eprintln!(
                "warning: unknown context key '{}' (did you mean '{}'?)",
                warning.path, suggestion
            ),
            None => eprintln!("warning: unknown context key '{}'", warning.path),
        }
    }
}
