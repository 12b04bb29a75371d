//! Tool configuration for stackplan
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STACKPLAN_*)
//! 3. Project config (stackplan.toml)
//! 4. User config (~/.config/stackplan/config.toml)
//! 5. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StackplanError, StackplanResult};

/// Synthesis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Path of the context document
    #[serde(default = "default_context_path")]
    pub context: PathBuf,

    /// Path the manifest is written to
    #[serde(default = "default_out_path")]
    pub out: PathBuf,

    #[serde(default = "default_true")]
    pub atomic_writes: bool,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            context: default_context_path(),
            out: default_out_path(),
            atomic_writes: true,
        }
    }
}

fn default_context_path() -> PathBuf {
    PathBuf::from("context.json")
}

fn default_out_path() -> PathBuf {
    PathBuf::from("stackplan.out.json")
}

fn default_true() -> bool {
    true
}

/// Default deployment profile selection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub region: Option<String>,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub synth: SynthConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StackplanResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StackplanResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| StackplanError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .next_back()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    suggestion: suggest_key(&key, CONFIG_KEYS),
                    line: find_line_number(&content, &key),
                    file: path.to_path_buf(),
                    key,
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        // Try project config first
        if let Some(root) = project_root {
            let project_config = root.join("stackplan.toml");
            if project_config.exists() {
                if let Ok(config) = Self::load(&project_config) {
                    return config.with_env_overrides();
                }
            }
        }

        // Try user config
        if let Some(user_config_dir) = dirs_config_dir() {
            let user_config = user_config_dir.join("stackplan/config.toml");
            if user_config.exists() {
                if let Ok(config) = Self::load(&user_config) {
                    return config.with_env_overrides();
                }
            }
        }

        // Return defaults with env overrides
        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides (STACKPLAN_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(context) = std::env::var("STACKPLAN_CONTEXT") {
            self.synth.context = PathBuf::from(context);
        }

        if let Ok(out) = std::env::var("STACKPLAN_OUT") {
            self.synth.out = PathBuf::from(out);
        }

        if let Ok(profile) = std::env::var("STACKPLAN_PROFILE") {
            if !profile.is_empty() {
                self.profile.name = Some(profile);
            }
        }

        if let Ok(region) = std::env::var("STACKPLAN_REGION") {
            if !region.is_empty() {
                self.profile.region = Some(region);
            }
        }

        if let Ok(verbosity) = std::env::var("STACKPLAN_VERBOSITY") {
            self.output.verbosity = match verbosity.to_lowercase().as_str() {
                "quiet" => Verbosity::Quiet,
                "verbose" => Verbosity::Verbose,
                "debug" => Verbosity::Debug,
                _ => Verbosity::Normal,
            };
        }

        if let Ok(val) = std::env::var("STACKPLAN_ATOMIC_WRITES") {
            self.synth.atomic_writes = val.to_lowercase() != "false" && val != "0";
        }

        self
    }
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

const CONFIG_KEYS: &[&str] = &[
    "synth",
    "context",
    "out",
    "atomic_writes",
    "profile",
    "name",
    "region",
    "output",
    "verbosity",
];

/// Nearest known key within edit distance 2, if any
pub(crate) fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(
                std::cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + cost,
            );
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.synth.context, PathBuf::from("context.json"));
        assert_eq!(config.synth.out, PathBuf::from("stackplan.out.json"));
        assert!(config.synth.atomic_writes);
        assert!(config.profile.name.is_none());
        assert_eq!(config.output.verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_config_parse_toml() {
        let toml = r#"
[synth]
context = "deploy/context.json"
out = "deploy/manifest.json"
atomic_writes = true

[profile]
name = "prod"
region = "us-east-1"

[output]
verbosity = "verbose"
"#;

        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.synth.context, PathBuf::from("deploy/context.json"));
        assert_eq!(config.profile.name.as_deref(), Some("prod"));
        assert_eq!(config.profile.region.as_deref(), Some("us-east-1"));
        assert_eq!(config.output.verbosity, Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_serde() {
        let config: Config = toml::from_str("[output]\nverbosity = \"quiet\"\n").unwrap();
        assert_eq!(config.output.verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_env_override_profile() {
        // SAFETY: Single-threaded test, no concurrent access to env vars
        unsafe { std::env::set_var("STACKPLAN_PROFILE", "staging") };
        let config = Config::default().with_env_overrides();
        assert_eq!(config.profile.name.as_deref(), Some("staging"));
        unsafe { std::env::remove_var("STACKPLAN_PROFILE") };
    }

    #[test]
    fn test_env_override_context_path() {
        // SAFETY: Single-threaded test, no concurrent access to env vars
        unsafe { std::env::set_var("STACKPLAN_CONTEXT", "other.json") };
        let config = Config::default().with_env_overrides();
        assert_eq!(config.synth.context, PathBuf::from("other.json"));
        unsafe { std::env::remove_var("STACKPLAN_CONTEXT") };
    }

    #[test]
    fn test_env_override_atomic_writes() {
        // SAFETY: Single-threaded test, no concurrent access to env vars
        unsafe { std::env::set_var("STACKPLAN_ATOMIC_WRITES", "false") };
        let config = Config::default().with_env_overrides();
        assert!(!config.synth.atomic_writes);
        unsafe { std::env::remove_var("STACKPLAN_ATOMIC_WRITES") };
    }

    #[test]
    fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "[synht]\ncontext = \"c.json\"\n").unwrap();

        let (_config, warnings) = Config::load_with_warnings(&path).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "synht");
        assert_eq!(warnings[0].line, Some(1));
        assert_eq!(warnings[0].suggestion, Some("synth".to_string()));
    }

    #[test]
    fn test_config_invalid_toml_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "synth = \n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, StackplanError::InvalidConfig { .. }));
    }

    #[test]
    fn test_suggest_key_distance_cutoff() {
        assert_eq!(
            suggest_key("regoin", &["region", "output"]),
            Some("region".to_string())
        );
        assert_eq!(suggest_key("completely-unrelated", &["region"]), None);
    }
}
