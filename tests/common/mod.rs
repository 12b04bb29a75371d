//! Common test utilities for stackplan integration tests.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the compiled stackplan binary
pub fn stackplan_bin() -> &'static str {
    env!("CARGO_BIN_EXE_stackplan")
}

/// Run the binary with the given args in the given working directory
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(stackplan_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run stackplan binary")
}

/// Write a context document into `dir` and return its path
pub fn write_context(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("context.json");
    std::fs::write(&path, content).expect("failed to write context fixture");
    path
}
