//! stackplan - deployment manifest assembler
//!
//! stackplan reads a deployment context document, builds the permission
//! statements for a fixed set of policy domains, assembles an access-role
//! and containerized-function configuration, and renders them as a
//! declarative resource manifest for an external infrastructure
//! orchestrator to realize.

pub mod assembler;
pub mod config;
pub mod context;
pub mod error;
pub mod fs;
pub mod models;
pub mod policy;
pub mod synth;
pub mod tags;

// Re-exports for convenience
pub use assembler::{assemble, build_statements, Assembly};
pub use config::{Config, Verbosity};
pub use context::{ContextWarning, DeployContext, ResolvedContext, ResolvedResources};
pub use error::{StackplanError, StackplanResult};
pub use models::{FunctionConfig, ImageRef, NetworkPlacement, RoleConfig, RoleIdentity};
pub use policy::{statements_for, Effect, PolicyDomain, PolicyStatement};
pub use synth::{render, Manifest, Resource};
pub use tags::TagSet;
