//! Role and function assembly
//!
//! Maps a [`ResolvedContext`] into the two dependent configuration objects:
//! the access role (built first) and the containerized function (which holds
//! a non-owning reference to the role's identity). Pure and single-pass; the
//! external orchestrator owns everything that happens after.

use crate::context::ResolvedContext;
use crate::error::StackplanResult;
use crate::models::{
    FunctionConfig, RoleConfig, FUNCTION_MEMORY_MB, FUNCTION_TIMEOUT_SECS,
};
use crate::policy::{statements_for, PolicyDomain, PolicyStatement};

/// The two assembled configuration objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub role: RoleConfig,
    pub function: FunctionConfig,
    /// Environment the assembly was produced for (part of resource ids)
    pub environment: String,
}

/// Combined statement list for all policy domains, in fixed domain order
///
/// One statement per domain. Order matters only for reproducibility of the
/// generated output: statements are independent, additive grants.
pub fn build_statements(context: &ResolvedContext) -> Vec<PolicyStatement> {
    PolicyDomain::ALL
        .iter()
        .flat_map(|domain| statements_for(*domain, context.resources.for_domain(*domain)))
        .collect()
}

/// Assemble the role and function configurations
///
/// The role is constructed first; the function is handed the role's
/// identity and cannot be built without it.
pub fn assemble(context: &ResolvedContext) -> StackplanResult<Assembly> {
    // require_standard ran at resolve time, so Environment is present.
    let environment = context
        .tags
        .get("Environment")
        .unwrap_or_default()
        .to_string();

    let role = RoleConfig {
        name: context.role_name.clone(),
        description: context.role_description.clone(),
        statements: build_statements(context),
    };

    let function = FunctionConfig {
        name: context.function_name.clone(),
        description: context.function_description.clone(),
        image: context.image.clone(),
        network: context.network.clone(),
        role: role.identity(&environment),
        environment_tags: context.tags.clone(),
        memory_mb: FUNCTION_MEMORY_MB,
        timeout_secs: FUNCTION_TIMEOUT_SECS,
    };

    Ok(Assembly {
        role,
        function,
        environment,
    })
}
