//! Assembled configuration models
//!
//! Defines the value objects produced by assembly and consumed by manifest
//! synthesis:
//! - `RoleConfig`: access-role definition (name, description, statements)
//! - `RoleIdentity`: the role's resource identity handed to the function
//! - `FunctionConfig`: containerized-function definition
//! - Supporting types: `ImageRef`, `NetworkPlacement`

use serde::{Deserialize, Serialize};

use crate::policy::PolicyStatement;
use crate::tags::TagSet;

/// Memory allocated to the function, in megabytes
pub const FUNCTION_MEMORY_MB: u32 = 512;

/// Function timeout, in seconds
pub const FUNCTION_TIMEOUT_SECS: u32 = 300;

/// Service principal allowed to assume the access role
pub const FUNCTION_SERVICE_PRINCIPAL: &str = "lambda.amazonaws.com";

/// Container image reference: repository plus tag or digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(rename = "repositoryArn")]
    pub repository_arn: String,
    pub tag: String,
}

/// Optional VPC placement for the function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPlacement {
    #[serde(rename = "vpcId")]
    pub vpc_id: String,
    #[serde(rename = "subnetIds")]
    pub subnet_ids: Vec<String>,
}

/// The assembled access-role definition
///
/// Built once from the merged policy-domain outputs; the statement list is
/// exactly one statement per domain, in assembly order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleConfig {
    pub name: String,
    pub description: Option<String>,
    pub statements: Vec<PolicyStatement>,
}

impl RoleConfig {
    /// Resource identity of this role within the manifest
    ///
    /// The environment is part of the identity so the same role definition
    /// can exist side by side across environments.
    pub fn identity(&self, environment: &str) -> RoleIdentity {
        RoleIdentity(format!("iam-role-{}-{}", self.name, environment))
    }
}

/// Non-owning reference to a role's manifest identity
///
/// The function definition holds one of these; it never owns the role. A
/// `RoleIdentity` can only be obtained from a constructed `RoleConfig`,
/// which is what forces the role to be assembled first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleIdentity(String);

impl RoleIdentity {
    /// The identity as a manifest resource id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The assembled containerized-function definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionConfig {
    pub name: String,
    pub description: Option<String>,
    pub image: ImageRef,
    pub network: Option<NetworkPlacement>,
    pub role: RoleIdentity,
    pub environment_tags: TagSet,
    pub memory_mb: u32,
    pub timeout_secs: u32,
}

impl FunctionConfig {
    /// Resource identity of this function within the manifest
    pub fn identity(&self, environment: &str) -> String {
        format!("lambda-{}-{}", self.name, environment)
    }
}
