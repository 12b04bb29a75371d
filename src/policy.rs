//! Permission policy domains and statement builders
//!
//! Each policy domain carries a fixed, non-configurable action list. A
//! statement builder maps a caller-supplied resource list to exactly one
//! additive `Allow` statement for its domain. Builders are pure: same input,
//! same output, no validation of resource identifier syntax (malformed ARNs
//! are rejected by the control plane that consumes the manifest, not here).

use serde::{Deserialize, Serialize};

/// Statement effect, serialized in IAM document casing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Effect {
    #[default]
    Allow,
    Deny,
}

/// Service domain a fixed action list belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyDomain {
    /// Amazon Connect (outbound contact control)
    Connect,
    /// DynamoDB item access
    DynamoDb,
    /// S3 object access
    S3,
}

impl PolicyDomain {
    /// All domains, in the order their statements are assembled
    pub const ALL: [PolicyDomain; 3] = [
        PolicyDomain::Connect,
        PolicyDomain::DynamoDb,
        PolicyDomain::S3,
    ];

    /// Fixed action list for this domain
    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            PolicyDomain::Connect => &[
                "connect:StartOutboundVoiceContact",
                "connect:StopContact",
                "connect:GetContactAttributes",
            ],
            PolicyDomain::DynamoDb => &[
                "dynamodb:GetItem",
                "dynamodb:PutItem",
                "dynamodb:UpdateItem",
                "dynamodb:Query",
                "dynamodb:Scan",
            ],
            PolicyDomain::S3 => &["s3:GetObject", "s3:PutObject", "s3:ListBucket"],
        }
    }

    /// Key under which this domain's resource list appears in the context
    pub fn context_key(&self) -> &'static str {
        match self {
            PolicyDomain::Connect => "connect",
            PolicyDomain::DynamoDb => "dynamoDB",
            PolicyDomain::S3 => "s3",
        }
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PolicyDomain::Connect => "Connect",
            PolicyDomain::DynamoDb => "DynamoDB",
            PolicyDomain::S3 => "S3",
        }
    }
}

impl std::fmt::Display for PolicyDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single additive permission grant
///
/// Immutable once built; equality is structural. Serialized with IAM
/// document keys so the manifest consumer can embed it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyStatement {
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Action")]
    pub actions: Vec<String>,
    #[serde(rename = "Resource")]
    pub resources: Vec<String>,
}

impl PolicyStatement {
    /// Build an `Allow` statement over the given actions and resources
    pub fn allow(actions: &[&str], resources: Vec<String>) -> Self {
        Self {
            effect: Effect::Allow,
            actions: actions.iter().map(|a| (*a).to_string()).collect(),
            resources,
        }
    }
}

/// Build the statement list for one domain
///
/// Always returns exactly one statement. The resource list is passed through
/// unchanged: order and multiplicity are preserved, an empty list produces a
/// statement granting the domain's actions on zero resources.
pub fn statements_for(domain: PolicyDomain, resources: &[String]) -> Vec<PolicyStatement> {
    vec![PolicyStatement::allow(domain.actions(), resources.to_vec())]
}
