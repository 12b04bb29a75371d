//! Manifest synthesis
//!
//! Renders an [`Assembly`] into the declarative resource manifest the
//! external orchestrator consumes: one access-role resource and one
//! container-function resource that depends on it. Rendering is the last
//! step before output; nothing here talks to a cloud control plane.
//!
//! Serialized object keys are sorted, so the same assembly always renders
//! to byte-identical JSON.

use serde::Serialize;
use serde_json::json;

use crate::assembler::Assembly;
use crate::error::StackplanResult;
use crate::models::{FunctionConfig, ImageRef, RoleConfig, FUNCTION_SERVICE_PRINCIPAL};
use crate::policy::PolicyStatement;
use crate::tags::TagSet;

/// Manifest format marker, bumped on breaking output changes
pub const MANIFEST_FORMAT: &str = "stackplan/1";

/// IAM policy document version
pub const POLICY_DOCUMENT_VERSION: &str = "2012-10-17";

/// Resource type of the access role
pub const ROLE_RESOURCE_TYPE: &str = "aws:iam:role";

/// Resource type of the containerized function
pub const FUNCTION_RESOURCE_TYPE: &str = "aws:lambda:docker-function";

/// Actions granted on the image repository so the function's role can pull
const IMAGE_PULL_ACTIONS: [&str; 3] = [
    "ecr:BatchCheckLayerAvailability",
    "ecr:GetDownloadUrlForLayer",
    "ecr:BatchGetImage",
];

/// A single declarative resource in the manifest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "dependsOn", skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    pub properties: serde_json::Value,
}

/// The rendered deployment manifest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub format: String,
    pub resources: Vec<Resource>,
}

impl Manifest {
    /// Pretty-printed JSON with a trailing newline, ready to write
    pub fn to_json_pretty(&self) -> StackplanResult<String> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

/// Render an assembly into a manifest
///
/// The role resource comes first; the function resource declares a
/// `dependsOn` edge to it.
pub fn render(assembly: &Assembly) -> Manifest {
    let role_id = assembly.role.identity(&assembly.environment);
    let role = render_role(
        &assembly.role,
        &assembly.environment,
        &assembly.function.environment_tags,
        &assembly.function.image,
    );
    let function = render_function(&assembly.function, &assembly.environment, role_id.as_str());

    Manifest {
        format: MANIFEST_FORMAT.to_string(),
        resources: vec![role, function],
    }
}

/// Statement allowing the role to pull the function's container image
fn image_pull_statement(image: &ImageRef) -> PolicyStatement {
    PolicyStatement::allow(&IMAGE_PULL_ACTIONS, vec![image.repository_arn.clone()])
}

fn render_role(role: &RoleConfig, environment: &str, tags: &TagSet, image: &ImageRef) -> Resource {
    // The rendered document carries the domain grants plus the image-pull
    // grant; the assembled RoleConfig itself holds only the domain grants.
    let mut statements = role.statements.clone();
    statements.push(image_pull_statement(image));

    let mut properties = json!({
        "roleName": role.name,
        "assumeRolePolicy": {
            "Version": POLICY_DOCUMENT_VERSION,
            "Statement": [{
                "Effect": "Allow",
                "Principal": { "Service": FUNCTION_SERVICE_PRINCIPAL },
                "Action": "sts:AssumeRole"
            }]
        },
        "policy": {
            "Version": POLICY_DOCUMENT_VERSION,
            "Statement": statements
        },
        "tags": tags
    });
    if let Some(description) = &role.description {
        properties["description"] = json!(description);
    }

    Resource {
        id: role.identity(environment).to_string(),
        kind: ROLE_RESOURCE_TYPE.to_string(),
        depends_on: Vec::new(),
        properties,
    }
}

fn render_function(function: &FunctionConfig, environment: &str, role_id: &str) -> Resource {
    let mut properties = json!({
        "functionName": function.name,
        "image": function.image,
        "role": role_id,
        "memorySize": function.memory_mb,
        "timeout": function.timeout_secs,
        "environment": function.environment_tags
    });
    if let Some(description) = &function.description {
        properties["description"] = json!(description);
    }
    if let Some(network) = &function.network {
        properties["vpcConfig"] = json!(network);
    }

    Resource {
        id: function.identity(environment),
        kind: FUNCTION_RESOURCE_TYPE.to_string(),
        depends_on: vec![role_id.to_string()],
        properties,
    }
}
