//! Deployment context: the external parameter source
//!
//! Two generations of context schema coexist:
//! - **Flat** (first generation): top-level groups `tags`, `details`, `vpc`,
//!   `iamRole`, `image` and per-domain resource lists `connect`, `dynamoDB`,
//!   `s3`.
//! - **Profiles** (second generation): a top-level `profiles` map keyed by
//!   profile name, each with an image reference, profile-level tags, and a
//!   `regions` map carrying per-region details, placement, resource lists
//!   and tag overrides.
//!
//! The generation is detected once, at load time, by the presence of the
//! `profiles` key. Both generations normalize into a single
//! [`ResolvedContext`] before any policy or assembly code runs; nothing
//! downstream reads raw context values.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::suggest_key;
use crate::error::{StackplanError, StackplanResult};
use crate::models::{ImageRef, NetworkPlacement};
use crate::policy::PolicyDomain;
use crate::tags::TagSet;

/// Function detail group (`details`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FunctionDetails {
    #[serde(rename = "FunctionName")]
    pub function_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Network placement group (`vpc`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VpcDetails {
    pub vpc: String,
    #[serde(default)]
    pub subnet: Vec<String>,
}

/// Role detail group (`iamRole`, first generation only)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoleDetails {
    #[serde(rename = "roleName")]
    pub role_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Per-domain resource lists (`resources`, second generation)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct DomainResources {
    #[serde(default)]
    pub connect: Option<Vec<String>>,
    #[serde(default, rename = "dynamoDB")]
    pub dynamo_db: Option<Vec<String>>,
    #[serde(default)]
    pub s3: Option<Vec<String>>,
}

/// First-generation flat context document
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FlatContext {
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub details: Option<FunctionDetails>,
    #[serde(default)]
    pub vpc: Option<VpcDetails>,
    #[serde(default, rename = "iamRole")]
    pub iam_role: Option<RoleDetails>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub connect: Option<Vec<String>>,
    #[serde(default, rename = "dynamoDB")]
    pub dynamo_db: Option<Vec<String>>,
    #[serde(default)]
    pub s3: Option<Vec<String>>,
}

/// Second-generation deployment profile
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(default)]
    pub regions: BTreeMap<String, RegionConfig>,
}

/// Per-region configuration within a profile
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RegionConfig {
    #[serde(default)]
    pub details: Option<FunctionDetails>,
    #[serde(default)]
    pub vpc: Option<VpcDetails>,
    #[serde(default)]
    pub resources: Option<DomainResources>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// Second-generation context document
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileContext {
    pub profiles: BTreeMap<String, Profile>,
}

/// A loaded context document, one of the two schema generations
#[derive(Debug, Clone)]
pub enum DeployContext {
    Flat(FlatContext),
    Profiles(ProfileContext),
}

/// Non-fatal warning about an unrecognized context key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWarning {
    /// Last segment of the unrecognized key path
    pub key: String,
    /// Full dotted path within the document
    pub path: String,
    /// Nearest known key, if close enough to suggest
    pub suggestion: Option<String>,
}

/// Known context keys, used for did-you-mean suggestions
const CONTEXT_KEYS: &[&str] = &[
    "tags",
    "details",
    "vpc",
    "subnet",
    "iamRole",
    "roleName",
    "description",
    "image",
    "repositoryArn",
    "tag",
    "connect",
    "dynamoDB",
    "s3",
    "profiles",
    "regions",
    "resources",
    "FunctionName",
];

impl DeployContext {
    /// Load a context document from a JSON file
    pub fn load(path: &Path) -> StackplanResult<Self> {
        let (context, _warnings) = Self::load_with_warnings(path)?;
        Ok(context)
    }

    /// Load a context document and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> StackplanResult<(Self, Vec<ContextWarning>)> {
        let content = fs::read_to_string(path)?;
        Self::parse_with_warnings(&content, path)
    }

    /// Parse context JSON, detecting the schema generation by the presence
    /// of the top-level `profiles` key
    pub fn parse_with_warnings(
        content: &str,
        file: &Path,
    ) -> StackplanResult<(Self, Vec<ContextWarning>)> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| StackplanError::InvalidContext {
                file: file.to_path_buf(),
                message: e.to_string(),
            })?;

        let is_profile_schema = value.get("profiles").is_some();

        let mut unknown_paths: Vec<String> = Vec::new();
        let context = if is_profile_schema {
            let context: ProfileContext =
                serde_ignored::deserialize(value, |path| unknown_paths.push(path.to_string()))
                    .map_err(|e| StackplanError::InvalidContext {
                        file: file.to_path_buf(),
                        message: e.to_string(),
                    })?;
            DeployContext::Profiles(context)
        } else {
            let context: FlatContext =
                serde_ignored::deserialize(value, |path| unknown_paths.push(path.to_string()))
                    .map_err(|e| StackplanError::InvalidContext {
                        file: file.to_path_buf(),
                        message: e.to_string(),
                    })?;
            DeployContext::Flat(context)
        };

        let warnings = unknown_paths
            .into_iter()
            .map(|path| {
                let key = path
                    .split('.')
                    .next_back()
                    .unwrap_or(path.as_str())
                    .to_string();
                ContextWarning {
                    suggestion: suggest_key(&key, CONTEXT_KEYS),
                    key,
                    path,
                }
            })
            .collect();

        Ok((context, warnings))
    }

    /// True for the second-generation (profile) schema
    pub fn is_profile_schema(&self) -> bool {
        matches!(self, DeployContext::Profiles(_))
    }

    /// Normalize into a [`ResolvedContext`] for the given selection
    ///
    /// A flat context rejects a profile selection; a profile context
    /// requires both a profile and a region. All required groups are
    /// checked here, failing fast with the full parameter path.
    pub fn resolve(
        &self,
        profile: Option<&str>,
        region: Option<&str>,
    ) -> StackplanResult<ResolvedContext> {
        match self {
            DeployContext::Flat(flat) => {
                if let Some(profile) = profile {
                    return Err(StackplanError::ProfileNotApplicable {
                        profile: profile.to_string(),
                    });
                }
                flat.resolve()
            }
            DeployContext::Profiles(profiles) => match (profile, region) {
                (Some(profile), Some(region)) => profiles.resolve(profile, region),
                _ => Err(StackplanError::ProfileRequired),
            },
        }
    }
}

fn require<T>(value: Option<T>, path: &str) -> StackplanResult<T> {
    value.ok_or_else(|| StackplanError::MissingContext {
        path: path.to_string(),
    })
}

impl FlatContext {
    fn resolve(&self) -> StackplanResult<ResolvedContext> {
        let universal = require(self.tags.clone(), "tags")?;
        let details = require(self.details.clone(), "details")?;
        let iam_role = require(self.iam_role.clone(), "iamRole")?;
        let image = require(self.image.clone(), "image")?;
        let resources = ResolvedResources {
            connect: require(self.connect.clone(), "connect")?,
            dynamo_db: require(self.dynamo_db.clone(), "dynamoDB")?,
            s3: require(self.s3.clone(), "s3")?,
        };

        let network = self.vpc.as_ref().map(|vpc| NetworkPlacement {
            vpc_id: vpc.vpc.clone(),
            subnet_ids: vpc.subnet.clone(),
        });

        let universal: TagSet = universal.into_iter().collect();
        let derived = derived_tags(&details, network.as_ref(), None);
        let tags = TagSet::merged(&[&universal, &derived]);
        tags.require_standard()?;

        Ok(ResolvedContext {
            role_name: iam_role.role_name,
            role_description: iam_role.description,
            function_name: details.function_name,
            function_description: details.description,
            image,
            network,
            tags,
            resources,
        })
    }
}

impl ProfileContext {
    fn resolve(&self, profile_name: &str, region_name: &str) -> StackplanResult<ResolvedContext> {
        let profile = self.profiles.get(profile_name).ok_or_else(|| {
            StackplanError::UnknownProfile {
                profile: profile_name.to_string(),
                available: self
                    .profiles
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })?;

        let region =
            profile
                .regions
                .get(region_name)
                .ok_or_else(|| StackplanError::UnknownRegion {
                    profile: profile_name.to_string(),
                    region: region_name.to_string(),
                })?;

        let at = |key: &str| format!("profiles.{profile_name}.{key}");
        let region_at = |key: &str| format!("profiles.{profile_name}.regions.{region_name}.{key}");

        let image = require(profile.image.clone(), &at("image"))?;
        let details = require(region.details.clone(), &region_at("details"))?;
        // Network placement is mandatory at this schema generation.
        let vpc = require(region.vpc.clone(), &region_at("vpc"))?;
        let resources = require(region.resources.clone(), &region_at("resources"))?;
        let resources = ResolvedResources {
            connect: require(resources.connect, &region_at("resources.connect"))?,
            dynamo_db: require(resources.dynamo_db, &region_at("resources.dynamoDB"))?,
            s3: require(resources.s3, &region_at("resources.s3"))?,
        };

        let network = Some(NetworkPlacement {
            vpc_id: vpc.vpc,
            subnet_ids: vpc.subnet,
        });

        let profile_tags: TagSet = profile.tags.clone().into_iter().collect();
        let region_tags: TagSet = region.tags.clone().into_iter().collect();
        let derived = derived_tags(&details, network.as_ref(), Some(region_name));
        let tags = TagSet::merged(&[&profile_tags, &region_tags, &derived]);
        tags.require_standard()?;

        // Role name is derived at this generation, not configured.
        let environment = tags.get("Environment").unwrap_or_default().to_string();
        let role_name = format!("{}-{}-role", details.function_name, environment);

        Ok(ResolvedContext {
            role_name,
            role_description: details.description.clone(),
            function_name: details.function_name,
            function_description: details.description,
            image,
            network,
            tags,
            resources,
        })
    }
}

/// Tag entries derived from other context groups
///
/// Merged after the caller-supplied tag sources, so a derived entry wins on
/// key collision.
fn derived_tags(
    details: &FunctionDetails,
    network: Option<&NetworkPlacement>,
    region: Option<&str>,
) -> TagSet {
    let mut tags = TagSet::new();
    tags.insert("FunctionName", details.function_name.clone());
    if let Some(description) = &details.description {
        tags.insert("FunctionDescription", description.clone());
    }
    if let Some(network) = network {
        tags.insert("Vpc", network.vpc_id.clone());
        tags.insert("Subnet", network.subnet_ids.join(","));
    }
    if let Some(region) = region {
        tags.insert("Region", region);
    }
    tags
}

/// Fully normalized deployment parameters
///
/// The single internal record both the assembler and synthesizer consume;
/// built once per invocation, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContext {
    pub role_name: String,
    pub role_description: Option<String>,
    pub function_name: String,
    pub function_description: Option<String>,
    pub image: ImageRef,
    pub network: Option<NetworkPlacement>,
    pub tags: TagSet,
    pub resources: ResolvedResources,
}

/// Per-domain resource identifier lists, all present (possibly empty)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedResources {
    pub connect: Vec<String>,
    pub dynamo_db: Vec<String>,
    pub s3: Vec<String>,
}

impl ResolvedResources {
    /// Resource list for one policy domain
    pub fn for_domain(&self, domain: PolicyDomain) -> &[String] {
        match domain {
            PolicyDomain::Connect => &self.connect,
            PolicyDomain::DynamoDb => &self.dynamo_db,
            PolicyDomain::S3 => &self.s3,
        }
    }
}
