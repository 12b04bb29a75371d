use std::path::PathBuf;

use anyhow::{Context as _, Result};

use stackplan::policy::PolicyDomain;
use stackplan::{assemble, DeployContext};

use super::{report_context_warnings, Invocation};

pub fn cmd_check(
    context: Option<PathBuf>,
    profile: Option<String>,
    region: Option<String>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let invocation = Invocation::new(context, profile, region, verbose, &project_root);

    let (deploy, warnings) = DeployContext::load_with_warnings(&invocation.context_path)
        .with_context(|| {
            format!(
                "failed to load context {}",
                invocation.context_path.display()
            )
        })?;
    let resolved = deploy.resolve(
        invocation.profile.as_deref(),
        invocation.region.as_deref(),
    )?;
    // Check runs the same assembly path synth does.
    let assembly = assemble(&resolved)?;

    let schema = if deploy.is_profile_schema() {
        "profiles"
    } else {
        "flat"
    };

    if json {
        let mut domains = serde_json::Map::new();
        for domain in PolicyDomain::ALL {
            domains.insert(
                domain.context_key().to_string(),
                serde_json::json!(resolved.resources.for_domain(domain).len()),
            );
        }
        let report = serde_json::json!({
            "context": invocation.context_path,
            "schema": schema,
            "role": assembly.role.name,
            "function": assembly.function.name,
            "environment": assembly.environment,
            "statements": assembly.role.statements.len(),
            "resourceCounts": domains,
            "warnings": warnings
                .iter()
                .map(|w| w.path.clone())
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    report_context_warnings(&warnings, invocation.quiet());

    if !invocation.quiet() {
        println!("Context {} is valid ({schema} schema)", invocation.context_path.display());
        println!(
            "  role '{}' with {} statements, function '{}' (environment '{}')",
            assembly.role.name,
            assembly.role.statements.len(),
            assembly.function.name,
            assembly.environment
        );
        for domain in PolicyDomain::ALL {
            println!(
                "  {}: {} resource identifiers",
                domain,
                resolved.resources.for_domain(domain).len()
            );
        }
    }

    Ok(())
}
