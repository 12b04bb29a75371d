use std::path::PathBuf;

use anyhow::{Context as _, Result};

use stackplan::policy::PolicyDomain;
use stackplan::{assemble, render, DeployContext, Verbosity};

use super::{report_context_warnings, Invocation};

pub fn cmd_synth(
    context: Option<PathBuf>,
    profile: Option<String>,
    region: Option<String>,
    out: Option<PathBuf>,
    print: bool,
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
    report_context_warnings(&warnings, invocation.quiet() || json);

    let resolved = deploy.resolve(
        invocation.profile.as_deref(),
        invocation.region.as_deref(),
    )?;
    let assembly = assemble(&resolved)?;
    let manifest = render(&assembly);
    let rendered = manifest.to_json_pretty()?;

    if print || json {
        print!("{rendered}");
        return Ok(());
    }

    let out_path = out.unwrap_or_else(|| invocation.config.synth.out.clone());
    if invocation.config.synth.atomic_writes {
        stackplan::fs::atomic_write(&out_path, &rendered)?;
    } else {
        stackplan::fs::plain_write(&out_path, &rendered)?;
    }

    if !invocation.quiet() {
        println!(
            "Synthesized {} resources for environment '{}'",
            manifest.resources.len(),
            assembly.environment
        );
        if invocation.verbosity >= Verbosity::Verbose {
            for domain in PolicyDomain::ALL {
                println!(
                    "  {}: {} resource identifiers",
                    domain,
                    resolved.resources.for_domain(domain).len()
                );
            }
            for resource in &manifest.resources {
                println!("  {} ({})", resource.id, resource.kind);
            }
        }
        println!("Wrote {}", out_path.display());
    }

    Ok(())
}
