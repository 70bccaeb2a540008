//! Implementation of the `rigger generate` command.
//!
//! Responsibility: merge CLI flags over the loaded config into a
//! `GenerationRequest`, call the core generate service, and display results.
//! No substitution logic lives here.

use tracing::{debug, instrument};

use rigger_adapters::LocalFilesystem;
use rigger_core::{
    application::{GenerateService, GenerationRequest, GenerationSummary},
    domain::InstancePlan,
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `rigger generate` command.
///
/// Dispatch sequence:
/// 1. Resolve paths and plan (flags over config)
/// 2. Build the service with local filesystem adapters
/// 3. Print the document on `--dry-run`, otherwise generate and report
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args, &config);

    debug!(
        base = %request.base_template.display(),
        service = %request.service_template.display(),
        output = %request.output.display(),
        plan = %request.plan,
        "Request resolved"
    );

    let service = GenerateService::new(Box::new(LocalFilesystem), Box::new(LocalFilesystem));

    if args.dry_run {
        let document = service.preview(&request).map_err(CliError::Core)?;
        output.document(&document.to_text())?;
        return Ok(());
    }

    let summary = service.generate(&request).map_err(CliError::Core)?;
    report(&summary, &output)
}

/// Merge flag values over the config values.
fn build_request(args: &GenerateArgs, config: &AppConfig) -> GenerationRequest {
    let generator = &config.generator;
    let plan = InstancePlan::new(args.instances.unwrap_or(generator.instances))
        .with_ip_offset(args.ip_offset.unwrap_or(generator.ip_offset))
        .with_port_base(args.port_base.unwrap_or(generator.port_base));

    let paths = &config.paths;
    GenerationRequest {
        base_template: args.base.clone().unwrap_or_else(|| paths.base_template.clone()),
        service_template: args
            .service
            .clone()
            .unwrap_or_else(|| paths.service_template.clone()),
        output: args.output.clone().unwrap_or_else(|| paths.output.clone()),
        plan,
    }
}

fn report(summary: &GenerationSummary, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(summary);
    }

    if summary.tokens.is_empty() && summary.instances > 0 {
        output.warning("Service template has no placeholders; all blocks are identical")?;
    }
    output.success(&format!(
        "Wrote {} service block{} to {} ({} bytes)",
        summary.instances,
        if summary.instances == 1 { "" } else { "s" },
        summary.output.display(),
        summary.bytes,
    ))?;
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
