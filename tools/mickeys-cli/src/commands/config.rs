//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    // Shop section
    ctx.output.info("");
    ctx.output.info("[shop]");
    ctx.output.kv("name", &ctx.config.shop.name);
    ctx.output.kv("currency", &ctx.config.shop.currency);

    // Pricing section
    ctx.output.info("");
    ctx.output.info("[pricing]");
    ctx.output.kv("tax_rate", &ctx.config.pricing.tax_rate.to_string());
    if !ctx.config.pricing.promo_codes.is_empty() {
        ctx.output.info("");
        ctx.output.info("[pricing.promo_codes]");
        for (code, percent) in &ctx.config.pricing.promo_codes {
            ctx.output.kv(code, &format!("{}%", percent));
        }
    }

    // Endpoints section
    ctx.output.info("");
    ctx.output.info("[endpoints]");
    ctx.output.kv("script_url", &ctx.config.endpoints.script_url);
    ctx.output.kv("gallery_url", &ctx.config.endpoints.gallery_url);

    // Session section
    ctx.output.info("");
    ctx.output.info("[session]");
    if let Some(ref id) = ctx.config.session.id {
        ctx.output.kv("id", id);
    }
    ctx.output.kv("store_dir", &ctx.store_dir().display().to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("mickeys.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config(&ctx.config.shop.name);
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let report = ctx.config.check();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": report.errors.is_empty(),
            "errors": report.errors,
            "warnings": report.warnings,
        }));
    }

    // Print results
    if report.errors.is_empty() && report.warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &report.errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &report.warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !report.errors.is_empty() {
        bail!("Configuration has {} error(s)", report.errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
