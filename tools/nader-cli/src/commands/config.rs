//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use nader_commerce::checkout::{active_provider, is_configured, PAYMENT_PROVIDERS};
use serde::Serialize;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{Context, CONFIG_NAMES};
use crate::output::status_badge;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

#[derive(Serialize)]
struct ProviderStatus {
    id: &'static str,
    name: &'static str,
    enabled: bool,
    configured: bool,
    active: bool,
}

fn provider_statuses(config: &CliConfig) -> Vec<ProviderStatus> {
    let active = active_provider();
    PAYMENT_PROVIDERS
        .iter()
        .map(|p| ProviderStatus {
            id: p.id,
            name: p.name,
            enabled: p.enabled,
            configured: is_configured(p.id, &config.credentials(p.id)),
            active: p.id == active.id,
        })
        .collect()
}

fn show_config(ctx: &Context) -> Result<()> {
    let providers = provider_statuses(&ctx.config);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": ctx.config_path,
            "config": ctx.config,
            "providers": providers,
        }));
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults, no config file found)"),
    }

    // Storage section
    ctx.output.info("");
    ctx.output.info("[storage]");
    ctx.output.kv(
        "dir",
        &ctx.resolve_path(&ctx.config.storage.dir).display().to_string(),
    );
    ctx.output.kv("cart_key", &ctx.config.storage.cart_key);

    // Checkout section
    let checkout = &ctx.config.checkout;
    ctx.output.info("");
    ctx.output.info("[checkout]");
    ctx.output.kv("tax_rate", &checkout.tax_rate.to_string());
    ctx.output.kv(
        "free_shipping_threshold",
        &checkout.free_shipping_threshold.to_string(),
    );
    ctx.output.kv("mock_success_rate", &checkout.mock_success_rate.to_string());
    ctx.output.kv(
        "processing_delay_ms",
        &checkout.processing_delay_ms.to_string(),
    );

    // Payment providers
    ctx.output.info("");
    ctx.output.info("Payment providers:");
    for p in &providers {
        let enabled = if p.enabled { "enabled" } else { "disabled" };
        let configured = if p.configured {
            "configured"
        } else {
            "not configured"
        };
        let marker = if p.active { " (active)" } else { "" };
        ctx.output.list_item(&format!(
            "{}{}: {}, {}",
            p.name,
            marker,
            status_badge(enabled),
            status_badge(configured)
        ));
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let storage_dir = ctx.config.storage.dir.display().to_string();
    let content = generate_default_config(&storage_dir);
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "created": config_path }));
    } else {
        ctx.output.success(&format!("Created: {}", config_path.display()));
    }

    Ok(())
}
