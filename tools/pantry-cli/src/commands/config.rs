//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, name } => init_config(force, &name, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let config = &ctx.config;
    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }
    ctx.output.kv("currency", config.currency.code());

    ctx.output.info("[catalog]");
    ctx.output.kv("backend", config.catalog.backend.as_str());
    ctx.output
        .kv("static_latency_ms", &config.catalog.static_latency_ms.to_string());
    let remote = &config.catalog.remote;
    if !remote.store_domain.is_empty() {
        ctx.output.kv("endpoint", &remote.endpoint());
    }
    ctx.output.kv(
        "storefront_token",
        if remote.storefront_token.is_empty() {
            "(not set)"
        } else {
            "(set)"
        },
    );
    ctx.output.kv("api_version", &remote.api_version);

    ctx.output.info("[shipping]");
    let policy = config.shipping_policy()?;
    ctx.output.kv("free_threshold", &policy.free_threshold.display());
    ctx.output.kv("flat_fee", &policy.flat_fee.display());

    ctx.output.info("[search]");
    ctx.output.kv("debounce_ms", &config.search.debounce_ms.to_string());
    ctx.output
        .kv("min_query_len", &config.search.min_query_len.to_string());
    ctx.output
        .kv("max_suggestions", &config.search.max_suggestions.to_string());

    ctx.output.info("[checkout]");
    ctx.output.kv(
        "processing_delay_ms",
        &config.checkout.processing_delay_ms.to_string(),
    );
    ctx.output.kv("order_prefix", &config.checkout.order_prefix);

    ctx.output.info("[logging]");
    ctx.output.kv("level", config.logging.level.as_filter());

    Ok(())
}

fn init_config(force: bool, name: &str, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(name))?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}
