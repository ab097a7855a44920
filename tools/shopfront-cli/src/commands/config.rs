//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use shopfront_core::config::CONFIG_FILE_NAMES;
use shopfront_core::generate_default_config;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Path => show_path(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let config = &ctx.config;
    ctx.output.header("Current Configuration");

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &config.api.base_url);

    ctx.output.info("[chatbot]");
    ctx.output.kv("apiUrl", &config.chatbot.api_url);
    ctx.output.kv("enabled", &config.chatbot.enabled.to_string());
    ctx.output.kv("timeout", &format!("{} ms", config.chatbot.timeout));

    ctx.output.info("[whatsapp]");
    ctx.output.kv("phoneNumber", &config.whatsapp.phone_number);
    ctx.output.kv("message", &config.whatsapp.message);

    ctx.output.info("[messenger]");
    ctx.output.kv("pageId", &config.messenger.page_id);

    ctx.output.info("[badge]");
    ctx.output.kv("show", &config.badge.show.to_string());
    ctx.output.kv("count", &config.badge.count.to_string());

    ctx.output.info("[storage]");
    if let Some(profile) = &config.storage.profile {
        ctx.output.kv("profile", &profile.display().to_string());
    }

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) => println!("{}", path.display()),
        None => ctx
            .output
            .info("No config file found, using defaults. Run `shopfront config init` to create one."),
    }
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
