//! Contact form and newsletter.

use anyhow::Result;
use shopfront_core::MESSAGE_SENT;
use shopfront_data::api::ContactMessage;

use super::{ContactArgs, SubscribeArgs};
use crate::context::Context;

/// Run the contact command.
pub async fn contact(args: ContactArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let message = ContactMessage {
        name: args.name,
        email: args.email,
        phone: args.phone,
        subject: args.subject,
        message: args.message,
        timestamp: String::new(),
    };

    let spinner = ctx.output.spinner("Sending message...");
    let sent = storefront.submit_contact(message).await;
    spinner.finish_and_clear();
    let sent = sent?;

    if ctx.output.is_json() {
        ctx.output.json(&sent);
        return Ok(());
    }
    ctx.output.success(&sent.notice(MESSAGE_SENT));
    if sent.demo_mode {
        ctx.output.info("Your message was kept in the profile and will not be lost");
    }
    Ok(())
}

/// Run the subscribe command.
pub async fn subscribe(args: SubscribeArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;

    let spinner = ctx.output.spinner("Subscribing...");
    let result = storefront.subscribe(&args.email).await;
    spinner.finish_and_clear();

    let message = result?;
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "message": message }));
    } else {
        ctx.output.success(message);
    }
    Ok(())
}
