//! Chat with the shop assistant.

use anyhow::Result;
use console::style;
use dialoguer::Input;
use shopfront_core::Storefront;
use shopfront_messaging::{ReplySource, Sender};

use super::ChatArgs;
use crate::context::Context;

/// Typed alone, ends an interactive session.
const QUIT_WORDS: [&str; 3] = ["quit", "exit", "bye"];

/// Run the chat command.
pub async fn run(args: ChatArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;
    storefront.toggle_widget();

    if args.links {
        for link in [storefront.open_whatsapp(), storefront.open_messenger()] {
            ctx.output.kv(&format!("{:?}", link.channel), &link.url);
        }
    }

    storefront.open_assistant();
    match args.message {
        Some(message) => {
            send(&mut storefront, &message, ctx).await?;
            if ctx.output.is_json() {
                ctx.output.json(&storefront.chat().messages());
            }
        }
        None => {
            ctx.output.info("Chatting with the Polashtoli assistant. Type \"quit\" to leave.");
            loop {
                let line: String = Input::new()
                    .with_prompt("You")
                    .allow_empty(true)
                    .interact_text()?;
                if QUIT_WORDS.contains(&line.trim().to_lowercase().as_str()) {
                    break;
                }
                send(&mut storefront, &line, ctx).await?;
            }
        }
    }
    storefront.close_chatbot();

    Ok(())
}

/// Send one message and print the bot bubbles it produced.
async fn send(storefront: &mut Storefront, text: &str, ctx: &Context) -> Result<()> {
    let before = storefront.chat().messages().len();

    let spinner = ctx.output.spinner("Assistant is typing...");
    let source = storefront.send_chat(text).await;
    spinner.finish_and_clear();

    match source? {
        None => return Ok(()),
        Some(ReplySource::Live) => ctx.output.debug("Answered by the live assistant"),
        Some(source) => ctx.output.debug(&format!("Answered offline ({:?})", source)),
    }
    if ctx.output.is_json() {
        return Ok(());
    }
    for message in &storefront.chat().messages()[before..] {
        if message.sender == Sender::Bot {
            println!(
                "{} {} {}",
                style("Bot").magenta().bold(),
                style(message.time_label()).dim(),
                message.text
            );
        }
    }
    Ok(())
}
