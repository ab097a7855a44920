//! Language and theme preferences.

use anyhow::Result;

use super::PrefsArgs;
use crate::context::Context;

/// Navigation labels shown as a preview of the current language.
const PREVIEW_KEYS: [&str; 5] = ["products", "categories", "about", "contact", "login"];

/// Run the prefs command.
pub async fn run(args: PrefsArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let prefs = storefront.preferences();

    if let Some(language) = args.language {
        prefs.set_language(language)?;
        ctx.output.success(&format!("Language set to {}", language));
    }
    if let Some(theme) = args.theme {
        prefs.set_theme(theme)?;
        ctx.output.success(&format!("Theme set to {}", theme));
    }
    if args.toggle_theme {
        let theme = prefs.toggle_theme()?;
        ctx.output.success(&format!("Theme set to {}", theme));
    }

    let language = prefs.language();
    let theme = prefs.theme();
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "language": language,
            "theme": theme,
        }));
        return Ok(());
    }

    ctx.output.header("Preferences");
    ctx.output.kv("Language", language.as_str());
    ctx.output.kv("Theme", &format!("{} {}", theme, theme.toggle_icon()));
    let preview: Vec<String> = PREVIEW_KEYS.iter().map(|key| prefs.t(key)).collect();
    ctx.output.kv("Menu", &preview.join(" | "));
    Ok(())
}
