//! Account commands: login, registration, session and profile.

use anyhow::{anyhow, Result};
use dialoguer::Password;
use shopfront_auth::{GuardDecision, Registration};
use shopfront_commerce::checkout::SavedAddress;
use shopfront_core::{
    WishlistItem, LOGIN_SUCCESS, PASSWORD_CHANGED, PROFILE_UPDATED, REGISTRATION_SUCCESS,
};

use super::{AccountArgs, AccountCommand, GuardArgs, LoginArgs, RegisterArgs};
use crate::context::Context;
use crate::output::status_badge;

/// Run the login command.
pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;
    let password = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let spinner = ctx.output.spinner("Logging in...");
    let login = storefront.login(&args.email, &password, args.remember).await;
    spinner.finish_and_clear();
    let login = login?;

    if ctx.output.is_json() {
        ctx.output.json(&login);
        return Ok(());
    }
    ctx.output.success(&login.notice(LOGIN_SUCCESS));
    ctx.output.kv("Name", &login.value.name);
    ctx.output.kv("Role", login.value.role.display_name());
    ctx.output.kv("Dashboard", login.value.role.dashboard_url());
    Ok(())
}

/// Run the register command.
pub async fn register(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;
    let (password, confirm_password) = match args.password {
        Some(password) => (password.clone(), password),
        None => {
            let password = Password::new().with_prompt("Password").interact()?;
            let confirm = Password::new().with_prompt("Confirm password").interact()?;
            (password, confirm)
        }
    };
    let form = Registration {
        name: args.name,
        email: args.email,
        phone: args.phone,
        password,
        confirm_password,
    };

    let spinner = ctx.output.spinner("Creating account...");
    let registered = storefront.register(form).await;
    spinner.finish_and_clear();
    let registered = registered?;

    if ctx.output.is_json() {
        ctx.output.json(&registered);
        return Ok(());
    }
    ctx.output.success(&registered.notice(REGISTRATION_SUCCESS));
    ctx.output.kv("Name", &registered.value.name);
    Ok(())
}

/// Run the logout command.
pub async fn logout(ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;
    storefront.logout()?;
    ctx.output.success("Logged out");
    Ok(())
}

/// Run the whoami command.
pub async fn whoami(ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let session = storefront.current_session();

    if ctx.output.is_json() {
        ctx.output.json(&session);
        return Ok(());
    }
    match session {
        Some(session) => {
            ctx.output.header(&format!("{} ({})", session.name, session.avatar));
            ctx.output.kv("Username", &session.username);
            ctx.output.kv("Role", session.role.display_name());
            ctx.output.kv(
                "Logged in",
                &session.login_time.format("%Y-%m-%d %H:%M UTC").to_string(),
            );
            let permissions: Vec<&str> = session
                .role
                .permissions()
                .iter()
                .map(|p| p.as_str())
                .collect();
            ctx.output.kv("Permissions", &permissions.join(", "));
        }
        None => ctx.output.info("Not logged in"),
    }
    Ok(())
}

/// Run the guard command.
pub async fn guard(args: GuardArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let decision = storefront.guard(&args.path);

    if ctx.output.is_json() {
        ctx.output.json(&decision);
        return Ok(());
    }
    match &decision {
        GuardDecision::Allow => ctx.output.success(&format!("{} may be opened", args.path)),
        GuardDecision::RedirectToLogin { url } | GuardDecision::RedirectToDashboard { url } => {
            if let Some(message) = decision.message() {
                ctx.output.warn(message);
            }
            ctx.output.kv("Redirect", url);
        }
    }
    Ok(())
}

/// Run the account command.
pub async fn run(args: AccountArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let account = storefront.account();

    match args.command.unwrap_or(AccountCommand::Show) {
        AccountCommand::Show => {
            let dashboard = account.dashboard();
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "profile": storefront.profile(),
                    "dashboard": dashboard,
                }));
                return Ok(());
            }
            if let Some(profile) = storefront.profile() {
                ctx.output.header(&profile.name);
                ctx.output.kv("Email", &profile.email);
                if let Some(phone) = &profile.phone {
                    ctx.output.kv("Phone", phone);
                }
            } else {
                ctx.output.header("Guest");
            }
            ctx.output.kv("Total orders", &dashboard.total_orders.to_string());
            ctx.output.kv("Pending", &dashboard.pending_orders.to_string());
            ctx.output.kv("Wishlist", &dashboard.wishlist_count.to_string());
            ctx.output.kv("Total spent", &dashboard.total_spent_label());
            if !dashboard.recent_orders.is_empty() {
                ctx.output.header("Recent Orders");
                for order in &dashboard.recent_orders {
                    ctx.output.list_item(&format!(
                        "{}  {}  {}",
                        order.id,
                        order.total.display(),
                        status_badge(order.status)
                    ));
                }
            }
        }
        AccountCommand::Update { name, email, phone } => {
            account.update_profile(&name, &email, &phone)?;
            ctx.output.success(PROFILE_UPDATED);
        }
        AccountCommand::Password => {
            let current = Password::new().with_prompt("Current password").interact()?;
            let new = Password::new().with_prompt("New password").interact()?;
            let confirm = Password::new().with_prompt("Confirm new password").interact()?;
            account.change_password(&current, &new, &confirm)?;
            ctx.output.success(PASSWORD_CHANGED);
        }
        AccountCommand::Wishlist => {
            let wishlist = account.wishlist();
            if ctx.output.is_json() {
                ctx.output.json(&wishlist);
                return Ok(());
            }
            ctx.output.header("My Wishlist");
            if wishlist.is_empty() {
                ctx.output.info("Your wishlist is empty");
            }
            for item in &wishlist {
                ctx.output.list_item(&format!(
                    "[{}] {} - {}",
                    item.id,
                    item.name,
                    item.price.display_short()
                ));
            }
        }
        AccountCommand::Wish { id } => {
            let detail = storefront.product_detail(id).await.into_inner();
            let item = WishlistItem::from(&detail.card);
            if account.add_to_wishlist(item)? {
                ctx.output.success(&format!("Added {} to wishlist", detail.card.name));
            } else {
                ctx.output.info("Already in your wishlist");
            }
        }
        AccountCommand::Unwish { id } => {
            if account.remove_from_wishlist(id)? {
                ctx.output.success("Removed from wishlist");
            } else {
                ctx.output.info("Not in your wishlist");
            }
        }
        AccountCommand::Addresses => {
            let addresses = account.addresses();
            if ctx.output.is_json() {
                ctx.output.json(&addresses);
                return Ok(());
            }
            ctx.output.header("Saved Addresses");
            if addresses.is_empty() {
                ctx.output.info("No saved addresses");
            }
            for (index, address) in addresses.iter().enumerate() {
                ctx.output.list_item(&format!(
                    "{}. {}: {}, {} {}",
                    index + 1,
                    address.label,
                    address.address,
                    address.city,
                    address.postal_code
                ));
            }
        }
        AccountCommand::AddAddress {
            label,
            address,
            city,
            postal_code,
        } => {
            let count = account.add_address(SavedAddress {
                label,
                address,
                city,
                postal_code,
            })?;
            ctx.output
                .success(&format!("Address saved ({} on file)", count));
        }
        AccountCommand::DeleteAddress { number } => {
            let removed = account.delete_address(
                number
                    .checked_sub(1)
                    .ok_or_else(|| anyhow!("Address numbers start at 1"))?,
            )?;
            ctx.output.success(&format!("Deleted address {}", removed.label));
        }
    }
    Ok(())
}
