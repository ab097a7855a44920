//! Shopfront CLI - browse and shop the Polashtoli store from a terminal.
//!
//! Commands:
//! - `shopfront products` - Browse the listing with filters
//! - `shopfront featured` - Featured and recommended products
//! - `shopfront cart` - Manage the cart and coupons
//! - `shopfront checkout` - Place an order for the cart
//! - `shopfront orders` - Order history
//! - `shopfront login` / `register` / `logout` / `whoami` - Accounts
//! - `shopfront chat` - Talk to the shop assistant
//! - `shopfront dashboard` - Store figures for staff
//! - `shopfront inventory` - Manage the product table
//! - `shopfront config` - Manage configuration

mod commands;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AccountArgs, CartArgs, ChatArgs, CheckoutArgs, ConfigArgs, ContactArgs, DashboardArgs,
    GuardArgs, InventoryArgs, LoginArgs, OrdersArgs, PrefsArgs, ProductArgs, ProductsArgs,
    RegisterArgs, SearchArgs, SubscribeArgs,
};

/// Shopfront - the Polashtoli store in your terminal
#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Profile file holding the cart, session and orders
    #[arg(short, long, global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product listing
    Products(ProductsArgs),

    /// Show featured and recommended products
    Featured,

    /// Show one product with its reviews
    Product(ProductArgs),

    /// Search products by name
    Search(SearchArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Place an order for the cart
    Checkout(CheckoutArgs),

    /// Show and cancel orders
    Orders(OrdersArgs),

    /// Log in
    Login(LoginArgs),

    /// Create an account
    Register(RegisterArgs),

    /// Log out
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Check whether a page may be opened
    Guard(GuardArgs),

    /// Profile, wishlist and addresses
    Account(AccountArgs),

    /// Talk to the shop assistant
    Chat(ChatArgs),

    /// Send the contact form
    Contact(ContactArgs),

    /// Subscribe to the newsletter
    Subscribe(SubscribeArgs),

    /// Language and theme
    Prefs(PrefsArgs),

    /// Store figures for staff
    Dashboard(DashboardArgs),

    /// Manage the product table
    Inventory(InventoryArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "shopfront_core=debug,shopfront_data=debug,shopfront_auth=debug,shopfront_messaging=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), cli.profile.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::catalog::products(args, &ctx).await,
        Commands::Featured => commands::catalog::featured(&ctx).await,
        Commands::Product(args) => commands::catalog::product(args, &ctx).await,
        Commands::Search(args) => commands::catalog::search(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
        Commands::Login(args) => commands::account::login(args, &ctx).await,
        Commands::Register(args) => commands::account::register(args, &ctx).await,
        Commands::Logout => commands::account::logout(&ctx).await,
        Commands::Whoami => commands::account::whoami(&ctx).await,
        Commands::Guard(args) => commands::account::guard(args, &ctx).await,
        Commands::Account(args) => commands::account::run(args, &ctx).await,
        Commands::Chat(args) => commands::chat::run(args, &ctx).await,
        Commands::Contact(args) => commands::contact::contact(args, &ctx).await,
        Commands::Subscribe(args) => commands::contact::subscribe(args, &ctx).await,
        Commands::Prefs(args) => commands::prefs::run(args, &ctx).await,
        Commands::Dashboard(args) => commands::dashboard::run(args, &ctx).await,
        Commands::Inventory(args) => commands::inventory::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
