//! CLI command implementations.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod chat;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod prefs;

use clap::{Args, Subcommand};
use shopfront_commerce::catalog::StockStatus;
use shopfront_commerce::checkout::PaymentMethod;
use shopfront_commerce::ids::ProductId;
use shopfront_commerce::search::{PriceRange, SortOption};
use shopfront_core::admin::SalesPeriod;
use shopfront_core::{Language, Theme};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Search term; takes precedence over the category.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category to list.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Price range, e.g. "500-1000" or "5000-".
    #[arg(long)]
    pub price: Option<PriceRange>,

    /// Minimum star rating.
    #[arg(long)]
    pub rating: Option<u8>,

    /// Brand to keep (repeatable).
    #[arg(short, long)]
    pub brand: Vec<String>,

    /// Sort order: featured, price-low, price-high, newest, rating.
    #[arg(long, default_value = "featured")]
    pub sort: SortOption,

    /// Page number.
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Print the page markup instead of a table.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: ProductId,

    /// Also list related products.
    #[arg(long)]
    pub related: bool,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text (at least two characters).
    pub query: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart and its summary.
    List {
        /// Print the cart markup instead of a table.
        #[arg(long)]
        html: bool,
    },
    /// Add a product.
    Add {
        /// Product id.
        id: ProductId,
        /// Units to add.
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Add one unit to a line.
    Inc {
        /// Line number as listed.
        line: usize,
    },
    /// Remove one unit from a line.
    Dec {
        /// Line number as listed.
        line: usize,
    },
    /// Remove a line.
    Remove {
        /// Line number as listed.
        line: usize,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Apply a coupon code and show the new total.
    Coupon {
        /// Coupon code.
        code: String,
    },
}

/// Arguments for the checkout command.
///
/// Missing shipping fields are asked for interactively.
#[derive(Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Street address.
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub division: Option<String>,
    #[arg(long, default_value = "")]
    pub postal_code: String,

    /// Payment method: cod, bkash, nagad, card.
    #[arg(long, default_value = "cod")]
    pub payment: PaymentMethod,

    /// Notes for the courier.
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Coupon code to apply first.
    #[arg(long)]
    pub coupon: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: Option<OrdersCommand>,

    /// Only orders with this status.
    #[arg(short, long)]
    pub status: Option<String>,

    /// Only orders from the last N days.
    #[arg(short, long)]
    pub days: Option<i64>,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List orders.
    List,
    /// Show one order.
    Show {
        /// Order id.
        id: String,
    },
    /// Cancel a pending order.
    Cancel {
        /// Order id.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address.
    pub email: String,

    /// Password; asked for when omitted.
    #[arg(long)]
    pub password: Option<String>,

    /// Keep the session.
    #[arg(long)]
    pub remember: bool,
}

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Full name.
    #[arg(long)]
    pub name: String,

    /// Email address.
    #[arg(long)]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// Password; asked for twice when omitted.
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the guard command.
#[derive(Args)]
pub struct GuardArgs {
    /// Page path, e.g. "/admin/dashboard.html".
    pub path: String,
}

/// Arguments for the account command.
#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: Option<AccountCommand>,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Show the profile dashboard.
    Show,
    /// Update name, email and phone.
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Change the password.
    Password,
    /// Show the wishlist.
    Wishlist,
    /// Add a product to the wishlist.
    Wish {
        /// Product id.
        id: ProductId,
    },
    /// Remove a product from the wishlist.
    Unwish {
        /// Product id.
        id: ProductId,
    },
    /// Show saved addresses.
    Addresses,
    /// Save an address.
    AddAddress {
        /// Short name, e.g. "Home".
        #[arg(long)]
        label: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long, default_value = "")]
        postal_code: String,
    },
    /// Delete a saved address.
    DeleteAddress {
        /// Address number as listed.
        number: usize,
    },
}

/// Arguments for the chat command.
#[derive(Args)]
pub struct ChatArgs {
    /// Message to send; starts an interactive session when omitted.
    pub message: Option<String>,

    /// Also show the WhatsApp and Messenger links.
    #[arg(long)]
    pub links: bool,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub subject: String,
    /// Message text.
    pub message: String,
}

/// Arguments for the subscribe command.
#[derive(Args)]
pub struct SubscribeArgs {
    /// Email address.
    pub email: String,
}

/// Arguments for the prefs command.
#[derive(Args)]
pub struct PrefsArgs {
    /// Switch language: en or bn.
    #[arg(long)]
    pub language: Option<Language>,

    /// Switch theme: light or dark.
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Flip between light and dark.
    #[arg(long, conflicts_with = "theme")]
    pub toggle_theme: bool,
}

/// Arguments for the dashboard command.
#[derive(Args)]
pub struct DashboardArgs {
    #[command(subcommand)]
    pub command: Option<DashboardCommand>,
}

#[derive(Subcommand)]
pub enum DashboardCommand {
    /// Headline figures.
    Stats,
    /// Sales chart data for a period.
    Sales {
        /// daily, weekly, monthly or yearly.
        #[arg(default_value = "monthly")]
        period: SalesPeriod,
    },
    /// Revenue by category.
    Revenue,
    /// Recent orders.
    Orders {
        /// Print the table markup.
        #[arg(long)]
        html: bool,
    },
    /// Order counts by status.
    OrderStats,
    /// Customers, optionally filtered by name or email.
    Customers {
        /// Search text.
        search: Option<String>,
    },
    /// Coupons currently usable.
    Coupons,
    /// Write the report as CSV.
    Export {
        /// Output file path.
        #[arg(short, long)]
        output: std::path::PathBuf,
    },
}

/// Arguments for the inventory command.
#[derive(Args)]
pub struct InventoryArgs {
    #[command(subcommand)]
    pub command: Option<InventoryCommand>,
}

/// Fields of the product form. Unset fields keep their value on edit.
#[derive(Args)]
pub struct ProductFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// List price in taka.
    #[arg(long)]
    pub price: Option<f64>,
    /// Discount percentage (0-100).
    #[arg(long)]
    pub discount: Option<u32>,
    #[arg(long)]
    pub stock: Option<i64>,
    #[arg(long)]
    pub sku: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Comma separated tags.
    #[arg(long)]
    pub tags: Option<String>,
    /// Feature on the home page.
    #[arg(long)]
    pub featured: Option<bool>,
    /// Image URL (repeatable); replaces the current images.
    #[arg(long)]
    pub image: Vec<String>,
}

#[derive(Subcommand)]
pub enum InventoryCommand {
    /// List the product table.
    List {
        #[arg(short, long)]
        category: Option<String>,
        /// in-stock, low-stock or out-of-stock.
        #[arg(long)]
        stock: Option<StockStatus>,
        /// Name, category or SKU.
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Stock counts.
    Stats,
    /// Add a product.
    Add(ProductFields),
    /// Edit a product.
    Edit {
        /// Product id.
        id: ProductId,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Copy a product under a new id.
    Duplicate {
        /// Product id.
        id: ProductId,
    },
    /// Delete a product.
    Delete {
        /// Product id.
        id: ProductId,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Write the product table as CSV.
    Export {
        /// Output file path.
        #[arg(short, long, default_value = "products-export.csv")]
        output: std::path::PathBuf,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Show which config file is in use.
    Path,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
