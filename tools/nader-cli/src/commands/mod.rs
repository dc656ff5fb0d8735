//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List products.
    List {
        /// Only this category.
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one product.
    Show {
        /// Product ID.
        id: String,
    },
    /// Search products by name, description or category.
    Search {
        /// Search text.
        query: String,

        /// Only this category.
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order (featured, price-asc, price-desc, name-asc, name-desc).
        #[arg(short, long, default_value = "featured")]
        sort: String,

        /// Only products in stock.
        #[arg(long)]
        in_stock: bool,

        /// Page number.
        #[arg(long, default_value = "1")]
        page: i64,

        /// Results per page.
        #[arg(long, default_value = "24")]
        per_page: i64,
    },
    /// List categories with product counts.
    Categories,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product.
    Add {
        /// Product ID.
        id: String,

        /// Quantity to add.
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Set a product's quantity; zero or less removes it.
    Update {
        /// Product ID.
        id: String,

        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Customer name.
    #[arg(long)]
    pub name: String,

    /// Customer email.
    #[arg(long)]
    pub email: String,

    /// Shipping address.
    #[arg(long)]
    pub address: Option<String>,

    /// Phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration and payment providers.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
