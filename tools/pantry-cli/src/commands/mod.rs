//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod shop;
pub mod suggest;

use clap::{Args, Subcommand};

/// Arguments for the featured command.
#[derive(Args)]
pub struct FeaturedArgs {}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {}

/// Arguments for the category command.
#[derive(Args)]
pub struct CategoryArgs {
    /// Category slug (`all-products` for everything).
    pub slug: String,

    /// Sort order: price-asc, price-desc, name-asc, name-desc, rating.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Lowest price to show.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest price to show.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Hide sold-out products.
    #[arg(long)]
    pub in_stock: bool,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text.
    pub query: String,

    /// Sort order: featured, price-asc, price-desc, name-asc, name-desc, rating.
    #[arg(short, long, default_value = "featured")]
    pub sort: String,
}

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Successive contents of the search box, e.g. `p pa pan panc`.
    #[arg(required = true)]
    pub keystrokes: Vec<String>,

    /// Pause between keystrokes in milliseconds.
    #[arg(long, default_value = "80")]
    pub pause_ms: u64,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default pantry.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// Store name used in the file header.
        #[arg(long, default_value = "PinoyPantry")]
        name: String,
    },
}
