//! Pantry CLI - Command line storefront for PinoyPantry.
//!
//! Commands:
//! - `pantry featured` - Show the home page picks
//! - `pantry categories` - List categories
//! - `pantry category <slug>` - Browse one category
//! - `pantry search <query>` - Full search results
//! - `pantry suggest <keystrokes...>` - Replay typing through the suggestion dropdown
//! - `pantry shop` - Interactive cart and checkout session
//! - `pantry config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pantry_observability::{init_logging, LogFormat};

use commands::{
    CategoriesArgs, CategoryArgs, ConfigArgs, FeaturedArgs, SearchArgs, ShopArgs, SuggestArgs,
};

/// Pantry CLI - Browse and shop the PinoyPantry catalog
#[derive(Parser)]
#[command(name = "pantry")]
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
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show featured products
    Featured(FeaturedArgs),

    /// List product categories
    Categories(CategoriesArgs),

    /// Browse a category
    Category(CategoryArgs),

    /// Search the catalog
    Search(SearchArgs),

    /// Show the suggestions a sequence of keystrokes produces
    Suggest(SuggestArgs),

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let mut logging = ctx.config.logging.clone();
    if cli.verbose {
        logging = logging.verbose();
    }
    if cli.json {
        logging = logging.with_format(LogFormat::Json);
    }
    if let Err(e) = init_logging(&logging) {
        ctx.output.warn(&e.to_string());
    }

    // Execute command
    let result = match cli.command {
        Commands::Featured(args) => commands::browse::run_featured(args, &ctx).await,
        Commands::Categories(args) => commands::browse::run_categories(args, &ctx).await,
        Commands::Category(args) => commands::browse::run_category(args, &ctx).await,
        Commands::Search(args) => commands::browse::run_search(args, &ctx).await,
        Commands::Suggest(args) => commands::suggest::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
