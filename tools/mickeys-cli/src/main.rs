//! Mickey's CLI - browse the menu, keep a cart, and send the site's forms.
//!
//! Commands:
//! - `mickeys menu` - List dishes
//! - `mickeys cart` - Add, update, remove and price cart lines
//! - `mickeys promo` - Check a promo code
//! - `mickeys order` - Submit a pickup or delivery order
//! - `mickeys wholesale` - Truckload supply list and inquiries
//! - `mickeys events` - Event calendar and bookings
//! - `mickeys reserve` - Reserve a table
//! - `mickeys contact` - Send a message
//! - `mickeys gallery` - Fetch the photo gallery
//! - `mickeys config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CartArgs, ConfigArgs, ContactArgs, EventsArgs, GalleryArgs, MenuArgs, OrderArgs, PromoArgs,
    ReserveArgs, WholesaleArgs,
};

/// Mickey's CLI - menu, cart and forms for Mickey's restaurant
#[derive(Parser)]
#[command(name = "mickeys")]
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
    /// List the menu
    Menu(MenuArgs),

    /// Manage the session cart
    Cart(CartArgs),

    /// Check a promo code
    Promo(PromoArgs),

    /// Submit a pickup or delivery order
    Order(OrderArgs),

    /// Truckload supply list and wholesale inquiries
    Wholesale(WholesaleArgs),

    /// Event calendar and bookings
    Events(EventsArgs),

    /// Reserve a table
    Reserve(ReserveArgs),

    /// Send a message to the restaurant
    Contact(ContactArgs),

    /// Fetch the photo gallery
    Gallery(GalleryArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Menu(args) => commands::menu::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Promo(args) => commands::promo::run(args, &ctx).await,
        Commands::Order(args) => commands::order::run(args, &ctx).await,
        Commands::Wholesale(args) => commands::wholesale::run(args, &ctx).await,
        Commands::Events(args) => commands::events::run(args, &ctx).await,
        Commands::Reserve(args) => commands::reserve::run(args, &ctx).await,
        Commands::Contact(args) => commands::contact::run(args, &ctx).await,
        Commands::Gallery(args) => commands::gallery::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
