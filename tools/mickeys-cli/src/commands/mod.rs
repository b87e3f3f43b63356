//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod contact;
pub mod events;
pub mod gallery;
pub mod menu;
pub mod order;
pub mod promo;
pub mod reserve;
pub mod wholesale;

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use mickeys_commerce::forms::{BusinessType, ContactSubject, FormPayload, PartySize};
use mickeys_data::{SubmitError, Submission};

use crate::context::Context;

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Only show one category (starters, mains, desserts).
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add a menu item to the cart.
    Add {
        /// Menu item id.
        id: u32,

        /// How many to add.
        #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },
    /// Change a line's quantity by a signed amount.
    Update {
        /// Menu item id.
        id: u32,

        /// Amount to add; negative to take away.
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Remove a line.
    Remove {
        /// Menu item id.
        id: u32,
    },
    /// Show the cart and its totals.
    Show {
        /// Promo code to apply.
        #[arg(short, long)]
        promo: Option<String>,
    },
    /// Remove every line.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// End the session and discard its cart.
    End {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the promo command.
#[derive(Args)]
pub struct PromoArgs {
    /// Code as the customer typed it.
    pub code: String,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Deliver instead of picking up.
    #[arg(long)]
    pub delivery: bool,

    /// Street address (delivery).
    #[arg(long)]
    pub street: Option<String>,

    /// Apartment or suite (delivery).
    #[arg(long)]
    pub apt: Option<String>,

    /// City (delivery).
    #[arg(long)]
    pub city: Option<String>,

    /// State or province (delivery).
    #[arg(long)]
    pub state: Option<String>,

    /// ZIP or postal code (delivery).
    #[arg(long)]
    pub zip: Option<String>,

    /// Date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Time slot, e.g. "11:30 AM".
    #[arg(long)]
    pub time: Option<String>,

    /// Special instructions.
    #[arg(long, default_value = "")]
    pub instructions: String,

    /// Promo code for the cart summary.
    #[arg(long)]
    pub promo: Option<String>,

    /// Validate and print the request URL without sending.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the wholesale command.
#[derive(Args)]
pub struct WholesaleArgs {
    #[command(subcommand)]
    pub command: WholesaleCommand,
}

#[derive(Subcommand)]
pub enum WholesaleCommand {
    /// List the truckload supply list.
    List {
        /// Only show one category (meat, seafood, produce, grains, essentials).
        #[arg(long)]
        category: Option<String>,
    },
    /// Send a wholesale inquiry.
    Inquire(InquireArgs),
}

#[derive(Args)]
pub struct InquireArgs {
    /// Business name.
    #[arg(long, default_value = "")]
    pub business_name: String,

    /// Contact person.
    #[arg(long, default_value = "")]
    pub contact_name: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// restaurant, hotel, catering, retail or other.
    #[arg(long, value_parser = parse_business_type, default_value = "restaurant")]
    pub business_type: BusinessType,

    /// Additional notes.
    #[arg(long, default_value = "")]
    pub message: String,

    /// Item and quantity as NAME=QTY. Repeatable.
    #[arg(short, long = "item", value_parser = parse_item_quantity)]
    pub items: Vec<(String, u32)>,

    /// Validate and print the request URL without sending.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the events command.
#[derive(Args)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub command: Option<EventsCommand>,

    /// Show events on this date (default: today).
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Show every scheduled event.
    #[arg(short, long, conflicts_with = "date")]
    pub all: bool,
}

#[derive(Subcommand)]
pub enum EventsCommand {
    /// Book seats for an event.
    Book(BookArgs),
}

#[derive(Args)]
pub struct BookArgs {
    /// Event id.
    pub event_id: u32,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// Number of guests.
    #[arg(short, long, default_value = "1")]
    pub guests: u32,

    /// Special requests.
    #[arg(long, default_value = "")]
    pub requests: String,

    /// Validate and print the request URL without sending.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the reserve command.
#[derive(Args)]
pub struct ReserveArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// Party size, 1 to 8 or "9+".
    #[arg(short, long, value_parser = parse_party_size, default_value = "2")]
    pub guests: PartySize,

    /// Date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Seating, e.g. "7:30 PM".
    #[arg(long)]
    pub time: Option<String>,

    /// Special requests.
    #[arg(long, default_value = "")]
    pub requests: String,

    /// Validate and print the request URL without sending.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    /// reservation, private-event, feedback or other.
    #[arg(long, value_parser = parse_subject, default_value = "other")]
    pub subject: ContactSubject,

    #[arg(short, long, default_value = "")]
    pub message: String,

    /// Validate and print the request URL without sending.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the gallery command.
#[derive(Args)]
pub struct GalleryArgs {
    /// Only show one category.
    #[arg(long)]
    pub category: Option<String>,
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
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Send a form and report the outcome.
pub(crate) async fn submit_form(
    ctx: &Context,
    payload: &(dyn FormPayload + Sync),
    dry_run: bool,
    accepted: &str,
) -> Result<()> {
    let submitter = ctx.submitter(dry_run)?;

    let spinner = ctx.output.spinner("Submitting...");
    let result = submitter.submit(payload).await;
    spinner.finish_and_clear();

    let submission = match result {
        Ok(submission) => submission,
        Err(SubmitError::Invalid(e)) => return Err(e.into()),
        Err(e) => {
            return Err(e).context("Failed to submit. Please try again");
        }
    };

    match submission {
        Submission::Accepted => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "action": payload.action(),
                    "success": true,
                }));
            } else {
                ctx.output.success(accepted);
            }
        }
        Submission::DryRun { url } => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "action": payload.action(),
                    "dry_run": true,
                    "url": url,
                }));
            } else {
                ctx.output.info("Dry run; nothing was sent");
                ctx.output.kv("url", &url);
            }
        }
    }

    Ok(())
}

fn parse_business_type(s: &str) -> Result<BusinessType, String> {
    BusinessType::parse(s).ok_or_else(|| {
        let known: Vec<&str> = BusinessType::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown business type '{}' (expected one of: {})", s, known.join(", "))
    })
}

fn parse_subject(s: &str) -> Result<ContactSubject, String> {
    ContactSubject::parse(s).ok_or_else(|| {
        let known: Vec<&str> = ContactSubject::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown subject '{}' (expected one of: {})", s, known.join(", "))
    })
}

fn parse_party_size(s: &str) -> Result<PartySize, String> {
    PartySize::parse(s).map_err(|e| e.to_string())
}

/// Parse `NAME=QTY`. The name may itself contain spaces.
fn parse_item_quantity(s: &str) -> Result<(String, u32), String> {
    let (name, qty) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=QTY, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing item name in '{}'", s));
    }
    let qty = qty
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity in '{}': {}", s, e))?;
    Ok((name.to_string(), qty))
}
