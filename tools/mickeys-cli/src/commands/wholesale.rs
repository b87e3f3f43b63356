//! Truckload supply list and wholesale inquiries.

use anyhow::{bail, Result};
use mickeys_commerce::catalog::{
    WholesaleCatalog, WholesaleCategory, WholesaleItem, WholesaleSelection,
};
use mickeys_commerce::forms::WholesaleInquiry;
use mickeys_commerce::Money;
use rust_decimal::Decimal;

use super::{submit_form, InquireArgs, WholesaleArgs, WholesaleCommand};
use crate::context::Context;

/// Run the wholesale command.
pub async fn run(args: WholesaleArgs, ctx: &Context) -> Result<()> {
    match args.command {
        WholesaleCommand::List { category } => list(category.as_deref(), ctx).await,
        WholesaleCommand::Inquire(args) => inquire(args, ctx).await,
    }
}

async fn list(category: Option<&str>, ctx: &Context) -> Result<()> {
    let catalog = WholesaleCatalog::standard();
    let currency = ctx.engine()?.currency();

    let items: Vec<&WholesaleItem> = match category {
        Some(name) => match WholesaleCategory::parse(name) {
            Some(category) => catalog.in_category(category).collect(),
            None => bail!(
                "Unknown category: {}. Available: meat, seafood, produce, grains, essentials",
                name
            ),
        },
        None => catalog.items().iter().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&items);
        return Ok(());
    }

    ctx.output.header("Truckload supply list");
    const WIDTHS: [usize; 4] = [22, 10, 12, 14];
    ctx.output.table_row(&["Item", "Category", "Price", "Minimum"], &WIDTHS);
    for item in items {
        ctx.output.table_row(
            &[
                &item.name,
                item.category.as_str(),
                &format!("{}/{}", Money::new(item.price, currency).display(), item.unit),
                &format!("{} {}", item.min_order, item.unit),
            ],
            &WIDTHS,
        );
    }

    Ok(())
}

async fn inquire(args: InquireArgs, ctx: &Context) -> Result<()> {
    let catalog = WholesaleCatalog::standard();
    let inquiry = build_inquiry(&args, &catalog, ctx);
    let currency = ctx.engine()?.currency();

    if !ctx.output.is_json() && !inquiry.items.is_empty() {
        ctx.output.header("Selected items");
        for line in &inquiry.items {
            ctx.output.list_item(&format!(
                "{} x {} = {}",
                line.name,
                line.quantity,
                Money::new(line.total, currency).display()
            ));
        }
        let total: Decimal = inquiry.items.iter().map(|l| l.total).sum();
        ctx.output.kv("Total", &Money::new(total, currency).display());
    }

    for warning in inquiry.warnings() {
        ctx.output.warn(&warning.to_string());
    }

    submit_form(
        ctx,
        &inquiry,
        args.dry_run,
        "Thank you! We'll contact you about your truckload order shortly.",
    )
    .await
}

fn build_inquiry(
    args: &InquireArgs,
    catalog: &WholesaleCatalog,
    ctx: &Context,
) -> WholesaleInquiry {
    let mut selection = WholesaleSelection::new(catalog);
    for (name, quantity) in &args.items {
        if !selection.set_quantity(name, *quantity) {
            ctx.output.warn(&format!("Unknown item ignored: {}", name));
        }
    }

    let mut inquiry = WholesaleInquiry::default();
    inquiry.business_name = args.business_name.clone();
    inquiry.contact_name = args.contact_name.clone();
    inquiry.phone = args.phone.clone();
    inquiry.email = args.email.clone();
    inquiry.business_type = args.business_type;
    inquiry.message = args.message.clone();

    inquiry.with_selection(&selection)
}
