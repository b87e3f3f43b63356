//! Menu listing.

use anyhow::{bail, Result};
use mickeys_commerce::catalog::{Menu, MenuCategory, MenuItem};

use super::MenuArgs;
use crate::context::Context;

/// Run the menu command.
pub async fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let menu = Menu::standard();
    let currency = ctx.engine()?.currency();

    let categories: Vec<MenuCategory> = match args.category {
        Some(ref name) => match MenuCategory::parse(name) {
            Some(category) => vec![category],
            None => bail!(
                "Unknown category: {}. Available: starters, mains, desserts",
                name
            ),
        },
        None => MenuCategory::ALL.to_vec(),
    };

    if ctx.output.is_json() {
        let items: Vec<&MenuItem> = menu
            .items()
            .iter()
            .filter(|item| categories.contains(&item.category))
            .collect();
        ctx.output.json(&items);
        return Ok(());
    }

    for category in categories {
        ctx.output.header(category.display_name());
        for item in menu.in_category(category) {
            ctx.output.table_row(
                &[
                    item.id.as_str(),
                    &item.name,
                    &item.price_in(currency).display(),
                ],
                &[4, 28, 8],
            );
            ctx.output.debug(&item.description);
        }
    }

    ctx.output.info("");
    ctx.output.info("Add a dish with `mickeys cart add <id>`");

    Ok(())
}
