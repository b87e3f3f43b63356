//! Session cart commands.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use mickeys_commerce::cart::{CartSessions, CartStore};
use mickeys_commerce::catalog::Menu;
use mickeys_commerce::{CommerceError, ItemId};

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CartCommand::Add { id, quantity } => add(id, quantity, ctx).await,
        CartCommand::Update { id, delta } => update(id, delta, ctx).await,
        CartCommand::Remove { id } => remove(id, ctx).await,
        CartCommand::Show { promo } => show(promo.as_deref(), ctx).await,
        CartCommand::Clear { yes } => clear(yes, ctx).await,
        CartCommand::End { yes } => end(yes, ctx).await,
    }
}

async fn add(id: u32, quantity: u32, ctx: &Context) -> Result<()> {
    let menu = Menu::standard();
    let item_id = ItemId::from(id);
    let item = menu
        .find(&item_id)
        .ok_or_else(|| CommerceError::ItemNotFound(item_id.to_string()))?;

    let (sessions, session) = ctx.cart_sessions()?;
    let mut cart = sessions.load(&session)?;

    cart.add_item(item.to_cart_item());
    if quantity > 1 {
        cart.update_quantity(&item_id, i64::from(quantity) - 1);
    }
    sessions.save(&session, &cart)?;

    ctx.output.success(&format!("Added {} to cart", item.name));
    print_cart(&cart, None, ctx);
    Ok(())
}

async fn update(id: u32, delta: i64, ctx: &Context) -> Result<()> {
    let item_id = ItemId::from(id);
    let (sessions, session) = ctx.cart_sessions()?;
    let mut cart = sessions.load(&session)?;

    if cart.get_line(&item_id).is_none() {
        ctx.output.warn(&format!("Item {} is not in the cart", item_id));
    }
    cart.update_quantity(&item_id, delta);
    sessions.save(&session, &cart)?;

    print_cart(&cart, None, ctx);
    Ok(())
}

async fn remove(id: u32, ctx: &Context) -> Result<()> {
    let item_id = ItemId::from(id);
    let (sessions, session) = ctx.cart_sessions()?;
    let mut cart = sessions.load(&session)?;

    if cart.remove(&item_id) {
        sessions.save(&session, &cart)?;
        ctx.output.success(&format!("Removed item {}", item_id));
    } else {
        ctx.output.warn(&format!("Item {} is not in the cart", item_id));
    }

    print_cart(&cart, None, ctx);
    Ok(())
}

async fn show(promo: Option<&str>, ctx: &Context) -> Result<()> {
    let (sessions, session) = ctx.cart_sessions()?;
    let cart = sessions.load(&session)?;

    if let Some(code) = promo {
        if !cart.validate_promo(code).valid {
            ctx.output.warn("Invalid promo code");
        }
    }

    print_cart(&cart, promo, ctx);
    Ok(())
}

async fn clear(yes: bool, ctx: &Context) -> Result<()> {
    let (sessions, session) = ctx.cart_sessions()?;
    let mut cart = sessions.load(&session)?;

    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    if !yes && !confirm(&format!("Remove all {} items from the cart?", cart.item_count()))? {
        ctx.output.info("Cancelled");
        return Ok(());
    }

    cart.clear();
    sessions.save(&session, &cart)?;
    ctx.output.success("Cart cleared");
    Ok(())
}

async fn end(yes: bool, ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let session = ctx.session_id(&cache)?;

    if !yes && !confirm("End this session and discard its cart?")? {
        ctx.output.info("Cancelled");
        return Ok(());
    }

    CartSessions::new(cache.clone(), ctx.engine()?).end(&session)?;
    ctx.forget_session(&cache)?;

    ctx.output.success(&format!("Session {} ended", session));
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

/// Print the cart the way the cart page lays it out.
fn print_cart(cart: &CartStore, promo: Option<&str>, ctx: &Context) {
    let pricing = cart.pricing(promo);

    if ctx.output.is_json() {
        ctx.output.json(&pricing);
        return;
    }

    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    ctx.output.header(&format!("Cart ({} items)", pricing.item_count()));
    ctx.output.cart_summary(&pricing);
}
