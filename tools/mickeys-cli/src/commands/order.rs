//! Pickup and delivery orders.

use anyhow::Result;
use mickeys_commerce::forms::{
    format_long_date, DeliveryAddress, Fulfillment, OrderRequest, ORDER_TIME_SLOTS,
};

use super::{submit_form, OrderArgs};
use crate::context::Context;

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let order = build_order(&args);

    let (sessions, session) = ctx.cart_sessions()?;
    let cart = sessions.load(&session)?;
    if cart.is_empty() {
        ctx.output.warn("Your cart is empty");
    } else if !ctx.output.is_json() {
        ctx.output.header("Order summary");
        ctx.output.cart_summary(&cart.pricing(args.promo.as_deref()));
    }

    if !ctx.output.is_json() {
        match &order.fulfillment {
            Fulfillment::Delivery(address) => {
                ctx.output.header("Delivery details");
                ctx.output.kv("Address", &address.one_line());
            }
            Fulfillment::Pickup => ctx.output.header("Pickup details"),
        }
        if let Some(date) = order.date {
            ctx.output.kv("Date", &format_long_date(date));
        }
        if let Some(ref time) = order.time {
            ctx.output.kv("Time", time);
        }
        ctx.output.debug(&format!("Available times: {}", ORDER_TIME_SLOTS.join(", ")));
    }

    submit_form(
        ctx,
        &order,
        args.dry_run,
        "Order submitted. We'll have it ready for you.",
    )
    .await
}

fn build_order(args: &OrderArgs) -> OrderRequest {
    let mut order = if args.delivery {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        OrderRequest::delivery(
            DeliveryAddress::new(
                field(&args.street),
                field(&args.city),
                field(&args.state),
                field(&args.zip),
            )
            .with_apt(field(&args.apt)),
        )
    } else {
        OrderRequest::pickup()
    };

    order.date = args.date;
    order.time = args.time.clone();
    order.with_instructions(args.instructions.clone())
}
