//! Event calendar and bookings.

use anyhow::Result;
use chrono::Local;
use mickeys_commerce::catalog::{Event, EventCalendar};
use mickeys_commerce::forms::{format_long_date, EventBooking};
use mickeys_commerce::Money;

use super::{submit_form, BookArgs, EventsArgs, EventsCommand};
use crate::context::Context;

/// Run the events command.
pub async fn run(args: EventsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(EventsCommand::Book(book_args)) => book(book_args, ctx).await,
        None => list(&args, ctx).await,
    }
}

async fn list(args: &EventsArgs, ctx: &Context) -> Result<()> {
    let calendar = EventCalendar::standard();

    let (heading, events): (String, Vec<&Event>) = if args.all {
        ("Upcoming events".to_string(), calendar.all().iter().collect())
    } else {
        let date = args.date.unwrap_or_else(|| Local::now().date_naive());
        (
            format!("Events on {}", format_long_date(date)),
            calendar.on_date(date).collect(),
        )
    };

    if ctx.output.is_json() {
        ctx.output.json(&events);
        return Ok(());
    }

    ctx.output.header(&heading);
    if events.is_empty() {
        ctx.output.info("No events scheduled for this date");
        return Ok(());
    }

    let currency = ctx.engine()?.currency();
    for event in events {
        ctx.output.info("");
        ctx.output.info(&format!("[{}] {}", event.id, event.title));
        ctx.output.kv("When", &format!("{}, {}", format_long_date(event.date), event.time));
        ctx.output.kv(
            "Price",
            &format!("{} per person", Money::new(event.price_per_person, currency).display()),
        );
        ctx.output.kv("Kind", event.kind.as_str());
        ctx.output.kv("About", &event.description);
    }

    Ok(())
}

async fn book(args: BookArgs, ctx: &Context) -> Result<()> {
    let calendar = EventCalendar::standard();
    let mut booking = EventBooking::new(&calendar, args.event_id);
    booking.name = args.name;
    booking.email = args.email;
    booking.phone = args.phone;
    booking.guests = args.guests;
    booking.special_requests = args.requests;

    if let (Some(event), Some(total)) = (booking.event(), booking.total_price()) {
        let currency = ctx.engine()?.currency();
        ctx.output.header(&format!("Booking: {}", event.title));
        ctx.output.kv("When", &format!("{}, {}", format_long_date(event.date), event.time));
        ctx.output.kv("Guests", &booking.guests.to_string());
        ctx.output.kv("Total", &Money::new(total, currency).display());
    }

    submit_form(
        ctx,
        &booking,
        args.dry_run,
        "Reservation confirmed! We look forward to seeing you.",
    )
    .await
}
