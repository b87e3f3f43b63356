//! Table reservations.

use anyhow::Result;
use mickeys_commerce::forms::{format_long_date, TableReservation, RESERVATION_TIME_SLOTS};

use super::{submit_form, ReserveArgs};
use crate::context::Context;

/// Run the reserve command.
pub async fn run(args: ReserveArgs, ctx: &Context) -> Result<()> {
    let reservation = TableReservation {
        name: args.name,
        email: args.email,
        phone: args.phone,
        guests: args.guests,
        date: args.date,
        time: args.time,
        special_requests: args.requests,
    };

    ctx.output.header("Reservation");
    ctx.output.kv("Guests", &reservation.guests.to_string());
    if let Some(date) = reservation.date {
        ctx.output.kv("Date", &format_long_date(date));
    }
    if let Some(ref time) = reservation.time {
        ctx.output.kv("Time", time);
    }
    ctx.output.debug(&format!(
        "Available times: {}",
        RESERVATION_TIME_SLOTS.join(", ")
    ));

    submit_form(
        ctx,
        &reservation,
        args.dry_run,
        "Reservation confirmed! We've sent a confirmation email with your reservation details.",
    )
    .await
}
