//! Contact form.

use anyhow::Result;
use mickeys_commerce::forms::ContactMessage;

use super::{submit_form, ContactArgs};
use crate::context::Context;

/// Run the contact command.
pub async fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let message = ContactMessage {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone: args.phone.filter(|p| !p.trim().is_empty()),
        subject: args.subject,
        message: args.message,
    };

    submit_form(
        ctx,
        &message,
        args.dry_run,
        "Thank you for contacting us. We'll get back to you shortly.",
    )
    .await
}
