//! Promo code lookup.

use anyhow::Result;

use super::PromoArgs;
use crate::context::Context;

/// Run the promo command.
pub async fn run(args: PromoArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.engine()?;
    let validation = engine.validate_promo(&args.code);

    if ctx.output.is_json() {
        ctx.output.json(&validation);
        return Ok(());
    }

    if validation.valid {
        ctx.output.success(&format!(
            "Promo code applied: {}% off",
            validation.discount_percent
        ));
    } else {
        ctx.output.warn("Invalid promo code");
    }

    Ok(())
}
