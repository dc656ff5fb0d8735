//! Mock checkout.

use std::time::Duration;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use nader_commerce::checkout::{
    self, active_provider, require_configured, CheckoutPricing, CustomerInfo, MockPaymentGateway,
};

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_cart()?;
    if store.cart().is_empty() {
        bail!("Your cart is empty. Add something with `nader cart add <id>` first.");
    }

    let mut customer = CustomerInfo::new(args.name, args.email);
    if let Some(address) = args.address {
        customer = customer.with_address(address);
    }
    if let Some(phone) = args.phone {
        customer = customer.with_phone(phone);
    }
    customer.validate()?;

    let settings = ctx.config.checkout.settings();
    let pricing = CheckoutPricing::for_cart(store.cart(), &settings);
    let active = active_provider();
    let provider = require_configured(active.id, &ctx.config.credentials(active.id))?;

    if !ctx.output.is_json() {
        ctx.output.header("Order Summary");
        ctx.output.cart(store.cart());
        ctx.output.kv("Subtotal", &pricing.subtotal.display());
        ctx.output.kv("Tax", &pricing.tax.display());
        let shipping = if pricing.free_shipping() {
            "Free".to_string()
        } else {
            pricing.shipping.display()
        };
        ctx.output.kv("Shipping", &shipping);
        ctx.output.kv("Grand total", &pricing.grand_total.display());
        ctx.output.kv("Payment", provider.name);
        ctx.output.info("");
    }

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Pay {}?", pricing.grand_total.display()))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Processing payment...");
    tokio::time::sleep(Duration::from_millis(ctx.config.checkout.processing_delay_ms)).await;

    let mut gateway =
        MockPaymentGateway::new().with_success_rate(ctx.config.checkout.mock_success_rate);
    let result = checkout::checkout(&mut store, customer, &mut gateway, &settings);
    spinner.finish_and_clear();

    let order = result?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success("Payment processed successfully");
    ctx.output.kv("Order", order.id.as_str());
    ctx.output.kv("Status", &status_badge(order.status.display_name()));
    ctx.output.kv("Payment", &status_badge(order.payment_status.as_str()));
    ctx.output.kv("Charged", &order.pricing.grand_total.display());
    if ctx.output.is_verbose() {
        ctx.output.kv("Transaction", order.transaction_id.as_str());
        ctx.output.kv("Placed at", &order.created_at.to_rfc3339());
    }
    Ok(())
}
