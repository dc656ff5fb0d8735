//! Checkout: price the cart, charge it, and empty it.

use crate::cart::CartStore;
use crate::checkout::{CheckoutPricing, CheckoutSettings, CustomerInfo, Order, PaymentGateway};
use crate::error::CommerceError;
use nader_cache::KeyValueStore;

/// Check out the store's cart.
///
/// The grand total is charged through `gateway`. On success the cart is
/// cleared through the store and the placed order returned. Any failure
/// leaves the cart exactly as it was.
pub fn checkout<S, G>(
    store: &mut CartStore<S>,
    customer: CustomerInfo,
    gateway: &mut G,
    settings: &CheckoutSettings,
) -> Result<Order, CommerceError>
where
    S: KeyValueStore,
    G: PaymentGateway + ?Sized,
{
    customer.validate()?;

    let cart = store.cart().clone();
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let pricing = CheckoutPricing::for_cart(&cart, settings);
    tracing::debug!(
        provider = gateway.provider_id(),
        subtotal = %pricing.subtotal,
        grand_total = %pricing.grand_total,
        "charging cart"
    );

    let receipt = gateway.charge(pricing.grand_total)?;
    let order = Order::place(customer, &cart, pricing, receipt);
    store.clear_cart();

    tracing::info!(
        order_id = %order.id,
        transaction_id = %order.transaction_id,
        item_count = order.item_count(),
        "order placed"
    );
    Ok(order)
}
