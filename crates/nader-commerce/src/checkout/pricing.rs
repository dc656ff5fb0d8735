//! Order pricing: subtotal, tax and shipping.

use crate::cart::Cart;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Knobs for pricing a cart at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSettings {
    /// Tax rate applied to the subtotal (0.08 = 8%).
    pub tax_rate: f64,
    /// Subtotal at or above which shipping is free.
    pub free_shipping_threshold: Money,
    /// Shipping for small orders.
    pub small_order_shipping: Money,
    /// Shipping for everything else below the threshold.
    pub standard_shipping: Money,
    /// Largest item count that still ships at the small-order rate.
    pub small_order_max_items: i64,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            tax_rate: 0.08,
            free_shipping_threshold: Money::usd(50),
            small_order_shipping: Money::usd(5),
            standard_shipping: Money::usd(10),
            small_order_max_items: 2,
        }
    }
}

impl CheckoutSettings {
    /// Shipping cost for a subtotal and item count.
    pub fn shipping_for(&self, subtotal: Money, item_count: i64) -> Money {
        if subtotal.amount_cents >= self.free_shipping_threshold.amount_cents {
            Money::zero(subtotal.currency)
        } else if item_count <= self.small_order_max_items {
            self.small_order_shipping
        } else {
            self.standard_shipping
        }
    }
}

/// Price breakdown for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPricing {
    pub subtotal: Money,
    pub tax: Money,
    pub shipping: Money,
    pub grand_total: Money,
}

impl CheckoutPricing {
    /// Price a cart.
    pub fn for_cart(cart: &Cart, settings: &CheckoutSettings) -> Self {
        let subtotal = cart.total();
        let tax = subtotal.multiply_decimal(settings.tax_rate);
        let shipping = settings.shipping_for(subtotal, cart.item_count());
        let grand_total = Money::sum([subtotal, tax, shipping].into_iter(), subtotal.currency);

        Self {
            subtotal,
            tax,
            shipping,
            grand_total,
        }
    }

    /// True when shipping is free.
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
