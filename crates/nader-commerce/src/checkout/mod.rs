//! Checkout module.
//!
//! Pricing, the payment provider registry with its mock gateway, and the
//! in-memory order produced by a successful checkout.

mod flow;
mod order;
mod payment;
mod pricing;

pub use flow::checkout;
pub use order::{CustomerInfo, Order, OrderStatus};
pub use payment::{
    active_provider, is_configured, provider, require_configured, MockPaymentGateway,
    PaymentGateway, PaymentProvider, PaymentReceipt, PaymentStatus, DEFAULT_MOCK_SUCCESS_RATE,
    MOCK_PROVIDER_ID, PAYMENT_PROVIDERS,
};
pub use pricing::{CheckoutPricing, CheckoutSettings};
