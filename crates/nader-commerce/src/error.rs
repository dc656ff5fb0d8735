//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart mutations never fail; these cover catalog lookups and checkout.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Unknown category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Customer details missing or malformed.
    #[error("Invalid customer details: {0}")]
    InvalidCustomer(String),

    /// Payment provider missing or lacking credentials.
    #[error("Payment provider not configured: {0}")]
    ProviderNotConfigured(String),

    /// Payment declined by the provider.
    #[error("Payment declined: {0}")]
    PaymentDeclined(String),
}
