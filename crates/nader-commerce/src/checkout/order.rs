//! Order types.

use crate::cart::{Cart, CartItem};
use crate::checkout::{CheckoutPricing, PaymentReceipt, PaymentStatus};
use crate::error::CommerceError;
use crate::ids::{OrderId, TransactionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Paid and being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Who the order is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CustomerInfo {
    /// Customer with just a name and email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: None,
            phone: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Require a name and a plausible email.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::InvalidCustomer("name is required".to_string()));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(CommerceError::InvalidCustomer(format!(
                "invalid email address: {}",
                email
            ))),
        }
    }
}

/// A placed order. Lives in memory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Items as they were in the cart at checkout.
    pub items: Vec<CartItem>,
    /// Price breakdown charged.
    pub pricing: CheckoutPricing,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    /// Gateway transaction backing the payment.
    pub transaction_id: TransactionId,
    pub customer: CustomerInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build the order for a paid cart.
    pub fn place(
        customer: CustomerInfo,
        cart: &Cart,
        pricing: CheckoutPricing,
        receipt: PaymentReceipt,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: OrderId::generate(),
            items: cart.items().to_vec(),
            pricing,
            status: OrderStatus::Processing,
            payment_status: receipt.status,
            transaction_id: receipt.transaction_id,
            customer,
            created_at: now,
            updated_at: now,
        }
    }

    /// Total units ordered.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{reduce, CartAction};
    use crate::catalog::{Category, Product};
    use crate::checkout::CheckoutSettings;
    use crate::money::Money;

    #[test]
    fn test_customer_validation() {
        assert!(CustomerInfo::new("Ada", "ada@example.com").validate().is_ok());
        assert!(CustomerInfo::new(" ", "ada@example.com").validate().is_err());
        assert!(CustomerInfo::new("Ada", "ada").validate().is_err());
        assert!(CustomerInfo::new("Ada", "@example.com").validate().is_err());
        assert!(CustomerInfo::new("Ada", "ada@localhost").validate().is_err());
    }

    #[test]
    fn test_place_order() {
        let mug = Product::new("black-mug-1", "Black Mug", Money::usd(15), Category::Mugs);
        let cart = reduce(&Cart::new(), CartAction::Add { product: mug, quantity: 2 });
        let pricing = CheckoutPricing::for_cart(&cart, &CheckoutSettings::default());
        let receipt = PaymentReceipt {
            transaction_id: TransactionId::new("mock_1_abc"),
            provider: "mock".to_string(),
            amount: pricing.grand_total,
            status: PaymentStatus::Completed,
            message: String::new(),
        };

        let order = Order::place(
            CustomerInfo::new("Ada", "ada@example.com").with_phone("555-0100"),
            &cart,
            pricing,
            receipt,
        );

        assert!(order.id.as_str().starts_with("ord_"));
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.payment_status, PaymentStatus::Completed);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.items, cart.items());
        assert_eq!(order.transaction_id.as_str(), "mock_1_abc");
        assert_eq!(order.customer.phone.as_deref(), Some("555-0100"));
    }
}
