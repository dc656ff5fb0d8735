//! Payment providers and the mock gateway.
//!
//! Only the mock gateway actually charges anything. The real providers are
//! listed so configuration can report what they'd need.

use crate::error::CommerceError;
use crate::ids::TransactionId;
use crate::money::Money;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A known payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentProvider {
    /// Stable identifier (`paypal`, `stripe`, ...).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Whether checkout may use this provider.
    pub enabled: bool,
    /// Credential keys that must be present and non-empty.
    pub required_credentials: &'static [&'static str],
}

/// Identifier of the mock provider.
pub const MOCK_PROVIDER_ID: &str = "mock";

/// Every provider the storefront knows about, in preference order.
pub const PAYMENT_PROVIDERS: &[PaymentProvider] = &[
    PaymentProvider {
        id: "paypal",
        name: "PayPal",
        enabled: false,
        required_credentials: &["client_id", "client_secret"],
    },
    PaymentProvider {
        id: "stripe",
        name: "Stripe",
        enabled: false,
        required_credentials: &["publishable_key", "secret_key"],
    },
    PaymentProvider {
        id: "square",
        name: "Square",
        enabled: false,
        required_credentials: &["application_id", "access_token"],
    },
    MOCK_PROVIDER,
];

const MOCK_PROVIDER: PaymentProvider = PaymentProvider {
    id: MOCK_PROVIDER_ID,
    name: "Mock Payment (Development)",
    enabled: true,
    required_credentials: &[],
};

/// Look up a provider by id.
pub fn provider(id: &str) -> Option<&'static PaymentProvider> {
    PAYMENT_PROVIDERS.iter().find(|p| p.id == id)
}

/// First enabled provider, or the mock provider if none is.
pub fn active_provider() -> &'static PaymentProvider {
    PAYMENT_PROVIDERS
        .iter()
        .find(|p| p.enabled)
        .unwrap_or(&MOCK_PROVIDER)
}

/// Whether `credentials` satisfy provider `id`. Unknown providers never are.
pub fn is_configured(id: &str, credentials: &HashMap<String, String>) -> bool {
    match provider(id) {
        Some(p) => p.required_credentials.iter().all(|key| {
            credentials
                .get(*key)
                .is_some_and(|value| !value.trim().is_empty())
        }),
        None => false,
    }
}

/// Look up a provider that checkout can actually use.
pub fn require_configured(
    id: &str,
    credentials: &HashMap<String, String>,
) -> Result<&'static PaymentProvider, CommerceError> {
    match provider(id) {
        Some(p) if p.enabled && is_configured(id, credentials) => Ok(p),
        Some(p) if !p.enabled => Err(CommerceError::ProviderNotConfigured(format!(
            "{} is disabled",
            p.name
        ))),
        Some(p) => Err(CommerceError::ProviderNotConfigured(format!(
            "{} needs {}",
            p.name,
            p.required_credentials.join(", ")
        ))),
        None => Err(CommerceError::ProviderNotConfigured(id.to_string())),
    }
}

/// Payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

/// Proof of a successful charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub transaction_id: TransactionId,
    pub provider: String,
    pub amount: Money,
    pub status: PaymentStatus,
    pub message: String,
}

/// Something that can charge money.
pub trait PaymentGateway {
    /// Id of the provider behind this gateway.
    fn provider_id(&self) -> &str;

    /// Charge `amount`. A decline is [`CommerceError::PaymentDeclined`].
    fn charge(&mut self, amount: Money) -> Result<PaymentReceipt, CommerceError>;
}

/// Default probability that a mock charge succeeds.
pub const DEFAULT_MOCK_SUCCESS_RATE: f64 = 0.9;

/// Gateway that approves charges at random.
#[derive(Debug)]
pub struct MockPaymentGateway<R = StdRng> {
    success_rate: f64,
    rng: R,
}

impl MockPaymentGateway<StdRng> {
    /// Gateway seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for MockPaymentGateway<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MockPaymentGateway<R> {
    /// Gateway drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            success_rate: DEFAULT_MOCK_SUCCESS_RATE,
            rng,
        }
    }

    /// Set the success probability, clamped to `[0, 1]`. NaN keeps the default.
    pub fn with_success_rate(mut self, rate: f64) -> Self {
        self.success_rate = if rate.is_nan() {
            DEFAULT_MOCK_SUCCESS_RATE
        } else {
            rate.clamp(0.0, 1.0)
        };
        self
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

impl<R: Rng> PaymentGateway for MockPaymentGateway<R> {
    fn provider_id(&self) -> &str {
        MOCK_PROVIDER_ID
    }

    fn charge(&mut self, amount: Money) -> Result<PaymentReceipt, CommerceError> {
        if !self.rng.gen_bool(self.success_rate) {
            tracing::warn!(amount = %amount, "mock payment declined");
            return Err(CommerceError::PaymentDeclined(
                "mock payment failed, please try again".to_string(),
            ));
        }

        let now_ms = chrono::Utc::now().timestamp_millis();
        let transaction_id = TransactionId::mock(now_ms, &mut self.rng);
        tracing::debug!(%transaction_id, amount = %amount, "mock payment approved");

        Ok(PaymentReceipt {
            transaction_id,
            provider: MOCK_PROVIDER_ID.to_string(),
            amount,
            status: PaymentStatus::Completed,
            message: "Payment processed successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_active_provider_is_mock() {
        assert_eq!(active_provider().id, MOCK_PROVIDER_ID);
        assert!(active_provider().enabled);
    }

    #[test]
    fn test_is_configured() {
        assert!(is_configured("mock", &HashMap::new()));
        assert!(!is_configured("stripe", &HashMap::new()));
        assert!(!is_configured("stripe", &creds(&[("publishable_key", "pk"), ("secret_key", " ")])));
        assert!(is_configured("stripe", &creds(&[("publishable_key", "pk"), ("secret_key", "sk")])));
        assert!(!is_configured("venmo", &creds(&[("secret_key", "sk")])));
    }

    #[test]
    fn test_require_configured() {
        assert_eq!(require_configured("mock", &HashMap::new()).unwrap().id, "mock");

        let creds = creds(&[("client_id", "id"), ("client_secret", "secret")]);
        let err = require_configured("paypal", &creds).unwrap_err();
        assert!(matches!(err, CommerceError::ProviderNotConfigured(msg) if msg.contains("disabled")));

        assert!(matches!(
            require_configured("venmo", &HashMap::new()),
            Err(CommerceError::ProviderNotConfigured(_))
        ));
    }

    #[test]
    fn test_mock_always_succeeds_at_rate_one() {
        let mut gateway = MockPaymentGateway::with_rng(StdRng::seed_from_u64(1)).with_success_rate(1.0);
        for _ in 0..20 {
            let receipt = gateway.charge(Money::usd(15)).unwrap();
            assert_eq!(receipt.status, PaymentStatus::Completed);
            assert_eq!(receipt.amount, Money::usd(15));
            assert!(receipt.transaction_id.as_str().starts_with("mock_"));
        }
    }

    #[test]
    fn test_mock_declines_at_rate_zero() {
        let mut gateway = MockPaymentGateway::with_rng(StdRng::seed_from_u64(1)).with_success_rate(0.0);
        let err = gateway.charge(Money::usd(15)).unwrap_err();
        assert!(matches!(err, CommerceError::PaymentDeclined(_)));
    }

    #[test]
    fn test_success_rate_is_clamped() {
        let gateway = MockPaymentGateway::with_rng(StdRng::seed_from_u64(1));
        assert_eq!(gateway.success_rate(), DEFAULT_MOCK_SUCCESS_RATE);

        let gateway = MockPaymentGateway::with_rng(StdRng::seed_from_u64(1));
        assert_eq!(gateway.with_success_rate(3.0).success_rate(), 1.0);

        let gateway = MockPaymentGateway::with_rng(StdRng::seed_from_u64(1));
        assert_eq!(gateway.with_success_rate(f64::NAN).success_rate(), DEFAULT_MOCK_SUCCESS_RATE);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let outcomes = |seed| {
            let mut gateway = MockPaymentGateway::with_rng(StdRng::seed_from_u64(seed));
            (0..50)
                .map(|_| gateway.charge(Money::usd(1)).is_ok())
                .collect::<Vec<_>>()
        };
        assert_eq!(outcomes(42), outcomes(42));
        let approved = outcomes(42).iter().filter(|ok| **ok).count();
        assert!(approved > 30);
    }
}
