use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::GatewayMode;
use crate::core::Result;
use crate::modules::cards::{CardBrand, CreditCard};
use crate::modules::responses::Response;

/// Payment gateway contract every adapter implements.
///
/// Adapters own their wire formats and transport; this trait fixes the call
/// surface and the normalized [`Response`] they must produce. The capability
/// methods replace per-gateway static metadata with ordinary polymorphism.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Reserve an amount on the card without capturing it.
    async fn authorize(
        &self,
        amount: Decimal,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<Response>;

    /// Authorize and capture in one step.
    async fn purchase(
        &self,
        amount: Decimal,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<Response>;

    /// Capture a previously authorized amount.
    async fn capture(
        &self,
        amount: Decimal,
        authorization: &str,
        options: &TransactionOptions,
    ) -> Result<Response>;

    /// Void a previous authorization.
    async fn void(&self, authorization: &str, options: &TransactionOptions) -> Result<Response>;

    /// Refund against a previously captured transaction.
    async fn credit(
        &self,
        amount: Decimal,
        authorization: &str,
        options: &TransactionOptions,
    ) -> Result<Response>;

    /// Set up a recurring charge against the card.
    async fn recurring(
        &self,
        amount: Decimal,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<Response>;

    // Capability metadata

    fn display_name(&self) -> &'static str;

    fn homepage_url(&self) -> &'static str;

    /// ISO 3166-1 alpha-2 codes of the countries the gateway operates in.
    fn supported_countries(&self) -> &'static [&'static str];

    fn supported_card_brands(&self) -> &'static [CardBrand];

    fn mode(&self) -> GatewayMode;

    fn supports_brand(&self, brand: CardBrand) -> bool {
        self.supported_card_brands().contains(&brand)
    }
}

/// Caller-supplied transaction context, shared by all gateway operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionOptions {
    pub order_id: Option<String>,
    pub description: Option<String>,
    pub customer_email: Option<String>,

    /// ISO 4217 code; adapters fall back to their account currency.
    pub currency: Option<String>,
}
