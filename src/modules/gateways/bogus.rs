use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use super::gateway_trait::{Gateway, TransactionOptions};
use crate::config::GatewayMode;
use crate::core::{AppError, Result};
use crate::modules::cards::{CardBrand, CreditCard};
use crate::modules::responses::{AvsParams, Response, ResponseOptions};

/// Authorization every successful bogus transaction hands back.
pub const BOGUS_AUTHORIZATION: &str = "53433";

/// Test-only gateway wired to the sentinel card numbers: 1/success approves,
/// 2/failure declines, anything else is a gateway error. Lets a test suite
/// exercise the full authorize/capture/void/credit surface without any
/// network traffic.
pub struct BogusGateway {
    mode: GatewayMode,
}

impl BogusGateway {
    pub fn new(mode: GatewayMode) -> Result<Self> {
        if mode.is_live() {
            return Err(AppError::configuration(
                "Bogus gateway cannot be constructed in live mode",
            ));
        }
        Ok(Self { mode })
    }

    fn base_params(action: &str, amount: Option<Decimal>) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("action".to_string(), json!(action));
        if let Some(amount) = amount {
            params.insert("amount".to_string(), json!(amount.to_string()));
        }
        params
    }

    fn card_response(
        &self,
        action: &str,
        amount: Option<Decimal>,
        card: &CreditCard,
    ) -> Result<Response> {
        let params = Self::base_params(action, amount);

        match card.number.as_str() {
            "1" | "success" => {
                debug!(action, "bogus gateway approved");
                Ok(Response::new(
                    true,
                    "Bogus Gateway: Forced success",
                    params,
                    ResponseOptions {
                        test: true,
                        authorization: Some(BOGUS_AUTHORIZATION.to_string()),
                        fraud_review: Some(false),
                        avs_result: Some(AvsParams {
                            code: Some("Y".to_string()),
                        }),
                        cvv_result: Some("M".to_string()),
                    },
                ))
            }
            "2" | "failure" => {
                warn!(action, "bogus gateway declined");
                Ok(Response::new(
                    false,
                    "Bogus Gateway: Forced failure",
                    params,
                    ResponseOptions {
                        test: true,
                        avs_result: Some(AvsParams {
                            code: Some("N".to_string()),
                        }),
                        cvv_result: Some("N".to_string()),
                        ..Default::default()
                    },
                ))
            }
            _ => Err(AppError::gateway(
                "Bogus Gateway: Use card number 1 for success, 2 for failure and 3 for error",
            )),
        }
    }

    fn reference_response(
        &self,
        action: &str,
        amount: Option<Decimal>,
        authorization: &str,
    ) -> Result<Response> {
        let mut params = Self::base_params(action, amount);
        params.insert("authorization".to_string(), json!(authorization));

        if authorization == BOGUS_AUTHORIZATION {
            debug!(action, authorization, "bogus gateway approved reference");
            Ok(Response::new(
                true,
                "Bogus Gateway: Forced success",
                params,
                ResponseOptions {
                    test: true,
                    authorization: Some(BOGUS_AUTHORIZATION.to_string()),
                    ..Default::default()
                },
            ))
        } else {
            Ok(Response::new(
                false,
                "Bogus Gateway: Unknown authorization",
                params,
                ResponseOptions {
                    test: true,
                    ..Default::default()
                },
            ))
        }
    }
}

#[async_trait]
impl Gateway for BogusGateway {
    async fn authorize(
        &self,
        amount: Decimal,
        card: &CreditCard,
        _options: &TransactionOptions,
    ) -> Result<Response> {
        self.card_response("authorize", Some(amount), card)
    }

    async fn purchase(
        &self,
        amount: Decimal,
        card: &CreditCard,
        _options: &TransactionOptions,
    ) -> Result<Response> {
        self.card_response("purchase", Some(amount), card)
    }

    async fn capture(
        &self,
        amount: Decimal,
        authorization: &str,
        _options: &TransactionOptions,
    ) -> Result<Response> {
        self.reference_response("capture", Some(amount), authorization)
    }

    async fn void(&self, authorization: &str, _options: &TransactionOptions) -> Result<Response> {
        self.reference_response("void", None, authorization)
    }

    async fn credit(
        &self,
        amount: Decimal,
        authorization: &str,
        _options: &TransactionOptions,
    ) -> Result<Response> {
        self.reference_response("credit", Some(amount), authorization)
    }

    async fn recurring(
        &self,
        amount: Decimal,
        card: &CreditCard,
        _options: &TransactionOptions,
    ) -> Result<Response> {
        self.card_response("recurring", Some(amount), card)
    }

    fn display_name(&self) -> &'static str {
        "Bogus"
    }

    fn homepage_url(&self) -> &'static str {
        "http://example.com"
    }

    fn supported_countries(&self) -> &'static [&'static str] {
        &["US"]
    }

    fn supported_card_brands(&self) -> &'static [CardBrand] {
        &[CardBrand::Bogus]
    }

    fn mode(&self) -> GatewayMode {
        self.mode
    }
}
