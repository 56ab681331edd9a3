use serde::Deserialize;
use serde_json::{Map, Value};

use super::avs::AvsResult;
use super::cvv::CvvResult;

/// AVS payload as gateways hand it over. Only the code matters to the
/// normalization layer; any extra keys a gateway sends are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AvsParams {
    pub code: Option<String>,
}

/// Optional response attributes a gateway adapter fills in after parsing its
/// wire response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResponseOptions {
    pub test: bool,
    pub authorization: Option<String>,
    pub fraud_review: Option<bool>,
    pub avs_result: Option<AvsParams>,
    pub cvv_result: Option<String>,
}

/// The normalized outcome of a gateway call.
///
/// Every adapter parses its own wire format and funnels the result through
/// this one contract. `params` keeps the gateway's raw fields under their
/// gateway-specific names; `authorization` is the only value guaranteed to
/// support a later capture, void or credit. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Response {
    success: bool,
    message: String,
    params: Map<String, Value>,
    test: bool,
    authorization: Option<String>,
    fraud_review: Option<bool>,
    avs_result: Option<AvsResult>,
    cvv_result: Option<CvvResult>,
}

impl Response {
    pub fn new(
        success: bool,
        message: impl Into<String>,
        params: Map<String, Value>,
        options: ResponseOptions,
    ) -> Self {
        let avs_result = options
            .avs_result
            .map(|avs| AvsResult::new(avs.code.as_deref()));
        let cvv_result = options.cvv_result.map(|code| CvvResult::new(&code));

        Self {
            success,
            message: message.into(),
            params,
            test: options.test,
            authorization: options.authorization,
            fraud_review: options.fraud_review,
            avs_result,
            cvv_result,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// The single human-readable summary of the transaction attempt.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// Raw gateway field by name. Keys vary per gateway; a missing key is
    /// `None`, never a panic.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    pub fn is_test(&self) -> bool {
        self.test
    }

    pub fn fraud_review(&self) -> Option<bool> {
        self.fraud_review
    }

    pub fn avs_result(&self) -> Option<&AvsResult> {
        self.avs_result.as_ref()
    }

    pub fn cvv_result(&self) -> Option<&CvvResult> {
        self.cvv_result.as_ref()
    }
}
