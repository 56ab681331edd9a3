use serde::Serialize;
use serde_json::{json, Value};

/// Code "U" is also the fallback when a gateway sends no AVS code at all.
const UNAVAILABLE_CODE: &str = "U";

fn message_for(code: &str) -> &'static str {
    match code {
        "A" => "Street address matches, but 5-digit and 9-digit postal code do not match",
        "B" => "Street address matches, but postal code not verified",
        "C" => "Street address and postal code do not match",
        "D" => "Street address and postal code match",
        "E" => "AVS data is invalid or AVS is not allowed for this card type",
        "F" => "Card member's name does not match, but billing postal code matches",
        "G" => "Non-U.S. issuing bank does not support AVS",
        "H" => "Card member's name does not match. Street address and postal code match",
        "I" => "Address not verified",
        "J" => "Card member's name, billing address, and postal code match",
        "K" => "Card member's name matches but billing address and billing postal code do not match",
        "L" => "Card member's name and billing postal code match, but billing address does not match",
        "M" => "Street address and postal code match",
        "N" => "Street address and postal code do not match",
        "O" => "Card member's name and billing address match, but billing postal code does not match",
        "P" => "Postal code matches, but street address not verified",
        "Q" => "Card member's name, billing address, and postal code match",
        "R" => "System unavailable",
        "S" => "U.S.-issuing bank does not support AVS",
        "T" => "Card member's name does not match, but street address matches",
        "U" => "Address information unavailable",
        "V" => "Card member's name, billing address, and billing postal code match",
        "W" => "Street address does not match, but 9-digit postal code matches",
        "X" => "Street address and 9-digit postal code match",
        "Y" => "Street address and 5-digit postal code match",
        "Z" => "5-digit postal code matches, but street address does not match",
        _ => "Unknown",
    }
}

/// The issuer's address verification outcome, normalized to a code and a
/// human message. Construction never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvsResult {
    code: String,
    message: String,
}

impl AvsResult {
    pub fn new(code: Option<&str>) -> Self {
        let code = match code.map(str::trim) {
            Some(code) if !code.is_empty() => code.to_uppercase(),
            _ => UNAVAILABLE_CODE.to_string(),
        };
        let message = message_for(&code).to_string();

        Self { code, message }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_map(&self) -> Value {
        json!({
            "code": self.code,
            "message": self.message,
        })
    }
}
