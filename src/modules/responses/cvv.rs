use serde::Serialize;
use serde_json::{json, Value};

/// Code "X" is also the fallback when a gateway sends no CVV code at all.
const NO_VERIFICATION_CODE: &str = "X";

fn message_for(code: &str) -> &'static str {
    match code {
        "D" => "Suspicious transaction",
        "I" => "Failed data validation check",
        "M" => "Match",
        "N" => "No Match",
        "P" => "Not Processed",
        "S" => "Should have been present",
        "U" => "Issuer unable to process request",
        "X" => "Card does not support verification",
        _ => "Unknown",
    }
}

/// The issuer's CVV check outcome, normalized to a code and a human message.
///
/// Construction never fails: blank codes fall back to "X" and codes outside
/// the table keep their code with an "Unknown" message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CvvResult {
    code: String,
    message: String,
}

impl CvvResult {
    pub fn new(code: &str) -> Self {
        let code = code.trim();
        let code = if code.is_empty() {
            NO_VERIFICATION_CODE.to_string()
        } else {
            code.to_uppercase()
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
