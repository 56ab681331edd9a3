use chrono::{DateTime, Datelike, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::brand::CardBrand;
use super::classifier::CardClassifier;
use super::expiry::ExpiryDate;
use crate::core::Result;

/// Per-field validation errors, in insertion order.
///
/// Each field holds a single message: posting a second error for the same
/// field replaces the message but keeps the field's original position, so
/// diagnostics stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: IndexMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.fields.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Cardholder and card data as collected from a payment form.
///
/// Built either directly or from a flat key-value map via [`Self::from_params`].
/// Fields stay public and mutable; nothing about validation is cached, every
/// [`Self::validate`] call re-runs all rules from scratch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditCard {
    pub first_name: String,
    pub last_name: String,

    /// Expiry month, 1-12.
    pub month: u32,

    /// Four-digit expiry year.
    pub year: i32,

    /// The PAN, digits only.
    pub number: String,

    /// CVV/CVC printed on the card.
    pub verification_value: String,

    /// Declared brand. Inferred from the number when absent.
    #[serde(rename = "type")]
    pub brand: Option<CardBrand>,

    /// Opaque stored-card reference. A card carrying a token has already
    /// been validated by the vault and skips every other check.
    pub token: Option<String>,

    /// Start month for switch/solo debit cards.
    pub start_month: u32,

    /// Start year for switch/solo debit cards.
    pub start_year: i32,

    /// Issue number for switch/solo debit cards, 1-2 digits.
    pub issue_number: String,
}

impl CreditCard {
    /// Builds a card from a flat key-value map. The only failure is a map
    /// that does not deserialize into card fields; bad card *data* never
    /// errors here, it surfaces later through [`Self::validate`].
    pub fn from_params(params: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(params)?)
    }

    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// The declared brand, or the classifier's verdict on the number.
    pub fn effective_brand(&self, classifier: &CardClassifier) -> Option<CardBrand> {
        self.brand.or_else(|| classifier.classify(&self.number))
    }

    /// The expiry pair for this card, built on demand.
    pub fn expiry_date(&self) -> ExpiryDate {
        ExpiryDate::new(self.month, self.year)
    }

    /// Masked PAN, safe for display and logs.
    pub fn display_number(&self) -> String {
        CardClassifier::mask(&self.number)
    }

    pub fn last_digits(&self) -> String {
        let len = self.number.chars().count();
        if len <= 4 {
            return self.number.clone();
        }
        self.number.chars().skip(len - 4).collect()
    }

    pub fn is_valid(&self, classifier: &CardClassifier) -> bool {
        self.validate(classifier).is_empty()
    }

    pub fn is_valid_at(&self, classifier: &CardClassifier, now: DateTime<Utc>) -> bool {
        self.validate_at(classifier, now).is_empty()
    }

    /// Runs every validation rule against the current field values and
    /// returns the per-field errors. An empty result means the card is valid.
    pub fn validate(&self, classifier: &CardClassifier) -> ValidationErrors {
        self.validate_at(classifier, Utc::now())
    }

    pub fn validate_at(&self, classifier: &CardClassifier, now: DateTime<Utc>) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        // A vault token stands in for a card the issuer already validated.
        if self.token.is_some() {
            return errors;
        }

        self.validate_essential_attributes(&mut errors, now);

        // Sentinel numbers classify as bogus in test mode and skip the
        // structural checks entirely.
        if classifier.classify(&self.number) == Some(CardBrand::Bogus) {
            return errors;
        }

        self.validate_brand(classifier, &mut errors);
        self.validate_number(classifier, &mut errors);

        if self
            .effective_brand(classifier)
            .is_some_and(|brand| brand.is_debit())
        {
            self.validate_switch_or_solo_attributes(&mut errors);
        }

        if classifier.requires_verification_value() && self.verification_value.trim().is_empty() {
            errors.add("verification_value", "is required");
        }

        if !errors.is_empty() {
            debug!(
                number = %self.display_number(),
                error_count = errors.len(),
                "card failed validation"
            );
        }

        errors
    }

    fn validate_essential_attributes(&self, errors: &mut ValidationErrors, now: DateTime<Utc>) {
        if self.first_name.trim().is_empty() {
            errors.add("first_name", "cannot be empty");
        }
        if self.last_name.trim().is_empty() {
            errors.add("last_name", "cannot be empty");
        }

        if !Self::is_valid_month(self.month) {
            errors.add("month", "is not a valid month");
        } else if self.expiry_date().is_expired(now) {
            errors.add("year", "expired");
        }

        if !Self::is_valid_expiry_year(self.year, now.year()) {
            errors.add("year", "is not a valid year");
        }
    }

    fn validate_brand(&self, classifier: &CardClassifier, errors: &mut ValidationErrors) {
        match self.effective_brand(classifier) {
            None => errors.add("type", "is required"),
            Some(brand) if !classifier.accepts(brand) => {
                errors.add("type", "is not supported");
            }
            Some(_) => {}
        }
    }

    fn validate_number(&self, classifier: &CardClassifier, errors: &mut ValidationErrors) {
        if !CardClassifier::valid_number(&self.number) {
            errors.add("number", "is not a valid credit card number");
        }
        if let Some(brand) = self.brand {
            if !classifier.matches_brand(&self.number, brand) {
                errors.add("type", "is not the correct card type");
            }
        }
    }

    // The gate is an OR: a valid start date or a valid issue number is
    // enough. Error reporting on failure is per-field, one entry for each
    // sub-condition that did not hold.
    fn validate_switch_or_solo_attributes(&self, errors: &mut ValidationErrors) {
        let start_date_ok =
            Self::is_valid_month(self.start_month) && Self::is_valid_start_year(self.start_year);
        let issue_number_ok = Self::is_valid_issue_number(&self.issue_number);

        if start_date_ok || issue_number_ok {
            return;
        }

        if !Self::is_valid_month(self.start_month) {
            errors.add("start_month", "is not a valid month");
        }
        if !Self::is_valid_start_year(self.start_year) {
            errors.add("start_year", "is not a valid start year");
        }
        if !Self::is_valid_issue_number(&self.issue_number) {
            errors.add("issue_number", "is not a valid issue number");
        }
    }

    // Sub-validators

    pub fn is_valid_month(month: u32) -> bool {
        (1..=12).contains(&month)
    }

    /// Issuers accept expiry years up to twenty years out.
    pub fn is_valid_expiry_year(year: i32, current_year: i32) -> bool {
        year >= current_year && year <= current_year + 20
    }

    /// Four digits and later than 1987, when the first such cards appeared.
    pub fn is_valid_start_year(year: i32) -> bool {
        (1988..=9999).contains(&year)
    }

    pub fn is_valid_issue_number(issue_number: &str) -> bool {
        !issue_number.is_empty()
            && issue_number.len() <= 2
            && issue_number.chars().all(|c| c.is_ascii_digit())
    }
}
