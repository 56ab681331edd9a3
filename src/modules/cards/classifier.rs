use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::brand::CardBrand;
use crate::config::GatewayMode;

/// PANs that classify as the bogus brand while in test mode.
const TEST_MODE_NUMBERS: [&str; 6] = ["1", "2", "3", "success", "failure", "error"];

/// Transformed digit for the Luhn sum, indexed by `digit + 10 * (i % 2)`
/// where `i` is the distance from the rightmost digit. The upper half is the
/// doubled digit reduced by 9 when it overflows.
const LUHN_TABLE: [u32; 20] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

static BRAND_PATTERNS: Lazy<Vec<(CardBrand, Regex)>> = Lazy::new(|| {
    let table: [(CardBrand, &str); 12] = [
        (CardBrand::Visa, r"^4\d{12}(\d{3})?$"),
        (CardBrand::Master, r"^(5[1-5]\d{4}|677189)\d{10}$"),
        (CardBrand::Discover, r"^(6011|65\d{2})\d{12}$"),
        (CardBrand::AmericanExpress, r"^3[47]\d{13}$"),
        (CardBrand::DinersClub, r"^3(0[0-5]|[68]\d)\d{11}$"),
        (CardBrand::Jcb, r"^35(28|29|[3-8]\d)\d{12}$"),
        (CardBrand::Switch, r"^6759\d{12}(\d{2,3})?$"),
        (CardBrand::Solo, r"^6767\d{12}(\d{2,3})?$"),
        (CardBrand::Dankort, r"^5019\d{12}$"),
        (CardBrand::Forbrugsforeningen, r"^600722\d{10}$"),
        (CardBrand::Laser, r"^(6304|6706|6771|6709)\d{8}(\d{4}|\d{6,7})?$"),
        // Maestro must stay last: its range is a superset of the Switch,
        // Solo, Dankort and Laser ranges.
        (CardBrand::Maestro, r"^(5[06-8]|6\d)\d{10,17}$"),
    ];

    table
        .iter()
        .map(|(brand, pattern)| {
            (*brand, Regex::new(pattern).expect("brand pattern compiles"))
        })
        .collect()
});

/// Brands a `CreditCard` passes validation with, unless the caller installs
/// its own allow-list. The classifier recognizes more brands than this
/// (Maestro, Forbrugsforeningen, Laser); those classify fine for display
/// purposes but are rejected by card validation.
const DEFAULT_ACCEPTED_BRANDS: [CardBrand; 9] = [
    CardBrand::Visa,
    CardBrand::Master,
    CardBrand::Discover,
    CardBrand::AmericanExpress,
    CardBrand::DinersClub,
    CardBrand::Jcb,
    CardBrand::Switch,
    CardBrand::Solo,
    CardBrand::Dankort,
];

/// Determines a card's brand from its number and owns the structural number
/// checks shared by every gateway adapter.
#[derive(Debug, Clone)]
pub struct CardClassifier {
    mode: GatewayMode,
    accepted_brands: Vec<CardBrand>,
    requires_verification_value: bool,
}

impl CardClassifier {
    pub fn new(mode: GatewayMode) -> Self {
        Self {
            mode,
            accepted_brands: DEFAULT_ACCEPTED_BRANDS.to_vec(),
            requires_verification_value: false,
        }
    }

    /// Replaces the default brand allow-list.
    pub fn with_accepted_brands(mode: GatewayMode, brands: Vec<CardBrand>) -> Self {
        Self {
            mode,
            accepted_brands: brands,
            requires_verification_value: false,
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        match &config.accepted_brands {
            Some(brands) => Self::with_accepted_brands(config.mode, brands.clone()),
            None => Self::new(config.mode),
        }
    }

    /// Demand a verification value during card validation.
    pub fn require_verification_value(mut self, required: bool) -> Self {
        self.requires_verification_value = required;
        self
    }

    pub fn mode(&self) -> GatewayMode {
        self.mode
    }

    pub fn accepted_brands(&self) -> &[CardBrand] {
        &self.accepted_brands
    }

    pub fn accepts(&self, brand: CardBrand) -> bool {
        self.accepted_brands.contains(&brand)
    }

    pub fn requires_verification_value(&self) -> bool {
        self.requires_verification_value
    }

    /// Determines the brand for a card number, or `None` when no range
    /// matches. Sentinel numbers short-circuit to `Bogus` in test mode
    /// before any pattern runs.
    pub fn classify(&self, number: &str) -> Option<CardBrand> {
        if self.mode.is_test() && TEST_MODE_NUMBERS.contains(&number) {
            return Some(CardBrand::Bogus);
        }

        let brand = BRAND_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(number))
            .map(|(brand, _)| *brand);

        debug!(number = %Self::mask(number), brand = ?brand, "classified card number");
        brand
    }

    /// True iff the number classifies as exactly the given brand.
    pub fn matches_brand(&self, number: &str, brand: CardBrand) -> bool {
        self.classify(number) == Some(brand)
    }

    /// Structural number check: at least 12 digits, digits only, and a
    /// passing Luhn checksum. Non-digit input fails outright rather than
    /// feeding garbage into the checksum.
    pub fn valid_number(number: &str) -> bool {
        number.len() >= 12 && Self::luhn_valid(number)
    }

    fn luhn_valid(number: &str) -> bool {
        let mut sum = 0u32;
        for (i, ch) in number.chars().rev().enumerate() {
            let digit = match ch.to_digit(10) {
                Some(d) => d,
                None => return false,
            };
            sum += LUHN_TABLE[(digit + 10 * (i as u32 % 2)) as usize];
        }
        sum % 10 == 0
    }

    /// Masks a PAN for display and logs, keeping the last four digits.
    pub fn mask(number: &str) -> String {
        let len = number.chars().count();
        if len <= 4 {
            return number.to_string();
        }
        let last_four: String = number.chars().skip(len - 4).collect();
        format!("XXXX-XXXX-XXXX-{}", last_four)
    }
}
