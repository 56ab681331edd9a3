use serde::{Deserialize, Serialize};
use std::fmt;

/// Card network/issuer family recognized by the classifier.
///
/// `Bogus` is the test-mode sentinel brand: it is only ever produced for the
/// fixed sentinel numbers while running against sandbox endpoints, and lets
/// test suites skip the structural card checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    Visa,
    Master,
    Discover,
    AmericanExpress,
    DinersClub,
    Jcb,
    /// Debit brand requiring a start date or an issue number.
    Switch,
    /// Debit brand requiring a start date or an issue number.
    Solo,
    Dankort,
    Maestro,
    Forbrugsforeningen,
    Laser,
    Bogus,
}

impl CardBrand {
    /// Brands that additionally require start date or issue number data.
    pub fn is_debit(&self) -> bool {
        matches!(self, CardBrand::Switch | CardBrand::Solo)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardBrand::Visa => write!(f, "visa"),
            CardBrand::Master => write!(f, "master"),
            CardBrand::Discover => write!(f, "discover"),
            CardBrand::AmericanExpress => write!(f, "american_express"),
            CardBrand::DinersClub => write!(f, "diners_club"),
            CardBrand::Jcb => write!(f, "jcb"),
            CardBrand::Switch => write!(f, "switch"),
            CardBrand::Solo => write!(f, "solo"),
            CardBrand::Dankort => write!(f, "dankort"),
            CardBrand::Maestro => write!(f, "maestro"),
            CardBrand::Forbrugsforeningen => write!(f, "forbrugsforeningen"),
            CardBrand::Laser => write!(f, "laser"),
            CardBrand::Bogus => write!(f, "bogus"),
        }
    }
}

impl std::str::FromStr for CardBrand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "visa" => Ok(CardBrand::Visa),
            "master" => Ok(CardBrand::Master),
            "discover" => Ok(CardBrand::Discover),
            "american_express" => Ok(CardBrand::AmericanExpress),
            "diners_club" => Ok(CardBrand::DinersClub),
            "jcb" => Ok(CardBrand::Jcb),
            "switch" => Ok(CardBrand::Switch),
            "solo" => Ok(CardBrand::Solo),
            "dankort" => Ok(CardBrand::Dankort),
            "maestro" => Ok(CardBrand::Maestro),
            "forbrugsforeningen" => Ok(CardBrand::Forbrugsforeningen),
            "laser" => Ok(CardBrand::Laser),
            "bogus" => Ok(CardBrand::Bogus),
            _ => Err(format!("Invalid card brand: {}", s)),
        }
    }
}
