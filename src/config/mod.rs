use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

use crate::core::{AppError, Result};
use crate::modules::cards::CardBrand;

/// Whether gateways talk to their sandbox or their production endpoints.
///
/// The mode is plain configuration: it is read once at startup and handed to
/// the classifier and to every gateway adapter at construction time. Nothing
/// in the crate reads it from a global.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    #[default]
    Test,
    Live,
}

impl GatewayMode {
    pub fn is_test(&self) -> bool {
        *self == GatewayMode::Test
    }

    pub fn is_live(&self) -> bool {
        *self == GatewayMode::Live
    }
}

impl fmt::Display for GatewayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayMode::Test => write!(f, "test"),
            GatewayMode::Live => write!(f, "live"),
        }
    }
}

impl std::str::FromStr for GatewayMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "test" => Ok(GatewayMode::Test),
            "live" => Ok(GatewayMode::Live),
            _ => Err(format!("Invalid gateway mode: {}", s)),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: GatewayMode,

    /// Overrides the default card brand allow-list when set.
    pub accepted_brands: Option<Vec<CardBrand>>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let mode = env::var("PAYGATE_MODE")
            .unwrap_or_else(|_| "test".to_string())
            .parse()
            .map_err(|e: String| AppError::Configuration(e))?;

        let accepted_brands = match env::var("PAYGATE_ACCEPTED_BRANDS") {
            Ok(raw) => {
                let mut brands = Vec::new();
                for name in raw.split(',') {
                    let brand = name.trim().parse::<CardBrand>().map_err(|_| {
                        AppError::Configuration(format!(
                            "Invalid card brand in PAYGATE_ACCEPTED_BRANDS: {}",
                            name.trim()
                        ))
                    })?;
                    brands.push(brand);
                }
                Some(brands)
            }
            Err(_) => None,
        };

        Ok(Config {
            mode,
            accepted_brands,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(brands) = &self.accepted_brands {
            if brands.is_empty() {
                return Err(AppError::Configuration(
                    "Accepted brand list cannot be empty".to_string(),
                ));
            }

            if self.mode.is_live() && brands.contains(&CardBrand::Bogus) {
                return Err(AppError::Configuration(
                    "The bogus brand cannot be accepted in live mode".to_string(),
                ));
            }
        }

        Ok(())
    }
}
