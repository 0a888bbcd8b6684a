//! Engine configuration management.

use rust_decimal::RoundingStrategy;
use serde::Deserialize;

/// Smallest accepted division scale. Conversion chains stay reproducible
/// only if every quotient keeps at least this many fractional digits.
pub const MIN_DIVISION_SCALE: u32 = 16;

/// Largest scale `rust_decimal` can represent.
pub const MAX_DIVISION_SCALE: u32 = 28;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Arithmetic engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Arithmetic engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Number of fractional digits kept after every division.
    #[serde(default = "default_division_scale")]
    pub division_scale: u32,
    /// Rounding rule used for division, `round` and display.
    #[serde(default)]
    pub rounding: RoundingMode,
}

fn default_division_scale() -> u32 {
    MIN_DIVISION_SCALE
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            division_scale: default_division_scale(),
            rounding: RoundingMode::default(),
        }
    }
}

impl EngineConfig {
    /// Checks that the configured values are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if `division_scale` is outside `16..=28`.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if !(MIN_DIVISION_SCALE..=MAX_DIVISION_SCALE).contains(&self.division_scale) {
            return Err(config::ConfigError::Message(format!(
                "engine.division_scale must be between {MIN_DIVISION_SCALE} and {MAX_DIVISION_SCALE}, got {}",
                self.division_scale
            )));
        }
        Ok(())
    }
}

/// Rounding rule applied by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round half to even (Banker's Rounding).
    #[default]
    Bankers,
    /// Round half away from zero.
    HalfAwayFromZero,
    /// Round half toward zero.
    HalfTowardZero,
    /// Drop the extra digits.
    Truncate,
}

impl RoundingMode {
    /// Returns the matching `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Bankers => RoundingStrategy::MidpointNearestEven,
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfTowardZero => RoundingStrategy::MidpointTowardZero,
            Self::Truncate => RoundingStrategy::ToZero,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "trader=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `.env`, the optional `config/trader` file
    /// and `TRADER__*` environment variables, in that order of precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_from("config/trader")
    }

    /// Loads configuration from the given file (extension optional, the file
    /// may be absent) overlaid with `TRADER__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix("TRADER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.engine.validate()?;
        Ok(app)
    }
}
