//! Multi-currency monetary arithmetic.
//!
//! This crate contains pure computation with ZERO network or storage
//! dependencies. Every amount belongs to a currency, every currency is priced
//! against the base currency of a rate context, and arithmetic between two
//! amounts is only performed when their contexts share that base currency.
//!
//! # Modules
//!
//! - `currency` - Currencies, the registry and minor-unit precision
//! - `trader` - Rate context and amount factories
//! - `amount` - Conversion, arithmetic, comparison and allocation
//! - `error` - Error taxonomy
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use rust_decimal_macros::dec;
//! use trader_core::{Currencies, Currency, Trader};
//!
//! let currencies = Currencies::new(vec![
//!     Currency::new("USD", Decimal::ONE),
//!     Currency::new("EUR", dec!(0.8)),
//! ]);
//! let trader = Trader::new(currencies, "usd").unwrap();
//!
//! let usd = trader.new_amount_from_str("2.3", "usd").unwrap();
//! let eur = trader.new_amount_from_str("2.56", "eur").unwrap();
//!
//! // 2.3 USD + 3.2 USD, expressed in USD
//! let sum = usd.add(&eur).unwrap();
//! assert_eq!(sum.to_display_string(3), "5.500");
//! ```

pub mod amount;
pub mod currency;
pub mod error;
pub mod trader;

pub use amount::Amount;
pub use currency::{Currencies, Currency, decimal_places};
pub use error::{TraderError, TraderResult};
pub use trader::Trader;
pub use trader_shared::{EngineConfig, RoundingMode};
