//! Currencies, their rates and the registry that holds them.

pub mod minor_units;
pub mod registry;
pub mod types;

pub use minor_units::decimal_places;
pub use registry::Currencies;
pub use types::Currency;
