//! Minor-unit precision per currency code.
//!
//! This is a domain convention (ISO 4217 exponents), independent of any
//! exchange-rate data, so it lives in a static table rather than on
//! [`Currency`](super::Currency).

/// Currencies without a minor unit.
const ZERO_DECIMAL: &[&str] = &[
    "BIF", "BYR", "CLP", "DJF", "GNF", "ISK", "JPY", "KMF", "KRW", "PYG", "RWF", "UGX", "UYI",
    "VND", "VUV", "XAF", "XOF", "XPF",
];

/// Currencies whose minor unit is a thousandth.
const THREE_DECIMAL: &[&str] = &["BHD", "IQD", "JOD", "KWD", "LYD", "OMR", "TND"];

/// Minor-unit places for codes not listed in any table.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Returns the number of decimal places of the currency's minor unit,
/// e.g. 2 for USD ($12.25), 0 for JPY (5412), 3 for BHD.
///
/// The lookup is case-insensitive.
#[must_use]
pub fn decimal_places(code: &str) -> u32 {
    let code = code.to_uppercase();
    let code = code.as_str();

    if ZERO_DECIMAL.contains(&code) {
        0
    } else if THREE_DECIMAL.contains(&code) {
        3
    } else if code == "CLF" {
        4
    } else {
        DEFAULT_DECIMAL_PLACES
    }
}
