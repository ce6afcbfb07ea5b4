//! Fixed-point decimal helpers for quote values
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point drift).
//! Displayed values are rounded HALF away from zero to 2 dp.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Decimal places kept on prices, values and percentages.
pub const DISPLAY_DP: u32 = 2;

/// Smallest value a price or index level may take (one cent).
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Round to 2 dp, midpoints away from zero.
pub fn round_display(v: Decimal) -> Decimal {
    v.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Add `jitter` to `value`, floor at [`MIN_PRICE`], round to 2 dp.
pub fn jittered_level(value: Decimal, jitter: Decimal) -> Decimal {
    round_display((value + jitter).max(MIN_PRICE))
}

/// Percent move from `before` to `after`, rounded to 2 dp.
///
/// Returns zero when `before` is zero; seeded levels are always positive.
pub fn percent_change(before: Decimal, after: Decimal) -> Decimal {
    if before.is_zero() {
        return Decimal::ZERO;
    }
    round_display((after - before) / before * Decimal::ONE_HUNDRED)
}

/// Render a signed change: `+2.15`, `-0.50`, `+1.23%`.
pub fn format_change(change: Decimal, is_percent: bool) -> String {
    let prefix = if change >= Decimal::ZERO { "+" } else { "" };
    let suffix = if is_percent { "%" } else { "" };
    format!("{}{:.2}{}", prefix, change, suffix)
}
