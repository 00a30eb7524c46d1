//! Numeric helpers shared by the pricing engine and the quick estimator.

use crate::pricing::JPY_PER_USD;

/// Round a f64 and clamp it to the i64 range, returning 0 for non-finite
/// values.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn round_f64_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(i64::MIN as f64, i64::MAX as f64) as i64
}

/// Convert i64 to f64 while allowing precision loss in a single location.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Convert a yen amount to whole dollars at the fixed site rate, rounding
/// half up. Non-positive amounts collapse to zero.
#[must_use]
pub fn jpy_to_usd(amount_jpy: i64) -> i64 {
    if amount_jpy <= 0 {
        return 0;
    }
    (amount_jpy + JPY_PER_USD / 2) / JPY_PER_USD
}

/// Format an amount with thousands separators, e.g. `1234567` → `"1,234,567"`.
#[must_use]
pub fn format_thousands(amount: i64) -> String {
    let raw = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
