use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Parses user-entered numeric text, falling back to zero for blank or
/// malformed input. Input errors are deliberately tolerated, not surfaced.
pub fn parse_or_zero(text: &str) -> Decimal {
    text.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Renders a value as fixed-point text with exactly two fraction digits,
/// rounding half away from zero.
pub fn format_fixed2(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    format!("{:.2}", rounded)
}

/// Renders a count-like value as plain integer text (no trailing zeros).
pub fn format_count(value: Decimal) -> String {
    value.normalize().to_string()
}

/// numerator / divisor with the standard zero-guard, rendered as 2-place text.
pub fn ratio_display(numerator: Decimal, divisor: Decimal) -> String {
    if divisor > Decimal::ZERO {
        format_fixed2(numerator / divisor)
    } else {
        "0.00".to_string()
    }
}

/// (numerator / divisor) × 100 with the standard zero-guard, as 2-place text.
pub fn percentage_display(numerator: Decimal, divisor: Decimal) -> String {
    if divisor > Decimal::ZERO {
        format_fixed2(numerator / divisor * Decimal::from(100))
    } else {
        "0.00".to_string()
    }
}
