/// Exact integer sum of per-tract counts. `None` on overflow.
pub fn sum(values: &[i128]) -> Option<i128> {
    values.iter().try_fold(0i128, |acc, &v| acc.checked_add(v))
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to 2 decimal places, ties to even on the exact binary value.
///
/// Goes through the fixed-precision formatter so that values like `2.675`
/// (stored just below the tie) round down instead of drifting through `x * 100.0`.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Shortest round-trip rendering that always keeps a fractional part
/// (`15.0`, `5.5`), a signed exponent for huge values (`1e+16`) and
/// lowercase non-finite names.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => repr,
    }
}
