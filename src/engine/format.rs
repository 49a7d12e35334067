//! Number-to-text conversion for the display.
//!
//! Values are printed with the shortest digit string that round-trips back to
//! the same `f64`. Decimal exponents in `-6..=20` print in plain positional
//! form, anything else in exponential form with a signed exponent
//! (`1e+21`, `1e-7`).

/// Plain text for `value`, the way the display shows an unconstrained result.
pub fn number_to_string(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }
    if value == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }
    let exponent = decimal_exponent(value);
    if (-6..=20).contains(&exponent) {
        format!("{}", value)
    } else {
        to_exponential(value)
    }
}

/// Exponential text for `value` with the shortest round-trip mantissa.
pub fn to_exponential(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }
    if value == 0.0 {
        return "0e+0".to_string();
    }
    let raw = format!("{:e}", value);
    match raw.split_once('e') {
        Some((mantissa, exp)) if exp.starts_with('-') => format!("{}e{}", mantissa, exp),
        Some((mantissa, exp)) => format!("{}e+{}", mantissa, exp),
        None => raw,
    }
}

/// Text for a computed result: exponential once the plain form is longer than
/// `threshold` characters.
pub fn display_string(value: f64, threshold: usize) -> String {
    let plain = number_to_string(value);
    if plain.chars().count() > threshold {
        to_exponential(value)
    } else {
        plain
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

fn decimal_exponent(value: f64) -> i32 {
    format!("{:e}", value)
        .split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}
