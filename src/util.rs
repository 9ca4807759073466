/// Rounds half toward positive infinity, the way `Math.round(x * 10^n) / 10^n`
/// behaves in browsers. Sizes shown next to generated CSS must match it.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor + 0.5).floor() / factor
}

/// Fixed-point formatting with ECMAScript `toFixed` semantics.
///
/// Rust's float formatting already picks the decimal nearest to the exact
/// binary value; the two only disagree on exact ties (Rust rounds those to
/// even, `toFixed` rounds them away from zero) and on the spelling of
/// non-finite values and negative zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", digits, 0.0);
    }

    let magnitude = value.abs();
    let exp = digits as i32;

    // A tie at `digits` places needs a terminating expansion of exactly
    // digits + 1 places, i.e. at most digits + 1 fractional bits.
    let is_tie = (magnitude * 2f64.powi(exp + 1)).fract() == 0.0
        && (magnitude * 10f64.powi(exp)).fract() == 0.5;

    if !is_tie {
        return format!("{:.*}", digits, value);
    }

    let units = (magnitude * 10f64.powi(exp)).floor() as u64 + 1;
    let mut text = format!("{:0width$}", units, width = digits + 1);
    if digits > 0 {
        text.insert(text.len() - digits, '.');
    }
    if value < 0.0 {
        text.insert(0, '-');
    }
    text
}
