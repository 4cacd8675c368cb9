//! JavaScript number text semantics
//!
//! The keypad builds operands by string concatenation and trims them by
//! dropping the last character, so the text form of an `f64` has to match
//! what a browser would print for the same value, and parsing has to follow
//! `Number(string)` coercion.

/// Formats a number the way `Number.prototype.toString()` does (radix 10).
///
/// Both zeros print as `0`. Decimal exponents in `[-7, 21)` print in plain
/// notation; everything else uses `e+N` / `e-N`.
#[must_use]
pub fn to_js_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e4"
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{sign}{scientific}");
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp_sign = if n - 1 < 0 { '-' } else { '+' };
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{head}e{exp_sign}{}", (n - 1).abs())
        } else {
            format!("{head}.{tail}e{exp_sign}{}", (n - 1).abs())
        }
    };

    format!("{sign}{body}")
}

/// Coerces text to a number the way `Number(string)` does.
///
/// Blank text is `0`. Anything that is not a decimal literal, a
/// `0x`/`0o`/`0b` integer literal or a signed `Infinity` is `NaN`.
#[must_use]
pub fn parse_js_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let is_decimal_literal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal_literal {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned `0x`, `0o` and `0b` literals. Signs after the prefix are
/// rejected and arbitrarily long literals stay finite.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let prefix = text.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// JavaScript truthiness for numbers: `0`, `-0` and `NaN` are falsy.
#[must_use]
pub fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
