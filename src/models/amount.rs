//! Amount parsing and display
//!
//! Amounts are plain `f64` values taken from whatever the user typed into
//! the amount field. Parsing is lenient: the longest numeric prefix wins and
//! text with no numeric prefix becomes NaN, which is stored and displayed
//! as-is rather than rejected.

/// Parse user-entered amount text
///
/// Skips leading whitespace, then reads the longest prefix of the form
/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
/// `Infinity` (optionally signed) is recognised. Anything else yields NaN.
///
/// # Examples
/// ```
/// use expense_tracker::models::parse_amount;
/// assert_eq!(parse_amount("4.5"), 4.5);
/// assert_eq!(parse_amount(" 12abc"), 12.0);
/// assert!(parse_amount("abc").is_nan());
/// ```
pub fn parse_amount(text: &str) -> f64 {
    let s = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos.min(bytes.len())..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    // The prefix is pure ASCII, so slicing on `pos` is always a char boundary
    s[..pos].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Format an amount with exactly two decimals
///
/// Rounding works on the exact binary value and resolves ties away from
/// zero, so `0.125` prints as `0.13` while `1.005` (really 1.00499...)
/// prints as `1.00`.
///
/// NaN prints as `NaN` and infinities as `Infinity` / `-Infinity`.
/// Negative zero prints as `0.00`. Magnitudes of 1e21 and above switch to
/// exponential notation with an explicit exponent sign.
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if amount.abs() >= 1e21 {
        let exp = format!("{:e}", amount);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }
    if amount == 0.0 {
        return "0.00".to_string();
    }

    // Round the exact decimal expansion of the magnitude, ties away from zero.
    // 1074 places is enough to print any f64 without rounding.
    let sign = if amount < 0.0 { "-" } else { "" };
    let exact = format!("{:.1074}", amount.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();
    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        round_up(&mut digits);
    }

    let (whole, cents) = digits.split_at(digits.len() - 2);
    format!(
        "{}{}.{}",
        sign,
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(cents)
    )
}

/// Add one unit in the last place to a string of ASCII digits
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
