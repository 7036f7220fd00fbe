//! Radix formatting and parsing of percent strings.

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Enough fractional digits to exhaust an `f64` mantissa in base 2.
const MAX_FRACTION_DIGITS: usize = 52;

/// Formats a non-negative number in base `radix` (2 to 36).
///
/// Base 10 uses the shortest representation that round-trips, other bases write the integer part
/// followed by up to [`MAX_FRACTION_DIGITS`] fractional digits.
pub(super) fn format_radix(value: f64, radix: u32) -> String {
    debug_assert!((2..=36).contains(&radix));
    debug_assert!(!(value < 0.0), "negative value {value}");

    if radix == 10 || !value.is_finite() {
        return value.to_string();
    }

    let base = f64::from(radix);
    let digit = |d: f64| char::from(DIGITS[d as usize]);

    let mut int = value.trunc();
    let mut frac = value - int;

    let mut out = Vec::new();
    loop {
        out.push(digit(int % base));
        int = (int / base).trunc();
        if int < 1.0 {
            break;
        }
    }
    let mut out = out.into_iter().rev().collect::<String>();

    if frac > 0.0 {
        out.push('.');
        for _ in 0..MAX_FRACTION_DIGITS {
            frac *= base;
            let d = frac.trunc();
            out.push(digit(d));
            frac -= d;
            if frac == 0.0 {
                break;
            }
        }
    }

    out
}

/// Parses a decimal percent number like `12.5%` or `+1e2%`, returning it as a fraction of 100.
///
/// Returns [`None`] if `input` does not match `[+-]digits[.digits][(e|E)[+-]digits]%`.
pub(super) fn parse_percent(input: &str) -> Option<f64> {
    let number = input.strip_suffix('%')?;
    if !is_decimal(number) {
        return None;
    }

    // The division by 100 goes into the exponent, so that percentages near `f64::MAX` do not
    // overflow before being divided.
    let (mantissa, exponent) = match number.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, parse_exponent(exponent)),
        None => (number, 0),
    };
    format!("{mantissa}e{}", exponent - 2).parse().ok()
}

/// Parses a validated exponent, saturating at magnitudes no `f64` can reach anyway.
fn parse_exponent(exponent: &str) -> i64 {
    const SATURATED: i64 = i64::MAX / 2;
    exponent.parse().unwrap_or(if exponent.starts_with('-') {
        -SATURATED
    } else {
        SATURATED
    })
}

fn is_decimal(s: &str) -> bool {
    let s = strip_sign(s);
    let (mantissa, exponent) = match s.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(strip_sign(exponent))),
        None => (s, None),
    };
    let (int, frac) = match mantissa.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (mantissa, ""),
    };

    let mantissa_ok = all_digits(int) && all_digits(frac) && !(int.is_empty() && frac.is_empty());
    let exponent_ok = exponent.map_or(true, |e| !e.is_empty() && all_digits(e));
    mantissa_ok && exponent_ok
}

fn strip_sign(s: &str) -> &str {
    s.strip_prefix(['+', '-']).unwrap_or(s)
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
