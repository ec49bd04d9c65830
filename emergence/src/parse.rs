//! Permissive numeric parsing for loosely typed configuration.
//!
//! These follow the leading-prefix rules browsers use for `parseInt(s, 10)` and `parseFloat(s)`:
//! leading whitespace is skipped, the longest numeric prefix is taken, and trailing garbage is
//! ignored. Input without any leading digits yields `None`.

fn skip_sign(bytes: &[u8], mut i: usize) -> usize {
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    i
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Parses a leading base-10 integer. Saturates on overflow.
pub fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_start = skip_sign(bytes, 0);
    let end = skip_digits(bytes, digits_start);
    if end == digits_start {
        return None;
    }

    let negative = bytes.first() == Some(&b'-');
    let mut value: i64 = 0;
    for &b in &bytes[digits_start..end] {
        let d = i64::from(b - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(d)
        } else {
            value.saturating_add(d)
        };
    }
    Some(value)
}

/// Parses a leading decimal number (`12`, `-0.5`, `.25`, `1e3`, `Infinity`).
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mantissa_start = skip_sign(bytes, 0);

    let rest = &s[mantissa_start..];
    if rest.starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_end = skip_digits(bytes, mantissa_start);
    let mut end = int_end;
    let mut has_digits = int_end > mantissa_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_end = skip_digits(bytes, end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let exp_digits = skip_sign(bytes, end + 1);
        let exp_end = skip_digits(bytes, exp_digits);
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
