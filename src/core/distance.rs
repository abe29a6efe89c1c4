/// Score used when a distance field has no leading number
pub const UNKNOWN_DISTANCE_SCORE: f64 = 50.0;

/// Parse the leading number of a free-text distance such as "5m",
/// "10 miles" or "2.5km". The unit is ignored.
///
/// Accepts leading whitespace, an optional sign, a decimal mantissa and an
/// optional exponent; anything after the longest numeric prefix is dropped.
///
/// # Returns
/// `None` when the text does not start with a number
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Calculate distance score (0-100)
///
/// Banded on the parsed leading number, lower bound inclusive:
/// `<5 → 100`, `<10 → 80`, `<25 → 50`, `<50 → 30`, otherwise `10`.
/// Unparseable text scores a neutral 50.
#[inline]
pub fn distance_score(distance_text: &str) -> f64 {
    let Some(distance) = parse_leading_number(distance_text) else {
        tracing::trace!("Unparseable distance '{}', using neutral score", distance_text);
        return UNKNOWN_DISTANCE_SCORE;
    };

    if distance < 5.0 {
        100.0
    } else if distance < 10.0 {
        80.0
    } else if distance < 25.0 {
        50.0
    } else if distance < 50.0 {
        30.0
    } else {
        10.0
    }
}
