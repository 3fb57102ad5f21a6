// Forgiving number parsing for status values: a leading numeric prefix is
// honoured, anything unparsable becomes zero.

/// Length of the numeric prefix of `s` (optional sign, digits, and for
/// floats an optional fraction and exponent). Zero when there are no digits.
fn numeric_prefix_len(s: &str, float: bool) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if !float {
        return if digits == 0 { 0 } else { i };
    }
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return 0;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

/// Float value of the leading numeric prefix, `0.0` if there is none.
pub fn parse_f64(raw: &str) -> f64 {
    let s = raw.trim_start();
    let end = numeric_prefix_len(s, true);
    s[..end].parse().unwrap_or(0.0)
}

/// Integer value of the leading numeric prefix, `0` if there is none.
/// Values out of range clamp to `i64::MIN` / `i64::MAX`.
pub fn parse_i64(raw: &str) -> i64 {
    let s = raw.trim_start();
    let digits = &s[..numeric_prefix_len(s, false)];
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Integer flag: anything above zero is set.
pub fn parse_flag(raw: &str) -> bool {
    parse_i64(raw) > 0
}

/// Up to three comma-separated integers (`1min,5min,15min`). Empty pieces
/// are skipped and missing positions read as zero.
pub fn parse_triple(raw: &str) -> [i64; 3] {
    let mut out = [0; 3];
    for (slot, piece) in out
        .iter_mut()
        .zip(raw.split(',').filter(|p| !p.trim().is_empty()))
    {
        *slot = parse_i64(piece);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_take_numeric_prefix() {
        assert_eq!(parse_f64("0.125"), 0.125);
        assert_eq!(parse_f64("  12.5%"), 12.5);
        assert_eq!(parse_f64("-3"), -3.0);
        assert_eq!(parse_f64("1e3ms"), 1000.0);
        assert_eq!(parse_f64("2e"), 2.0);
        assert_eq!(parse_f64(".5"), 0.5);
        assert_eq!(parse_f64("7."), 7.0);
    }

    #[test]
    fn garbage_becomes_zero() {
        assert_eq!(parse_f64("abc"), 0.0);
        assert_eq!(parse_f64("."), 0.0);
        assert_eq!(parse_f64("-"), 0.0);
        assert_eq!(parse_i64("x1"), 0);
        assert_eq!(parse_i64(""), 0);
    }

    #[test]
    fn out_of_range_integers_saturate() {
        assert_eq!(parse_i64("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_i64("+99999999999999999999999"), i64::MAX);
        assert_eq!(parse_i64("-99999999999999999999999"), i64::MIN);
        assert_eq!(parse_i64("-9223372036854775808"), i64::MIN);
    }

    #[test]
    fn integers_stop_at_first_non_digit() {
        assert_eq!(parse_i64("42"), 42);
        assert_eq!(parse_i64("1700000000.75"), 1_700_000_000);
        assert_eq!(parse_i64("+8 slots"), 8);
        assert_eq!(parse_i64("-2"), -2);
    }

    #[test]
    fn flags_are_positive_integers() {
        assert!(parse_flag("1"));
        assert!(parse_flag("3"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("-1"));
        assert!(!parse_flag("yes"));
    }

    #[test]
    fn triples_fill_positionally() {
        assert_eq!(parse_triple("1,5,15"), [1, 5, 15]);
        assert_eq!(parse_triple("4"), [4, 0, 0]);
        assert_eq!(parse_triple("1,,3"), [1, 3, 0]);
        assert_eq!(parse_triple("1,2,3,4"), [1, 2, 3]);
    }
}
