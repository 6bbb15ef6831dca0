//! Single-hop traffic simulators and the chain endpoint

pub mod chain;
pub mod crud;
pub mod delay;
pub mod fault;
pub mod status;

/// Leading integer of a query value, in the forgiving way load-test scripts
/// expect: surrounding whitespace and trailing junk are ignored (`"250ms"` is
/// 250). Zero and values with no leading digits count as absent.
pub(crate) fn lenient_int(raw: Option<&str>) -> Option<i64> {
    let trimmed = raw?.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;

    match (value, negative) {
        (0, _) => None,
        (v, true) => Some(-v),
        (v, false) => Some(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_int_plain() {
        assert_eq!(lenient_int(Some("250")), Some(250));
        assert_eq!(lenient_int(Some(" 42")), Some(42));
        assert_eq!(lenient_int(Some("+7")), Some(7));
        assert_eq!(lenient_int(Some("-3")), Some(-3));
    }

    #[test]
    fn test_lenient_int_ignores_trailing_junk() {
        assert_eq!(lenient_int(Some("250ms")), Some(250));
        assert_eq!(lenient_int(Some("404.5")), Some(404));
    }

    #[test]
    fn test_lenient_int_absent_values() {
        assert_eq!(lenient_int(None), None);
        assert_eq!(lenient_int(Some("")), None);
        assert_eq!(lenient_int(Some("abc")), None);
        assert_eq!(lenient_int(Some("0")), None);
        assert_eq!(lenient_int(Some("-")), None);
        assert_eq!(lenient_int(Some("99999999999999999999999")), None);
    }
}
