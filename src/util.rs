//! Unit conversion helpers.

/// Root font size, in pixels, that em values are computed against.
pub const BASE_FONT_SIZE: f64 = 16.0;

/// Converts a pixel magnitude to an em magnitude against a 16px root.
///
/// The result is the shortest decimal form of `px / 16`, so whole values
/// carry no decimal point.
///
/// # Example
///
/// ```rust
/// use styled_breakpoint::px_to_em;
///
/// assert_eq!(px_to_em(32.0), "2");
/// assert_eq!(px_to_em(24.0), "1.5");
/// assert_eq!(px_to_em(767.0), "47.9375");
/// ```
pub fn px_to_em(px: f64) -> String {
    px_to_em_with_base(px, BASE_FONT_SIZE)
}

/// Converts a pixel magnitude to an em magnitude against an arbitrary base.
pub fn px_to_em_with_base(px: f64, base: f64) -> String {
    let em = px / base;
    // `-0.0` would otherwise print as "-0"
    if em == 0.0 {
        return "0".to_string();
    }
    em.to_string()
}

/// Converts a camelCase property name to its kebab-case CSS form.
///
/// Names that already contain a dash, or start with one (custom properties),
/// are returned unchanged.
///
/// # Example
///
/// ```rust
/// use styled_breakpoint::to_kebab_case;
///
/// assert_eq!(to_kebab_case("fontSize"), "font-size");
/// assert_eq!(to_kebab_case("--main-color"), "--main-color");
/// ```
pub fn to_kebab_case(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_px_to_em_whole() {
        assert_eq!(px_to_em(32.0), "2");
        assert_eq!(px_to_em(768.0), "48");
        assert_eq!(px_to_em(16.0), "1");
    }

    #[test]
    fn test_px_to_em_fractional() {
        assert_eq!(px_to_em(24.0), "1.5");
        assert_eq!(px_to_em(767.0), "47.9375");
        assert_eq!(px_to_em(737.0), "46.0625");
        assert_eq!(px_to_em(1194.0), "74.625");
    }

    #[test]
    fn test_px_to_em_zero() {
        assert_eq!(px_to_em(0.0), "0");
        assert_eq!(px_to_em(-0.0), "0");
    }

    #[test]
    fn test_px_to_em_with_base() {
        assert_eq!(px_to_em_with_base(20.0, 10.0), "2");
        assert_eq!(px_to_em_with_base(15.0, 10.0), "1.5");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("fontSize"), "font-size");
        assert_eq!(to_kebab_case("color"), "color");
        assert_eq!(to_kebab_case("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(to_kebab_case("font-size"), "font-size");
        assert_eq!(to_kebab_case("--accentColor"), "--accentColor");
    }

    proptest! {
        #[test]
        fn prop_multiples_of_base_have_no_decimal_point(n in 0u32..100_000) {
            let out = px_to_em(f64::from(n) * BASE_FONT_SIZE);
            prop_assert!(!out.contains('.'));
            prop_assert_eq!(out, n.to_string());
        }

        #[test]
        fn prop_non_multiples_round_trip(n in 0u32..1_000_000) {
            prop_assume!(n % 16 != 0);
            let out = px_to_em(f64::from(n));
            prop_assert!(out.contains('.'));
            prop_assert!(!out.ends_with('0'));
            let parsed: f64 = out.parse().unwrap();
            prop_assert_eq!(parsed, f64::from(n) / BASE_FONT_SIZE);
        }
    }
}
