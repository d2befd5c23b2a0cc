//! Native-currency unit conversions
//!
//! The chain denominates value in wei (18 decimals). User-facing amounts
//! are decimal strings in whole native units. All arithmetic is checked
//! integer math on u128 - no floats touch on-chain quantities.

/// Wei per whole native unit (18 decimals)
pub const WEI_PER_NATIVE: u128 = 1_000_000_000_000_000_000;

const NATIVE_DECIMALS: usize = 18;

/// Parse a decimal native-unit string (e.g. "0.05") into wei.
///
/// Returns None for empty input, signs, exponents, more than 18
/// fractional digits, or overflow. A value below 1 wei parses to
/// Some(0) only when the input is literally zero; sub-wei fractions
/// are rejected.
pub fn parse_native(input: &str) -> Option<u128> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (trimmed, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac_part.len() > NATIVE_DECIMALS {
        return None;
    }

    let whole: u128 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };

    let frac_wei: u128 = if frac_part.is_empty() {
        0
    } else {
        let scale = 10u128.pow((NATIVE_DECIMALS - frac_part.len()) as u32);
        let frac: u128 = frac_part.parse().ok()?;
        frac.checked_mul(scale)?
    };

    whole
        .checked_mul(WEI_PER_NATIVE)?
        .checked_add(frac_wei)
}

/// Format a wei amount as a decimal native-unit string, trimming
/// trailing fractional zeros ("0.05", "1", "0.000001").
pub fn format_native(wei: u128) -> String {
    let whole = wei / WEI_PER_NATIVE;
    let frac = wei % WEI_PER_NATIVE;
    if frac == 0 {
        return whole.to_string();
    }
    let frac_str = format!("{:018}", frac);
    let trimmed = frac_str.trim_end_matches('0');
    format!("{}.{}", whole, trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_native_whole_units() {
        assert_eq!(parse_native("1"), Some(WEI_PER_NATIVE));
        assert_eq!(parse_native("0"), Some(0));
        assert_eq!(parse_native("21000000"), Some(21_000_000 * WEI_PER_NATIVE));
    }

    #[test]
    fn test_parse_native_minimum_funding() {
        assert_eq!(parse_native("0.05"), Some(50_000_000_000_000_000));
    }

    #[test]
    fn test_parse_native_small_price() {
        assert_eq!(parse_native("0.00001"), Some(10_000_000_000_000));
        assert_eq!(parse_native("0.000001"), Some(1_000_000_000_000));
    }

    #[test]
    fn test_parse_native_leading_dot() {
        assert_eq!(parse_native(".05"), Some(50_000_000_000_000_000));
    }

    #[test]
    fn test_parse_native_rejects_garbage() {
        assert_eq!(parse_native(""), None);
        assert_eq!(parse_native("."), None);
        assert_eq!(parse_native("-1"), None);
        assert_eq!(parse_native("+1"), None);
        assert_eq!(parse_native("1e-6"), None);
        assert_eq!(parse_native("abc"), None);
        assert_eq!(parse_native("1.2.3"), None);
    }

    #[test]
    fn test_parse_native_rejects_sub_wei() {
        // 19 fractional digits cannot be represented
        assert_eq!(parse_native("0.0000000000000000001"), None);
    }

    #[test]
    fn test_format_native() {
        assert_eq!(format_native(50_000_000_000_000_000), "0.05");
        assert_eq!(format_native(WEI_PER_NATIVE), "1");
        assert_eq!(format_native(0), "0");
        assert_eq!(format_native(1_000_000_000_000), "0.000001");
    }

    #[test]
    fn test_roundtrip_exact() {
        for s in ["0.05", "1", "0.000001", "123.456"] {
            let wei = parse_native(s).unwrap();
            assert_eq!(format_native(wei), s);
        }
    }
}
