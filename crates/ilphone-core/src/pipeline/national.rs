pub const COUNTRY_CODE: &str = "972";

/// Drops a leading `+` and then the country code, keeping any leading zeros.
pub fn strip_international_prefix(cleaned: &str) -> &str {
    let without_plus = cleaned.strip_prefix('+').unwrap_or(cleaned);
    without_plus.strip_prefix(COUNTRY_CODE).unwrap_or(without_plus)
}

/// Country code first, then every leading zero.
pub fn national_significant_number(cleaned: &str) -> &str {
    strip_international_prefix(cleaned).trim_start_matches('0')
}

pub fn reconstruct(national: &str) -> Option<String> {
    if national.is_empty() {
        return None;
    }
    let mut out = String::with_capacity(national.len() + 1);
    out.push('0');
    out.push_str(national);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::{national_significant_number, reconstruct, strip_international_prefix};

    #[test]
    fn strips_plus_and_country_code() {
        assert_eq!(national_significant_number("+972501234567"), "501234567");
        assert_eq!(national_significant_number("972501234567"), "501234567");
    }

    #[test]
    fn strips_zeros_after_country_code() {
        assert_eq!(national_significant_number("+9720501234567"), "501234567");
        assert_eq!(national_significant_number("00031234567"), "31234567");
    }

    #[test]
    fn country_code_only_at_start() {
        assert_eq!(national_significant_number("0972123456"), "972123456");
    }

    #[test]
    fn international_prefix_keeps_zeros() {
        assert_eq!(strip_international_prefix("+97203"), "03");
        assert_eq!(strip_international_prefix("0501234567"), "0501234567");
    }

    #[test]
    fn reconstruct_adds_exactly_one_zero() {
        assert_eq!(reconstruct("501234567").as_deref(), Some("0501234567"));
        assert_eq!(
            reconstruct(national_significant_number("0000501234567")).as_deref(),
            Some("0501234567")
        );
        assert!(reconstruct("").is_none());
        assert!(reconstruct(national_significant_number("+972000")).is_none());
    }
}
