pub const CALL_SCHEME: &str = "tel:";
pub const PLACEHOLDER: &str = "nan";
pub const MIN_CLEANED_LEN: usize = 2;

/// Reduces a token to digits and an optional leading `+`.
///
/// Returns `None` when fewer than [`MIN_CLEANED_LEN`] characters survive.
pub fn clean_token(token: &str) -> Option<String> {
    let without_scheme = strip_call_scheme(token.trim());
    let without_placeholder = remove_placeholder(without_scheme);

    let mut out = String::with_capacity(without_placeholder.len());
    for ch in without_placeholder.chars() {
        match ch {
            '*' | '/' => continue,
            '+' if out.is_empty() => out.push('+'),
            ch if ch.is_ascii_digit() => out.push(ch),
            _ => {}
        }
    }

    if out.len() < MIN_CLEANED_LEN {
        return None;
    }
    Some(out)
}

pub fn has_call_scheme(value: &str) -> bool {
    find_ignore_ascii_case(value, CALL_SCHEME).is_some()
}

fn strip_call_scheme(value: &str) -> &str {
    match value.get(..CALL_SCHEME.len()) {
        Some(head) if head.eq_ignore_ascii_case(CALL_SCHEME) => {
            value[CALL_SCHEME.len()..].trim_start()
        }
        _ => value,
    }
}

fn remove_placeholder(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(idx) = find_ignore_ascii_case(rest, PLACEHOLDER) {
        out.push_str(&rest[..idx]);
        rest = &rest[idx + PLACEHOLDER.len()..];
    }
    out.push_str(rest);
    out
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::{clean_token, has_call_scheme};

    #[test]
    fn clean_strips_call_scheme() {
        assert_eq!(clean_token("tel: 09-7654321").as_deref(), Some("097654321"));
        assert_eq!(clean_token("TEL:+972501234567").as_deref(), Some("+972501234567"));
    }

    #[test]
    fn clean_removes_asterisks_and_slashes() {
        assert_eq!(clean_token("**03/1234567**").as_deref(), Some("031234567"));
    }

    #[test]
    fn clean_removes_placeholder_anywhere() {
        assert_eq!(clean_token("NaN 0501234567 nan").as_deref(), Some("0501234567"));
        assert!(clean_token("nan").is_none());
        assert!(clean_token("nan **").is_none());
    }

    #[test]
    fn clean_keeps_only_leading_plus() {
        assert_eq!(clean_token("+972-50+1234567").as_deref(), Some("+972501234567"));
        assert_eq!(clean_token("(+972) 50").as_deref(), Some("+97250"));
    }

    #[test]
    fn clean_rejects_too_short() {
        assert!(clean_token("7").is_none());
        assert!(clean_token("+").is_none());
        assert!(clean_token("   ").is_none());
        assert_eq!(clean_token("12").as_deref(), Some("12"));
    }

    #[test]
    fn call_scheme_detection_ignores_case() {
        assert!(has_call_scheme("Tel: 03-1234567"));
        assert!(!has_call_scheme("03-1234567"));
    }
}
