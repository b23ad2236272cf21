use crate::pipeline::clean::has_call_scheme;

/// Cells whose layout needs the tokenizer's ambiguity rules: digit groups split by
/// whitespace, semicolon lists, or a call-scheme marker.
pub fn is_special_format(raw: &str) -> bool {
    raw.contains(';') || has_call_scheme(raw) || has_spaced_digit_groups(raw)
}

fn has_spaced_digit_groups(raw: &str) -> bool {
    let mut after_digit = false;
    let mut in_gap = false;
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            if in_gap {
                return true;
            }
            after_digit = true;
        } else if ch.is_whitespace() {
            in_gap = after_digit;
        } else {
            after_digit = false;
            in_gap = false;
        }
    }
    false
}
