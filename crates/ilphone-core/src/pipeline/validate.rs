use crate::domain::phone::{Classification, LANDLINE_DIGITS, MOBILE_DIGITS, MOBILE_PREFIX};

pub fn classify(candidate: &str) -> Classification {
    if !candidate.starts_with('0') || !candidate.bytes().all(|b| b.is_ascii_digit()) {
        return Classification::Rejected;
    }

    let mobile_prefix = candidate.starts_with(MOBILE_PREFIX);
    match candidate.len() {
        MOBILE_DIGITS if mobile_prefix => Classification::Mobile,
        LANDLINE_DIGITS if !mobile_prefix => Classification::Landline,
        _ => Classification::Rejected,
    }
}
