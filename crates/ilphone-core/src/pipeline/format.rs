use crate::domain::phone::{CanonicalPhoneNumber, PhoneClass};
use crate::pipeline::validate::classify;

pub fn format_number(digits: &str, class: PhoneClass) -> String {
    let (area, subscriber) = digits.split_at(class.area_code_len());
    format!("{area}-{subscriber}")
}

pub fn canonicalize(candidate: String) -> Option<CanonicalPhoneNumber> {
    let class = classify(&candidate).class()?;
    let formatted = format_number(&candidate, class);
    Some(CanonicalPhoneNumber::from_validated(candidate, class, formatted))
}

#[cfg(test)]
mod tests {
    use super::{canonicalize, format_number};
    use crate::domain::phone::PhoneClass;

    #[test]
    fn mobile_splits_after_third_digit() {
        assert_eq!(format_number("0501234567", PhoneClass::Mobile), "050-1234567");
    }

    #[test]
    fn landline_splits_after_second_digit() {
        assert_eq!(format_number("031234567", PhoneClass::Landline), "03-1234567");
    }

    #[test]
    fn canonicalize_rejects_invalid_shapes() {
        assert!(canonicalize("0721234567".to_string()).is_none());
        let phone = canonicalize("097654321".to_string()).expect("landline");
        assert_eq!(phone.formatted(), "09-7654321");
        assert_eq!(phone.class(), PhoneClass::Landline);
    }
}
