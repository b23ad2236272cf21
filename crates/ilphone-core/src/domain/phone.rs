use crate::error::CoreError;
use crate::pipeline::normalize_token;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MOBILE_DIGITS: usize = 10;
pub const LANDLINE_DIGITS: usize = 9;
pub const MOBILE_PREFIX: &str = "05";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneClass {
    Mobile,
    Landline,
}

impl PhoneClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            PhoneClass::Mobile => "mobile",
            PhoneClass::Landline => "landline",
        }
    }

    pub const fn digit_len(self) -> usize {
        match self {
            PhoneClass::Mobile => MOBILE_DIGITS,
            PhoneClass::Landline => LANDLINE_DIGITS,
        }
    }

    /// Digits before the hyphen in the canonical form.
    pub const fn area_code_len(self) -> usize {
        match self {
            PhoneClass::Mobile => 3,
            PhoneClass::Landline => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Mobile,
    Landline,
    Rejected,
}

impl Classification {
    pub const fn class(self) -> Option<PhoneClass> {
        match self {
            Classification::Mobile => Some(PhoneClass::Mobile),
            Classification::Landline => Some(PhoneClass::Landline),
            Classification::Rejected => None,
        }
    }
}

/// A validated national number with its hyphenated rendering.
///
/// Only built by the pipeline, so `digits` always starts with `0` and has the
/// length its class requires.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalPhoneNumber {
    digits: String,
    class: PhoneClass,
    formatted: String,
}

impl CanonicalPhoneNumber {
    pub(crate) fn from_validated(digits: String, class: PhoneClass, formatted: String) -> Self {
        debug_assert_eq!(digits.len(), class.digit_len());
        Self {
            digits,
            class,
            formatted,
        }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn class(&self) -> PhoneClass {
        self.class
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}

impl fmt::Display for CanonicalPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

impl FromStr for CanonicalPhoneNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_token(s).ok_or_else(|| CoreError::InvalidPhoneNumber(s.trim().to_string()))
    }
}
