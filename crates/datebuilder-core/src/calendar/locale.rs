//! Locale identifiers and the region week data derived from them.
//!
//! Only the week conventions are modelled: first weekday, minimum days in the
//! first week of a year, and weekend days. Values follow the CLDR `weekData`
//! supplement for the regions listed; every other region uses the world
//! defaults (Monday, 1, Saturday and Sunday).

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

const SUNDAY_FIRST: &[&str] = &[
    "AG", "AS", "BD", "BR", "BS", "BT", "BW", "BZ", "CA", "CN", "CO", "DM", "DO", "ET", "GT",
    "GU", "HK", "HN", "ID", "IL", "IN", "JM", "JP", "KE", "KH", "KR", "LA", "MH", "MM", "MO",
    "MT", "MX", "MZ", "NI", "NP", "PA", "PE", "PH", "PK", "PR", "PT", "PY", "SA", "SG", "SV",
    "TH", "TT", "TW", "UM", "US", "VE", "VI", "WS", "YE", "ZA", "ZW",
];

const SATURDAY_FIRST: &[&str] = &[
    "AE", "AF", "BH", "DJ", "DZ", "EG", "IQ", "IR", "JO", "KW", "LY", "OM", "QA", "SD", "SY",
];

const FRIDAY_FIRST: &[&str] = &["MV"];

const FOUR_DAY_FIRST_WEEK: &[&str] = &[
    "AD", "AN", "AT", "AX", "BE", "BG", "CH", "CZ", "DE", "DK", "EE", "ES", "FI", "FJ", "FO",
    "FR", "GB", "GF", "GG", "GI", "GP", "GR", "HU", "IE", "IM", "IS", "IT", "JE", "LI", "LT",
    "LU", "MC", "MQ", "NL", "NO", "PL", "RE", "RU", "SE", "SJ", "SK", "SM", "VA",
];

const FRIDAY_SATURDAY_WEEKEND: &[&str] = &[
    "AE", "BH", "DZ", "EG", "IL", "IQ", "JO", "KW", "LY", "OM", "QA", "SA", "SD", "SY", "YE",
];

/// Regions assumed when an identifier carries only a language.
const LANGUAGE_REGIONS: &[(&str, &str)] = &[
    ("ar", "EG"),
    ("de", "DE"),
    ("en", "US"),
    ("es", "ES"),
    ("fr", "FR"),
    ("he", "IL"),
    ("it", "IT"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("nl", "NL"),
    ("pl", "PL"),
    ("pt", "BR"),
    ("ru", "RU"),
    ("sv", "SE"),
    ("uk", "UA"),
    ("zh", "CN"),
];

/// A locale identifier such as `en_US`, `ru-RU` or `he`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale {
    identifier: String,
}

impl Locale {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Parse a POSIX locale string (`ru_RU.UTF-8@euro`) into a locale.
    pub fn from_posix(value: &str) -> Option<Self> {
        let base = value.split(['.', '@']).next()?.trim();
        if base.is_empty() || base == "C" || base == "POSIX" {
            return None;
        }
        Some(Self::new(base))
    }

    pub fn language(&self) -> &str {
        self.identifier
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
    }

    /// Upper-case region code, explicit or implied by the language.
    pub fn region(&self) -> Option<String> {
        let explicit = self
            .identifier
            .split(['_', '-'])
            .skip(1)
            .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()));
        if let Some(region) = explicit {
            return Some(region.to_ascii_uppercase());
        }
        let language = self.language().to_ascii_lowercase();
        LANGUAGE_REGIONS
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, region)| (*region).to_string())
    }

    pub fn first_weekday(&self) -> Weekday {
        match self.region() {
            Some(r) if SUNDAY_FIRST.contains(&r.as_str()) => Weekday::Sun,
            Some(r) if SATURDAY_FIRST.contains(&r.as_str()) => Weekday::Sat,
            Some(r) if FRIDAY_FIRST.contains(&r.as_str()) => Weekday::Fri,
            _ => Weekday::Mon,
        }
    }

    pub fn minimum_days_in_first_week(&self) -> u8 {
        match self.region() {
            Some(r) if FOUR_DAY_FIRST_WEEK.contains(&r.as_str()) => 4,
            _ => 1,
        }
    }

    pub fn weekend(&self) -> Vec<Weekday> {
        match self.region().as_deref() {
            Some(r) if FRIDAY_SATURDAY_WEEKEND.contains(&r) => vec![Weekday::Fri, Weekday::Sat],
            Some("AF") => vec![Weekday::Thu, Weekday::Fri],
            Some("IR") => vec![Weekday::Fri],
            Some("IN") | Some("UG") => vec![Weekday::Sun],
            _ => vec![Weekday::Sat, Weekday::Sun],
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en_US")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

impl From<&str> for Locale {
    fn from(identifier: &str) -> Self {
        Self::new(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_is_parsed_from_either_separator() {
        assert_eq!(Locale::new("en_US").region().as_deref(), Some("US"));
        assert_eq!(Locale::new("ru-ru").region().as_deref(), Some("RU"));
        assert_eq!(Locale::new("zh_Hant_TW").region().as_deref(), Some("TW"));
    }

    #[test]
    fn language_only_implies_region() {
        assert_eq!(Locale::new("he").region().as_deref(), Some("IL"));
        assert_eq!(Locale::new("xx").region(), None);
    }

    #[test]
    fn posix_strings_drop_encoding_and_modifier() {
        assert_eq!(Locale::from_posix("ru_RU.UTF-8"), Some(Locale::new("ru_RU")));
        assert_eq!(Locale::from_posix("de_DE@euro"), Some(Locale::new("de_DE")));
        assert_eq!(Locale::from_posix("C.UTF-8"), None);
        assert_eq!(Locale::from_posix(""), None);
    }

    #[test]
    fn first_weekday_by_region() {
        assert_eq!(Locale::new("en_US").first_weekday(), Weekday::Sun);
        assert_eq!(Locale::new("ru_RU").first_weekday(), Weekday::Mon);
        assert_eq!(Locale::new("ar_EG").first_weekday(), Weekday::Sat);
        assert_eq!(Locale::new("xx_ZZ").first_weekday(), Weekday::Mon);
    }

    #[test]
    fn minimum_days_by_region() {
        assert_eq!(Locale::new("de_DE").minimum_days_in_first_week(), 4);
        assert_eq!(Locale::new("en_US").minimum_days_in_first_week(), 1);
    }

    #[test]
    fn weekend_by_region() {
        assert_eq!(Locale::new("he_IL").weekend(), vec![Weekday::Fri, Weekday::Sat]);
        assert_eq!(Locale::new("en_GB").weekend(), vec![Weekday::Sat, Weekday::Sun]);
        assert_eq!(Locale::new("hi_IN").weekend(), vec![Weekday::Sun]);
    }
}
