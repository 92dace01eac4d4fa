// src/model.rs
//
// Directory records. Categories are closed and assigned by the loader from
// the source a record came from; nothing in the JSON can change them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::sanitize::{non_blank, normalize_ws};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hospitals,
    Pharmacies,
    Clinics,
    Labs,
    Doctors,
}

impl Category {
    /// Display and load order.
    pub const ALL: [Category; 5] = [
        Category::Hospitals,
        Category::Pharmacies,
        Category::Clinics,
        Category::Labs,
        Category::Doctors,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Hospitals  => "hospitals",
            Category::Pharmacies => "pharmacies",
            Category::Clinics    => "clinics",
            Category::Labs       => "labs",
            Category::Doctors    => "doctors",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Hospitals  => "مستشفيات",
            Category::Pharmacies => "صيدليات",
            Category::Clinics    => "عيادات",
            Category::Labs       => "معامل",
            Category::Doctors    => "أطباء",
        }
    }

    pub fn default_file(self) -> &'static str {
        match self {
            Category::Hospitals  => "hospitals.json",
            Category::Pharmacies => "pharmacies.json",
            Category::Clinics    => "clinics.json",
            Category::Labs       => "labs.json",
            Category::Doctors    => "doctors.json",
        }
    }

    /// Accepts the key, its singular form, or the Arabic label.
    pub fn from_key(s: &str) -> Option<Self> {
        let t = s.trim();
        let lc = match t.to_ascii_lowercase().as_str() {
            "pharmacy" => s!("pharmacies"),
            other => s!(other),
        };
        Category::ALL.into_iter().find(|c| {
            let key = c.key();
            lc == key || lc == key.trim_end_matches('s') || t == c.label()
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_key(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One directory entry. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Provider {
    pub name: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    pub area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub phone: String,
}

impl Provider {
    /// Individual numbers from the raw phone field.
    pub fn phones(&self) -> Vec<&str> {
        split_phones(&self.phone)
    }
}

/// Split a phone field on hyphens, whitespace, and en-dashes.
/// Every piece is trimmed; empty pieces are dropped.
pub fn split_phones(raw: &str) -> Vec<&str> {
    raw.split(|c: char| c == '-' || c == '\u{2013}' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Why a raw record did not become a `Provider`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkipReason {
    #[error("record has no name")]
    MissingName,
    #[error("record \"{0}\" has no area")]
    MissingArea(String),
    #[error("record is not a provider object: {0}")]
    Malformed(String),
}

/// A record as it appears in a source file. Category is never read here.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<PhoneValue>,
}

/// Some files carry phones as bare numbers.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PhoneValue {
    Text(String),
    Number(serde_json::Number),
}

impl PhoneValue {
    fn into_text(self) -> String {
        match self {
            PhoneValue::Text(s) => s,
            PhoneValue::Number(n) => n.to_string(),
        }
    }
}

impl RawRecord {
    pub fn from_value(value: serde_json::Value) -> Result<Self, SkipReason> {
        serde_json::from_value(value).map_err(|e| SkipReason::Malformed(e.to_string()))
    }

    /// Stamp with `category` and enforce the required fields.
    pub fn into_provider(self, category: Category) -> Result<Provider, SkipReason> {
        let name = self.name.map(|s| normalize_ws(&s)).unwrap_or_default();
        if name.is_empty() {
            return Err(SkipReason::MissingName);
        }
        let area = self.area.as_deref().and_then(non_blank);
        let Some(area) = area else {
            return Err(SkipReason::MissingArea(name));
        };

        Ok(Provider {
            name,
            category,
            specialty: self.specialty.as_deref().and_then(non_blank),
            area,
            address: self.address.as_deref().and_then(non_blank),
            phone: self.phone.map(PhoneValue::into_text).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn split_phones_on_every_separator() {
        assert_eq!(split_phones("01234567 - 09876543"), vec!["01234567", "09876543"]);
        assert_eq!(split_phones("  0223456789 "), vec!["0223456789"]);
        assert_eq!(split_phones("111\u{2013}222 333"), vec!["111", "222", "333"]);
        assert!(split_phones(" - ").is_empty());
    }

    #[test]
    fn category_keys_round_trip() {
        for c in Category::ALL {
            assert_eq!(c.key().parse::<Category>(), Ok(c));
            assert_eq!(Category::from_key(c.label()), Some(c));
        }
        assert_eq!(Category::from_key("Clinic"), Some(Category::Clinics));
        assert_eq!(Category::from_key("pharmacy"), Some(Category::Pharmacies));
        assert!("dentists".parse::<Category>().is_err());
    }

    #[test]
    fn raw_record_ignores_file_category_and_numeric_phone() {
        let raw = RawRecord::from_value(json!({
            "name": "  مستشفى  السلام ",
            "category": "labs",
            "area": "Giza",
            "specialty": "  ",
            "phone": 123456
        }))
        .unwrap();
        let p = raw.into_provider(Category::Hospitals).unwrap();
        assert_eq!(p.category, Category::Hospitals);
        assert_eq!(p.name, "مستشفى السلام");
        assert_eq!(p.specialty, None);
        assert_eq!(p.phone, "123456");
    }

    #[test]
    fn raw_record_requires_name_and_area() {
        let no_area = RawRecord::from_value(json!({ "name": "A", "phone": "1" })).unwrap();
        assert_eq!(
            no_area.into_provider(Category::Labs),
            Err(SkipReason::MissingArea("A".into()))
        );
        let no_name = RawRecord::from_value(json!({ "area": "Cairo" })).unwrap();
        assert_eq!(no_name.into_provider(Category::Labs), Err(SkipReason::MissingName));
        assert!(matches!(RawRecord::from_value(json!("text")), Err(SkipReason::Malformed(_))));
    }
}
