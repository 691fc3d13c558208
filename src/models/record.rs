//! Record model
//!
//! A single dated, categorized income or expense entry. Whether a record is
//! income or an expense is decided by the ledger sequence holding it, so the
//! amount is always stored positive.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::money::Money;

/// Timestamp format used for record dates (`YYYY-MM-DD HH:MM:SS`)
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Category used when none is given
pub const DEFAULT_CATEGORY: &str = "other";

/// Length of the `YYYY-MM` month key at the start of a date
const MONTH_KEY_LEN: usize = 7;

/// A single ledger entry
///
/// Fields are read-only once constructed; new records are only built by the
/// add operations in [`crate::services::ledger`], which validate the amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    amount: Money,
    #[serde(default = "default_category", deserialize_with = "category_or_default")]
    category: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    description: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    date: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

// An explicit `null` on disk reads the same as a missing key.

fn category_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_category))
}

fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record {
    /// Build a record dated at `at`. The caller guarantees `amount > 0`.
    pub(crate) fn new(
        amount: Money,
        category: &str,
        description: &str,
        at: NaiveDateTime,
    ) -> Self {
        let category = category.trim();
        Self {
            amount,
            category: if category.is_empty() {
                default_category()
            } else {
                category.to_string()
            },
            description: description.trim().to_string(),
            date: at.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// The `YYYY-MM` key this record rolls up into
    ///
    /// Dates shorter than a month key (only possible in hand-edited files)
    /// are used whole.
    pub fn month(&self) -> &str {
        self.date.get(..MONTH_KEY_LEN).unwrap_or(&self.date)
    }

    /// Plain key/value form with exactly the persisted keys
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("amount".into(), Value::from(self.amount.to_decimal()));
        map.insert("category".into(), Value::from(self.category.clone()));
        map.insert("description".into(), Value::from(self.description.clone()));
        map.insert("date".into(), Value::from(self.date.clone()));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
    }

    #[test]
    fn test_new_record() {
        let record = Record::new(Money::from_cents(50000), "salary", "March pay", at(2024, 3, 1));

        assert_eq!(record.amount().cents(), 50000);
        assert_eq!(record.category(), "salary");
        assert_eq!(record.description(), "March pay");
        assert_eq!(record.date(), "2024-03-01 09:05:03");
        assert_eq!(record.month(), "2024-03");
    }

    #[test]
    fn test_blank_category_defaults_to_other() {
        let record = Record::new(Money::from_cents(100), "   ", "", at(2024, 1, 1));
        assert_eq!(record.category(), "other");
        assert_eq!(record.description(), "");
    }

    #[test]
    fn test_to_map_has_exactly_persisted_keys() {
        let record = Record::new(Money::from_cents(1250), "food", "lunch", at(2024, 1, 15));
        let map = record.to_map();

        let mut keys: Vec<_> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["amount", "category", "date", "description"]);
        assert_eq!(map["amount"], Value::from(12.5));
        assert_eq!(map["date"], Value::from("2024-01-15 09:05:03"));
    }

    #[test]
    fn test_deserialize_fills_missing_fields_and_ignores_extras() {
        let record: Record =
            serde_json::from_str(r#"{"amount": "40", "date": "2024-01-02 10:00:00", "id": 7}"#)
                .unwrap();

        assert_eq!(record.amount().cents(), 4000);
        assert_eq!(record.category(), "other");
        assert_eq!(record.description(), "");

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_deserialize_treats_null_as_missing() {
        let record: Record = serde_json::from_str(
            r#"{"amount": 12, "category": null, "description": null, "date": null}"#,
        )
        .unwrap();

        assert_eq!(record.amount().cents(), 1200);
        assert_eq!(record.category(), "other");
        assert_eq!(record.description(), "");
        assert_eq!(record.date(), "");
    }

    #[test]
    fn test_short_date_month_key() {
        let record: Record = serde_json::from_str(r#"{"amount": 1, "date": "2024"}"#).unwrap();
        assert_eq!(record.month(), "2024");
    }
}
