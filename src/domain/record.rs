// ============================================================
// RAW RECORD
// ============================================================
// Header-keyed view of one parsed CSV row. Keys and values are
// trimmed at construction; lookups never fail, absent columns
// read as the empty string.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Build a record by zipping headers against one row of cells.
    /// Cells beyond the header length are ignored; missing cells
    /// default to the empty string. A duplicate header keeps the
    /// value of the later column.
    pub fn from_row(headers: &[String], cells: &[String]) -> Self {
        let mut fields = HashMap::with_capacity(headers.len());
        for (idx, header) in headers.iter().enumerate() {
            let value = cells.get(idx).map(|c| c.trim()).unwrap_or("");
            fields.insert(header.clone(), value.to_string());
        }
        Self { fields }
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let fields = pairs
            .iter()
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();
        Self { fields }
    }

    /// Value under `key`, or "" when the column is absent.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    /// First non-empty value among `keys`, or "".
    pub fn first_of(&self, keys: &[&str]) -> &str {
        keys.iter()
            .map(|k| self.get(k))
            .find(|v| !v.is_empty())
            .unwrap_or("")
    }

    /// Numeric ordering key; non-numeric or absent values read as 0.
    pub fn order(&self) -> f64 {
        self.get("order").parse::<f64>().unwrap_or(0.0)
    }

    /// Section discriminator: the `section` column, falling back to
    /// `group` when absent.
    pub fn section_tag(&self) -> &str {
        self.first_of(&["section", "group"])
    }
}
