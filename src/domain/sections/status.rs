// ============================================================
// MONTHLY SLOT STATUS
// ============================================================
// One row of the availability board: a month plus two commission
// slots, each classified open or closed from free-form cell text.

use serde::{Deserialize, Serialize};

use crate::domain::record::RawRecord;

/// Classification of one commission slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Open,
    Closed,
}

impl SlotStatus {
    /// Case-insensitive match against the editor vocabulary for a
    /// taken slot; anything unrecognized counts as open.
    pub fn classify(value: &str) -> Self {
        let v = value.trim().to_uppercase();
        if v == "CLOSED" || v == "X" || v == "●" || v == "FULL" {
            SlotStatus::Closed
        } else {
            SlotStatus::Open
        }
    }

    /// Glyph shown on the board.
    pub fn symbol(&self) -> &'static str {
        match self {
            SlotStatus::Closed => "♥",
            SlotStatus::Open => "●",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SlotStatus::Open => "open",
            SlotStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRow {
    /// ISO year-month, e.g. "2026-01"; doubles as the sort key.
    pub month: String,
    pub slot1: SlotStatus,
    pub slot2: SlotStatus,
    pub note: String,
}

impl StatusRow {
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        let month = record.get("month").to_string();
        if month.is_empty() {
            return None;
        }
        Some(Self {
            month,
            slot1: SlotStatus::classify(record.get("slot1")),
            slot2: SlotStatus::classify(record.get("slot2")),
            note: record.get("note").to_string(),
        })
    }

    /// Lexicographic ascending by month, not by ordering key.
    pub fn sort(rows: &mut [StatusRow]) {
        rows.sort_by(|a, b| a.month.cmp(&b.month));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_vocabulary() {
        for v in ["CLOSED", "closed", "x", "X", "●", "full", " FULL "] {
            assert_eq!(SlotStatus::classify(v), SlotStatus::Closed, "input {:?}", v);
        }
    }

    #[test]
    fn test_anything_else_is_open() {
        for v in ["", "open", "O", "available", "1"] {
            assert_eq!(SlotStatus::classify(v), SlotStatus::Open, "input {:?}", v);
        }
    }

    #[test]
    fn test_symbols() {
        assert_eq!(SlotStatus::Closed.symbol(), "♥");
        assert_eq!(SlotStatus::Open.symbol(), "●");
    }

    #[test]
    fn test_requires_month() {
        let record = RawRecord::from_pairs(&[("slot1", "X")]);
        assert!(StatusRow::from_record(&record).is_none());
    }

    #[test]
    fn test_sorted_by_month() {
        let make = |month: &str| StatusRow {
            month: month.into(),
            slot1: SlotStatus::Open,
            slot2: SlotStatus::Open,
            note: String::new(),
        };
        let mut rows = vec![make("2026-03"), make("2025-12"), make("2026-01")];
        StatusRow::sort(&mut rows);
        let months: Vec<_> = rows.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, ["2025-12", "2026-01", "2026-03"]);
    }
}
