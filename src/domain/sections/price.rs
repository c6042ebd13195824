// ============================================================
// PRICING CATALOG
// ============================================================
// Price rows are bucketed into display groups. The sheet labels
// groups in Korean; a fixed table maps known labels (and their
// English lowercase keys) onto five canonical groups. Unknown
// labels still render, as their own lowercased group after the
// known five.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::record::RawRecord;

const CURRENCY_SUFFIX: &str = "원";

/// Canonical display groups, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceGroup {
    Rigging,
    Additional,
    Asset,
    Option,
    Etc,
    /// Unrecognized label, kept as its lowercased form.
    Custom(String),
}

impl PriceGroup {
    /// Resolve a sheet label to a group. Empty labels resolve to None
    /// (the row fails validation); anything unrecognized becomes a
    /// Custom group so the row still renders.
    pub fn resolve(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }
        let group = match trimmed {
            "리깅" => PriceGroup::Rigging,
            "추가" => PriceGroup::Additional,
            "에셋" => PriceGroup::Asset,
            "옵션" => PriceGroup::Option,
            "기타" => PriceGroup::Etc,
            _ => match trimmed.to_lowercase().as_str() {
                "rigging" => PriceGroup::Rigging,
                "additional" => PriceGroup::Additional,
                "asset" => PriceGroup::Asset,
                "option" => PriceGroup::Option,
                "etc" => PriceGroup::Etc,
                other => PriceGroup::Custom(other.to_string()),
            },
        };
        Some(group)
    }

    pub fn key(&self) -> &str {
        match self {
            PriceGroup::Rigging => "rigging",
            PriceGroup::Additional => "additional",
            PriceGroup::Asset => "asset",
            PriceGroup::Option => "option",
            PriceGroup::Etc => "etc",
            PriceGroup::Custom(key) => key,
        }
    }

    /// Fixed rank for known groups; Custom groups sort after all of
    /// them, by first appearance (see `PriceEntry::sort`).
    fn fixed_rank(&self) -> Option<usize> {
        match self {
            PriceGroup::Rigging => Some(0),
            PriceGroup::Additional => Some(1),
            PriceGroup::Asset => Some(2),
            PriceGroup::Option => Some(3),
            PriceGroup::Etc => Some(4),
            PriceGroup::Custom(_) => None,
        }
    }
}

const KNOWN_GROUP_COUNT: usize = 5;

/// Render a raw price cell for display. Numeric cells get thousands
/// separators and the currency suffix; anything unparseable (e.g.
/// "문의") is shown verbatim.
pub fn format_price(raw: &str) -> String {
    let trimmed = raw.trim();
    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return trimmed.to_string();
    }
    match cleaned.parse::<f64>() {
        Ok(value) => format!("{}{}", group_thousands(value), CURRENCY_SUFFIX),
        Err(_) => trimmed.to_string(),
    }
}

fn group_thousands(value: f64) -> String {
    let formatted = format!("{}", value);
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub group: PriceGroup,
    pub order: f64,
    pub title: String,
    /// Display-ready price string.
    pub price: String,
    pub note: String,
}

impl PriceEntry {
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        let group = PriceGroup::resolve(record.first_of(&["category", "group"]))?;
        let title = record.get("title").to_string();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            group,
            order: record.order(),
            title,
            price: format_price(record.get("price")),
            note: record.get("note").to_string(),
        })
    }

    /// Primary: fixed group display order, then Custom groups by first
    /// appearance. Secondary: ordering key. Stable throughout.
    pub fn sort(entries: &mut Vec<PriceEntry>) {
        let mut custom_rank: HashMap<String, usize> = HashMap::new();
        for entry in entries.iter() {
            if entry.group.fixed_rank().is_none() {
                let next = custom_rank.len();
                custom_rank.entry(entry.group.key().to_string()).or_insert(next);
            }
        }
        let rank = |group: &PriceGroup| match group.fixed_rank() {
            Some(rank) => rank,
            None => KNOWN_GROUP_COUNT + custom_rank[group.key()],
        };
        entries.sort_by(|a, b| {
            rank(&a.group)
                .cmp(&rank(&b.group))
                .then(a.order.total_cmp(&b.order))
        });
    }
}
