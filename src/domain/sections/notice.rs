use serde::{Deserialize, Serialize};

use crate::domain::record::RawRecord;

/// One bullet of the notice board.
///
/// `text` is rendered as rich content without escaping. The sheet is
/// an access-controlled collaborator, not user input; see the trust
/// note on `interfaces::render`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeItem {
    pub order: f64,
    pub text: String,
}

impl NoticeItem {
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        let text = record.first_of(&["text", "content", "item"]).to_string();
        if text.is_empty() {
            return None;
        }
        Some(Self { order: record.order(), text })
    }

    pub fn sort(items: &mut [NoticeItem]) {
        items.sort_by(|a, b| a.order.total_cmp(&b.order));
    }
}
