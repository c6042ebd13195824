use serde::{Deserialize, Serialize};

use crate::domain::record::RawRecord;
use crate::shared::drive_url::normalize_shared_image_url;

/// One card of the collaborator gallery, linking out to the
/// collaborator's own page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorEntry {
    pub order: f64,
    pub title: String,
    pub url: String,
    pub image: String,
}

impl CollaboratorEntry {
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        let title = record.get("title").to_string();
        let url = record.get("url").to_string();
        if title.is_empty() || url.is_empty() {
            return None;
        }
        Some(Self {
            order: record.order(),
            image: normalize_shared_image_url(record.get("image")),
            title,
            url,
        })
    }

    pub fn sort(entries: &mut [CollaboratorEntry]) {
        entries.sort_by(|a, b| a.order.total_cmp(&b.order));
    }
}
