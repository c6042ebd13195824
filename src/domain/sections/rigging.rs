use serde::{Deserialize, Serialize};

use crate::domain::record::RawRecord;
use crate::shared::drive_url::normalize_drive_image_url;

/// One card of the rigging detail gallery. Image is optional; a
/// text-only detail still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiggingDetail {
    pub order: f64,
    pub title: String,
    pub description: String,
    pub image: String,
}

impl RiggingDetail {
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        let title = record.get("title").to_string();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            order: record.order(),
            title,
            description: record.first_of(&["description", "desc"]).to_string(),
            image: normalize_drive_image_url(record.get("image")),
        })
    }

    pub fn sort(details: &mut [RiggingDetail]) {
        details.sort_by(|a, b| a.order.total_cmp(&b.order));
    }
}
