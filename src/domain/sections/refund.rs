use serde::{Deserialize, Serialize};

use crate::domain::record::RawRecord;

/// One stage of the refund policy table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundStage {
    pub order: f64,
    pub stage: String,
    pub refund: String,
}

impl RefundStage {
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        let stage = record.first_of(&["stage", "title"]).to_string();
        let refund = record.first_of(&["refund", "value"]).to_string();
        if stage.is_empty() || refund.is_empty() {
            return None;
        }
        Some(Self { order: record.order(), stage, refund })
    }

    pub fn sort(stages: &mut [RefundStage]) {
        stages.sort_by(|a, b| a.order.total_cmp(&b.order));
    }
}
