// ============================================================
// NOTICE SECTION
// ============================================================
// Three sub-views (monthly slot status, notice items, refund
// policy) fed by three CSV endpoints fetched concurrently. The
// section renders all-or-nothing: any sub-feed failing, or coming
// back empty, fails the whole section with one combined error.

use crate::application::pipeline::{run_section, PipelineOutput};
use crate::domain::error::Result;
use crate::domain::sections::{NoticeItem, RefundStage, StatusRow};
use crate::infrastructure::config::NoticeConfig;
use crate::infrastructure::fetch::CsvSource;

/// The fully loaded notice board, only constructed when all three
/// sub-feeds resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeBoard {
    pub status: PipelineOutput<StatusRow>,
    pub items: PipelineOutput<NoticeItem>,
    pub refund: PipelineOutput<RefundStage>,
}

pub struct NoticeSection {
    config: NoticeConfig,
}

impl NoticeSection {
    pub fn new(config: NoticeConfig) -> Self {
        Self { config }
    }

    pub async fn load(&self, source: &dyn CsvSource) -> Result<NoticeBoard> {
        let key = self.config.section_key.as_str();

        let status = run_section(
            source,
            &self.config.status_csv_url,
            key,
            "No slot status rows",
            StatusRow::from_record,
            |rows| StatusRow::sort(rows),
        );
        let items = run_section(
            source,
            &self.config.items_csv_url,
            key,
            "No notice items",
            NoticeItem::from_record,
            |items| NoticeItem::sort(items),
        );
        let refund = run_section(
            source,
            &self.config.refund_csv_url,
            key,
            "No refund stages",
            RefundStage::from_record,
            |stages| RefundStage::sort(stages),
        );

        let (status, items, refund) = tokio::try_join!(status, items, refund)?;
        Ok(NoticeBoard { status, items, refund })
    }
}
