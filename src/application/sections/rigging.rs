use crate::application::pipeline::{run_section, PipelineOutput};
use crate::domain::error::Result;
use crate::domain::sections::RiggingDetail;
use crate::infrastructure::config::SectionConfig;
use crate::infrastructure::fetch::CsvSource;

/// Rigging detail gallery.
pub struct RiggingSection {
    config: SectionConfig,
}

impl RiggingSection {
    pub fn new(config: SectionConfig) -> Self {
        Self { config }
    }

    pub async fn load(&self, source: &dyn CsvSource) -> Result<PipelineOutput<RiggingDetail>> {
        run_section(
            source,
            &self.config.csv_url,
            &self.config.section_key,
            "No rigging details",
            RiggingDetail::from_record,
            |details| RiggingDetail::sort(details),
        )
        .await
    }
}
