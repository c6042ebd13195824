use crate::application::pipeline::{run_section, PipelineOutput};
use crate::domain::error::Result;
use crate::domain::sections::PortfolioEntry;
use crate::infrastructure::config::SectionConfig;
use crate::infrastructure::fetch::CsvSource;

/// Portfolio gallery of embedded videos.
pub struct PortfolioSection {
    config: SectionConfig,
}

impl PortfolioSection {
    pub fn new(config: SectionConfig) -> Self {
        Self { config }
    }

    pub async fn load(&self, source: &dyn CsvSource) -> Result<PipelineOutput<PortfolioEntry>> {
        run_section(
            source,
            &self.config.csv_url,
            &self.config.section_key,
            "No portfolio entries",
            PortfolioEntry::from_record,
            |entries| PortfolioEntry::sort(entries),
        )
        .await
    }
}
