use crate::application::pipeline::{run_section, PipelineOutput};
use crate::domain::error::Result;
use crate::domain::sections::CollaboratorEntry;
use crate::infrastructure::config::SectionConfig;
use crate::infrastructure::fetch::CsvSource;

/// Collaborator gallery.
pub struct CollaboratorsSection {
    config: SectionConfig,
}

impl CollaboratorsSection {
    pub fn new(config: SectionConfig) -> Self {
        Self { config }
    }

    pub async fn load(&self, source: &dyn CsvSource) -> Result<PipelineOutput<CollaboratorEntry>> {
        run_section(
            source,
            &self.config.csv_url,
            &self.config.section_key,
            "No collaborators",
            CollaboratorEntry::from_record,
            |entries| CollaboratorEntry::sort(entries),
        )
        .await
    }
}
