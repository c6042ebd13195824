use crate::application::pipeline::{run_section, PipelineOutput};
use crate::domain::error::Result;
use crate::domain::sections::PriceEntry;
use crate::infrastructure::config::SectionConfig;
use crate::infrastructure::fetch::CsvSource;

/// Pricing catalog: grouped price rows, known groups first.
pub struct PricingSection {
    config: SectionConfig,
}

impl PricingSection {
    pub fn new(config: SectionConfig) -> Self {
        Self { config }
    }

    pub async fn load(&self, source: &dyn CsvSource) -> Result<PipelineOutput<PriceEntry>> {
        run_section(
            source,
            &self.config.csv_url,
            &self.config.section_key,
            "No pricing data",
            PriceEntry::from_record,
            PriceEntry::sort,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::pipeline::testing::MockSource;
    use crate::domain::sections::PriceGroup;

    const URL: &str = "https://example.com/prices.csv";

    #[tokio::test]
    async fn test_groups_sort_in_display_order() {
        let source = MockSource::new().with_csv(
            URL,
            "section,category,title,price,order\n\
             pricing,기타,커미션 외 문의,문의,1\n\
             pricing,리깅,풀 리깅,150000,1\n\
             pricing,옵션,표정 추가,15000,1\n",
        );
        let section = PricingSection::new(SectionConfig {
            csv_url: URL.to_string(),
            section_key: "pricing".to_string(),
        });
        let out = section.load(&source).await.unwrap();

        let groups: Vec<_> = out.items.iter().map(|e| e.group.clone()).collect();
        assert_eq!(
            groups,
            [PriceGroup::Rigging, PriceGroup::Option, PriceGroup::Etc]
        );
        assert_eq!(out.items[0].price, "150,000원");
        assert_eq!(out.items[2].price, "문의");
    }
}
