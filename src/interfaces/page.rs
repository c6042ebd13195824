// ============================================================
// PAGE ASSEMBLY
// ============================================================
// Runs every section pipeline concurrently and assembles one HTML
// page. Failures are isolated: a failed section contributes only
// its error slot, siblings render normally.

use tracing::error;

use crate::application::pipeline::PipelineOutput;
use crate::application::sections::{
    CollaboratorsSection, NoticeSection, PortfolioSection, PricingSection, RiggingSection,
    SliderSection,
};
use crate::domain::error::Result;
use crate::infrastructure::config::SiteConfig;
use crate::infrastructure::fetch::CsvSource;
use crate::interfaces::html::{
    CollaboratorsRenderer, NoticeItemsRenderer, PortfolioRenderer, PricingRenderer,
    RefundRenderer, RiggingRenderer, SliderRenderer, StatusRenderer,
};
use crate::interfaces::render::{ErrorSlot, SectionRenderer};

/// Resolve one section's outcome into markup plus its error slot.
/// The slot starts cleared (step one of every pipeline run); a
/// failure is logged and shown as plain text, nothing else renders.
fn finish<T>(
    section: &str,
    outcome: Result<PipelineOutput<T>>,
    render: impl FnOnce(&[T]) -> String,
) -> (String, ErrorSlot) {
    let mut slot = ErrorSlot::new();
    match outcome {
        Ok(out) => (render(&out.items), slot),
        Err(err) => {
            error!(section, error = %err, "Section failed to load");
            slot.show(&err.to_string());
            (String::new(), slot)
        }
    }
}

fn section_html(id: &str, content: &str, slot: &ErrorSlot) -> String {
    let error_html = if slot.is_visible() {
        format!(
            "<p class=\"sectionError\">{}</p>",
            crate::interfaces::html::escape_html(slot.message())
        )
    } else {
        "<p class=\"sectionError\" hidden></p>".to_string()
    };
    format!(
        "<section id=\"{}\">{}{}</section>",
        id, error_html, content
    )
}

fn render_with<T>(renderer: &impl SectionRenderer<T>, items: &[T]) -> String {
    let mut out = String::new();
    renderer.render(items, &mut out);
    out
}

pub async fn render_page(config: &SiteConfig, source: &dyn CsvSource) -> String {
    let slider = SliderSection::new(config.slider.clone());
    let notice = NoticeSection::new(config.notice.clone());
    let pricing = PricingSection::new(config.pricing.clone());
    let rigging = RiggingSection::new(config.rigging.clone());
    let portfolio = PortfolioSection::new(config.portfolio.clone());
    let collaborators = CollaboratorsSection::new(config.collaborators.clone());

    let (slider_out, notice_out, pricing_out, rigging_out, portfolio_out, collab_out) = tokio::join!(
        slider.load(source),
        notice.load(source),
        pricing.load(source),
        rigging.load(source),
        portfolio.load(source),
        collaborators.load(source),
    );

    let (slider_html, slider_slot) = finish("slider", slider_out, |slides| {
        let renderer = SliderRenderer { state: slider.state_for(slides) };
        render_with(&renderer, slides)
    });

    // The notice board is all-or-nothing across its three sub-views.
    let mut notice_slot = ErrorSlot::new();
    let notice_html = match notice_out {
        Ok(board) => format!(
            "<div class=\"statusGrid\">{}</div>{}<div class=\"refundTable\">{}</div>",
            render_with(&StatusRenderer, &board.status.items),
            render_with(&NoticeItemsRenderer, &board.items.items),
            render_with(&RefundRenderer, &board.refund.items),
        ),
        Err(err) => {
            error!(section = "notice", error = %err, "Section failed to load");
            notice_slot.show(&err.to_string());
            String::new()
        }
    };

    let (pricing_html, pricing_slot) =
        finish("pricing", pricing_out, |items| render_with(&PricingRenderer, items));
    let (rigging_html, rigging_slot) =
        finish("rigging", rigging_out, |items| render_with(&RiggingRenderer, items));
    let (portfolio_html, portfolio_slot) = finish("portfolio", portfolio_out, |items| {
        render_with(&PortfolioRenderer, items)
    });
    let (collab_html, collab_slot) = finish("collaborators", collab_out, |items| {
        render_with(&CollaboratorsRenderer, items)
    });

    let mut page = String::from("<main>");
    page.push_str(&section_html("slider", &slider_html, &slider_slot));
    page.push_str(&section_html("notice", &notice_html, &notice_slot));
    page.push_str(&section_html("pricing", &pricing_html, &pricing_slot));
    page.push_str(&section_html("rigging", &rigging_html, &rigging_slot));
    page.push_str(&section_html("portfolio", &portfolio_html, &portfolio_slot));
    page.push_str(&section_html("collaborators", &collab_html, &collab_slot));
    page.push_str("</main>");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::pipeline::testing::MockSource;
    use crate::domain::error::AppError;
    use crate::infrastructure::config::{NoticeConfig, SectionConfig, SliderConfig};

    fn config() -> SiteConfig {
        SiteConfig {
            slider: SliderConfig {
                csv_url: "https://example.com/slides.csv".into(),
                section_key: "main".into(),
                auto_advance_ms: 4500,
            },
            notice: NoticeConfig {
                section_key: "notice".into(),
                status_csv_url: "https://example.com/status.csv".into(),
                items_csv_url: "https://example.com/items.csv".into(),
                refund_csv_url: "https://example.com/refund.csv".into(),
            },
            pricing: SectionConfig {
                csv_url: "https://example.com/prices.csv".into(),
                section_key: "pricing".into(),
            },
            rigging: SectionConfig {
                csv_url: "https://example.com/rigging.csv".into(),
                section_key: "rigging".into(),
            },
            portfolio: SectionConfig {
                csv_url: "https://example.com/portfolio.csv".into(),
                section_key: "portfolio".into(),
            },
            collaborators: SectionConfig {
                csv_url: "https://example.com/collab.csv".into(),
                section_key: "collab".into(),
            },
        }
    }

    fn happy_source() -> MockSource {
        MockSource::new()
            .with_csv(
                "https://example.com/slides.csv",
                "section,image,order\nmain,https://img.test/a.png,1\nmain,https://img.test/b.png,2\n",
            )
            .with_csv(
                "https://example.com/status.csv",
                "section,month,slot1,slot2\nnotice,2026-01,X,open\n",
            )
            .with_csv(
                "https://example.com/items.csv",
                "section,text\nnotice,read the rules\n",
            )
            .with_csv(
                "https://example.com/refund.csv",
                "section,stage,refund\nnotice,sketch,100%\n",
            )
            .with_csv(
                "https://example.com/prices.csv",
                "section,category,title,price\npricing,리깅,풀 리깅,150000\n",
            )
            .with_csv(
                "https://example.com/rigging.csv",
                "section,title\nrigging,물리 본\n",
            )
            .with_csv(
                "https://example.com/portfolio.csv",
                "section,title,url\nportfolio,Demo,https://youtu.be/abc\n",
            )
            .with_csv(
                "https://example.com/collab.csv",
                "section,title,url\ncollab,Studio,https://studio.example\n",
            )
    }

    #[tokio::test]
    async fn test_full_page_renders_every_section() {
        let page = render_page(&config(), &happy_source()).await;
        assert!(page.contains("https://img.test/a.png"));
        assert!(page.contains("2026-01"));
        assert!(page.contains("read the rules"));
        assert!(page.contains("150,000원"));
        assert!(page.contains("물리 본"));
        assert!(page.contains("youtube.com/embed/abc"));
        assert!(page.contains("Studio"));
        assert!(!page.contains("sectionError\">"));
    }

    #[tokio::test]
    async fn test_failed_section_does_not_affect_siblings() {
        let source = happy_source()
            .with_failure("https://example.com/slides.csv", AppError::Http(500));
        let page = render_page(&config(), &source).await;

        assert!(page.contains("CSV fetch failed (HTTP 500)"));
        // Siblings still render.
        assert!(page.contains("150,000원"));
        assert!(page.contains("read the rules"));
    }

    #[tokio::test]
    async fn test_notice_partial_failure_shows_one_error_and_no_sub_views() {
        let source = happy_source()
            .with_failure("https://example.com/items.csv", AppError::Http(503));
        let page = render_page(&config(), &source).await;

        // One combined error for the notice section, none of its
        // three sub-views rendered.
        assert_eq!(page.matches("CSV fetch failed (HTTP 503)").count(), 1);
        assert!(!page.contains("2026-01"));
        assert!(!page.contains("sketch"));
        // Sibling sections are unaffected.
        assert!(page.contains("https://img.test/a.png"));
    }

    #[tokio::test]
    async fn test_empty_section_shows_no_data_message_not_network_error() {
        let source = happy_source().with_csv(
            "https://example.com/collab.csv",
            "section,title,url\nsomeone_else,Studio,https://studio.example\n",
        );
        let page = render_page(&config(), &source).await;
        assert!(page.contains("No collaborators"));
        assert!(!page.contains("Network error"));
    }

    #[tokio::test]
    async fn test_unconfigured_section_reports_empty_url() {
        let mut config = config();
        config.rigging.csv_url = String::new();
        let page = render_page(&config, &happy_source()).await;
        assert!(page.contains("CSV URL is empty"));
        assert!(page.contains("150,000원"));
    }
}
