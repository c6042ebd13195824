// ============================================================
// HTML RENDERERS
// ============================================================
// Minimal static markup per section. Layout and styling live in
// the page's stylesheet; these renderers only produce structure.

use crate::application::sections::SliderState;
use crate::domain::sections::{
    CollaboratorEntry, NoticeItem, PortfolioEntry, PriceEntry, RefundStage, RiggingDetail, Slide,
    StatusRow,
};
use crate::interfaces::render::SectionRenderer;

pub fn escape_html(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            other => other.to_string(),
        })
        .collect()
}

pub struct SliderRenderer {
    pub state: SliderState,
}

impl SectionRenderer<Slide> for SliderRenderer {
    fn render(&self, items: &[Slide], out: &mut String) {
        out.clear();
        out.push_str("<div class=\"track\">");
        for slide in items {
            out.push_str(&format!(
                "<div class=\"slide\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>",
                escape_html(&slide.image),
                escape_html(&slide.alt)
            ));
        }
        out.push_str("</div><div class=\"dots\">");
        for i in 0..items.len() {
            let active = if i == self.state.index() { " isActive" } else { "" };
            out.push_str(&format!("<button class=\"dot{}\"></button>", active));
        }
        out.push_str("</div>");
    }
}

pub struct StatusRenderer;

impl SectionRenderer<StatusRow> for StatusRenderer {
    fn render(&self, items: &[StatusRow], out: &mut String) {
        out.clear();
        for row in items {
            out.push_str(&format!(
                "<div class=\"statusRow\"><div class=\"statusMonth\">{}</div>\
                 <span class=\"slotDot {}\">{}</span><span class=\"slotDot {}\">{}</span>",
                escape_html(&row.month),
                row.slot1.css_class(),
                row.slot1.symbol(),
                row.slot2.css_class(),
                row.slot2.symbol(),
            ));
            if !row.note.is_empty() {
                out.push_str(&format!(
                    "<span class=\"statusNote\">{}</span>",
                    escape_html(&row.note)
                ));
            }
            out.push_str("</div>");
        }
    }
}

pub struct NoticeItemsRenderer;

impl SectionRenderer<NoticeItem> for NoticeItemsRenderer {
    fn render(&self, items: &[NoticeItem], out: &mut String) {
        out.clear();
        out.push_str("<ul class=\"noticeItems\">");
        for item in items {
            // Trusted rich text from the access-controlled sheet;
            // deliberately not escaped.
            out.push_str(&format!("<li>{}</li>", item.text));
        }
        out.push_str("</ul>");
    }
}

pub struct RefundRenderer;

impl SectionRenderer<RefundStage> for RefundRenderer {
    fn render(&self, items: &[RefundStage], out: &mut String) {
        out.clear();
        for stage in items {
            out.push_str(&format!(
                "<div class=\"refundRow\"><div class=\"refundStage\">{}</div>\
                 <div class=\"refundValue\">{}</div></div>",
                escape_html(&stage.stage),
                escape_html(&stage.refund)
            ));
        }
    }
}

pub struct PricingRenderer;

impl SectionRenderer<PriceEntry> for PricingRenderer {
    fn render(&self, items: &[PriceEntry], out: &mut String) {
        out.clear();
        let mut current_group: Option<&str> = None;
        for entry in items {
            let key = entry.group.key();
            if current_group != Some(key) {
                out.push_str(&format!(
                    "<h3 class=\"priceGroup\">{}</h3>",
                    escape_html(key)
                ));
                current_group = Some(key);
            }
            out.push_str(&format!(
                "<div class=\"priceRow\"><span class=\"priceTitle\">{}</span>\
                 <span class=\"priceValue\">{}</span>",
                escape_html(&entry.title),
                escape_html(&entry.price)
            ));
            if !entry.note.is_empty() {
                out.push_str(&format!(
                    "<span class=\"priceNote\">{}</span>",
                    escape_html(&entry.note)
                ));
            }
            out.push_str("</div>");
        }
    }
}

pub struct RiggingRenderer;

impl SectionRenderer<RiggingDetail> for RiggingRenderer {
    fn render(&self, items: &[RiggingDetail], out: &mut String) {
        out.clear();
        for detail in items {
            out.push_str("<div class=\"riggingCard\">");
            if !detail.image.is_empty() {
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"\" loading=\"lazy\">",
                    escape_html(&detail.image)
                ));
            }
            out.push_str(&format!(
                "<h4>{}</h4><p>{}</p></div>",
                escape_html(&detail.title),
                escape_html(&detail.description)
            ));
        }
    }
}

pub struct PortfolioRenderer;

impl SectionRenderer<PortfolioEntry> for PortfolioRenderer {
    fn render(&self, items: &[PortfolioEntry], out: &mut String) {
        out.clear();
        for entry in items {
            out.push_str("<div class=\"portfolioCard\">");
            if entry.video_id.is_empty() {
                out.push_str(&format!(
                    "<a href=\"{}\">{}</a>",
                    escape_html(&entry.url),
                    escape_html(&entry.title)
                ));
            } else {
                out.push_str(&format!(
                    "<iframe src=\"https://www.youtube.com/embed/{}\" title=\"{}\" \
                     loading=\"lazy\" allowfullscreen></iframe>",
                    escape_html(&entry.video_id),
                    escape_html(&entry.title)
                ));
            }
            if !entry.tags.is_empty() {
                out.push_str("<div class=\"tags\">");
                for tag in &entry.tags {
                    out.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
                }
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }
    }
}

pub struct CollaboratorsRenderer;

impl SectionRenderer<CollaboratorEntry> for CollaboratorsRenderer {
    fn render(&self, items: &[CollaboratorEntry], out: &mut String) {
        out.clear();
        for entry in items {
            out.push_str(&format!("<a class=\"collabCard\" href=\"{}\">", escape_html(&entry.url)));
            if !entry.image.is_empty() {
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"\" loading=\"lazy\">",
                    escape_html(&entry.image)
                ));
            }
            out.push_str(&format!("<span>{}</span></a>", escape_html(&entry.title)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_slider_marks_active_dot() {
        let slides = vec![
            Slide { order: 0.0, image: "a".into(), alt: String::new() },
            Slide { order: 1.0, image: "b".into(), alt: String::new() },
        ];
        let renderer = SliderRenderer { state: SliderState::new(2, 4500) };
        let mut out = String::from("previous content");
        renderer.render(&slides, &mut out);
        assert!(!out.contains("previous content"));
        assert_eq!(out.matches("class=\"dot isActive\"").count(), 1);
        assert_eq!(out.matches("<img").count(), 2);
    }

    #[test]
    fn test_notice_items_keep_rich_text() {
        let items = vec![NoticeItem { order: 0.0, text: "<b>read me</b>".into() }];
        let mut out = String::new();
        NoticeItemsRenderer.render(&items, &mut out);
        assert!(out.contains("<b>read me</b>"));
    }

    #[test]
    fn test_pricing_emits_group_headings_once() {
        use crate::domain::sections::PriceGroup;
        let entry = |group: PriceGroup, title: &str| PriceEntry {
            group,
            order: 0.0,
            title: title.into(),
            price: "1원".into(),
            note: String::new(),
        };
        let items = vec![
            entry(PriceGroup::Rigging, "a"),
            entry(PriceGroup::Rigging, "b"),
            entry(PriceGroup::Etc, "c"),
        ];
        let mut out = String::new();
        PricingRenderer.render(&items, &mut out);
        assert_eq!(out.matches("priceGroup").count(), 2);
    }
}
