// ============================================================
// PORTFOLIO GALLERY
// ============================================================
// Entries point at hosted videos; the embed player needs the bare
// video id, extracted here with host-specific rules.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::record::RawRecord;

/// Split a free-form tag cell into its whitespace-delimited chunks
/// that start with `#`. A tag only begins at a chunk boundary, so an
/// interior `#` stays inside the current tag: "#A #B#C" is the two
/// tags ["#A", "#B#C"], not three.
// NOTE: editors do write run-together tags like "#B#C"; splitting
// those apart belongs upstream in the sheet format, not here.
pub fn extract_tags(raw: &str) -> Vec<String> {
    raw.split_whitespace()
        .filter(|chunk| chunk.starts_with('#'))
        .map(|chunk| chunk.to_string())
        .collect()
}

/// Pull the video id out of a watch URL. Host rules, in priority
/// order: short-host path segment, `v` query parameter, `/embed/<id>`,
/// `/shorts/<id>`. Unparseable input yields an empty id, never an
/// error.
pub fn extract_video_id(raw: &str) -> String {
    let trimmed = raw.trim();
    let url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(_) => return String::new(),
    };

    let host = url.host_str().unwrap_or("");
    if host == "youtu.be" || host.ends_with(".youtu.be") {
        if let Some(first) = url.path_segments().and_then(|mut segs| segs.next()) {
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some((_, v)) = url.query_pairs().find(|(k, _)| k == "v") {
        if !v.is_empty() {
            return v.into_owned();
        }
    }

    if let Some(segments) = url.path_segments() {
        let segments: Vec<&str> = segments.collect();
        for marker in ["embed", "shorts"] {
            if let Some(pos) = segments.iter().position(|s| *s == marker) {
                if let Some(id) = segments.get(pos + 1) {
                    if !id.is_empty() {
                        return id.to_string();
                    }
                }
            }
        }
    }

    String::new()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    pub order: f64,
    pub title: String,
    pub url: String,
    pub video_id: String,
    pub tags: Vec<String>,
}

impl PortfolioEntry {
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        let title = record.get("title").to_string();
        let url = record.get("url").to_string();
        if title.is_empty() || url.is_empty() {
            return None;
        }
        Some(Self {
            order: record.order(),
            video_id: extract_video_id(&url),
            tags: extract_tags(record.get("tags")),
            title,
            url,
        })
    }

    pub fn sort(entries: &mut [PortfolioEntry]) {
        entries.sort_by(|a, b| a.order.total_cmp(&b.order));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_split_at_chunk_boundaries_only() {
        assert_eq!(extract_tags("#A #B#C"), vec!["#A", "#B#C"]);
        assert_eq!(extract_tags("#B#C"), vec!["#B#C"]);
        assert_eq!(extract_tags("#live2d #rigging"), vec!["#live2d", "#rigging"]);
        assert_eq!(extract_tags("  #padded\t#tabbed "), vec!["#padded", "#tabbed"]);
        assert!(extract_tags("no tags here").is_empty());
        assert!(extract_tags("").is_empty());
    }

    #[test]
    fn test_video_id_from_short_host() {
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(extract_video_id("https://youtu.be/abc?t=42"), "abc");
    }

    #[test]
    fn test_video_id_from_query_parameter() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=x"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_video_id_from_embed_and_shorts_paths() {
        assert_eq!(extract_video_id("https://www.youtube.com/embed/abc123"), "abc123");
        assert_eq!(extract_video_id("https://www.youtube.com/shorts/xyz789"), "xyz789");
    }

    #[test]
    fn test_unparseable_url_yields_empty_id() {
        assert_eq!(extract_video_id("not a url"), "");
        assert_eq!(extract_video_id(""), "");
    }

    #[test]
    fn test_requires_title_and_url() {
        let record = RawRecord::from_pairs(&[("title", "demo")]);
        assert!(PortfolioEntry::from_record(&record).is_none());
        let record = RawRecord::from_pairs(&[("url", "https://youtu.be/x")]);
        assert!(PortfolioEntry::from_record(&record).is_none());
    }

    #[test]
    fn test_from_record_extracts_id_and_tags() {
        let record = RawRecord::from_pairs(&[
            ("title", "Model showcase"),
            ("url", "https://www.youtube.com/watch?v=abc"),
            ("tags", "#live2d #vtuber"),
            ("order", "2"),
        ]);
        let entry = PortfolioEntry::from_record(&record).unwrap();
        assert_eq!(entry.video_id, "abc");
        assert_eq!(entry.tags, vec!["#live2d", "#vtuber"]);
    }
}
