use serde::{Deserialize, Serialize};

use crate::domain::record::RawRecord;
use crate::shared::drive_url::normalize_drive_image_url;

/// One slide of the image carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub order: f64,
    pub image: String,
    pub alt: String,
}

impl Slide {
    /// Normalize one raw row; rows without a usable image are dropped.
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        let image = normalize_drive_image_url(record.get("image"));
        if image.is_empty() {
            return None;
        }
        Some(Self {
            order: record.order(),
            image,
            alt: record.get("alt").to_string(),
        })
    }

    /// Ascending by ordering key; ties keep input order.
    pub fn sort(slides: &mut [Slide]) {
        slides.sort_by(|a, b| a.order.total_cmp(&b.order));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_image() {
        let record = RawRecord::from_pairs(&[("order", "1"), ("alt", "x")]);
        assert!(Slide::from_record(&record).is_none());
    }

    #[test]
    fn test_image_is_drive_normalized() {
        let record = RawRecord::from_pairs(&[
            ("image", "https://drive.google.com/file/d/ID42/view"),
            ("alt", "cover"),
        ]);
        let slide = Slide::from_record(&record).unwrap();
        assert_eq!(slide.image, "https://lh3.googleusercontent.com/d/ID42");
        assert_eq!(slide.alt, "cover");
        assert_eq!(slide.order, 0.0);
    }

    #[test]
    fn test_sort_is_stable_for_equal_orders() {
        let mut slides = vec![
            Slide { order: 1.0, image: "b".into(), alt: String::new() },
            Slide { order: 0.0, image: "a1".into(), alt: String::new() },
            Slide { order: 0.0, image: "a2".into(), alt: String::new() },
        ];
        Slide::sort(&mut slides);
        let images: Vec<_> = slides.iter().map(|s| s.image.as_str()).collect();
        assert_eq!(images, ["a1", "a2", "b"]);
    }
}
