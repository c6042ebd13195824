// ============================================================
// SECTION VALUE OBJECTS
// ============================================================
// One typed, validated projection per board section. Each type
// exposes `from_record` (normalize + required-field predicate,
// returning None to drop the row) and the section's sort.

mod collaborator;
mod notice;
mod portfolio;
mod price;
mod refund;
mod rigging;
mod slide;
mod status;

pub use collaborator::CollaboratorEntry;
pub use notice::NoticeItem;
pub use portfolio::{extract_tags, extract_video_id, PortfolioEntry};
pub use price::{format_price, PriceEntry, PriceGroup};
pub use refund::RefundStage;
pub use rigging::RiggingDetail;
pub use slide::Slide;
pub use status::{SlotStatus, StatusRow};
