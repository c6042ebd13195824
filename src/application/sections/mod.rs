// ============================================================
// SECTION INSTANTIATIONS
// ============================================================
// One pipeline instance per board section. Sections are fully
// independent: they never share fetch results, even when two read
// the same endpoint, and one section's failure never reaches its
// siblings.

mod collaborators;
mod notice;
mod portfolio;
mod pricing;
mod rigging;
mod slider;

pub use collaborators::CollaboratorsSection;
pub use notice::{NoticeBoard, NoticeSection};
pub use portfolio::PortfolioSection;
pub use pricing::PricingSection;
pub use rigging::RiggingSection;
pub use slider::{SliderSection, SliderState};
