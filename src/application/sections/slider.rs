// ============================================================
// SLIDER SECTION
// ============================================================
// Image carousel fed by one CSV. The carousel's short-lived UI
// state (current index, auto-advance arming) lives in an explicit
// `SliderState` owned by the section instance; it is not part of
// the data pipeline.

use crate::application::pipeline::{run_section, PipelineOutput};
use crate::domain::error::Result;
use crate::domain::sections::Slide;
use crate::infrastructure::config::SliderConfig;
use crate::infrastructure::fetch::CsvSource;

pub struct SliderSection {
    config: SliderConfig,
}

impl SliderSection {
    pub fn new(config: SliderConfig) -> Self {
        Self { config }
    }

    pub async fn load(&self, source: &dyn CsvSource) -> Result<PipelineOutput<Slide>> {
        run_section(
            source,
            &self.config.csv_url,
            &self.config.section_key,
            "No slides to display",
            Slide::from_record,
            |slides| Slide::sort(slides),
        )
        .await
    }

    pub fn state_for(&self, slides: &[Slide]) -> SliderState {
        SliderState::new(slides.len(), self.config.auto_advance_ms)
    }
}

/// Carousel position and timer-arming rules. Navigation wraps; every
/// navigation (manual or automatic) re-arms the auto-advance timer,
/// which only runs with two or more slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    len: usize,
    index: usize,
    auto_advance_ms: u64,
}

impl SliderState {
    pub fn new(len: usize, auto_advance_ms: u64) -> Self {
        Self { len, index: 0, auto_advance_ms }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Jump to a (possibly out-of-range) target, wrapping modulo the
    /// slide count. No-op on an empty carousel.
    pub fn go(&mut self, target: isize) {
        if self.len == 0 {
            return;
        }
        let len = self.len as isize;
        self.index = (((target % len) + len) % len) as usize;
    }

    pub fn next(&mut self) {
        self.go(self.index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go(self.index as isize - 1);
    }

    /// Single-slide carousels never auto-advance.
    pub fn should_auto_advance(&self) -> bool {
        self.len >= 2
    }

    /// Interval to (re-)arm after a navigation, when arming applies.
    pub fn auto_advance_interval(&self) -> Option<std::time::Duration> {
        self.should_auto_advance()
            .then(|| std::time::Duration::from_millis(self.auto_advance_ms))
    }
}
