// ============================================================
// RENDER CONTRACTS
// ============================================================
// The boundary between the data pipeline and the presentation
// layer. A renderer receives one section's final ordered item
// slice and a container to write into; it clears prior content
// and never mutates the items. Errors cross this boundary as
// plain text only, through the section's own error slot.

/// One section's dedicated error display. Showing makes the slot
/// visible with a human-readable message; clearing hides it and
/// empties the text. There is no other error channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSlot {
    visible: bool,
    message: String,
}

impl ErrorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.visible = true;
        self.message = message.to_string();
    }

    pub fn clear(&mut self) {
        self.visible = false;
        self.message.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Stateless renderer for one section's item type.
pub trait SectionRenderer<T> {
    /// Replace `out`'s previous content with markup for `items`.
    fn render(&self, items: &[T], out: &mut String);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_slot_show_and_clear() {
        let mut slot = ErrorSlot::new();
        assert!(!slot.is_visible());

        slot.show("CSV fetch failed (HTTP 500)");
        assert!(slot.is_visible());
        assert_eq!(slot.message(), "CSV fetch failed (HTTP 500)");

        slot.clear();
        assert!(!slot.is_visible());
        assert_eq!(slot.message(), "");
    }
}
