/// Where a pointer interaction landed relative to the status panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The panel's own backdrop, outside the message content
    Backdrop,
    /// The inner message content
    Content,
}

/// Modal-style status panel carrying one message at a time.
///
/// Hiding leaves the last message in place; only visibility changes.
#[derive(Debug, Default)]
pub struct StatusPanel {
    visible: bool,
    message: String,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel's text and make it visible
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.visible = true;
    }

    /// Make the panel invisible, independent of the prior message
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// A pointer interaction on the backdrop dismisses the panel; one on
    /// the inner content does not.
    pub fn on_pointer(&mut self, target: PointerTarget) {
        if target == PointerTarget::Backdrop {
            self.hide();
        }
    }

    /// Escape dismisses the panel only while it is visible
    pub fn on_escape(&mut self) {
        if self.visible {
            self.hide();
        }
    }
}
