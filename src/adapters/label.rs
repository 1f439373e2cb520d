//! Single-line text label

use std::cell::RefCell;

use tracing::debug;

use crate::host::{AnchorSource, BaselineOffsets, Engine, LayoutItem, View};

/// Portion of the font size above the baseline
const ASCENT_RATIO: f64 = 0.8;

/// A view sized to its text
///
/// The intrinsic size is estimated from the character count and the engine's
/// text metrics; baseline anchors sit on the text baseline.
pub struct Label {
    view: View,
    text: RefCell<String>,
    font_size: f64,
}

impl Label {
    pub fn new(
        engine: &Engine,
        name: impl Into<String>,
        text: impl Into<String>,
        font_size: f64,
    ) -> Self {
        let label = Self {
            view: engine.create_view(name),
            text: RefCell::new(String::new()),
            font_size,
        };
        label.set_text(text);
        label
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Replace the text and update the intrinsic size
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = text.into();
        let Some(engine) = self.view.engine() else {
            return;
        };
        let config = engine.config();
        let chars = self.text.borrow().chars().count() as f64;
        let width = chars * self.font_size * config.char_width_ratio;
        let line_height = self.font_size * config.line_height_ratio;

        let first_from_top = (line_height - self.font_size) / 2.0 + self.font_size * ASCENT_RATIO;
        self.view.set_baseline_offsets(BaselineOffsets {
            first_from_top,
            last_from_bottom: line_height - first_from_top,
        });
        if let Err(e) = self.view.set_intrinsic_size(width, line_height) {
            debug!(label = %self.view.name(), error = %e, "intrinsic size not applied");
        }
    }
}

impl LayoutItem for Label {
    fn anchor_source(&self) -> AnchorSource {
        self.view.anchor_source()
    }
}
