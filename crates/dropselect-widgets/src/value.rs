//! The label showing the selected value or the placeholder.

use dropselect_core::{display_text, DisplayText};
use egui::{Response, Sense, Ui};

use crate::select::SelectScope;
use crate::style::StyleOverride;

/// Passive label for the current selection.
#[derive(Debug, Clone, Default)]
pub struct SelectValue<'p> {
    placeholder: Option<&'p str>,
    style: StyleOverride,
}

impl<'p> SelectValue<'p> {
    /// Create a value label without placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text shown in muted style while nothing is selected.
    pub fn placeholder(mut self, placeholder: &'p str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Add a style override for this label. Fields set by later calls win.
    pub fn style(mut self, style: StyleOverride) -> Self {
        self.style = self.style.then(&style);
        self
    }

    /// What this label shows for the current state.
    pub fn text<'s>(&'s self, scope: &'s SelectScope<'_, '_>) -> DisplayText<'s> {
        display_text(scope.ctx.value(), self.placeholder)
    }

    /// Show the label. Returns `None` when there is nothing to show.
    pub fn show(self, ui: &mut Ui, scope: &SelectScope<'_, '_>) -> Option<Response> {
        let style = scope.style.merged(&self.style);
        let shown = self.text(scope);
        let text = shown.text()?;
        let color = if shown.is_muted() { style.text_muted } else { style.text };

        let galley = ui
            .painter()
            .layout_no_wrap(text.to_string(), style.font_id(), color);
        // Hover-only so clicks fall through to the trigger
        let (rect, response) = ui.allocate_exact_size(galley.size(), Sense::hover());
        if ui.is_rect_visible(rect) {
            ui.painter().galley(rect.min, galley, color);
        }
        Some(response)
    }
}
