//! Selectable rows inside the content panel.

use dropselect_core::{activate_item, is_selected, SelectOption};
use egui::{vec2, Align2, Color32, CornerRadius, CursorIcon, Pos2, Rect, Sense, Ui};

use crate::glyphs::paint_checkmark;
use crate::select::SelectScope;
use crate::style::StyleOverride;

/// Left edge of the checkmark slot inside a row.
const CHECK_SLOT_LEFT: f32 = 8.0;

/// One option row.
#[derive(Debug, Clone)]
pub struct SelectItem<'v> {
    value: &'v str,
    label: &'v str,
    style: StyleOverride,
}

impl<'v> SelectItem<'v> {
    /// Create a row for `value` showing `label`.
    pub fn new(value: &'v str, label: &'v str) -> Self {
        Self {
            value,
            label,
            style: StyleOverride::default(),
        }
    }

    /// Create a row from an option.
    pub fn from_option(option: &'v SelectOption) -> Self {
        Self::new(&option.value, &option.label)
    }

    /// Add a style override for this row. Fields set by later calls win.
    pub fn style(mut self, style: StyleOverride) -> Self {
        self.style = self.style.then(&style);
        self
    }

    /// Show the row and return true if it was activated.
    pub fn show(self, ui: &mut Ui, scope: &mut SelectScope<'_, '_>) -> bool {
        let style = scope.style.merged(&self.style);
        let selected = is_selected(&scope.ctx, self.value);

        let size = vec2(ui.available_width(), style.item_height);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let highlighted = selected || response.hovered();
            let bg_color = if highlighted { style.accent_bg } else { Color32::TRANSPARENT };
            let text_color = if highlighted { style.accent_text } else { style.text };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(style.item_radius), bg_color);

            // The slot is always reserved; the glyph only drawn when selected
            if selected {
                let slot = Rect::from_min_size(
                    Pos2::new(
                        rect.left() + CHECK_SLOT_LEFT,
                        rect.center().y - style.check_slot / 2.0,
                    ),
                    vec2(style.check_slot, style.check_slot),
                );
                paint_checkmark(ui.painter(), slot, text_color);
            }

            ui.painter().text(
                Pos2::new(rect.left() + style.item_padding_left, rect.center().y),
                Align2::LEFT_CENTER,
                self.label,
                style.font_id(),
                text_color,
            );
        }

        response.widget_info(|| {
            egui::WidgetInfo::selected(egui::WidgetType::SelectableLabel, true, selected, self.label)
        });

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::Default);
        if clicked {
            activate_item(&mut scope.ctx, self.value);
        }
        clicked
    }
}
