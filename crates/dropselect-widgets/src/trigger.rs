//! The trigger button.

use dropselect_core::{activate_trigger, TriggerState};
use egui::{
    vec2, Align, CornerRadius, CursorIcon, Layout, Rect, Response, Sense, Stroke, StrokeKind, Ui,
    UiBuilder,
};

use crate::glyphs::paint_chevron;
use crate::select::SelectScope;
use crate::style::StyleOverride;

/// Horizontal padding inside the trigger.
const PADDING_X: f32 = 12.0;

/// The button that opens and closes the panel.
///
/// Fills the available width. Its contents (usually a [`crate::SelectValue`])
/// are laid out left to right, followed by a chevron.
#[derive(Debug, Clone, Default)]
pub struct SelectTrigger {
    style: StyleOverride,
    width: Option<f32>,
}

impl SelectTrigger {
    /// Create a trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a style override for this trigger. Fields set by later calls win.
    pub fn style(mut self, style: StyleOverride) -> Self {
        self.style = self.style.then(&style);
        self
    }

    /// Set a fixed width instead of filling the available width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Show the trigger. Toggles the panel when clicked.
    pub fn show<'a, R>(
        self,
        ui: &mut Ui,
        scope: &mut SelectScope<'a, '_>,
        add_contents: impl FnOnce(&mut Ui, &mut SelectScope<'a, '_>) -> R,
    ) -> (Response, R) {
        let style = scope.style.merged(&self.style);
        let state = TriggerState::of(&scope.ctx);
        let sense = if state.disabled { Sense::hover() } else { Sense::click() };

        let width = self.width.unwrap_or_else(|| ui.available_width());
        let (rect, response) = ui.allocate_exact_size(vec2(width, style.trigger_height), sense);
        *scope.trigger_rect = Some(rect);

        // Disabled triggers are drawn at half opacity
        let fade = |c: egui::Color32| if state.disabled { c.gamma_multiply(0.5) } else { c };

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(style.corner_radius);
            ui.painter().rect_filled(rect, radius, fade(style.background));
            ui.painter().rect_stroke(
                rect,
                radius,
                Stroke::new(1.0, fade(style.border)),
                StrokeKind::Inside,
            );

            let chevron_rect = Rect::from_center_size(
                egui::pos2(rect.right() - PADDING_X - style.chevron_size / 2.0, rect.center().y),
                vec2(style.chevron_size, style.chevron_size),
            );
            paint_chevron(ui.painter(), chevron_rect, fade(style.text.gamma_multiply(0.5)));
        }

        let content_rect = Rect::from_min_max(
            egui::pos2(rect.left() + PADDING_X, rect.top()),
            egui::pos2(rect.right() - PADDING_X * 2.0 - style.chevron_size, rect.bottom()),
        );
        let mut child = ui.new_child(
            UiBuilder::new()
                .max_rect(content_rect)
                .layout(Layout::left_to_right(Align::Center)),
        );
        if state.disabled {
            child.multiply_opacity(0.5);
        }
        let inner = add_contents(&mut child, scope);

        let response = if state.disabled {
            response.on_hover_cursor(CursorIcon::NotAllowed)
        } else {
            response.on_hover_cursor(CursorIcon::PointingHand)
        };

        // Expanded state for assistive tooling
        response.widget_info(|| {
            egui::WidgetInfo::selected(
                egui::WidgetType::ComboBox,
                !state.disabled,
                state.expanded,
                "",
            )
        });

        if response.clicked() {
            activate_trigger(&scope.ctx);
        }

        (response, inner)
    }
}
