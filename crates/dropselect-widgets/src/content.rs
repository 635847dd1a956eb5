//! The overlay panel: dismiss layer plus the list container.

use egui::{
    vec2, Color32, CornerRadius, Frame, Id, InnerResponse, Margin, Order, Pos2, Sense, Stroke, Ui,
};

use crate::document::to_kurbo_rect;
use crate::select::SelectScope;
use crate::style::{SelectStyle, StyleOverride};

/// The panel holding the items. Renders nothing while the select is closed.
#[derive(Debug, Clone, Default)]
pub struct SelectContent {
    style: StyleOverride,
}

impl SelectContent {
    /// Create a content panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a style override for this panel. Fields set by later calls win.
    pub fn style(mut self, style: StyleOverride) -> Self {
        self.style = self.style.then(&style);
        self
    }

    /// Show the panel below the trigger if the select is open.
    ///
    /// Returns `None` when nothing was rendered.
    pub fn show<'a, R>(
        self,
        ui: &mut Ui,
        scope: &mut SelectScope<'a, '_>,
        add_contents: impl FnOnce(&mut Ui, &mut SelectScope<'a, '_>) -> R,
    ) -> Option<R> {
        if !scope.panel.sync(&scope.ctx, scope.document) {
            return None;
        }

        let style = scope.style.merged(&self.style);
        let ctx = ui.ctx().clone();

        if show_dismiss_layer(&ctx, scope.id.with("dismiss"), &style) {
            scope.panel.dismiss(&scope.ctx);
            return None;
        }

        let trigger_rect = *scope.trigger_rect;
        let anchor = trigger_rect
            .map(|r| r.left_bottom() + vec2(0.0, style.content_offset))
            .unwrap_or_else(|| ui.next_widget_position());
        let min_width = trigger_rect
            .map_or(style.content_min_width, |r| r.width().max(style.content_min_width));

        let InnerResponse { inner, response } = egui::Area::new(scope.id.with("content"))
            .fixed_pos(anchor)
            .order(Order::Foreground)
            .interactable(true)
            .show(&ctx, |ui| {
                content_frame(&style)
                    .show(ui, |ui| {
                        // Frame margin is 4 on each side, border 1
                        ui.set_min_width(min_width - 10.0);
                        ui.vertical(|ui| {
                            ui.spacing_mut().item_spacing = vec2(0.0, 0.0);
                            add_contents(ui, scope)
                        })
                        .inner
                    })
                    .inner
            });

        // The list always sits above its dismiss layer
        ctx.move_to_top(response.layer_id);
        scope.panel.set_content_bounds(to_kurbo_rect(response.rect));

        // An item may have closed the panel; release the listener now
        scope.panel.sync(&scope.ctx, scope.document);

        Some(inner)
    }
}

/// Full-screen layer beneath the list. Returns true when clicked.
fn show_dismiss_layer(ctx: &egui::Context, id: Id, style: &SelectStyle) -> bool {
    #[allow(deprecated)]
    let screen_rect = ctx.input(|i| i.content_rect());
    egui::Area::new(id)
        .fixed_pos(Pos2::ZERO)
        .order(Order::Foreground)
        .interactable(true)
        .show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(screen_rect.size(), Sense::click());
            ui.painter().rect_filled(rect, 0.0, style.backdrop);
            response.clicked()
        })
        .inner
}

/// Frame of the list container.
pub fn content_frame(style: &SelectStyle) -> Frame {
    Frame::new()
        .fill(style.popover_bg)
        .corner_radius(CornerRadius::same(style.corner_radius))
        .stroke(Stroke::new(1.0, style.border))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(4))
}
