//! Feeding egui pointer input into the pointer document.

use dropselect_core::{PointerButton, PointerDocument, PointerDownEvent};
use egui::{Context, Event, Pos2, Rect};

/// Convert an egui position to kurbo.
pub fn to_kurbo_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(pos.x as f64, pos.y as f64)
}

/// Convert an egui rect to kurbo.
pub fn to_kurbo_rect(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}

fn to_pointer_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Pointer-down events in this frame's input.
pub fn pointer_presses(ctx: &Context) -> Vec<PointerDownEvent> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } => to_pointer_button(*button)
                    .map(|button| PointerDownEvent::new(to_kurbo_point(*pos), button)),
                _ => None,
            })
            .collect()
    })
}

/// egui integration for [`PointerDocument`].
pub trait PointerDocumentExt {
    /// Dispatch this frame's pointer-downs. Call once per frame, before any
    /// select is shown.
    fn pump(&self, ctx: &Context);
}

impl PointerDocumentExt for PointerDocument {
    fn pump(&self, ctx: &Context) {
        // Collected first: listeners must not run under the input lock
        for event in pointer_presses(ctx) {
            self.dispatch(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Modifiers, RawInput};

    fn press(pos: Pos2, button: egui::PointerButton) -> Event {
        Event::PointerButton {
            pos,
            button,
            pressed: true,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_pointer_presses_only_reports_presses() {
        let ctx = Context::default();
        let input = RawInput {
            events: vec![
                press(pos2(5.0, 6.0), egui::PointerButton::Primary),
                Event::PointerButton {
                    pos: pos2(5.0, 6.0),
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    modifiers: Modifiers::default(),
                },
                press(pos2(7.0, 8.0), egui::PointerButton::Secondary),
            ],
            ..Default::default()
        };

        let mut seen = Vec::new();
        let _ = ctx.run(input, |ctx| {
            seen = pointer_presses(ctx);
        });

        assert_eq!(
            seen,
            vec![
                PointerDownEvent::primary(5.0, 6.0),
                PointerDownEvent::new(kurbo::Point::new(7.0, 8.0), PointerButton::Secondary),
            ]
        );
    }

    #[test]
    fn test_rect_conversion() {
        let rect = Rect::from_min_max(pos2(1.0, 2.0), pos2(3.0, 4.0));
        assert_eq!(to_kurbo_rect(rect), kurbo::Rect::new(1.0, 2.0, 3.0, 4.0));
    }
}
