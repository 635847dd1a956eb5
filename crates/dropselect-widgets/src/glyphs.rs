//! Painted glyphs: the trigger chevron and the item checkmark.

use egui::{pos2, Color32, Painter, Pos2, Rect, Shape, Stroke};

/// Points of a chevron-down inside `rect`, in a 16x16 design box.
pub fn chevron_points(rect: Rect) -> Vec<Pos2> {
    map_points(rect, 16.0, &[(4.0, 6.0), (8.0, 10.0), (12.0, 6.0)])
}

/// Points of a checkmark inside `rect`, in a 15x15 design box.
pub fn checkmark_points(rect: Rect) -> Vec<Pos2> {
    map_points(rect, 15.0, &[(3.7, 8.2), (6.75, 10.8), (11.5, 4.2)])
}

/// Paint a chevron-down filling `rect`.
pub fn paint_chevron(painter: &Painter, rect: Rect, color: Color32) {
    painter.add(Shape::line(chevron_points(rect), Stroke::new(1.5, color)));
}

/// Paint a checkmark filling `rect`.
pub fn paint_checkmark(painter: &Painter, rect: Rect, color: Color32) {
    painter.add(Shape::line(checkmark_points(rect), Stroke::new(1.5, color)));
}

fn map_points(rect: Rect, design_size: f32, points: &[(f32, f32)]) -> Vec<Pos2> {
    let scale = rect.width().min(rect.height()) / design_size;
    points
        .iter()
        .map(|&(x, y)| pos2(rect.left() + x * scale, rect.top() + y * scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn test_glyphs_stay_inside_rect() {
        let rect = Rect::from_min_size(pos2(10.0, 20.0), vec2(14.0, 14.0));
        for p in chevron_points(rect).into_iter().chain(checkmark_points(rect)) {
            assert!(rect.contains(p), "{:?} outside {:?}", p, rect);
        }
    }

    #[test]
    fn test_chevron_points_down() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(16.0, 16.0));
        let points = chevron_points(rect);
        assert_eq!(points.len(), 3);
        assert!(points[1].y > points[0].y);
        assert!(points[1].y > points[2].y);
    }
}
