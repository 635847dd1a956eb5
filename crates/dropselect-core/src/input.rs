//! Pointer input delivered to the pointer document.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// A pointer-down anywhere in the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerDownEvent {
    /// Position in screen coordinates.
    pub position: Point,
    /// Which button went down.
    pub button: PointerButton,
}

impl PointerDownEvent {
    /// Create a pointer-down event.
    pub fn new(position: Point, button: PointerButton) -> Self {
        Self { position, button }
    }

    /// Primary-button pointer-down at `(x, y)`.
    pub fn primary(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), PointerButton::Primary)
    }
}
