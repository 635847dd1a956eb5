//! egui rendering of the dropselect widget with Tailwind-inspired styling.
//!
//! - **Select**: the composition root, owns the open flag and the panel
//! - **SelectTrigger** / **SelectValue**: the button and its label
//! - **SelectContent** / **SelectItem**: the overlay panel and its rows
//! - **Style**: built-in style, per-component overrides, JSON themes
//!
//! Behaviour comes from `dropselect-core`; this crate lays out and paints.

pub mod content;
pub mod document;
pub mod glyphs;
pub mod item;
pub mod select;
pub mod style;
pub mod theme;
pub mod trigger;
pub mod value;

pub use content::SelectContent;
pub use document::{to_kurbo_point, to_kurbo_rect, PointerDocumentExt};
pub use dropselect_core::{PointerDocument, SelectProps};
pub use item::SelectItem;
pub use select::{Select, SelectScope};
pub use style::{SelectStyle, StyleOverride};
pub use theme::{parse_hex_color, SelectTheme, ThemeError, ThemeResult};
pub use trigger::SelectTrigger;
pub use value::SelectValue;

/// Standard sizing constants used across the select.
pub mod sizing {
    /// Trigger height
    pub const TRIGGER_HEIGHT: f32 = 40.0;
    /// Item row height
    pub const ITEM_HEIGHT: f32 = 32.0;
    /// Left padding of an item, reserving the checkmark slot
    pub const ITEM_PADDING_LEFT: f32 = 32.0;
    /// Checkmark slot size
    pub const CHECK_SLOT: f32 = 14.0;
    /// Chevron size
    pub const CHEVRON: f32 = 16.0;
    /// Minimum content width
    pub const CONTENT_MIN_WIDTH: f32 = 128.0;
    /// Gap between trigger and content
    pub const CONTENT_OFFSET: f32 = 4.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 6;
    /// Item corner radius
    pub const ITEM_RADIUS: u8 = 4;
    /// Text size
    pub const FONT_SIZE: f32 = 14.0;
}

/// Standard colors used across the select.
pub mod theme_colors {
    use egui::Color32;

    /// Text color
    pub const TEXT: Color32 = Color32::from_rgb(15, 23, 42);
    /// Muted text color (placeholder)
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 116, 139);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240);
    /// Trigger background
    pub const BACKGROUND: Color32 = Color32::WHITE;
    /// Selected/hovered item background
    pub const ACCENT_BG: Color32 = Color32::from_rgb(241, 245, 249);
    /// Selected/hovered item text
    pub const ACCENT_TEXT: Color32 = Color32::from_rgb(15, 23, 42);
    /// Popover background
    pub const POPOVER_BG: Color32 = Color32::WHITE;
    /// Dismiss layer (background at 80%)
    pub const BACKDROP: Color32 = Color32::from_rgba_premultiplied(204, 204, 204, 204);
}
