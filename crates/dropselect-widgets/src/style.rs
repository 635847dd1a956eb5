//! Built-in select style and per-component overrides.
//!
//! Every component starts from the select's [`SelectStyle`] and applies its
//! own [`StyleOverride`] on top. Set fields of the override win, unset
//! fields keep the built-in value. Repeated overrides on one component stack
//! through [`StyleOverride::then`].

use egui::Color32;

use crate::{sizing, theme_colors};

/// Style configuration for a select.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStyle {
    /// Trigger height
    pub trigger_height: f32,
    /// Trigger and content corner radius
    pub corner_radius: u8,
    /// Item corner radius
    pub item_radius: u8,
    /// Text size
    pub font_size: f32,
    /// Item row height
    pub item_height: f32,
    /// Left padding of item labels (reserves the checkmark slot)
    pub item_padding_left: f32,
    /// Checkmark slot size
    pub check_slot: f32,
    /// Chevron size
    pub chevron_size: f32,
    /// Minimum content width
    pub content_min_width: f32,
    /// Gap between trigger and content
    pub content_offset: f32,
    /// Text color
    pub text: Color32,
    /// Placeholder text color
    pub text_muted: Color32,
    /// Border color
    pub border: Color32,
    /// Trigger background
    pub background: Color32,
    /// Selected/hovered item background
    pub accent_bg: Color32,
    /// Selected/hovered item text
    pub accent_text: Color32,
    /// Content background
    pub popover_bg: Color32,
    /// Dismiss layer fill
    pub backdrop: Color32,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            trigger_height: sizing::TRIGGER_HEIGHT,
            corner_radius: sizing::CORNER_RADIUS,
            item_radius: sizing::ITEM_RADIUS,
            font_size: sizing::FONT_SIZE,
            item_height: sizing::ITEM_HEIGHT,
            item_padding_left: sizing::ITEM_PADDING_LEFT,
            check_slot: sizing::CHECK_SLOT,
            chevron_size: sizing::CHEVRON,
            content_min_width: sizing::CONTENT_MIN_WIDTH,
            content_offset: sizing::CONTENT_OFFSET,
            text: theme_colors::TEXT,
            text_muted: theme_colors::TEXT_MUTED,
            border: theme_colors::BORDER,
            background: theme_colors::BACKGROUND,
            accent_bg: theme_colors::ACCENT_BG,
            accent_text: theme_colors::ACCENT_TEXT,
            popover_bg: theme_colors::POPOVER_BG,
            backdrop: theme_colors::BACKDROP,
        }
    }
}

impl SelectStyle {
    /// Apply an override on top of this style.
    pub fn merged(&self, over: &StyleOverride) -> Self {
        Self {
            trigger_height: over.trigger_height.unwrap_or(self.trigger_height),
            corner_radius: over.corner_radius.unwrap_or(self.corner_radius),
            item_radius: over.item_radius.unwrap_or(self.item_radius),
            font_size: over.font_size.unwrap_or(self.font_size),
            item_height: over.item_height.unwrap_or(self.item_height),
            item_padding_left: over.item_padding_left.unwrap_or(self.item_padding_left),
            check_slot: over.check_slot.unwrap_or(self.check_slot),
            chevron_size: over.chevron_size.unwrap_or(self.chevron_size),
            content_min_width: over.content_min_width.unwrap_or(self.content_min_width),
            content_offset: over.content_offset.unwrap_or(self.content_offset),
            text: over.text.unwrap_or(self.text),
            text_muted: over.text_muted.unwrap_or(self.text_muted),
            border: over.border.unwrap_or(self.border),
            background: over.background.unwrap_or(self.background),
            accent_bg: over.accent_bg.unwrap_or(self.accent_bg),
            accent_text: over.accent_text.unwrap_or(self.accent_text),
            popover_bg: over.popover_bg.unwrap_or(self.popover_bg),
            backdrop: over.backdrop.unwrap_or(self.backdrop),
        }
    }

    /// Font for labels.
    pub fn font_id(&self) -> egui::FontId {
        egui::FontId::proportional(self.font_size)
    }
}

/// Optional per-component style changes. Unset fields keep the base style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverride {
    pub trigger_height: Option<f32>,
    pub corner_radius: Option<u8>,
    pub item_radius: Option<u8>,
    pub font_size: Option<f32>,
    pub item_height: Option<f32>,
    pub item_padding_left: Option<f32>,
    pub check_slot: Option<f32>,
    pub chevron_size: Option<f32>,
    pub content_min_width: Option<f32>,
    pub content_offset: Option<f32>,
    pub text: Option<Color32>,
    pub text_muted: Option<Color32>,
    pub border: Option<Color32>,
    pub background: Option<Color32>,
    pub accent_bg: Option<Color32>,
    pub accent_text: Option<Color32>,
    pub popover_bg: Option<Color32>,
    pub backdrop: Option<Color32>,
}

impl StyleOverride {
    /// An override that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Combine two overrides; set fields of `later` win.
    pub fn then(&self, later: &StyleOverride) -> Self {
        Self {
            trigger_height: later.trigger_height.or(self.trigger_height),
            corner_radius: later.corner_radius.or(self.corner_radius),
            item_radius: later.item_radius.or(self.item_radius),
            font_size: later.font_size.or(self.font_size),
            item_height: later.item_height.or(self.item_height),
            item_padding_left: later.item_padding_left.or(self.item_padding_left),
            check_slot: later.check_slot.or(self.check_slot),
            chevron_size: later.chevron_size.or(self.chevron_size),
            content_min_width: later.content_min_width.or(self.content_min_width),
            content_offset: later.content_offset.or(self.content_offset),
            text: later.text.or(self.text),
            text_muted: later.text_muted.or(self.text_muted),
            border: later.border.or(self.border),
            background: later.background.or(self.background),
            accent_bg: later.accent_bg.or(self.accent_bg),
            accent_text: later.accent_text.or(self.accent_text),
            popover_bg: later.popover_bg.or(self.popover_bg),
            backdrop: later.backdrop.or(self.backdrop),
        }
    }

    /// Set the text color.
    pub fn text(mut self, color: Color32) -> Self {
        self.text = Some(color);
        self
    }

    /// Set the background color.
    pub fn background(mut self, color: Color32) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the border color.
    pub fn border(mut self, color: Color32) -> Self {
        self.border = Some(color);
        self
    }

    /// Set the selected/hovered item background.
    pub fn accent_bg(mut self, color: Color32) -> Self {
        self.accent_bg = Some(color);
        self
    }

    /// Set the content background.
    pub fn popover_bg(mut self, color: Color32) -> Self {
        self.popover_bg = Some(color);
        self
    }

    /// Set the trigger height.
    pub fn trigger_height(mut self, height: f32) -> Self {
        self.trigger_height = Some(height);
        self
    }

    /// Set the item row height.
    pub fn item_height(mut self, height: f32) -> Self {
        self.item_height = Some(height);
        self
    }

    /// Set the minimum content width.
    pub fn content_min_width(mut self, width: f32) -> Self {
        self.content_min_width = Some(width);
        self
    }

    /// Set the text size.
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }
}
