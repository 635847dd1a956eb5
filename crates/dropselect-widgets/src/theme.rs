//! JSON themes for the select.
//!
//! A theme names colors as `#rrggbb` or `#rrggbbaa` strings. Missing fields
//! fall back to the built-in style.

use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::{SelectStyle, StyleOverride};

/// Theme errors.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Invalid theme JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid color for {field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },
    #[error("Invalid size for {field}: {value}")]
    InvalidSize { field: &'static str, value: f32 },
}

/// Result type for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

/// Serializable select theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectTheme {
    pub text: Option<String>,
    pub text_muted: Option<String>,
    pub border: Option<String>,
    pub background: Option<String>,
    pub accent_bg: Option<String>,
    pub accent_text: Option<String>,
    pub popover_bg: Option<String>,
    pub backdrop: Option<String>,
    pub trigger_height: Option<f32>,
    pub item_height: Option<f32>,
    pub font_size: Option<f32>,
    pub content_min_width: Option<f32>,
    pub corner_radius: Option<u8>,
}

impl SelectTheme {
    /// Parse a theme from JSON.
    pub fn from_json(json: &str) -> ThemeResult<Self> {
        let theme: Self = serde_json::from_str(json)?;
        // Validate eagerly so a bad theme fails at load time
        theme.to_override()?;
        Ok(theme)
    }

    /// Serialize the theme to pretty JSON.
    pub fn to_json(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert into a style override.
    pub fn to_override(&self) -> ThemeResult<StyleOverride> {
        Ok(StyleOverride {
            text: color_field("text", &self.text)?,
            text_muted: color_field("text_muted", &self.text_muted)?,
            border: color_field("border", &self.border)?,
            background: color_field("background", &self.background)?,
            accent_bg: color_field("accent_bg", &self.accent_bg)?,
            accent_text: color_field("accent_text", &self.accent_text)?,
            popover_bg: color_field("popover_bg", &self.popover_bg)?,
            backdrop: color_field("backdrop", &self.backdrop)?,
            trigger_height: size_field("trigger_height", self.trigger_height)?,
            item_height: size_field("item_height", self.item_height)?,
            font_size: size_field("font_size", self.font_size)?,
            content_min_width: size_field("content_min_width", self.content_min_width)?,
            corner_radius: self.corner_radius,
            ..StyleOverride::default()
        })
    }

    /// The built-in style with this theme applied.
    pub fn to_style(&self) -> ThemeResult<SelectStyle> {
        Ok(SelectStyle::default().merged(&self.to_override()?))
    }
}

fn color_field(field: &'static str, value: &Option<String>) -> ThemeResult<Option<Color32>> {
    value
        .as_deref()
        .map(|v| {
            parse_hex_color(v).ok_or_else(|| ThemeError::InvalidColor {
                field,
                value: v.to_string(),
            })
        })
        .transpose()
}

fn size_field(field: &'static str, value: Option<f32>) -> ThemeResult<Option<f32>> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(ThemeError::InvalidSize { field, value: v }),
        other => Ok(other),
    }
}

/// Parse `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(color: &str) -> Option<Color32> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        6 => Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#3b82f6"), Some(Color32::from_rgb(59, 130, 246)));
        assert_eq!(
            parse_hex_color("#ffffffcc"),
            Some(Color32::from_rgba_unmultiplied(255, 255, 255, 204))
        );
        assert_eq!(parse_hex_color("3b82f6"), None);
        assert_eq!(parse_hex_color("#3b82f"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
        assert_eq!(parse_hex_color("#+fffff"), None);
    }

    #[test]
    fn test_empty_theme_is_default_style() {
        let theme = SelectTheme::from_json("{}").unwrap();
        assert_eq!(theme.to_style().unwrap(), SelectStyle::default());
    }

    #[test]
    fn test_theme_applies_fields() {
        let theme = SelectTheme::from_json(
            r##"{ "background": "#000000", "text": "#ffffff", "trigger_height": 32.0 }"##,
        )
        .unwrap();
        let style = theme.to_style().unwrap();
        assert_eq!(style.background, Color32::BLACK);
        assert_eq!(style.text, Color32::WHITE);
        assert_eq!(style.trigger_height, 32.0);
        assert_eq!(style.border, SelectStyle::default().border);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let err = SelectTheme::from_json(r#"{ "border": "blue" }"#).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { field: "border", .. }));
        assert_eq!(err.to_string(), "Invalid color for border: \"blue\"");
    }

    #[test]
    fn test_invalid_size_is_rejected() {
        let err = SelectTheme::from_json(r#"{ "item_height": -4.0 }"#).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidSize { field: "item_height", .. }));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(SelectTheme::from_json("{"), Err(ThemeError::Parse(_))));
        assert!(matches!(
            SelectTheme::from_json(r##"{ "colour": "#000000" }"##),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn test_to_json_keeps_set_fields() {
        let theme = SelectTheme {
            accent_bg: Some("#f1f5f9".to_string()),
            ..SelectTheme::default()
        };
        let json = theme.to_json().unwrap();
        assert_eq!(SelectTheme::from_json(&json).unwrap(), theme);
    }
}
