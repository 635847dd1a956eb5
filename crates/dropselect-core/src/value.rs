//! What the value display shows.

/// Text shown inside the trigger for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayText<'a> {
    /// The selected value, shown as-is even when no item matches it.
    Value(&'a str),
    /// The placeholder, shown in muted style.
    Placeholder(&'a str),
    /// Nothing to show.
    Empty,
}

impl<'a> DisplayText<'a> {
    /// The text to render, if any.
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            Self::Value(text) | Self::Placeholder(text) => Some(text),
            Self::Empty => None,
        }
    }

    /// Whether the text should use the muted style.
    pub fn is_muted(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// Decide what to show for `value`, falling back to `placeholder`.
pub fn display_text<'a>(value: &'a str, placeholder: Option<&'a str>) -> DisplayText<'a> {
    if !value.is_empty() {
        return DisplayText::Value(value);
    }
    match placeholder {
        Some(text) if !text.is_empty() => DisplayText::Placeholder(text),
        _ => DisplayText::Empty,
    }
}
