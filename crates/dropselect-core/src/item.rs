//! Selectable items.

use serde::{Deserialize, Serialize};

use crate::state::SelectContext;

/// One option of a select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Value passed to the change callback.
    pub value: String,
    /// Text shown in the row.
    pub label: String,
}

impl SelectOption {
    /// Create an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Whether the item with `value` is the current selection. Always derived.
pub fn is_selected(ctx: &SelectContext<'_>, value: &str) -> bool {
    ctx.value() == value
}

/// Activate the item with `value`: report the value, then close the panel.
///
/// Runs even when `value` is already selected.
pub fn activate_item(ctx: &mut SelectContext<'_>, value: &str) {
    ctx.notify_change(value);
    ctx.set_open(false);
}
