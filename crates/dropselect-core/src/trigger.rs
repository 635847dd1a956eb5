//! Trigger behaviour: toggles the panel unless the select is disabled.

use crate::state::SelectContext;

/// What a trigger exposes for the current shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerState {
    /// Expanded-state flag for assistive tooling.
    pub expanded: bool,
    /// The control refuses activation and renders disabled.
    pub disabled: bool,
}

impl TriggerState {
    /// Read the trigger state from shared state.
    pub fn of(ctx: &SelectContext<'_>) -> Self {
        Self {
            expanded: ctx.is_open(),
            disabled: ctx.is_disabled(),
        }
    }
}

/// Activate the trigger. Flips the open flag and returns true, or does
/// nothing and returns false when disabled.
pub fn activate_trigger(ctx: &SelectContext<'_>) -> bool {
    if ctx.is_disabled() {
        return false;
    }
    ctx.set_open(!ctx.is_open());
    true
}
