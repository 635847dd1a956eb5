//! Shared selection state and the widget root that owns it.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Storage for a select's open/closed flag.
///
/// Exactly one flag exists per widget instance, so at most one overlay
/// panel can be logically open at a time.
#[derive(Debug, Default)]
pub struct OpenState {
    flag: Rc<Cell<bool>>,
}

impl OpenState {
    /// Create a closed open-state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the panel is open.
    pub fn is_open(&self) -> bool {
        self.flag.get()
    }

    /// Get a setter handle for the flag.
    pub fn setter(&self) -> OpenSetter {
        OpenSetter {
            flag: Rc::clone(&self.flag),
        }
    }
}

/// Handle through which children read and write the open flag.
///
/// Clones share the same flag. Two setters are the same setter when they
/// point at the same storage (see [`OpenSetter::same_as`]).
#[derive(Debug, Clone)]
pub struct OpenSetter {
    flag: Rc<Cell<bool>>,
}

impl OpenSetter {
    /// Current value of the flag.
    pub fn get(&self) -> bool {
        self.flag.get()
    }

    /// Write the flag.
    pub fn set(&self, open: bool) {
        let was_open = self.flag.replace(open);
        if was_open != open {
            log::debug!("select {}", if open { "opened" } else { "closed" });
        }
    }

    /// Whether both handles write the same flag.
    pub fn same_as(&self, other: &OpenSetter) -> bool {
        Rc::ptr_eq(&self.flag, &other.flag)
    }
}

/// Construction parameters for a [`Select`]: the current value, the change
/// callback, and the disabled flag.
pub struct SelectProps<'a> {
    value: &'a str,
    on_value_change: Box<dyn FnMut(&str) + 'a>,
    disabled: bool,
}

impl<'a> SelectProps<'a> {
    /// Props for the given selected value. An empty string means no selection.
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            on_value_change: Box::new(|_| {}),
            disabled: false,
        }
    }

    /// Set the callback invoked when an item is chosen.
    pub fn on_value_change(mut self, callback: impl FnMut(&str) + 'a) -> Self {
        self.on_value_change = Box::new(callback);
        self
    }

    /// Set whether the select is disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl fmt::Debug for SelectProps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectProps")
            .field("value", &self.value)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

/// The shared state every child of one select sees during a render.
///
/// Built by [`Select::provide`] and passed by reference to the trigger,
/// value display, overlay panel and items.
pub struct SelectContext<'a> {
    value: &'a str,
    on_value_change: Box<dyn FnMut(&str) + 'a>,
    set_open: OpenSetter,
    disabled: bool,
}

impl<'a> SelectContext<'a> {
    /// The selected value (empty when nothing is selected).
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Whether the panel is open right now.
    pub fn is_open(&self) -> bool {
        self.set_open.get()
    }

    /// Write the open flag.
    pub fn set_open(&self, open: bool) {
        self.set_open.set(open);
    }

    /// The setter handle, for components that need its identity.
    pub fn setter(&self) -> &OpenSetter {
        &self.set_open
    }

    /// Whether the select is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Invoke the change callback.
    pub fn notify_change(&mut self, value: &str) {
        log::debug!("select value changed to {:?}", value);
        (self.on_value_change)(value);
    }
}

impl fmt::Debug for SelectContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectContext")
            .field("value", &self.value)
            .field("open", &self.is_open())
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

/// The composition root of a select.
///
/// Owns the open flag across renders and hands a fresh [`SelectContext`]
/// to its children on every render. It renders nothing itself.
#[derive(Debug, Default)]
pub struct Select {
    open: OpenState,
}

impl Select {
    /// Create a closed select.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the panel is open.
    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    /// Get a setter for the open flag, e.g. to close the panel from the host.
    pub fn setter(&self) -> OpenSetter {
        self.open.setter()
    }

    /// Build the shared state for one render.
    pub fn provide<'a>(&self, props: SelectProps<'a>) -> SelectContext<'a> {
        SelectContext {
            value: props.value,
            on_value_change: props.on_value_change,
            set_open: self.open.setter(),
            disabled: props.disabled,
        }
    }

    /// Provide shared state to `children` and return what they return.
    pub fn show<'a, R>(
        &self,
        props: SelectProps<'a>,
        children: impl FnOnce(&mut SelectContext<'a>) -> R,
    ) -> R {
        let mut ctx = self.provide(props);
        children(&mut ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_starts_closed() {
        let select = Select::new();
        assert!(!select.is_open());
        let ctx = select.provide(SelectProps::new(""));
        assert!(!ctx.is_open());
        assert_eq!(ctx.value(), "");
        assert!(!ctx.is_disabled());
    }

    #[test]
    fn test_context_writes_widget_flag() {
        let select = Select::new();
        select.show(SelectProps::new("a"), |ctx| ctx.set_open(true));
        assert!(select.is_open());

        // A fresh render sees the stored flag
        let ctx = select.provide(SelectProps::new("a"));
        assert!(ctx.is_open());
    }

    #[test]
    fn test_setter_identity() {
        let a = Select::new();
        let b = Select::new();
        assert!(a.setter().same_as(&a.setter()));
        assert!(!a.setter().same_as(&b.setter()));

        let ctx = a.provide(SelectProps::new(""));
        assert!(ctx.setter().same_as(&a.setter()));
    }

    #[test]
    fn test_notify_change_calls_callback() {
        let select = Select::new();
        let mut seen = Vec::new();
        {
            let mut ctx = select.provide(SelectProps::new("").on_value_change(|v| seen.push(v.to_string())));
            ctx.notify_change("x");
        }
        assert_eq!(seen, vec!["x".to_string()]);
    }

    #[test]
    fn test_default_callback_is_noop() {
        let select = Select::new();
        let mut ctx = select.provide(SelectProps::new("a").disabled(true));
        ctx.notify_change("b");
        assert!(ctx.is_disabled());
        assert_eq!(ctx.value(), "a");
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let a = Select::new();
        let b = Select::new();
        a.setter().set(true);
        assert!(a.is_open());
        assert!(!b.is_open());
    }
}
