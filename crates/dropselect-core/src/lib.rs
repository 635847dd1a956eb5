//! Dropselect Core Library
//!
//! Renderer-independent state and behaviour for a dropdown select: the
//! shared selection state, the trigger, the value display, the overlay
//! panel with its outside-click subscription, and selectable items.
//!
//! Rendering lives in `dropselect-widgets`; this crate only decides what
//! should happen.

pub mod document;
pub mod input;
pub mod item;
pub mod overlay;
pub mod state;
pub mod trigger;
pub mod value;

pub use document::{ListenerAction, ListenerId, PointerDocument};
pub use input::{PointerButton, PointerDownEvent};
pub use item::{activate_item, is_selected, SelectOption};
pub use overlay::{ContentBounds, OutsideClickSubscription, OverlayPanel};
pub use state::{OpenSetter, OpenState, Select, SelectContext, SelectProps};
pub use trigger::{activate_trigger, TriggerState};
pub use value::{display_text, DisplayText};
