//! Overlay panel: open/closed rendering decision, dismiss layer, and the
//! outside-click subscription.
//!
//! While the panel is open it holds exactly one pointer-down listener on the
//! [`PointerDocument`]. The listener is owned by an
//! [`OutsideClickSubscription`], which deregisters it when dropped, so
//! every path out of the open state (closing, re-rendering with a different
//! setter, dropping the panel) releases it.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect};

use crate::document::{ListenerAction, ListenerId, PointerDocument};
use crate::state::{OpenSetter, SelectContext};

/// Last laid-out bounds of the content container.
///
/// Shared between the panel, which updates it after layout, and the outside
/// listener, which reads it.
#[derive(Debug, Clone, Default)]
pub struct ContentBounds(Rc<Cell<Option<Rect>>>);

impl ContentBounds {
    /// Bounds not laid out yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the container's bounds.
    pub fn set(&self, rect: Rect) {
        self.0.set(Some(rect));
    }

    /// Forget the bounds.
    pub fn clear(&self) {
        self.0.set(None);
    }

    /// The recorded bounds.
    pub fn get(&self) -> Option<Rect> {
        self.0.get()
    }

    /// Whether `point` lies outside the container. False while there are no
    /// bounds: nothing has been laid out to be outside of.
    pub fn is_outside(&self, point: Point) -> bool {
        self.get().is_some_and(|rect| !rect.contains(point))
    }
}

/// A registered outside-click listener. Dropping it deregisters the listener.
#[derive(Debug)]
pub struct OutsideClickSubscription {
    document: PointerDocument,
    id: ListenerId,
}

impl OutsideClickSubscription {
    /// Register a listener that closes `setter` on pointer-downs outside
    /// `bounds`. The listener deregisters itself once it has closed the panel.
    pub fn subscribe(document: &PointerDocument, bounds: ContentBounds, setter: OpenSetter) -> Self {
        let id = document.add_listener(move |event| {
            if setter.get() && bounds.is_outside(event.position) {
                log::debug!("pointer-down outside select content at {:?}", event.position);
                setter.set(false);
                ListenerAction::Remove
            } else {
                ListenerAction::Keep
            }
        });
        Self {
            document: document.clone(),
            id,
        }
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.document.has_listener(self.id)
    }
}

impl Drop for OutsideClickSubscription {
    fn drop(&mut self) {
        self.document.remove_listener(self.id);
    }
}

/// The overlay panel of one select.
///
/// Lives as long as the panel component; call [`OverlayPanel::sync`] on
/// every render.
#[derive(Debug, Default)]
pub struct OverlayPanel {
    bounds: ContentBounds,
    subscription: Option<OutsideClickSubscription>,
    // (is_open, setter) the subscription was last evaluated for
    deps: Option<(bool, OpenSetter)>,
}

impl OverlayPanel {
    /// Create a panel with no subscription.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluate the subscription against the shared state and return
    /// whether the content should render.
    ///
    /// When `is_open` or the setter changed since the last call the old
    /// listener is released, and a new one is registered if the panel is open.
    /// An open panel whose listener already removed itself registers again.
    pub fn sync(&mut self, ctx: &SelectContext<'_>, document: &PointerDocument) -> bool {
        let open = ctx.is_open();
        let changed = match &self.deps {
            Some((was_open, setter)) => *was_open != open || !setter.same_as(ctx.setter()),
            None => true,
        } || (open && !self.is_subscribed());

        if changed {
            self.subscription = None;
            if open {
                self.subscription = Some(OutsideClickSubscription::subscribe(
                    document,
                    self.bounds.clone(),
                    ctx.setter().clone(),
                ));
            } else {
                self.bounds.clear();
            }
            self.deps = Some((open, ctx.setter().clone()));
        }

        open
    }

    /// Activation of the dismiss layer: close and release the listener.
    pub fn dismiss(&mut self, ctx: &SelectContext<'_>) {
        log::debug!("select dismissed");
        ctx.set_open(false);
        self.subscription = None;
        self.bounds.clear();
        self.deps = Some((false, ctx.setter().clone()));
    }

    /// Record the content container's laid-out bounds.
    pub fn set_content_bounds(&self, rect: Rect) {
        self.bounds.set(rect);
    }

    /// The content container's last bounds.
    pub fn content_bounds(&self) -> Option<Rect> {
        self.bounds.get()
    }

    /// Whether an outside-click listener is registered.
    pub fn is_subscribed(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(OutsideClickSubscription::is_active)
    }
}
