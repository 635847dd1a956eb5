//! The select composition root for egui.

use std::hash::Hash;

use dropselect_core::{OpenSetter, OverlayPanel, PointerDocument, SelectContext, SelectProps};
use egui::{Id, Rect, Ui};

use crate::style::SelectStyle;

/// A dropdown select.
///
/// Keep it in your UI state across frames, like any other retained widget
/// state. It owns the open flag and the overlay panel; the selected value
/// belongs to the caller and comes in through [`SelectProps`] each frame.
#[derive(Debug)]
pub struct Select {
    id: Id,
    root: dropselect_core::Select,
    panel: OverlayPanel,
    trigger_rect: Option<Rect>,
    style: SelectStyle,
}

impl Select {
    /// Create a closed select. `id_salt` must be unique among selects.
    pub fn new(id_salt: impl Hash) -> Self {
        Self {
            id: Id::new(id_salt),
            root: dropselect_core::Select::new(),
            panel: OverlayPanel::new(),
            trigger_rect: None,
            style: SelectStyle::default(),
        }
    }

    /// Set the base style for all parts of this select.
    pub fn with_style(mut self, style: SelectStyle) -> Self {
        self.style = style;
        self
    }

    /// The base style.
    pub fn style(&self) -> &SelectStyle {
        &self.style
    }

    /// Check if the panel is open.
    pub fn is_open(&self) -> bool {
        self.root.is_open()
    }

    /// Setter for the open flag, e.g. to close the panel from elsewhere.
    pub fn open_setter(&self) -> OpenSetter {
        self.root.setter()
    }

    /// Where the trigger was laid out last frame.
    pub fn trigger_rect(&self) -> Option<Rect> {
        self.trigger_rect
    }

    /// Where the content was laid out, while open.
    pub fn content_rect(&self) -> Option<Rect> {
        self.panel.content_bounds().map(|r| {
            Rect::from_min_max(
                egui::pos2(r.x0 as f32, r.y0 as f32),
                egui::pos2(r.x1 as f32, r.y1 as f32),
            )
        })
    }

    /// Show the select. `add_contents` lays out the trigger and content
    /// through the scope it is given.
    pub fn show<'a, R>(
        &mut self,
        ui: &mut Ui,
        document: &PointerDocument,
        props: SelectProps<'a>,
        add_contents: impl FnOnce(&mut Ui, &mut SelectScope<'a, '_>) -> R,
    ) -> R {
        let mut scope = SelectScope {
            ctx: self.root.provide(props),
            panel: &mut self.panel,
            document,
            trigger_rect: &mut self.trigger_rect,
            style: &self.style,
            id: self.id,
        };
        add_contents(ui, &mut scope)
    }
}

/// Everything the parts of one select share during a frame.
pub struct SelectScope<'a, 's> {
    pub(crate) ctx: SelectContext<'a>,
    pub(crate) panel: &'s mut OverlayPanel,
    pub(crate) document: &'s PointerDocument,
    pub(crate) trigger_rect: &'s mut Option<Rect>,
    pub(crate) style: &'s SelectStyle,
    pub(crate) id: Id,
}

impl<'a> SelectScope<'a, '_> {
    /// The shared selection state.
    pub fn context(&self) -> &SelectContext<'a> {
        &self.ctx
    }

    /// Mutable shared selection state.
    pub fn context_mut(&mut self) -> &mut SelectContext<'a> {
        &mut self.ctx
    }

    /// The select's base style.
    pub fn style(&self) -> &SelectStyle {
        self.style
    }

    /// The select's id.
    pub fn id(&self) -> Id {
        self.id
    }
}

impl std::fmt::Debug for SelectScope<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectScope")
            .field("ctx", &self.ctx)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
