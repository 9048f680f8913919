//! Zoom and pan state for the planar views.
//!
//! Panning is only possible once zoomed in. The stored pan offset is kept
//! when zoom drops back to the floor, but [`ViewTransform2D::effective_transform`]
//! masks it, so the base view is always the identity.

use crate::constants::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use glam::Vec2;

/// How pointer motion during a drag turns into a pan offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    /// Offset is the pointer's displacement from where the gesture began.
    /// Each new gesture starts from zero, so the image jumps to the pointer.
    #[default]
    Anchored,
    /// Displacement is added to the offset held when the gesture began.
    Incremental,
}

/// An in-progress pan gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub anchor: Vec2,
    start_offset: Vec2,
}

/// Scale followed by translation, applied about the container centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub scale: f32,
    pub translate: Vec2,
}

impl Transform2D {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Pointer position inside the container back to untransformed image pixels.
    pub fn unproject(&self, screen_px: Vec2, container: Vec2) -> Vec2 {
        let c = container * 0.5;
        c + (screen_px - c - self.translate) / self.scale
    }

    /// CSS `transform` value for the displayed image.
    pub fn to_css(&self) -> String {
        if self.is_identity() {
            return "none".to_string();
        }
        format!(
            "translate({:.1}px, {:.1}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Debug)]
pub struct ViewTransform2D {
    zoom: f32,
    pan_offset: Vec2,
    drag: Option<DragSession>,
    mode: DragMode,
}

impl Default for ViewTransform2D {
    fn default() -> Self {
        Self::new(DragMode::default())
    }
}

impl ViewTransform2D {
    pub fn new(mode: DragMode) -> Self {
        Self {
            zoom: ZOOM_MIN,
            pan_offset: Vec2::ZERO,
            drag: None,
            mode,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Stored offset, including any value masked at the zoom floor.
    pub fn pan_offset(&self) -> Vec2 {
        self.pan_offset
    }

    pub fn drag_mode(&self) -> DragMode {
        self.mode
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns true when the zoom level changed.
    pub fn zoom_in(&mut self) -> bool {
        let prev = self.zoom;
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
        self.zoom != prev
    }

    /// Returns true when the zoom level changed.
    pub fn zoom_out(&mut self) -> bool {
        let prev = self.zoom;
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
        self.zoom != prev
    }

    /// Opens a gesture when zoomed in; returns whether one was opened.
    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        if self.zoom <= ZOOM_MIN || !pointer.is_finite() {
            return false;
        }
        let start_offset = match self.mode {
            DragMode::Anchored => Vec2::ZERO,
            DragMode::Incremental => self.pan_offset,
        };
        self.drag = Some(DragSession {
            anchor: pointer,
            start_offset,
        });
        true
    }

    /// Moves the pan offset while a gesture is open; returns whether it did.
    pub fn update_drag(&mut self, pointer: Vec2) -> bool {
        let Some(session) = self.drag else {
            return false;
        };
        if !pointer.is_finite() {
            return false;
        }
        self.pan_offset = session.start_offset + (pointer - session.anchor);
        true
    }

    /// Closes any open gesture. The pan offset is left where it is.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    pub fn effective_transform(&self) -> Transform2D {
        if self.zoom <= ZOOM_MIN {
            return Transform2D::IDENTITY;
        }
        Transform2D {
            scale: self.zoom,
            translate: self.pan_offset,
        }
    }
}
