//! Container bounds as seen by the engine.

use gripframe_core::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

/// The container a surface lives in.
///
/// `visible` is the container's own bounds rectangle. Scrollable containers
/// may also report a logical `content` size; when it is larger than the
/// visible extent on an axis, containment uses the content extent for that
/// axis instead.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub visible: Rect,
    #[serde(default)]
    pub content: Option<Size>,
}

impl ContainerBounds {
    /// Bounds of a plain, non-scrolling container.
    #[must_use]
    pub const fn new(visible: Rect) -> Self {
        Self {
            visible,
            content: None,
        }
    }

    /// Bounds of a scrollable container with a logical content size.
    #[must_use]
    pub const fn with_content(visible: Rect, content: Size) -> Self {
        Self {
            visible,
            content: Some(content),
        }
    }

    /// Effective horizontal extent: `max(visible width, content width)`.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        match self.content {
            Some(content) => self.visible.width.max(content.width),
            None => self.visible.width,
        }
    }

    /// Effective vertical extent: `max(visible height, content height)`.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        match self.content {
            Some(content) => self.visible.height.max(content.height),
            None => self.visible.height,
        }
    }

    /// The rectangle strict containment keeps a surface inside.
    #[must_use]
    pub fn containment_rect(&self) -> Rect {
        Rect::new(
            self.visible.x,
            self.visible.y,
            self.content_width(),
            self.content_height(),
        )
    }
}

impl From<Rect> for ContainerBounds {
    fn from(visible: Rect) -> Self {
        Self::new(visible)
    }
}
