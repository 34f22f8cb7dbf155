#![forbid(unsafe_code)]

//! Canonical input events for manipulable surfaces.
//!
//! Hosts translate their platform input (touch, mouse, trackpad, synthetic
//! test drivers) into [`SurfaceInput`] values. The interaction engine never
//! sees platform events directly.
//!
//! # Design Notes
//!
//! - Pointer positions are in the *container's* coordinate space. The engine
//!   converts to surface-local space itself, using the surface's current frame.
//! - One pointer stream per surface; there is no pointer id.
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Canonical surface input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SurfaceInput {
    /// A pointer went down on the surface.
    PointerDown { position: Point },

    /// The pointer that went down moved.
    PointerMoved { position: Point },

    /// The pointer was released.
    PointerUp { position: Point },

    /// The platform cancelled the pointer stream (e.g. focus stolen).
    PointerCancelled,

    /// One tick of a two-finger pinch.
    ///
    /// `velocity` is the scale velocity reported by the platform (negative
    /// while pinching in); `scale` is the cumulative gesture scale.
    Pinch { velocity: f64, scale: f64 },

    /// One tick of a trackpad magnify gesture.
    ///
    /// Positive magnification zooms in.
    Magnify { magnification: f64 },

    /// A scroll-wheel step. Resizes only while Command or Control is held.
    ScrollResize { delta_y: f64, modifiers: Modifiers },
}

impl SurfaceInput {
    /// Position of a sample whose coordinates drive the gesture (down and
    /// move). A pointer-up only closes the session, so its position is not
    /// reported here.
    #[must_use]
    pub const fn tracked_position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { position } | Self::PointerMoved { position } => Some(*position),
            _ => None,
        }
    }
}

bitflags! {
    /// Modifier keys held during a scroll event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

impl Modifiers {
    /// Command or Control is held: the combination that turns scrolling
    /// into resizing.
    #[must_use]
    pub const fn is_resize_chord(self) -> bool {
        self.intersects(Self::SUPER.union(Self::CTRL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracked_position_only_for_down_and_move() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(SurfaceInput::PointerDown { position: p }.tracked_position(), Some(p));
        assert_eq!(SurfaceInput::PointerMoved { position: p }.tracked_position(), Some(p));
        assert_eq!(SurfaceInput::PointerUp { position: p }.tracked_position(), None);
        assert_eq!(SurfaceInput::PointerCancelled.tracked_position(), None);
        assert_eq!(
            SurfaceInput::Pinch {
                velocity: 1.0,
                scale: 1.0
            }
            .tracked_position(),
            None
        );
    }

    #[test]
    fn resize_chord_requires_command_or_control() {
        assert!(Modifiers::SUPER.is_resize_chord());
        assert!(Modifiers::CTRL.is_resize_chord());
        assert!((Modifiers::CTRL | Modifiers::SHIFT).is_resize_chord());
        assert!(!Modifiers::SHIFT.is_resize_chord());
        assert!(!Modifiers::ALT.is_resize_chord());
        assert!(!Modifiers::NONE.is_resize_chord());
    }

    #[test]
    fn input_serializes_with_event_tag() {
        let input = SurfaceInput::PointerDown {
            position: Point::new(1.0, 2.0),
        };
        let json = serde_json::to_string(&input).expect("serialize");
        assert_eq!(json, r#"{"event":"pointer_down","position":{"x":1.0,"y":2.0}}"#);
        let back: SurfaceInput = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, input);
    }
}
