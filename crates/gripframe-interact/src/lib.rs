#![forbid(unsafe_code)]

//! Interaction engine: drag, resize, and pinch for surfaces inside a
//! bounded container.
//!
//! # Role in gripframe
//! `gripframe-interact` turns a stream of [`SurfaceInput`] values into frame
//! changes for one surface. It decides on touch-down whether the gesture
//! resizes (an edge or corner was grabbed) or translates, discriminates taps
//! from drags, and keeps the surface within the container's bounds.
//!
//! # How it fits in the system
//! Hosts own a [`Manipulator`] per surface, pass every input together with
//! the container's current [`ContainerBounds`], and read the committed frame
//! back. The engines ([`resize_to`], [`translate`], [`pinch`],
//! [`inset_resize`]) are plain functions and can be driven directly.
//!
//! [`SurfaceInput`]: gripframe_core::event::SurfaceInput

pub mod anchor;
pub mod bounds;
pub mod config;
pub mod pinch;
pub mod resize;
pub mod session;
pub mod step;
pub mod translate;

pub use anchor::{Anchor, AnchorFactors, resolve_anchor};
pub use bounds::ContainerBounds;
pub use config::{ConfigError, InteractionConfig};
pub use pinch::{inset_resize, magnify_to_inset, pinch, scroll_to_inset, shape_pinch_velocity};
pub use resize::{DragResize, FrameDelta, apply_frame_delta, clamp_touch_to_content, resize_to};
pub use session::{
    ActiveSession, EditingDelegate, GestureMode, ManipulationEffect, ManipulationTransition,
    Manipulator, ManipulatorError, NoopDelegate, NoopReason, SessionState, TAP_SLOP_SQUARED,
};
pub use step::{RejectReason, StepOutcome};
pub use translate::translate;
