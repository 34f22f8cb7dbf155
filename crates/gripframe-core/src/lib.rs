// Forbid unsafe in production; deny in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: geometry primitives and the abstract input vocabulary.
//!
//! # Role in gripframe
//! `gripframe-core` is the leaf crate. It owns the value types every other
//! layer speaks in ([`geometry::Rect`], [`geometry::Point`],
//! [`geometry::Size`]) and the host-facing input events
//! ([`event::SurfaceInput`]).
//!
//! # How it fits in the system
//! Host adapters translate platform touch/mouse/trackpad input into
//! `SurfaceInput` values. `gripframe-interact` consumes them and drives the
//! drag/resize/pinch state machine. Nothing here renders or owns a surface.

pub mod event;
pub mod geometry;

pub use event::{Modifiers, SurfaceInput};
pub use geometry::{Point, Rect, Size};
