//! Per-surface manipulation session: tap-vs-drag discrimination and
//! dispatch to the resize, translate, and pinch engines.
//!
//! ```text
//! Idle -> Active(still_tap) -> Active(edited) -> Idle
//!    \------> Idle (up/cancel while still a tap)
//! ```
//!
//! # Invariants
//!
//! 1. Every `editing_began` is followed by exactly one `editing_ended`.
//! 2. `tapped` fires at most once per session, only after `editing_ended(false)`.
//! 3. Once a move leaves the tap slop the session can never become a tap again.
//! 4. A rejected engine step leaves the frame and the session reference untouched.
//!
//! # Failure Modes
//!
//! Pointer events that do not fit the current state (a move while idle, a
//! second down while active) are reported as [`ManipulationEffect::Noop`]
//! with a reason and a warning log; the machine never panics on input order.
//! Down and move samples with a non-finite position are ignored the same
//! way. An up closes the session whatever position it carries.

use std::fmt;

use gripframe_core::event::SurfaceInput;
use gripframe_core::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::anchor::{Anchor, resolve_anchor};
use crate::bounds::ContainerBounds;
use crate::config::{ConfigError, InteractionConfig};
use crate::pinch::{inset_resize, magnify_to_inset, pinch, scroll_to_inset};
use crate::resize::resize_to;
use crate::step::{RejectReason, StepOutcome};
use crate::translate::translate;

/// Squared distance from the down point below which a move is still a tap.
pub const TAP_SLOP_SQUARED: f64 = 10.0;

// ---------------------------------------------------------------------------
// Delegate
// ---------------------------------------------------------------------------

/// Host callbacks fired as a session progresses. All default to no-ops.
pub trait EditingDelegate {
    /// A pointer session (or a standalone magnify/scroll resize) started.
    fn editing_began(&mut self) {}

    /// The session finished. `edited` is false when it was a tap.
    fn editing_ended(&mut self, _edited: bool) {}

    /// The session was a tap. Fired after `editing_ended(false)`.
    fn tapped(&mut self) {}
}

/// Delegate that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDelegate;

impl EditingDelegate for NoopDelegate {}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// What pointer moves do for the rest of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureMode {
    /// Drag an edge or corner.
    Resize,
    /// Drag the whole surface.
    Translate,
    /// Neither is enabled for this touch; moves only end the tap.
    Inert,
}

/// Fields of an in-progress pointer session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveSession {
    /// `Anchor::None` unless `mode` is `Resize`.
    pub anchor: Anchor,
    pub mode: GestureMode,
    /// Resize: last committed touch point, container space.
    /// Translate/inert: the touch-down point, surface-local.
    pub reference: Point,
    /// Touch-down point in container space, for the tap slop check.
    pub down_point: Point,
    /// Frame size at touch-down; the ratio-lock denominator for drag resize.
    pub initial_size: Size,
    /// No move has left the tap slop and no resize has been applied yet.
    pub still_tap: bool,
}

/// Lifecycle state of a [`Manipulator`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    Active(ActiveSession),
}

/// Explicit no-op diagnostics for input that is safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoopReason {
    /// Move, up, or cancel without a preceding down.
    IdleWithoutActiveSession,
    /// A second down while a session is running.
    ActiveSessionInProgress,
    /// Neither moving nor drag resizing is enabled.
    PointerInputDisabled,
    /// Pinch, magnify, and scroll resizing are disabled.
    PinchResizingDisabled,
    /// Scroll without Command or Control held; the host should scroll.
    ModifierNotHeld,
    /// The pointer position was NaN or infinite.
    NonFinitePosition,
    /// Move past the tap slop in a session that neither resizes nor translates.
    InertGesture,
}

/// Effect emitted by one [`Manipulator::apply`] step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum ManipulationEffect {
    Began {
        anchor: Anchor,
        mode: GestureMode,
    },
    /// Move swallowed by the tap slop.
    Absorbed {
        distance_squared: f64,
    },
    Resized {
        frame: Rect,
        reference: Point,
    },
    Translated {
        frame: Rect,
    },
    Pinched {
        frame: Rect,
    },
    InsetResized {
        frame: Rect,
    },
    /// The engine refused the step; the frame is unchanged.
    Rejected {
        reason: RejectReason,
    },
    Ended {
        edited: bool,
        tapped: bool,
    },
    Canceled {
        edited: bool,
    },
    Noop {
        reason: NoopReason,
    },
}

/// One state-machine transition with deterministic diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManipulationTransition {
    pub transition_id: u64,
    pub from: SessionState,
    pub to: SessionState,
    pub effect: ManipulationEffect,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Manipulator construction/configuration errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ManipulatorError {
    InvalidConfig(ConfigError),
    /// Configuration cannot change while a pointer session is running.
    SessionActive,
}

impl fmt::Display for ManipulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(error) => write!(f, "invalid interaction config: {error}"),
            Self::SessionActive => write!(f, "cannot change config while a session is active"),
        }
    }
}

impl std::error::Error for ManipulatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::InvalidConfig(error) = self {
            return Some(error);
        }
        None
    }
}

impl From<ConfigError> for ManipulatorError {
    fn from(error: ConfigError) -> Self {
        Self::InvalidConfig(error)
    }
}

// ---------------------------------------------------------------------------
// Machine
// ---------------------------------------------------------------------------

/// Interaction state machine for one surface.
///
/// Owns the surface's committed frame. The host feeds it [`SurfaceInput`]
/// values together with the container's current bounds and reads the frame
/// back after each step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manipulator {
    frame: Rect,
    config: InteractionConfig,
    state: SessionState,
    transition_counter: u64,
}

impl Manipulator {
    /// Construct a manipulator for a surface currently at `frame`.
    pub fn new(frame: Rect, config: InteractionConfig) -> Result<Self, ManipulatorError> {
        config.validate()?;
        Ok(Self {
            frame,
            config,
            state: SessionState::Idle,
            transition_counter: 0,
        })
    }

    /// Committed frame, container space.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// Replace the frame from outside (host relayout).
    ///
    /// An active session keeps its reference and initial size.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    #[must_use]
    pub const fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Replace the configuration. Refused while a session is active.
    pub fn set_config(&mut self, config: InteractionConfig) -> Result<(), ManipulatorError> {
        if self.is_active() {
            return Err(ManipulatorError::SessionActive);
        }
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a pointer session is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    /// End any active session without a pointer event, e.g. on surface
    /// teardown. Fires `editing_ended`. Returns `None` when already idle.
    pub fn force_cancel(
        &mut self,
        delegate: &mut dyn EditingDelegate,
    ) -> Option<ManipulationTransition> {
        let from = self.state;
        let SessionState::Active(session) = from else {
            return None;
        };
        let effect = self.cancel(session, delegate);
        Some(self.record(from, effect))
    }

    /// Apply one input and emit the resulting transition.
    pub fn apply(
        &mut self,
        input: SurfaceInput,
        bounds: &ContainerBounds,
        delegate: &mut dyn EditingDelegate,
    ) -> ManipulationTransition {
        let from = self.state;

        let effect = match (self.state, input) {
            (_, SurfaceInput::Pinch { velocity, scale }) => self.on_pinch(velocity, scale, bounds),
            (_, SurfaceInput::Magnify { magnification }) => {
                let inset = magnify_to_inset(magnification, self.config.magnify_gain);
                self.on_inset(inset, bounds, delegate)
            }
            (_, SurfaceInput::ScrollResize { delta_y, modifiers }) => {
                if modifiers.is_resize_chord() {
                    self.on_inset(scroll_to_inset(delta_y), bounds, delegate)
                } else {
                    ManipulationEffect::Noop {
                        reason: NoopReason::ModifierNotHeld,
                    }
                }
            }
            (_, input) if input.tracked_position().is_some_and(|p| !p.is_finite()) => {
                tracing::warn!(target: "gripframe.session", ?input, "non-finite pointer position");
                ManipulationEffect::Noop {
                    reason: NoopReason::NonFinitePosition,
                }
            }
            (SessionState::Idle, SurfaceInput::PointerDown { position }) => {
                self.begin(position, delegate)
            }
            (SessionState::Idle, input) => {
                tracing::warn!(
                    target: "gripframe.session",
                    ?input,
                    "pointer event without an active session"
                );
                ManipulationEffect::Noop {
                    reason: NoopReason::IdleWithoutActiveSession,
                }
            }
            (SessionState::Active(_), SurfaceInput::PointerDown { .. }) => {
                tracing::warn!(
                    target: "gripframe.session",
                    "pointer down during an active session"
                );
                ManipulationEffect::Noop {
                    reason: NoopReason::ActiveSessionInProgress,
                }
            }
            (SessionState::Active(session), SurfaceInput::PointerMoved { position }) => {
                self.on_move(session, position, bounds)
            }
            (SessionState::Active(session), SurfaceInput::PointerUp { .. }) => {
                self.end(session, delegate)
            }
            (SessionState::Active(session), SurfaceInput::PointerCancelled) => {
                self.cancel(session, delegate)
            }
        };

        self.record(from, effect)
    }

    fn record(&mut self, from: SessionState, effect: ManipulationEffect) -> ManipulationTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        ManipulationTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state,
            effect,
        }
    }

    fn begin(&mut self, position: Point, delegate: &mut dyn EditingDelegate) -> ManipulationEffect {
        if !self.config.accepts_pointer_input() {
            return ManipulationEffect::Noop {
                reason: NoopReason::PointerInputDisabled,
            };
        }

        let local = self.frame.to_local(position);
        let resolved = resolve_anchor(
            local,
            self.frame.size(),
            self.config.resize_distance_to_center_factor,
        );
        let (anchor, mode, reference) =
            if self.config.enable_drag_resizing && resolved.is_resizing() {
                (resolved, GestureMode::Resize, position)
            } else if self.config.enable_moving {
                (Anchor::None, GestureMode::Translate, local)
            } else {
                (Anchor::None, GestureMode::Inert, local)
            };

        self.state = SessionState::Active(ActiveSession {
            anchor,
            mode,
            reference,
            down_point: position,
            initial_size: self.frame.size(),
            still_tap: true,
        });

        tracing::debug!(
            target: "gripframe.session",
            ?anchor,
            ?mode,
            x = position.x,
            y = position.y,
            "manipulation began"
        );
        delegate.editing_began();
        ManipulationEffect::Began { anchor, mode }
    }

    fn on_move(
        &mut self,
        mut session: ActiveSession,
        position: Point,
        bounds: &ContainerBounds,
    ) -> ManipulationEffect {
        if session.still_tap {
            let distance_squared = session.down_point.distance_squared(position);
            if distance_squared < TAP_SLOP_SQUARED {
                return ManipulationEffect::Absorbed { distance_squared };
            }
            session.still_tap = false;
        }

        let effect = match session.mode {
            GestureMode::Resize => match resize_to(
                self.frame,
                session.anchor,
                session.reference,
                position,
                session.initial_size,
                bounds,
                &self.config,
            ) {
                StepOutcome::Applied(step) => {
                    self.frame = step.frame;
                    session.reference = step.reference;
                    tracing::trace!(target: "gripframe.session", frame = ?step.frame, "resized");
                    ManipulationEffect::Resized {
                        frame: step.frame,
                        reference: step.reference,
                    }
                }
                StepOutcome::Rejected(reason) => rejected(reason),
            },
            GestureMode::Translate => {
                let local = self.frame.to_local(position);
                match translate(self.frame, session.reference, local, bounds, &self.config) {
                    StepOutcome::Applied(frame) => {
                        self.frame = frame;
                        tracing::trace!(target: "gripframe.session", ?frame, "translated");
                        ManipulationEffect::Translated { frame }
                    }
                    StepOutcome::Rejected(reason) => rejected(reason),
                }
            }
            GestureMode::Inert => ManipulationEffect::Noop {
                reason: NoopReason::InertGesture,
            },
        };

        self.state = SessionState::Active(session);
        effect
    }

    fn end(
        &mut self,
        session: ActiveSession,
        delegate: &mut dyn EditingDelegate,
    ) -> ManipulationEffect {
        let edited = !session.still_tap;
        let tapped = session.still_tap && self.config.enable_tapping;
        self.state = SessionState::Idle;

        tracing::debug!(target: "gripframe.session", edited, tapped, "manipulation ended");
        delegate.editing_ended(edited);
        if tapped {
            delegate.tapped();
        }
        ManipulationEffect::Ended { edited, tapped }
    }

    fn cancel(
        &mut self,
        session: ActiveSession,
        delegate: &mut dyn EditingDelegate,
    ) -> ManipulationEffect {
        let edited = !session.still_tap;
        self.state = SessionState::Idle;

        tracing::debug!(target: "gripframe.session", edited, "manipulation canceled");
        delegate.editing_ended(edited);
        ManipulationEffect::Canceled { edited }
    }

    fn on_pinch(
        &mut self,
        velocity: f64,
        scale: f64,
        bounds: &ContainerBounds,
    ) -> ManipulationEffect {
        if !self.config.enable_pinch_resizing {
            return ManipulationEffect::Noop {
                reason: NoopReason::PinchResizingDisabled,
            };
        }
        match pinch(self.frame, velocity, scale, bounds, &self.config) {
            StepOutcome::Applied(frame) => {
                self.frame = frame;
                self.mark_edited();
                tracing::trace!(target: "gripframe.session", ?frame, velocity, "pinched");
                ManipulationEffect::Pinched { frame }
            }
            StepOutcome::Rejected(reason) => rejected(reason),
        }
    }

    /// Magnify and modifier-scroll. A standalone tick is bracketed by its
    /// own began/ended pair; inside a pointer session it only marks it edited.
    fn on_inset(
        &mut self,
        inset: f64,
        bounds: &ContainerBounds,
        delegate: &mut dyn EditingDelegate,
    ) -> ManipulationEffect {
        if !self.config.enable_pinch_resizing {
            return ManipulationEffect::Noop {
                reason: NoopReason::PinchResizingDisabled,
            };
        }

        let standalone = !self.is_active();
        if standalone {
            delegate.editing_began();
        }
        let effect = match inset_resize(self.frame, inset, bounds, &self.config) {
            StepOutcome::Applied(frame) => {
                self.frame = frame;
                self.mark_edited();
                tracing::trace!(target: "gripframe.session", ?frame, inset, "inset resized");
                ManipulationEffect::InsetResized { frame }
            }
            StepOutcome::Rejected(reason) => rejected(reason),
        };
        if standalone {
            delegate.editing_ended(true);
        }
        effect
    }

    fn mark_edited(&mut self) {
        if let SessionState::Active(session) = &mut self.state {
            session.still_tap = false;
        }
    }
}

fn rejected(reason: RejectReason) -> ManipulationEffect {
    tracing::trace!(target: "gripframe.session", ?reason, "step rejected");
    ManipulationEffect::Rejected { reason }
}
