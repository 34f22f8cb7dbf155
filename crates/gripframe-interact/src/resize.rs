//! Edge/corner resize: delta projection, ratio lock, minimum size, and
//! containment.
//!
//! # Invariants
//!
//! 1. With ratio lock, a committed frame never has `width < min_width` or
//!    `height < min_height`; an offending step is rejected whole.
//! 2. With ratio lock, every applied step scales both axes by the ratio of
//!    the session's initial size.
//! 3. With strict containment, a step never moves an edge that changes out of
//!    the container.
//! 4. Width and height of an applied frame are never negative.
//!
//! # Sign convention
//!
//! `dwidth` is projected from `reference.x - touch.x` while `dheight` is
//! projected from `touch.y - reference.y`. The anchor factor tables are
//! written against that asymmetry (y grows downward), so the two must change
//! together.

use gripframe_core::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::anchor::{Anchor, AnchorFactors};
use crate::bounds::ContainerBounds;
use crate::config::InteractionConfig;
use crate::step::{RejectReason, StepOutcome};

/// Per-component change requested for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameDelta {
    pub dx: f64,
    pub dy: f64,
    pub dwidth: f64,
    pub dheight: f64,
}

impl FrameDelta {
    /// Project a pointer step onto the frame through the anchor's factors.
    #[must_use]
    pub fn from_drag(anchor: Anchor, reference: Point, touch: Point) -> Self {
        let factors = anchor.factors();
        let dwidth = factors.adjusts_width * (reference.x - touch.x);
        let dheight = factors.adjusts_height * (touch.y - reference.y);
        Self::with_origin_shift(factors, dwidth, dheight)
    }

    /// Feed one scalar into both the width and height projections.
    #[must_use]
    pub fn uniform(anchor: Anchor, amount: f64) -> Self {
        let factors = anchor.factors();
        Self::with_origin_shift(
            factors,
            factors.adjusts_width * amount,
            factors.adjusts_height * amount,
        )
    }

    fn with_origin_shift(factors: AnchorFactors, dwidth: f64, dheight: f64) -> Self {
        Self {
            dx: factors.adjusts_x * -dwidth,
            dy: factors.adjusts_y * -dheight,
            dwidth,
            dheight,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.dx.is_finite()
            && self.dy.is_finite()
            && self.dwidth.is_finite()
            && self.dheight.is_finite()
    }

    /// Keep the larger-magnitude extent delta and re-derive the other one
    /// from `initial`'s aspect ratio.
    #[must_use]
    fn lock_ratio(self, factors: AnchorFactors, initial: Size) -> Self {
        let mut out = self;
        if self.dwidth.abs() > self.dheight.abs() {
            out.dheight = self.dwidth / initial.width * initial.height;
            out.dy = factors.adjusts_y * -out.dheight;
        } else {
            out.dwidth = self.dheight / initial.height * initial.width;
            out.dx = factors.adjusts_x * -out.dwidth;
        }
        out
    }
}

/// A committed drag-resize step: the new frame and the touch point the next
/// step measures from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragResize {
    pub frame: Rect,
    pub reference: Point,
}

/// Resize `frame` by dragging `anchor` from `reference` to `touch`.
///
/// Both points are in container space. Under strict containment the touch is
/// first pulled inside the container by `edge_inset`. On success the caller
/// must store both the new frame and the new reference; the reference
/// advances every step.
#[must_use]
pub fn resize_to(
    frame: Rect,
    anchor: Anchor,
    reference: Point,
    touch: Point,
    initial_size: Size,
    bounds: &ContainerBounds,
    config: &InteractionConfig,
) -> StepOutcome<DragResize> {
    debug_assert!(anchor.is_resizing(), "resize_to called with {anchor:?}");
    if !touch.is_finite() || !reference.is_finite() {
        return StepOutcome::Rejected(RejectReason::NonFiniteInput);
    }

    let touch = if config.prevents_position_outside_bounds {
        clamp_touch_to_content(touch, bounds, config.edge_inset)
    } else {
        touch
    };

    let delta = FrameDelta::from_drag(anchor, reference, touch);
    apply_frame_delta(frame, anchor, delta, initial_size, bounds, config).map(|frame| DragResize {
        frame,
        reference: touch,
    })
}

/// Pull a container-space touch point at least `inset` inside the content
/// extent on every side.
#[must_use]
pub fn clamp_touch_to_content(touch: Point, bounds: &ContainerBounds, inset: f64) -> Point {
    let left = bounds.visible.x + inset;
    let top = bounds.visible.y + inset;
    let right = bounds.visible.x + bounds.content_width() - inset;
    let bottom = bounds.visible.y + bounds.content_height() - inset;

    // Not `f64::clamp`: a container narrower than twice the inset must not
    // panic. The upper bound wins, as it is checked last.
    let mut out = touch;
    if out.x < left {
        out.x = left;
    }
    if out.x > right {
        out.x = right;
    }
    if out.y < top {
        out.y = top;
    }
    if out.y > bottom {
        out.y = bottom;
    }
    out
}

/// Apply a projected delta to `frame` under the ratio-lock, minimum-size,
/// and containment policies.
///
/// `initial_size` is the ratio-lock denominator; it is ignored when
/// `keep_aspect_ratio` is off.
#[must_use]
pub fn apply_frame_delta(
    frame: Rect,
    anchor: Anchor,
    delta: FrameDelta,
    initial_size: Size,
    bounds: &ContainerBounds,
    config: &InteractionConfig,
) -> StepOutcome<Rect> {
    if !delta.is_finite() || !frame.is_finite() {
        return StepOutcome::Rejected(RejectReason::NonFiniteInput);
    }

    let delta = if config.keep_aspect_ratio {
        if !initial_size.is_positive() {
            return StepOutcome::Rejected(RejectReason::DegenerateInitialSize);
        }
        delta.lock_ratio(anchor.factors(), initial_size)
    } else {
        delta
    };

    let mut new_x = frame.x + delta.dx;
    let mut new_y = frame.y + delta.dy;
    let mut new_width = frame.width + delta.dwidth;
    let mut new_height = frame.height + delta.dheight;

    // Minimum size.
    if config.keep_aspect_ratio {
        if new_width < config.min_width || new_height < config.min_height {
            return StepOutcome::Rejected(RejectReason::BelowMinimumSize);
        }
    } else {
        if new_width < config.min_width {
            new_width = frame.width;
            new_x = frame.x;
        }
        if new_height < config.min_height {
            new_height = frame.height;
            new_y = frame.y;
        }
    }

    // Containment.
    if config.prevents_position_outside_bounds {
        let area = bounds.containment_rect();
        if config.keep_aspect_ratio {
            let crosses = (new_x < area.x && frame.x != new_x)
                || (new_x + new_width > area.max_x() && frame.width != new_width)
                || (new_y < area.y && frame.y != new_y)
                || (new_y + new_height > area.max_y() && frame.height != new_height);
            if crosses {
                return StepOutcome::Rejected(RejectReason::OutsideBounds);
            }
        } else {
            if new_x < area.x && frame.x != new_x {
                // Grow so the left edge lands on the container edge.
                new_width = (frame.width + (frame.x - area.x)).max(config.min_width);
                new_x = area.x;
            }
            if new_x + new_width > area.max_x() && frame.width != new_width {
                new_width = (area.max_x() - new_x).max(config.min_width);
            }
            if new_y < area.y && frame.y != new_y {
                new_height = (frame.height + (frame.y - area.y)).max(config.min_height);
                new_y = area.y;
            }
            if new_y + new_height > area.max_y() && frame.height != new_height {
                new_height = (area.max_y() - new_y).max(config.min_height);
            }
        }
    } else {
        // Soft containment measures against what the user can see, not the
        // scrollable content extent.
        let visible = bounds.visible;
        let margin = config.bound_margin;
        let new_max_x = new_x + new_width;
        let new_max_y = new_y + new_height;
        let beyond = (new_max_x > frame.max_x() && new_x > visible.max_x() - margin)
            || (new_max_x < frame.max_x() && new_max_x < visible.x + margin)
            || (new_max_y > frame.max_y() && new_y > visible.max_y() - margin)
            || (new_max_y < frame.max_y() && new_max_y < visible.y + margin);
        if beyond {
            return StepOutcome::Rejected(RejectReason::BeyondBoundMargin);
        }
    }

    let candidate = Rect::new(new_x, new_y, new_width, new_height);
    if !candidate.is_finite() {
        return StepOutcome::Rejected(RejectReason::NonFiniteInput);
    }
    if candidate.width < 0.0 || candidate.height < 0.0 {
        return StepOutcome::Rejected(RejectReason::BelowMinimumSize);
    }
    StepOutcome::Applied(candidate)
}
