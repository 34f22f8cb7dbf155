//! Pinch, magnify, and scroll resizing.
//!
//! Touch pinches feed a shaped velocity through the resize pipeline with the
//! center anchor, so the surface grows or shrinks symmetrically about its own
//! center. Trackpad magnify and modifier-scroll instead shrink the frame by
//! an inset on every side.

use gripframe_core::geometry::Rect;

use crate::anchor::Anchor;
use crate::bounds::ContainerBounds;
use crate::config::InteractionConfig;
use crate::resize::{FrameDelta, apply_frame_delta};
use crate::step::{RejectReason, StepOutcome};

/// Widths above which each further pinch gain tier applies.
const WIDTH_TIERS: [f64; 4] = [150.0, 300.0, 600.0, 1000.0];
const WIDTH_TIER_GAIN: f64 = 1.5;
/// Extra gain while pinching in below the starting scale.
const SHRINK_GAIN: f64 = 2.0;

/// Shape a raw pinch velocity into a size delta.
///
/// Shrinking below the starting scale doubles the velocity, and larger
/// surfaces get a cumulative 1.5x boost per width tier so a pinch feels the
/// same regardless of size. Returns `None` for non-finite velocities.
#[must_use]
pub fn shape_pinch_velocity(velocity: f64, scale: f64, width: f64) -> Option<f64> {
    if !velocity.is_finite() {
        return None;
    }

    let mut shaped = velocity;
    if velocity < 0.0 && scale < 1.0 {
        shaped *= SHRINK_GAIN;
    }
    for tier in WIDTH_TIERS {
        if width > tier {
            shaped *= WIDTH_TIER_GAIN;
        }
    }
    shaped.is_finite().then_some(shaped)
}

/// Apply one pinch tick to `frame`.
///
/// Uses the current size as the ratio-lock denominator; otherwise follows the
/// same minimum-size and containment policy as a drag resize.
#[must_use]
pub fn pinch(
    frame: Rect,
    velocity: f64,
    scale: f64,
    bounds: &ContainerBounds,
    config: &InteractionConfig,
) -> StepOutcome<Rect> {
    let Some(shaped) = shape_pinch_velocity(velocity, scale, frame.width) else {
        return StepOutcome::Rejected(RejectReason::NonFiniteInput);
    };
    let delta = FrameDelta::uniform(Anchor::Center, shaped);
    apply_frame_delta(frame, Anchor::Center, delta, frame.size(), bounds, config)
}

/// Shrink `frame` by `inset` on every side (negative grows), keeping its
/// aspect ratio and center.
///
/// The longer side takes the full inset and the shorter one a proportional
/// share. The inset is capped at half the width. The step is rejected unless
/// both new extents stay strictly above the configured minimums. Under strict
/// containment, growth that would leave the container is rejected.
#[must_use]
pub fn inset_resize(
    frame: Rect,
    inset: f64,
    bounds: &ContainerBounds,
    config: &InteractionConfig,
) -> StepOutcome<Rect> {
    if !inset.is_finite() || !frame.is_finite() {
        return StepOutcome::Rejected(RejectReason::NonFiniteInput);
    }
    if !frame.size().is_positive() {
        return StepOutcome::Rejected(RejectReason::DegenerateInitialSize);
    }

    let inset = inset.min(frame.width / 2.0);
    let (dx, dy) = if frame.width > frame.height {
        (inset, inset * frame.height / frame.width)
    } else {
        (inset * frame.width / frame.height, inset)
    };

    let candidate = frame.inset_by(dx, dy);
    if !candidate.is_finite() {
        return StepOutcome::Rejected(RejectReason::NonFiniteInput);
    }
    if !(candidate.width > config.min_width && candidate.height > config.min_height) {
        return StepOutcome::Rejected(RejectReason::BelowMinimumSize);
    }
    if config.prevents_position_outside_bounds
        && inset < 0.0
        && !bounds.containment_rect().contains_rect(&candidate)
    {
        return StepOutcome::Rejected(RejectReason::OutsideBounds);
    }
    StepOutcome::Applied(candidate)
}

/// Convert a trackpad magnification into an inset. Magnifying in (positive)
/// grows the surface.
#[must_use]
pub fn magnify_to_inset(magnification: f64, gain: f64) -> f64 {
    magnification * -gain
}

/// Convert a modifier-scroll delta into an inset. Scrolling up grows the
/// surface.
#[must_use]
pub fn scroll_to_inset(delta_y: f64) -> f64 {
    -delta_y
}
