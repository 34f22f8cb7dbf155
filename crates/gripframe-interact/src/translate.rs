//! Center translation with soft/strict bound clamping.

use gripframe_core::geometry::{Point, Rect};

use crate::bounds::ContainerBounds;
use crate::config::InteractionConfig;
use crate::step::{RejectReason, StepOutcome};

/// Inclusive range a surface's center may occupy on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CenterRange {
    min: f64,
    max: f64,
}

impl CenterRange {
    /// `floor` is the lowest allowed min edge; `margin` is how much of the
    /// surface must stay inside `[origin, origin + extent]`.
    fn new(floor: f64, origin: f64, extent: f64, margin: f64, half: f64) -> Self {
        Self {
            min: (floor + half).max(origin + margin - half),
            max: origin + extent - margin + half,
        }
    }

    fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Move `frame` so the surface-local `reference` point follows `touch_local`.
///
/// Both points are in the frame's local space; `touch_local` is measured
/// against the frame as it is now, so the surface stays pinned under the
/// pointer. The caller keeps `reference` fixed for the whole gesture.
///
/// With soft containment at least `bound_margin + bound_pad` of the surface
/// stays inside the content extent on each axis and its min edge never goes
/// below `min_x`/`min_y`. With strict containment the whole surface stays
/// inside. A container too small for the margins yields
/// [`RejectReason::DegenerateBounds`].
#[must_use]
pub fn translate(
    frame: Rect,
    reference: Point,
    touch_local: Point,
    bounds: &ContainerBounds,
    config: &InteractionConfig,
) -> StepOutcome<Rect> {
    if !touch_local.is_finite() || !reference.is_finite() || !frame.is_finite() {
        return StepOutcome::Rejected(RejectReason::NonFiniteInput);
    }

    let target = frame.center() + (touch_local - reference);

    let (margin_x, margin_y) = if config.prevents_position_outside_bounds {
        (frame.width, frame.height)
    } else {
        let margin = config.bound_margin + config.bound_pad;
        (margin, margin)
    };

    let area = bounds.containment_rect();
    let x_range = CenterRange::new(config.min_x, area.x, area.width, margin_x, frame.width / 2.0);
    let y_range = CenterRange::new(config.min_y, area.y, area.height, margin_y, frame.height / 2.0);

    if x_range.is_inverted() || y_range.is_inverted() {
        tracing::warn!(
            target: "gripframe.translate",
            min_cx = x_range.min,
            max_cx = x_range.max,
            min_cy = y_range.min,
            max_cy = y_range.max,
            "container too small for translation margins"
        );
        return StepOutcome::Rejected(RejectReason::DegenerateBounds);
    }

    let center = Point::new(x_range.clamp(target.x), y_range.clamp(target.y));
    StepOutcome::Applied(frame.with_center(center))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gripframe_core::geometry::Size;

    fn bounds() -> ContainerBounds {
        ContainerBounds::new(Rect::new(0.0, 0.0, 500.0, 500.0))
    }

    fn frame() -> Rect {
        Rect::new(100.0, 100.0, 100.0, 100.0)
    }

    fn step(touch: (f64, f64), config: &InteractionConfig) -> StepOutcome<Rect> {
        translate(frame(), Point::new(50.0, 50.0), touch.into(), &bounds(), config)
    }

    #[test]
    fn follows_the_pointer_inside_bounds() {
        let out = step((70.0, 40.0), &InteractionConfig::default());
        assert_eq!(out.applied(), Some(Rect::new(120.0, 90.0, 100.0, 100.0)));
    }

    #[test]
    fn soft_bounds_keep_margin_visible_on_the_far_side() {
        // margin 60, half 50: max center = 500 - 60 + 50.
        let out = step((550.0, 50.0), &InteractionConfig::default());
        assert_eq!(out.applied(), Some(Rect::new(440.0, 100.0, 100.0, 100.0)));
    }

    #[test]
    fn soft_bounds_keep_margin_visible_on_the_near_side() {
        // min center = max(-100 + 50, 60 - 50) = 10.
        let out = step((-1000.0, 50.0), &InteractionConfig::default());
        assert_eq!(out.applied(), Some(Rect::new(-40.0, 100.0, 100.0, 100.0)));
    }

    #[test]
    fn custom_min_x_and_min_y_floor_the_min_edge() {
        let config = InteractionConfig {
            min_x: 20.0,
            min_y: 0.0,
            ..InteractionConfig::default()
        };
        let out = step((-1000.0, -1000.0), &config);
        assert_eq!(out.applied(), Some(Rect::new(20.0, 0.0, 100.0, 100.0)));
    }

    #[test]
    fn very_low_min_x_defers_to_the_margin() {
        let config = InteractionConfig {
            min_x: -10_000.0,
            ..InteractionConfig::default()
        };
        let out = step((-1000.0, 50.0), &config);
        assert_eq!(out.applied().map(|f| f.x), Some(-40.0));
    }

    #[test]
    fn strict_bounds_keep_the_whole_surface_inside() {
        let config = InteractionConfig {
            prevents_position_outside_bounds: true,
            ..InteractionConfig::default()
        };
        let out = step((-1000.0, 1000.0), &config);
        assert_eq!(out.applied(), Some(Rect::new(0.0, 400.0, 100.0, 100.0)));
    }

    #[test]
    fn strict_bounds_use_the_content_extent() {
        let config = InteractionConfig {
            prevents_position_outside_bounds: true,
            ..InteractionConfig::default()
        };
        let scrolled = ContainerBounds::with_content(
            Rect::new(0.0, 0.0, 500.0, 500.0),
            Size::new(500.0, 2000.0),
        );
        let out = translate(
            frame(),
            Point::new(50.0, 50.0),
            Point::new(50.0, 1000.0),
            &scrolled,
            &config,
        );
        assert_eq!(out.applied(), Some(Rect::new(100.0, 1050.0, 100.0, 100.0)));
    }

    #[test]
    fn container_smaller_than_surface_rejects_in_strict_mode() {
        let config = InteractionConfig {
            prevents_position_outside_bounds: true,
            ..InteractionConfig::default()
        };
        let narrow = ContainerBounds::new(Rect::new(0.0, 0.0, 50.0, 500.0));
        let out = translate(
            frame(),
            Point::new(50.0, 50.0),
            Point::new(60.0, 50.0),
            &narrow,
            &config,
        );
        assert_eq!(out.rejection(), Some(RejectReason::DegenerateBounds));
    }

    #[test]
    fn non_finite_touch_rejects() {
        let out = step((f64::INFINITY, 0.0), &InteractionConfig::default());
        assert_eq!(out.rejection(), Some(RejectReason::NonFiniteInput));
    }
}
