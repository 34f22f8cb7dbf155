//! Anchor tags and touch-down anchor resolution.
//!
//! An [`Anchor`] names which part of a surface a gesture manipulates. Each
//! anchor maps to constant [`AnchorFactors`] describing how a unit drag delta
//! projects onto the four frame components. The tags carry no behavior; the
//! resize and pinch engines interpret the factors.

use gripframe_core::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Default bias between resizing and translating (see [`resolve_anchor`]).
pub const DEFAULT_RESIZE_DISTANCE_TO_CENTER_FACTOR: f64 = 0.5;

/// Which edge, corner, or center of a surface a gesture is manipulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Pure translation.
    #[default]
    None,
    /// Symmetric resize about the surface's own center (pinch).
    Center,
    UpperLeft,
    UpperMid,
    UpperRight,
    MidRight,
    LowerRight,
    LowerMid,
    LowerLeft,
    MidLeft,
}

/// Per-component projection factors for an [`Anchor`].
///
/// Each factor is one of `-1`, `-0.5`, `0`, `0.5`, `1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorFactors {
    pub adjusts_x: f64,
    pub adjusts_y: f64,
    pub adjusts_height: f64,
    pub adjusts_width: f64,
}

impl AnchorFactors {
    const fn new(adjusts_x: f64, adjusts_y: f64, adjusts_height: f64, adjusts_width: f64) -> Self {
        Self {
            adjusts_x,
            adjusts_y,
            adjusts_height,
            adjusts_width,
        }
    }
}

impl Anchor {
    /// The eight edge/corner anchors, in resolution order.
    pub const EDGES: [Anchor; 8] = [
        Anchor::UpperLeft,
        Anchor::UpperMid,
        Anchor::UpperRight,
        Anchor::MidRight,
        Anchor::LowerRight,
        Anchor::LowerMid,
        Anchor::LowerLeft,
        Anchor::MidLeft,
    ];

    /// Projection factors for this anchor.
    #[must_use]
    pub const fn factors(self) -> AnchorFactors {
        match self {
            Self::None => AnchorFactors::new(0.0, 0.0, 0.0, 0.0),
            Self::Center => AnchorFactors::new(0.5, 0.5, 1.0, 1.0),
            Self::UpperLeft => AnchorFactors::new(1.0, 1.0, -1.0, 1.0),
            Self::UpperMid => AnchorFactors::new(0.0, 1.0, -1.0, 0.0),
            Self::UpperRight => AnchorFactors::new(0.0, 1.0, -1.0, -1.0),
            Self::MidRight => AnchorFactors::new(0.0, 0.0, 0.0, -1.0),
            Self::LowerRight => AnchorFactors::new(0.0, 0.0, 1.0, -1.0),
            Self::LowerMid => AnchorFactors::new(0.0, 0.0, 1.0, 0.0),
            Self::LowerLeft => AnchorFactors::new(1.0, 0.0, 1.0, 1.0),
            Self::MidLeft => AnchorFactors::new(1.0, 0.0, 0.0, 1.0),
        }
    }

    /// Whether this anchor changes the frame's size (everything but `None`).
    #[must_use]
    pub const fn is_resizing(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Surface-local reference point for an edge/corner anchor.
    ///
    /// `None` and `Center` both map to the center.
    #[must_use]
    pub fn reference_point(self, size: Size) -> Point {
        let (w, h) = (size.width, size.height);
        match self {
            Self::None | Self::Center => Point::new(w / 2.0, h / 2.0),
            Self::UpperLeft => Point::new(0.0, 0.0),
            Self::UpperMid => Point::new(w / 2.0, 0.0),
            Self::UpperRight => Point::new(w, 0.0),
            Self::MidRight => Point::new(w, h / 2.0),
            Self::LowerRight => Point::new(w, h),
            Self::LowerMid => Point::new(w / 2.0, h),
            Self::LowerLeft => Point::new(0.0, h),
            Self::MidLeft => Point::new(0.0, h / 2.0),
        }
    }
}

/// Classify a touch-down point (surface-local) into an anchor.
///
/// The closest of the eight edge/corner reference points wins, but only if
/// its squared distance is strictly below `center_factor` times the squared
/// distance to the center; otherwise the gesture translates (`Anchor::None`).
/// A factor below 1 makes resizing harder to trigger. Ties between reference
/// points go to the earlier entry of [`Anchor::EDGES`].
#[must_use]
pub fn resolve_anchor(touch: Point, surface: Size, center_factor: f64) -> Anchor {
    if !touch.is_finite() || !surface.width.is_finite() || !surface.height.is_finite() {
        return Anchor::None;
    }

    let center_dist = touch.distance_squared(Anchor::Center.reference_point(surface));
    let mut smallest = center_dist;
    let mut closest = Anchor::None;

    for anchor in Anchor::EDGES {
        let dist = touch.distance_squared(anchor.reference_point(surface));
        if dist < smallest {
            smallest = dist;
            closest = anchor;
        }
    }

    if smallest < center_dist * center_factor {
        closest
    } else {
        Anchor::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: Size = Size::new(100.0, 100.0);

    fn resolve(x: f64, y: f64) -> Anchor {
        resolve_anchor(
            Point::new(x, y),
            SQUARE,
            DEFAULT_RESIZE_DISTANCE_TO_CENTER_FACTOR,
        )
    }

    #[test]
    fn corners_and_edges_resolve_to_their_anchor() {
        assert_eq!(resolve(0.0, 0.0), Anchor::UpperLeft);
        assert_eq!(resolve(50.0, 0.0), Anchor::UpperMid);
        assert_eq!(resolve(100.0, 0.0), Anchor::UpperRight);
        assert_eq!(resolve(100.0, 50.0), Anchor::MidRight);
        assert_eq!(resolve(100.0, 100.0), Anchor::LowerRight);
        assert_eq!(resolve(50.0, 100.0), Anchor::LowerMid);
        assert_eq!(resolve(0.0, 100.0), Anchor::LowerLeft);
        assert_eq!(resolve(0.0, 50.0), Anchor::MidLeft);
    }

    #[test]
    fn center_region_translates() {
        assert_eq!(resolve(50.0, 50.0), Anchor::None);
        assert_eq!(resolve(40.0, 60.0), Anchor::None);
    }

    #[test]
    fn factor_biases_toward_translation() {
        // Point (20, 20): corner dist² = 800, center dist² = 1800.
        let touch = Point::new(20.0, 20.0);
        assert_eq!(resolve_anchor(touch, SQUARE, 0.5), Anchor::UpperLeft);
        // 800 < 1800 * 0.4 = 720 is false.
        assert_eq!(resolve_anchor(touch, SQUARE, 0.4), Anchor::None);
        // Factor 1 accepts anything closer to an edge than to the center.
        assert_eq!(resolve_anchor(touch, SQUARE, 1.0), Anchor::UpperLeft);
    }

    #[test]
    fn boundary_is_strict() {
        // Upper-mid dist² = 25² = 625, center dist² = 25² = 625 => with
        // factor 1 the candidate is not strictly closer than the center.
        let touch = Point::new(50.0, 25.0);
        assert_eq!(resolve_anchor(touch, SQUARE, 1.0), Anchor::None);
    }

    #[test]
    fn ties_prefer_list_order() {
        // Equidistant from upper-left (0,0) and upper-mid (50,0) on a tall
        // surface; upper-left comes first.
        let surface = Size::new(100.0, 1000.0);
        let touch = Point::new(25.0, 0.0);
        assert_eq!(resolve_anchor(touch, surface, 1.0), Anchor::UpperLeft);
    }

    #[test]
    fn non_finite_input_translates() {
        assert_eq!(resolve(f64::NAN, 0.0), Anchor::None);
        assert_eq!(
            resolve_anchor(Point::ZERO, Size::new(f64::INFINITY, 1.0), 0.5),
            Anchor::None
        );
    }

    #[test]
    fn factor_table_matches_resize_directions() {
        assert!(!Anchor::None.is_resizing());
        assert!(Anchor::Center.is_resizing());
        for anchor in Anchor::EDGES {
            assert!(anchor.is_resizing(), "{anchor:?}");
        }
        let upper_left = Anchor::UpperLeft.factors();
        assert_eq!(
            (
                upper_left.adjusts_x,
                upper_left.adjusts_y,
                upper_left.adjusts_height,
                upper_left.adjusts_width
            ),
            (1.0, 1.0, -1.0, 1.0)
        );
        let mid_right = Anchor::MidRight.factors();
        assert_eq!(
            (
                mid_right.adjusts_x,
                mid_right.adjusts_y,
                mid_right.adjusts_height,
                mid_right.adjusts_width
            ),
            (0.0, 0.0, 0.0, -1.0)
        );
    }
}
