//! Tunable knobs consumed by every engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::anchor::DEFAULT_RESIZE_DISTANCE_TO_CENTER_FACTOR;

/// Default lowest center-translation floor on the x axis.
pub const DEFAULT_MIN_X: f64 = -100.0;
/// Default lowest center-translation floor on the y axis.
pub const DEFAULT_MIN_Y: f64 = -100.0;
pub const DEFAULT_MIN_WIDTH: f64 = 60.0;
pub const DEFAULT_MIN_HEIGHT: f64 = 60.0;
/// Default multiplier from trackpad magnification to inset.
pub const DEFAULT_MAGNIFY_GAIN: f64 = 70.0;

/// Interaction configuration.
///
/// Set by the host before or between sessions. A [`Manipulator`] refuses
/// changes while a session is active.
///
/// [`Manipulator`]: crate::session::Manipulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Drag the surface's interior to translate it (default: true).
    pub enable_moving: bool,
    /// Pinch, magnify, and modifier-scroll resize (default: true).
    pub enable_pinch_resizing: bool,
    /// Drag edges/corners to resize (default: false).
    pub enable_drag_resizing: bool,
    /// Report taps to the delegate (default: true).
    pub enable_tapping: bool,
    /// Resize preserves the width:height ratio captured at session start
    /// (default: true).
    pub keep_aspect_ratio: bool,
    /// Keep the whole surface inside the container (default: false). When
    /// off, the surface may hang outside by up to the bound margin.
    pub prevents_position_outside_bounds: bool,
    /// Translation floor for the surface's left edge (default: -100).
    pub min_x: f64,
    /// Translation floor for the surface's top edge (default: -100).
    pub min_y: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Inset between the frame and its content; also the strict-mode touch
    /// clamp distance from the container edge (default: 1).
    pub edge_inset: f64,
    /// How much of the surface must stay within the container (default: 50).
    pub bound_margin: f64,
    /// Extra slack added to `bound_margin` when translating (default: 10).
    pub bound_pad: f64,
    /// See [`resolve_anchor`](crate::anchor::resolve_anchor) (default: 0.5).
    pub resize_distance_to_center_factor: f64,
    /// Magnification-to-inset multiplier for trackpad magnify (default: 70).
    pub magnify_gain: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            enable_moving: true,
            enable_pinch_resizing: true,
            enable_drag_resizing: false,
            enable_tapping: true,
            keep_aspect_ratio: true,
            prevents_position_outside_bounds: false,
            min_x: DEFAULT_MIN_X,
            min_y: DEFAULT_MIN_Y,
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            edge_inset: 1.0,
            bound_margin: 50.0,
            bound_pad: 10.0,
            resize_distance_to_center_factor: DEFAULT_RESIZE_DISTANCE_TO_CENTER_FACTOR,
            magnify_gain: DEFAULT_MAGNIFY_GAIN,
        }
    }
}

impl InteractionConfig {
    /// Whether pointer input does anything at all.
    #[must_use]
    pub const fn accepts_pointer_input(&self) -> bool {
        self.enable_moving || self.enable_drag_resizing
    }

    /// Check numeric knobs for values no engine can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("min_width", self.min_width),
            ("min_height", self.min_height),
            ("edge_inset", self.edge_inset),
            ("bound_margin", self.bound_margin),
            ("bound_pad", self.bound_pad),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        for (field, value) in [("min_x", self.min_x), ("min_y", self.min_y)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        let positive = [
            (
                "resize_distance_to_center_factor",
                self.resize_distance_to_center_factor,
            ),
            ("magnify_gain", self.magnify_gain),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        Ok(())
    }
}

/// Invalid configuration values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonFinite { field: &'static str },
    Negative { field: &'static str, value: f64 },
    NotPositive { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "config field {field} must be finite"),
            Self::Negative { field, value } => {
                write!(f, "config field {field} must be >= 0 (got {value})")
            }
            Self::NotPositive { field, value } => {
                write!(f, "config field {field} must be > 0 (got {value})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = InteractionConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.enable_moving);
        assert!(config.enable_pinch_resizing);
        assert!(!config.enable_drag_resizing);
        assert!(config.keep_aspect_ratio);
        assert!(!config.prevents_position_outside_bounds);
        assert_eq!(config.min_width, 60.0);
        assert_eq!(config.min_height, 60.0);
        assert_eq!(config.edge_inset, 1.0);
        assert_eq!(config.bound_margin, 50.0);
        assert_eq!(config.bound_pad, 10.0);
        assert_eq!(config.resize_distance_to_center_factor, 0.5);
    }

    #[test]
    fn rejects_negative_minimums() {
        let config = InteractionConfig {
            min_width: -1.0,
            ..InteractionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "min_width",
                value: -1.0
            })
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let config = InteractionConfig {
            bound_margin: f64::NAN,
            ..InteractionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "bound_margin"
            })
        );

        let config = InteractionConfig {
            min_y: f64::NEG_INFINITY,
            ..InteractionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "min_y" })
        );
    }

    #[test]
    fn rejects_zero_center_factor() {
        let config = InteractionConfig {
            resize_distance_to_center_factor: 0.0,
            ..InteractionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "resize_distance_to_center_factor",
                ..
            })
        ));
    }

    #[test]
    fn negative_translation_floors_are_allowed() {
        let config = InteractionConfig {
            min_x: -500.0,
            min_y: 20.0,
            ..InteractionConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: InteractionConfig =
            serde_json::from_str(r#"{"enable_drag_resizing": true, "min_width": 80.0}"#)
                .expect("partial config should deserialize");
        assert!(config.enable_drag_resizing);
        assert_eq!(config.min_width, 80.0);
        assert_eq!(config.min_height, DEFAULT_MIN_HEIGHT);
        assert_eq!(config.bound_margin, 50.0);
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ConfigError::NotPositive {
            field: "magnify_gain",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "config field magnify_gain must be > 0 (got 0)");
    }

    #[test]
    fn pointer_input_needs_moving_or_drag_resizing() {
        let mut config = InteractionConfig {
            enable_moving: false,
            ..InteractionConfig::default()
        };
        assert!(!config.accepts_pointer_input());
        config.enable_drag_resizing = true;
        assert!(config.accepts_pointer_input());
    }
}
