//! Outcome of one engine step.

use serde::{Deserialize, Serialize};

/// Why an engine step left the frame unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// A velocity, delta, or touch coordinate was NaN or infinite.
    NonFiniteInput,
    /// The ratio-lock denominator has a zero or non-finite extent.
    DegenerateInitialSize,
    /// The candidate frame fell under the minimum width or height.
    BelowMinimumSize,
    /// The candidate crossed the container edge under strict containment.
    OutsideBounds,
    /// The candidate would leave less than the bound margin reachable.
    BeyondBoundMargin,
    /// The container is too small for the margins; no valid position exists.
    DegenerateBounds,
}

/// Result of one resize/translate/pinch step.
///
/// Every engine either produces a new value or leaves state unchanged; no
/// step ever errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum StepOutcome<T> {
    Applied(T),
    Rejected(RejectReason),
}

impl<T> StepOutcome<T> {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The applied value, if any.
    #[must_use]
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection reason, if any.
    #[must_use]
    pub const fn rejection(&self) -> Option<RejectReason> {
        match self {
            Self::Applied(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StepOutcome<U> {
        match self {
            Self::Applied(value) => StepOutcome::Applied(f(value)),
            Self::Rejected(reason) => StepOutcome::Rejected(reason),
        }
    }
}
