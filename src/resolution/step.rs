//! Derivation steps and resolution results.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::modifiers::ModifierId;

/// What one step did to the running total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOp {
    /// An additive modifier added its magnitude.
    Add(i64),
    /// A triggered bonus added its magnitude during an entry event.
    Trigger(i64),
    /// A multiplier scaled by `magnitude / divisor`, rounding up.
    Multiply { magnitude: i64, divisor: i64 },
}

/// One line of a derivation trace.
///
/// Renders as e.g. `"Hardened Scales adds +1 -> 4"` or
/// `"Branching Evolution doubles -> 8"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Modifier that produced this step.
    pub modifier: ModifierId,
    /// Its display name.
    pub name: String,
    /// The operation applied.
    pub op: StepOp,
    /// Running total after the operation.
    pub value: i64,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.op {
            StepOp::Add(m) => write!(f, "{} adds +{} -> {}", self.name, m, self.value),
            StepOp::Trigger(m) => write!(f, "{} triggers +{} -> {}", self.name, m, self.value),
            StepOp::Multiply { magnitude, divisor } if magnitude == 2 * divisor => {
                write!(f, "{} doubles -> {}", self.name, self.value)
            }
            StepOp::Multiply { magnitude, divisor: 1 } => {
                write!(f, "{} multiplies x{} -> {}", self.name, magnitude, self.value)
            }
            StepOp::Multiply { magnitude, divisor } => write!(
                f,
                "{} multiplies x{}/{} -> {}",
                self.name, magnitude, divisor, self.value
            ),
        }
    }
}

/// Steps of one resolution. Most resolutions touch only a few modifiers.
pub type Steps = SmallVec<[Step; 4]>;

/// Result of running the pipeline once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Base after clamping.
    pub base: i64,
    /// Final quantity.
    pub value: i64,
    /// Ordered derivation steps.
    pub steps: Steps,
}

impl Resolution {
    /// A resolution with no modifiers applied.
    #[must_use]
    pub fn unmodified(base: i64) -> Self {
        Self {
            base,
            value: base,
            steps: Steps::new(),
        }
    }

    /// True if no modifier touched the base.
    #[must_use]
    pub fn is_unmodified(&self) -> bool {
        self.steps.is_empty()
    }

    /// Rendered step strings, in order.
    #[must_use]
    pub fn step_lines(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(op: StepOp, value: i64) -> Step {
        Step {
            modifier: ModifierId::new("m"),
            name: "Card".to_string(),
            op,
            value,
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(step(StepOp::Add(1), 4).to_string(), "Card adds +1 -> 4");
        assert_eq!(step(StepOp::Trigger(2), 5).to_string(), "Card triggers +2 -> 5");
        assert_eq!(
            step(StepOp::Multiply { magnitude: 2, divisor: 1 }, 8).to_string(),
            "Card doubles -> 8"
        );
        assert_eq!(
            step(StepOp::Multiply { magnitude: 3, divisor: 1 }, 9).to_string(),
            "Card multiplies x3 -> 9"
        );
        assert_eq!(
            step(StepOp::Multiply { magnitude: 3, divisor: 2 }, 8).to_string(),
            "Card multiplies x3/2 -> 8"
        );
    }

    #[test]
    fn test_unmodified() {
        let resolution = Resolution::unmodified(2);
        assert_eq!(resolution.value, 2);
        assert!(resolution.is_unmodified());
        assert!(resolution.step_lines().is_empty());
    }
}
