//! Pedagogical semaphore: maps a percentage to one of four categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower band edge: at or below this an error rate is still `Good`.
const LOW: f64 = 20.0;
const MID: f64 = 40.0;
const HIGH: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Semaphore {
    Good,
    Warning,
    Alert,
    Critical,
}

/// Whether an evidence metric counts correct or incorrect answers.
///
/// The thresholds invert with the polarity: a low error rate is good, a low
/// correctness rate is critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricPolarity {
    Correct,
    Incorrect,
}

impl MetricPolarity {
    pub fn is_error_metric(self) -> bool {
        matches!(self, Self::Incorrect)
    }

    /// Legend suffix for the institution dataset.
    pub fn axis_label(self) -> &'static str {
        match self {
            Self::Correct => "% Correctas",
            Self::Incorrect => "% Incorrectas",
        }
    }
}

impl fmt::Display for MetricPolarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "correct"),
            Self::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// Classify a percentage into a semaphore category.
///
/// Total over all `f64` inputs: non-finite values (NaN, infinities) classify
/// as `Critical`. Boundaries are inclusive on the stated side, so 20.0 on an
/// error metric is still `Good` and 70.0 on a correctness metric is `Good`.
pub fn classify(value: f64, polarity: MetricPolarity) -> Semaphore {
    if !value.is_finite() {
        return Semaphore::Critical;
    }
    match polarity {
        MetricPolarity::Incorrect => {
            if value <= LOW {
                Semaphore::Good
            } else if value <= MID {
                Semaphore::Warning
            } else if value <= HIGH {
                Semaphore::Alert
            } else {
                Semaphore::Critical
            }
        }
        MetricPolarity::Correct => {
            if value >= HIGH {
                Semaphore::Good
            } else if value >= MID {
                Semaphore::Warning
            } else if value >= LOW {
                Semaphore::Alert
            } else {
                Semaphore::Critical
            }
        }
    }
}
