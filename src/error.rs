//! Error types for whorl.
//!
//! Population and anchor management validate their configuration up front and
//! report problems through [`SimulationError`]. Per-frame stepping never
//! fails; degenerate numeric cases are handled inside the force model.

use std::fmt;

/// Errors that can occur while configuring a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A population of zero particles was requested.
    EmptyPopulation,
    /// An anchor set of zero anchors was requested.
    EmptyAnchorSet,
    /// A spawn radius was negative or not finite.
    InvalidRadius(f32),
    /// An annulus band was negative, not finite, or wider than its radius.
    InvalidBandWidth {
        /// Outer radius of the band.
        radius: f32,
        /// Requested band width.
        width: f32,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::EmptyPopulation => {
                write!(f, "particle count must be at least 1")
            }
            SimulationError::EmptyAnchorSet => {
                write!(f, "anchor count must be at least 1 (use delete_anchors to clear)")
            }
            SimulationError::InvalidRadius(radius) => {
                write!(f, "spawn radius must be finite and non-negative, got {}", radius)
            }
            SimulationError::InvalidBandWidth { radius, width } => {
                write!(
                    f,
                    "annulus band width must be finite and within [0, {}], got {}",
                    radius, width
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_offending_value() {
        let msg = SimulationError::InvalidRadius(-3.0).to_string();
        assert!(msg.contains("-3"));

        let msg = SimulationError::InvalidBandWidth {
            radius: 10.0,
            width: 25.0,
        }
        .to_string();
        assert!(msg.contains("25"));
        assert!(msg.contains("10"));
    }
}
