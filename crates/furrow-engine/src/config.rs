//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the constructor input for [`RunEngine`](crate::RunEngine).
//! [`validate()`](EngineConfig::validate) checks its invariants and is
//! called by the engine constructor.

use std::error::Error;
use std::fmt;

use furrow_core::StatusDecoder;

use crate::oracle::{CompletionOracle, SignalOracle};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `throttle_ms` is zero.
    InvalidThrottle {
        /// The configured value.
        value: u64,
    },
    /// `detection_radius` is not below `teleport_threshold`, so arriving
    /// at a target could not be told apart from a transit jump.
    InvalidRadius {
        /// The configured radius.
        radius: u32,
        /// The configured teleport threshold.
        threshold: u32,
    },
    /// `teleport_threshold` is zero.
    InvalidTeleportThreshold {
        /// The configured value.
        value: u32,
    },
    /// `feed_capacity` is zero.
    InvalidFeedCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThrottle { value } => {
                write!(f, "throttle_ms must be at least 1, got {value}")
            }
            Self::InvalidRadius { radius, threshold } => write!(
                f,
                "detection_radius {radius} must be below teleport_threshold {threshold}"
            ),
            Self::InvalidTeleportThreshold { value } => {
                write!(f, "teleport_threshold must be at least 1, got {value}")
            }
            Self::InvalidFeedCapacity => write!(f, "feed_capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing a [`RunEngine`](crate::RunEngine).
pub struct EngineConfig {
    /// Minimum milliseconds between evaluations. Default: 1000.
    pub throttle_ms: u64,
    /// Chebyshev radius within which the player counts as at a target.
    /// Default: 5.
    pub detection_radius: u32,
    /// Per-axis distance beyond which a position change counts as a
    /// transit jump. Default: 20.
    pub teleport_threshold: u32,
    /// Buffered transitions per feed subscriber. Default: 64.
    pub feed_capacity: usize,
    /// Status-code decoder. Default: [`StatusDecoder::standard`].
    pub decoder: StatusDecoder,
    /// Completion strategy for action phases. Default: [`SignalOracle`].
    pub oracle: Box<dyn CompletionOracle>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            throttle_ms: 1000,
            detection_radius: 5,
            teleport_threshold: 20,
            feed_capacity: 64,
            decoder: StatusDecoder::standard(),
            oracle: Box::new(SignalOracle),
        }
    }
}

impl EngineConfig {
    /// Replace the completion oracle.
    pub fn with_oracle(mut self, oracle: impl CompletionOracle + 'static) -> Self {
        self.oracle = Box::new(oracle);
        self
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.throttle_ms == 0 {
            return Err(ConfigError::InvalidThrottle {
                value: self.throttle_ms,
            });
        }
        if self.teleport_threshold == 0 {
            return Err(ConfigError::InvalidTeleportThreshold {
                value: self.teleport_threshold,
            });
        }
        if self.detection_radius >= self.teleport_threshold {
            return Err(ConfigError::InvalidRadius {
                radius: self.detection_radius,
                threshold: self.teleport_threshold,
            });
        }
        if self.feed_capacity == 0 {
            return Err(ConfigError::InvalidFeedCapacity);
        }
        Ok(())
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("throttle_ms", &self.throttle_ms)
            .field("detection_radius", &self.detection_radius)
            .field("teleport_threshold", &self.teleport_threshold)
            .field("feed_capacity", &self.feed_capacity)
            .field("oracle", &self.oracle.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::NeverComplete;

    #[test]
    fn default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_throttle_rejected() {
        let cfg = EngineConfig {
            throttle_ms: 0,
            ..EngineConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::InvalidThrottle { value: 0 }) => {}
            other => panic!("expected InvalidThrottle, got {other:?}"),
        }
    }

    #[test]
    fn zero_threshold_rejected() {
        let cfg = EngineConfig {
            teleport_threshold: 0,
            detection_radius: 0,
            ..EngineConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::InvalidTeleportThreshold { value: 0 }) => {}
            other => panic!("expected InvalidTeleportThreshold, got {other:?}"),
        }
    }

    #[test]
    fn radius_must_stay_below_threshold() {
        let cfg = EngineConfig {
            detection_radius: 20,
            ..EngineConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::InvalidRadius {
                radius: 20,
                threshold: 20,
            }) => {}
            other => panic!("expected InvalidRadius, got {other:?}"),
        }
    }

    #[test]
    fn zero_feed_capacity_rejected() {
        let cfg = EngineConfig {
            feed_capacity: 0,
            ..EngineConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidFeedCapacity));
    }

    #[test]
    fn debug_shows_oracle_name() {
        let cfg = EngineConfig::default().with_oracle(NeverComplete);
        assert!(format!("{cfg:?}").contains("never"));
    }
}
