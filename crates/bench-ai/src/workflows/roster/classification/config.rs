use serde::{Deserialize, Serialize};

use super::super::domain::Position;

/// Blend weights folding stability and tactical debt into one rankable score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactBlend {
    pub stability_weight: f32,
    pub reward_weight: f32,
    /// Divisor keeping impact in a compact comparable range across the roster.
    pub normalization: f32,
}

impl Default for ImpactBlend {
    fn default() -> Self {
        Self {
            stability_weight: 1.0,
            reward_weight: 1.0,
            normalization: 10.0,
        }
    }
}

/// Policy dials behind the substitution rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Shift duration at which structural reliability collapses.
    pub cliff_threshold_seconds: f32,
    /// Turnover probability uplift applied in the lethal state, as a fraction.
    pub turnover_uplift: f32,
    /// Lateral-load multiplier for defensemen; every other position is 1.0.
    pub defenseman_fatigue_multiplier: f32,
    pub impact_blend: ImpactBlend,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            cliff_threshold_seconds: 48.0,
            turnover_uplift: 0.68,
            defenseman_fatigue_multiplier: 1.22,
            impact_blend: ImpactBlend::default(),
        }
    }
}

/// Configuration errors, rejected before any record is processed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("cliff threshold must be a positive number of seconds, got {0}")]
    NonPositiveCliff(f32),
    #[error("turnover uplift must be a non-negative fraction, got {0}")]
    NegativeUplift(f32),
    #[error("defenseman fatigue multiplier must be at least 1.0, got {0}")]
    MultiplierBelowOne(f32),
    #[error("impact blend weight must be a non-negative number, got {0}")]
    InvalidBlendWeight(f32),
    #[error("impact normalization must be a positive number, got {0}")]
    NonPositiveNormalization(f32),
}

impl PolicyConfig {
    /// Check every dial; an engine refuses to build around a bad config.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.cliff_threshold_seconds.is_finite() || self.cliff_threshold_seconds <= 0.0 {
            return Err(ConfigurationError::NonPositiveCliff(
                self.cliff_threshold_seconds,
            ));
        }
        if !self.turnover_uplift.is_finite() || self.turnover_uplift < 0.0 {
            return Err(ConfigurationError::NegativeUplift(self.turnover_uplift));
        }
        // Anything below 1.0 would break the fatigue_weight >= 1.0 invariant.
        if !self.defenseman_fatigue_multiplier.is_finite()
            || self.defenseman_fatigue_multiplier < 1.0
        {
            return Err(ConfigurationError::MultiplierBelowOne(
                self.defenseman_fatigue_multiplier,
            ));
        }

        let blend = &self.impact_blend;
        for weight in [blend.stability_weight, blend.reward_weight] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigurationError::InvalidBlendWeight(weight));
            }
        }
        if !blend.normalization.is_finite() || blend.normalization <= 0.0 {
            return Err(ConfigurationError::NonPositiveNormalization(
                blend.normalization,
            ));
        }

        Ok(())
    }

    pub fn position_multiplier(&self, position: Position) -> f32 {
        match position {
            Position::Defenseman => self.defenseman_fatigue_multiplier,
            _ => 1.0,
        }
    }
}
