//! Election configuration

use super::engine::ElectionError;
use serde::{Deserialize, Serialize};

/// Amount added to every citizen per search round unless configured otherwise
pub const DEFAULT_TOP_UP: f64 = 1.0;

/// Parameters of the search loop
///
/// # Fields
///
/// * `top_up` - Amount added to every citizen's balance per search round
/// * `max_rounds` - Optional cap on the number of top-up rounds
///
/// With `max_rounds = None` an election in which no item can ever become
/// affordable (no items, or items nobody supports with a positive cost)
/// never returns. Set a cap when inputs are not trusted.
///
/// # Example
///
/// ```rust
/// use participatory_budget_core_rs::ElectionConfig;
///
/// let config = ElectionConfig::default().with_max_rounds(1_000);
/// assert_eq!(config.top_up, 1.0);
/// assert_eq!(config.max_rounds, Some(1_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectionConfig {
    /// Amount added to every citizen per round (must be positive and finite)
    pub top_up: f64,

    /// Maximum number of top-up rounds (None = unbounded)
    ///
    /// `Some(0)` allows only the initial check.
    pub max_rounds: Option<usize>,
}

impl Default for ElectionConfig {
    fn default() -> Self {
        Self {
            top_up: DEFAULT_TOP_UP,
            max_rounds: None,
        }
    }
}

impl ElectionConfig {
    /// Set the per-round top-up
    pub fn with_top_up(mut self, top_up: f64) -> Self {
        self.top_up = top_up;
        self
    }

    /// Cap the number of top-up rounds
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Check the configuration before an election runs
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `top_up` is zero, negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), ElectionError> {
        if !self.top_up.is_finite() || self.top_up <= 0.0 {
            return Err(ElectionError::InvalidConfig(format!(
                "top_up must be positive and finite, got {}",
                self.top_up
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ElectionConfig::default();
        assert_eq!(config.top_up, DEFAULT_TOP_UP);
        assert_eq!(config.max_rounds, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_top_up() {
        for top_up in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = ElectionConfig::default().with_top_up(top_up);
            assert!(
                matches!(config.validate(), Err(ElectionError::InvalidConfig(_))),
                "top_up {} should be rejected",
                top_up
            );
        }
    }

    #[test]
    fn test_fractional_top_up_is_valid() {
        assert!(ElectionConfig::default().with_top_up(0.25).validate().is_ok());
    }
}
