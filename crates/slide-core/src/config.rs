use crate::constants::{
    ADVANCE_THRESHOLD, DEFAULT_START_INDEX, DRAG_MULTIPLIER, RESIZE_QUIESCENCE_MS,
};
use crate::error::{CarouselError, Result};
use std::time::Duration;

/// Tunables for one carousel instance.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub drag_multiplier: f64,
    pub advance_threshold: f64,
    pub resize_quiescence: Duration,
    pub start_index: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_multiplier: DRAG_MULTIPLIER,
            advance_threshold: ADVANCE_THRESHOLD,
            resize_quiescence: Duration::from_millis(RESIZE_QUIESCENCE_MS),
            start_index: DEFAULT_START_INDEX,
        }
    }
}

impl CarouselConfig {
    /// Reject tunables that would make the snap decision meaningless.
    pub fn validated(self) -> Result<Self> {
        if !self.drag_multiplier.is_finite() || self.drag_multiplier <= 0.0 {
            return Err(CarouselError::InvalidConfig(
                "drag multiplier must be finite and positive",
            ));
        }
        if !self.advance_threshold.is_finite() || self.advance_threshold < 0.0 {
            return Err(CarouselError::InvalidConfig(
                "advance threshold must be finite and non-negative",
            ));
        }
        Ok(self)
    }
}
