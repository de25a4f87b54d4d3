use crate::config::{COUNTER_ROTATION_STEP_DEG, COUNTER_SCALE_STEP};

/// Per-card click tally. Lives as long as the card does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickCounter {
    count: u32,
}

impl ClickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn activate(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn rotation_deg(&self) -> f64 {
        f64::from(self.count()) * COUNTER_ROTATION_STEP_DEG
    }

    pub fn scale(&self) -> f64 {
        1.0 + f64::from(self.count()) * COUNTER_SCALE_STEP
    }

    pub fn transform(&self) -> String {
        format!("rotate({}deg) scale({})", self.rotation_deg(), self.scale())
    }

    /// Badge text, if the card has been clicked at all.
    pub fn badge(&self) -> Option<String> {
        let count = self.count();
        (count > 0).then(|| count.to_string())
    }
}
