/// Bounded retry schedule for play attempts the browser refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts including the first one
    pub max_attempts: u32,
    pub base_delay_ms: u32,
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay_ms: 100,
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// Delay before the next try after `failed_attempts` refusals, or `None`
    /// once the budget is spent.
    pub fn delay_after(&self, failed_attempts: u32) -> Option<u32> {
        if failed_attempts == 0 || failed_attempts >= self.max_attempts {
            return None;
        }
        let factor = self.multiplier.saturating_pow(failed_attempts - 1);
        Some(self.base_delay_ms.saturating_mul(factor))
    }
}
