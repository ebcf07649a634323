//! Configuration for a session.

/// Configuration for one playthrough.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// RNG seed for reproducible choice shuffles. `None` seeds from OS
    /// entropy, which is what real play wants.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Set a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
