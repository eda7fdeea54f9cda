//! Configuration for roll resolution.

/// How dice are rolled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RollMode {
    /// Uniformly random faces.
    #[default]
    Random,
    /// Every die shows 1.
    Min,
    /// Every die shows its highest face.
    Max,
}

/// Largest number of dice a single roll may ask for by default.
pub const DEFAULT_MAX_DICE: u32 = 1000;

/// Configuration for the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// How dice are rolled.
    pub roll_mode: RollMode,

    /// Seed for random rolls; `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Largest number of dice a single roll may ask for.
    pub max_dice: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            roll_mode: RollMode::Random,
            seed: None,
            max_dice: DEFAULT_MAX_DICE,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration whose random rolls repeat for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Builder method to set the roll mode.
    #[must_use]
    pub fn with_roll_mode(mut self, mode: RollMode) -> Self {
        self.roll_mode = mode;
        self
    }

    /// Builder method to set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to set the dice limit.
    #[must_use]
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice;
        self
    }
}
