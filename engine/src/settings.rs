use serde::{Deserialize, Serialize};

// By default one move in five is played at random.
pub const DEFAULT_RANDOM_MOVE_CHANCE: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotSettings {
    pub random_move_chance: f64,
}

impl BotSettings {
    pub fn default_settings() -> Self {
        Self {
            random_move_chance: DEFAULT_RANDOM_MOVE_CHANCE,
        }
    }

    pub fn perfect() -> Self {
        Self {
            random_move_chance: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.random_move_chance) {
            return Err(format!(
                "Random move chance must be between 0.0 and 1.0, got {}",
                self.random_move_chance
            ));
        }
        Ok(())
    }
}

impl Default for BotSettings {
    fn default() -> Self {
        Self::default_settings()
    }
}
