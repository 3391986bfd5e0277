//! Configuration for the post-release cooldown.

use bevy::prelude::*;

/// Configuration for the post-release cooldown.
#[derive(Reflect, Debug, Clone, Copy)]
pub struct CooldownConfig {
    /// Time (seconds) after an episode ends before the next fire attempt
    /// is admissible.
    pub duration: f32,
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self { duration: 2.0 }
    }
}
