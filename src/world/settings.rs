//! Gameplay tuning knobs, optionally overridden from a TOML file.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/gameplay.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawGameplayConfig {
    #[serde(default)]
    movement: RawMovementSection,
    #[serde(default)]
    hacking: RawHackingSection,
    #[serde(default)]
    hud: RawHudSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMovementSection {
    player_speed: f32,
}

impl Default for RawMovementSection {
    fn default() -> Self {
        Self {
            player_speed: 200.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawHackingSection {
    radius: f32,
    cooldown_seconds: f32,
}

impl Default for RawHackingSection {
    fn default() -> Self {
        Self {
            radius: 200.0,
            cooldown_seconds: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawHudSection {
    status_seconds: f32,
}

impl Default for RawHudSection {
    fn default() -> Self {
        Self {
            status_seconds: 2.5,
        }
    }
}

/// Tunable parameters for movement, hacking, and the status banner.
#[derive(Resource, Debug, Clone)]
pub struct GameplaySettings {
    /// Player movement speed in units per second.
    pub player_speed: f32,
    /// Maximum distance at which a hackable can be targeted.
    pub hack_radius: f32,
    /// Global cooldown applied after any triggered action.
    pub hack_cooldown_seconds: f32,
    /// How long a status banner message stays visible.
    pub status_seconds: f32,
}

impl GameplaySettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawGameplayConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawGameplayConfig::default().into()
                }
            },
            Err(_) => RawGameplayConfig::default().into(),
        }
    }
}

impl Default for GameplaySettings {
    fn default() -> Self {
        RawGameplayConfig::default().into()
    }
}

impl From<RawGameplayConfig> for GameplaySettings {
    fn from(value: RawGameplayConfig) -> Self {
        Self {
            player_speed: value.movement.player_speed.max(1.0),
            hack_radius: value.hacking.radius.max(1.0),
            hack_cooldown_seconds: value.hacking.cooldown_seconds.max(0.0),
            status_seconds: value.hud.status_seconds.max(0.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_prototype_constants() {
        let settings = GameplaySettings::default();
        assert_eq!(settings.player_speed, 200.0);
        assert_eq!(settings.hack_radius, 200.0);
        assert_eq!(settings.hack_cooldown_seconds, 1.0);
        assert_eq!(settings.status_seconds, 2.5);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let raw: RawGameplayConfig = toml::from_str(
            r#"
            [hacking]
            radius = 150.0
            "#,
        )
        .expect("valid toml");
        let settings = GameplaySettings::from(raw);

        assert_eq!(settings.hack_radius, 150.0);
        assert_eq!(settings.hack_cooldown_seconds, 1.0);
        assert_eq!(settings.player_speed, 200.0);
    }

    #[test]
    fn nonsense_values_are_clamped() {
        let raw: RawGameplayConfig = toml::from_str(
            r#"
            [movement]
            player_speed = -40.0

            [hud]
            status_seconds = 0.0
            "#,
        )
        .expect("valid toml");
        let settings = GameplaySettings::from(raw);

        assert_eq!(settings.player_speed, 1.0);
        assert_eq!(settings.status_seconds, 0.1);
    }
}
