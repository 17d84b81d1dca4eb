//! Systems for spawning and refreshing the HUD overlay.
use bevy::{ecs::message::MessageReader, prelude::*};

use crate::{
    hackable::{cooldown::HackCooldown, events::HackFeedbackEvent, target::HackTarget},
    ui::hud::components::{ActionPromptText, CooldownText, StatusBanner, StatusText, TargetText},
    world::settings::GameplaySettings,
};

// Visual constants
const HEADER_TEXT: &str = "Streethack Prototype";
const NO_TARGET_PROMPT: &str = "Move closer to a hackable object.";
const TEXT_COLOR: Color = Color::srgb(0.94, 0.94, 0.94);
const ACTION_TEXT_COLOR: Color = Color::srgb(0.55, 0.78, 1.0);
const STATUS_TEXT_COLOR: Color = Color::srgb(1.0, 0.71, 0.27);
const COOLDOWN_TEXT_COLOR: Color = Color::srgb(0.78, 0.47, 0.47);
const HEADER_FONT_SIZE: f32 = 22.0;
const BODY_FONT_SIZE: f32 = 18.0;

/// Spawns the HUD node tree: info panel top-left, status lines bottom-left.
pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                left: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                ..default()
            },
            Name::new("Hud Info Panel"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(HEADER_TEXT),
                TextFont {
                    font_size: HEADER_FONT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
            parent.spawn((
                Text::new(NO_TARGET_PROMPT),
                TextFont {
                    font_size: BODY_FONT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                TargetText,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: BODY_FONT_SIZE,
                    ..default()
                },
                TextColor(ACTION_TEXT_COLOR),
                ActionPromptText,
            ));
        });

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(60.0),
            left: Val::Px(20.0),
            ..default()
        },
        Text::new(""),
        TextFont {
            font_size: BODY_FONT_SIZE,
            ..default()
        },
        TextColor(COOLDOWN_TEXT_COLOR),
        CooldownText,
        Name::new("Hud Cooldown Text"),
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(28.0),
            left: Val::Px(20.0),
            ..default()
        },
        Text::new(""),
        TextFont {
            font_size: BODY_FONT_SIZE,
            ..default()
        },
        TextColor(STATUS_TEXT_COLOR),
        StatusText,
        Name::new("Hud Status Text"),
    ));
}

/// Mirrors the current target and its action prompts into the info panel.
#[allow(clippy::type_complexity)]
pub fn update_target_readout(
    target: Res<HackTarget>,
    mut target_text: Query<&mut Text, (With<TargetText>, Without<ActionPromptText>)>,
    mut prompt_text: Query<&mut Text, (With<ActionPromptText>, Without<TargetText>)>,
) {
    let Ok(mut target_text) = target_text.single_mut() else {
        return;
    };
    let Ok(mut prompt_text) = prompt_text.single_mut() else {
        return;
    };

    if target.entity.is_some() {
        target_text.0 = format!("Nearest: {}", target.label);
        prompt_text.0 = target
            .actions
            .iter()
            .map(|action| format!("[{}] {}", key_label(action.key), action.label))
            .collect::<Vec<_>>()
            .join("\n");
    } else {
        target_text.0 = NO_TARGET_PROMPT.to_string();
        prompt_text.0.clear();
    }
}

/// Feeds dispatch feedback into the status banner.
pub fn collect_feedback(
    settings: Res<GameplaySettings>,
    mut feedback: MessageReader<HackFeedbackEvent>,
    mut banner: ResMut<StatusBanner>,
) {
    for event in feedback.read() {
        banner.show(event.message.clone(), settings.status_seconds);
    }
}

/// Runs the status banner timer down.
pub fn tick_status_banner(time: Res<Time>, mut banner: ResMut<StatusBanner>) {
    banner.tick(time.delta_secs());
}

/// Mirrors the status banner into its text node.
pub fn update_status_text(
    banner: Res<StatusBanner>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    if let Ok(mut text) = query.single_mut() {
        text.0 = banner.message().to_string();
    }
}

/// Shows the cooldown readout while the hack systems are rebooting.
pub fn update_cooldown_text(
    cooldown: Res<HackCooldown>,
    mut query: Query<&mut Text, With<CooldownText>>,
) {
    if let Ok(mut text) = query.single_mut() {
        if cooldown.is_ready() {
            text.0.clear();
        } else {
            text.0 = format!("Hacking systems rebooting: {:.1}s", cooldown.remaining());
        }
    }
}

/// Short display name for an action trigger key.
fn key_label(key: KeyCode) -> &'static str {
    match key {
        KeyCode::Digit1 => "1",
        KeyCode::Digit2 => "2",
        KeyCode::Digit3 => "3",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_keys_have_short_labels() {
        assert_eq!(key_label(KeyCode::Digit1), "1");
        assert_eq!(key_label(KeyCode::Digit2), "2");
        assert_eq!(key_label(KeyCode::KeyQ), "?");
    }
}
