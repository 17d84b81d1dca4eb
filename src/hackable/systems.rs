//! Systems for spawning, targeting, and operating hackables.
use bevy::{ecs::message::MessageWriter, prelude::*};

use crate::{
    hackable::{
        components::{Door, DoorPanel, HackCommand, Hackable, HighlightRing, Npc},
        cooldown::HackCooldown,
        events::HackFeedbackEvent,
        target::{closest_within, HackTarget},
    },
    player::components::Player,
    world::settings::GameplaySettings,
};

const COOLDOWN_MESSAGE: &str = "Systems cooling down...";

const HIGHLIGHT_COLOR: Color = Color::srgb(1.0, 0.843, 0.0);
const HIGHLIGHT_INSET: f32 = 12.0;
const PROP_Z: f32 = 1.0;

const DOOR_COLOR: Color = Color::srgb(0.47, 0.47, 0.55);
const DOOR_LOCKED_COLOR: Color = Color::srgb(0.82, 0.31, 0.31);
const DOOR_OPENED_COLOR: Color = Color::srgb(0.55, 0.82, 0.55);

const NPC_COLOR: Color = Color::srgb(0.31, 0.71, 0.35);
const NPC_DISTRACTED_COLOR: Color = Color::srgb(0.94, 0.82, 0.24);
const NPC_SIZE: Vec2 = Vec2::new(42.0, 48.0);

// Fixed room layout: 3 doors (the second one locked) and 3 NPCs, in world
// coordinates centered on the origin.
const DOOR_LAYOUT: [(Vec2, Vec2, bool); 3] = [
    (Vec2::new(-250.0, 131.0), Vec2::new(60.0, 18.0), false),
    (Vec2::new(129.0, 140.0), Vec2::new(18.0, 80.0), true),
    (Vec2::new(-45.0, -109.0), Vec2::new(70.0, 18.0), false),
];
const NPC_LAYOUT: [Vec2; 3] = [
    Vec2::new(-200.0, -40.0),
    Vec2::new(40.0, 60.0),
    Vec2::new(240.0, -140.0),
];

/// Spawns the compiled-in set of doors and NPCs, each with a hidden
/// highlight ring child.
pub fn spawn_hackables(mut commands: Commands) {
    for (index, (position, size, locked)) in DOOR_LAYOUT.into_iter().enumerate() {
        let door = Door::new(locked);
        let mut ring = Entity::PLACEHOLDER;
        commands
            .spawn((
                Sprite::from_color(door_color(&door), size),
                Transform::from_translation(position.extend(PROP_Z)),
                door,
                DoorPanel::new(size),
                Hackable { label: "Door" },
                Name::new(format!("Door {index}")),
            ))
            .with_children(|parent| {
                ring = parent
                    .spawn((
                        Sprite::from_color(HIGHLIGHT_COLOR, size + Vec2::splat(HIGHLIGHT_INSET)),
                        Transform::from_xyz(0.0, 0.0, -0.1),
                        Visibility::Hidden,
                    ))
                    .id();
            })
            .insert(HighlightRing(ring));
    }

    for (index, position) in NPC_LAYOUT.into_iter().enumerate() {
        let mut ring = Entity::PLACEHOLDER;
        commands
            .spawn((
                Sprite::from_color(NPC_COLOR, NPC_SIZE),
                Transform::from_translation(position.extend(PROP_Z)),
                Npc::new(),
                Hackable { label: "NPC" },
                Name::new(format!("NPC {index}")),
            ))
            .with_children(|parent| {
                ring = parent
                    .spawn((
                        Sprite::from_color(
                            HIGHLIGHT_COLOR,
                            NPC_SIZE + Vec2::splat(HIGHLIGHT_INSET),
                        ),
                        Transform::from_xyz(0.0, 0.0, -0.1),
                        Visibility::Hidden,
                    ))
                    .id();
            })
            .insert(HighlightRing(ring));
    }

    info!(
        "Spawned {} doors and {} NPCs",
        DOOR_LAYOUT.len(),
        NPC_LAYOUT.len()
    );
}

/// Scans all hackables and publishes the nearest one within the hack
/// radius, together with its current action list.
#[allow(clippy::type_complexity)]
pub fn acquire_target(
    settings: Res<GameplaySettings>,
    player_query: Query<&Transform, With<Player>>,
    hackables: Query<(Entity, &Transform, &Hackable, Option<&Door>, Option<&Npc>)>,
    mut target: ResMut<HackTarget>,
) {
    let Ok(player_transform) = player_query.single() else {
        target.clear();
        return;
    };
    let player_pos = player_transform.translation.truncate();

    let nearest = closest_within(
        hackables.iter().map(|(entity, transform, ..)| {
            (entity, transform.translation.truncate().distance(player_pos))
        }),
        settings.hack_radius,
    );

    let Some((entity, distance)) = nearest else {
        target.clear();
        return;
    };
    let Ok((_, _, hackable, door, npc)) = hackables.get(entity) else {
        target.clear();
        return;
    };

    if target.entity != Some(entity) {
        debug!("Targeting {} at {:.0} units", hackable.label, distance);
    }

    target.entity = Some(entity);
    target.label = hackable.label;
    target.actions = match (door, npc) {
        (Some(door), _) => door.actions(),
        (_, Some(npc)) => npc.actions(),
        _ => Vec::new(),
    };
}

/// Runs down every NPC's distraction timer.
pub fn tick_distractions(time: Res<Time>, mut npcs: Query<&mut Npc>) {
    for mut npc in npcs.iter_mut() {
        npc.tick(time.delta_secs());
    }
}

/// Runs down the global hack cooldown.
pub fn tick_cooldown(time: Res<Time>, mut cooldown: ResMut<HackCooldown>) {
    cooldown.tick(time.delta_secs());
}

/// Dispatches at most one action per frame against the current target.
///
/// Edge-triggered: only a freshly pressed key fires, so holding a key does
/// not re-apply the action every frame. The first action in the target's
/// order whose key was pressed wins; further matches are ignored.
pub fn handle_hack_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<GameplaySettings>,
    target: Res<HackTarget>,
    mut cooldown: ResMut<HackCooldown>,
    mut doors: Query<&mut Door>,
    mut npcs: Query<&mut Npc>,
    mut feedback: MessageWriter<HackFeedbackEvent>,
) {
    let Some(entity) = target.entity else {
        return;
    };
    let Some(action) = target
        .actions
        .iter()
        .find(|action| keyboard.just_pressed(action.key))
    else {
        return;
    };

    let message = dispatch_command(
        action.command,
        &mut cooldown,
        settings.hack_cooldown_seconds,
        doors.get_mut(entity).ok().as_deref_mut(),
        npcs.get_mut(entity).ok().as_deref_mut(),
    );

    if let Some(message) = message {
        info!("{} on {}: {}", action.label, target.label, message);
        feedback.write(HackFeedbackEvent { message });
    }
}

/// Runs `command` against the targeted components, gated by the cooldown.
///
/// While COOLING the attempt is rejected with the fixed message and the
/// target is left untouched; a permitted run arms the cooldown for
/// `cooldown_seconds` and returns the command's own message.
fn dispatch_command(
    command: HackCommand,
    cooldown: &mut HackCooldown,
    cooldown_seconds: f32,
    door: Option<&mut Door>,
    npc: Option<&mut Npc>,
) -> Option<String> {
    if !cooldown.try_fire(cooldown_seconds) {
        return Some(COOLDOWN_MESSAGE.to_string());
    }
    match command {
        HackCommand::ToggleOpen => door.map(|door| door.toggle_open()),
        HackCommand::ToggleLock => door.map(|door| door.toggle_lock()),
        HackCommand::Distract => npc.map(|npc| npc.distract()),
    }
}

/// Recolors and resizes door panels to match their lock/open state.
pub fn update_door_sprites(mut doors: Query<(&Door, &DoorPanel, &mut Sprite)>) {
    for (door, panel, mut sprite) in doors.iter_mut() {
        sprite.color = door_color(door);
        sprite.custom_size = Some(panel.panel_size(door.opened));
    }
}

/// Recolors NPC sprites while they are distracted.
pub fn update_npc_sprites(mut npcs: Query<(&Npc, &mut Sprite)>) {
    for (npc, mut sprite) in npcs.iter_mut() {
        sprite.color = if npc.distracted {
            NPC_DISTRACTED_COLOR
        } else {
            NPC_COLOR
        };
    }
}

/// Shows the highlight ring on the targeted hackable and hides the rest.
pub fn update_target_highlight(
    target: Res<HackTarget>,
    hackables: Query<(Entity, &HighlightRing)>,
    mut visibilities: Query<&mut Visibility>,
) {
    for (entity, ring) in hackables.iter() {
        if let Ok(mut visibility) = visibilities.get_mut(ring.0) {
            *visibility = if target.entity == Some(entity) {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}

fn door_color(door: &Door) -> Color {
    if door.locked {
        DOOR_LOCKED_COLOR
    } else if door.opened {
        DOOR_OPENED_COLOR
    } else {
        DOOR_COLOR
    }
}
