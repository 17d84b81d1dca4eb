//! Hackable entity state machines and their action model.
use bevy::prelude::*;

/// How long a distracted NPC stays distracted, in seconds.
pub const DISTRACT_SECONDS: f32 = 3.5;

/// Naming component shared by every hackable entity, used by the HUD.
#[derive(Component, Debug)]
pub struct Hackable {
    pub label: &'static str,
}

/// The operations a hackable can expose. Dispatched against the targeted
/// entity's own components, so no state is captured in the action itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HackCommand {
    ToggleOpen,
    ToggleLock,
    Distract,
}

/// A key-triggered operation offered by the currently targeted hackable.
///
/// Rebuilt from the target's current state every frame, never cached.
#[derive(Debug, Clone)]
pub struct HackAction {
    pub key: KeyCode,
    pub label: String,
    pub command: HackCommand,
}

impl HackAction {
    fn new(key: KeyCode, label: impl Into<String>, command: HackCommand) -> Self {
        Self {
            key,
            label: label.into(),
            command,
        }
    }
}

/// A door that can be opened and locked independently.
#[derive(Component, Debug, Clone, Copy)]
pub struct Door {
    pub locked: bool,
    pub opened: bool,
}

impl Door {
    pub fn new(locked: bool) -> Self {
        Self {
            locked,
            opened: false,
        }
    }

    /// Flips the door open or closed. A locked door refuses and reports why.
    pub fn toggle_open(&mut self) -> String {
        if self.locked {
            return "Door is locked. Unlock it first.".to_string();
        }
        self.opened = !self.opened;
        let state = if self.opened { "opened" } else { "closed" };
        format!("Door {state}.")
    }

    /// Flips the lock. Always allowed, whatever the open state.
    pub fn toggle_lock(&mut self) -> String {
        self.locked = !self.locked;
        let state = if self.locked { "locked" } else { "unlocked" };
        format!("Door {state}.")
    }

    /// Both actions are always offered; only the labels track state.
    pub fn actions(&self) -> Vec<HackAction> {
        let open_label = if self.opened { "Close door" } else { "Open door" };
        let lock_label = if self.locked { "Unlock door" } else { "Lock door" };
        vec![
            HackAction::new(KeyCode::Digit1, open_label, HackCommand::ToggleOpen),
            HackAction::new(KeyCode::Digit2, lock_label, HackCommand::ToggleLock),
        ]
    }
}

/// Geometry of a door's visual panel, fixed at spawn time.
#[derive(Component, Debug, Clone, Copy)]
pub struct DoorPanel {
    size: Vec2,
}

impl DoorPanel {
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    /// An opened door slides most of its panel out of the frame along its
    /// long axis.
    pub fn panel_size(&self, opened: bool) -> Vec2 {
        if !opened {
            return self.size;
        }
        if self.size.x >= self.size.y {
            Vec2::new((self.size.x / 3.0).max(10.0), self.size.y)
        } else {
            Vec2::new(self.size.x, (self.size.y / 3.0).max(10.0))
        }
    }
}

/// An NPC that can be distracted for a short while.
#[derive(Component, Debug, Clone, Copy)]
pub struct Npc {
    pub distracted: bool,
    pub distract_timer: f32,
}

impl Npc {
    pub fn new() -> Self {
        Self {
            distracted: false,
            distract_timer: 0.0,
        }
    }

    /// Distracts the NPC. Idempotent: a second call while distracted mutates
    /// nothing and reports the existing distraction.
    pub fn distract(&mut self) -> String {
        if self.distracted {
            return "NPC is already distracted.".to_string();
        }
        self.distracted = true;
        self.distract_timer = DISTRACT_SECONDS;
        "NPC distracted with phone.".to_string()
    }

    /// Runs down the distraction timer, clearing the state at zero.
    pub fn tick(&mut self, dt: f32) {
        if self.distracted {
            self.distract_timer = (self.distract_timer - dt).max(0.0);
            if self.distract_timer <= 0.0 {
                self.distracted = false;
            }
        }
    }

    /// The distract action stays offered even while already distracted, so
    /// re-triggering surfaces the benign "already distracted" message.
    pub fn actions(&self) -> Vec<HackAction> {
        vec![HackAction::new(
            KeyCode::Digit1,
            "Distract with phone",
            HackCommand::Distract,
        )]
    }
}

impl Default for Npc {
    fn default() -> Self {
        Self::new()
    }
}

/// Points a hackable at its highlight-ring child entity.
#[derive(Component, Debug)]
pub struct HighlightRing(pub Entity);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_door_refuses_to_open() {
        let mut door = Door::new(true);
        let message = door.toggle_open();
        assert_eq!(message, "Door is locked. Unlock it first.");
        assert!(!door.opened);
        assert!(door.locked);
    }

    #[test]
    fn lock_toggles_regardless_of_open_state() {
        let mut door = Door::new(false);
        assert_eq!(door.toggle_open(), "Door opened.");
        assert!(door.opened);

        assert_eq!(door.toggle_lock(), "Door locked.");
        assert!(door.locked);
        assert!(door.opened, "locking must not touch the open state");

        assert_eq!(door.toggle_lock(), "Door unlocked.");
        assert!(!door.locked);
    }

    #[test]
    fn unlock_then_open_sequence() {
        let mut door = Door::new(true);
        assert_eq!(door.toggle_lock(), "Door unlocked.");
        assert_eq!(door.toggle_open(), "Door opened.");
        assert!(door.opened);
        assert_eq!(door.toggle_open(), "Door closed.");
        assert!(!door.opened);
    }

    #[test]
    fn door_action_labels_track_state() {
        let mut door = Door::new(true);
        let actions = door.actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].label, "Open door");
        assert_eq!(actions[1].label, "Unlock door");
        assert_eq!(actions[0].command, HackCommand::ToggleOpen);
        assert_eq!(actions[1].command, HackCommand::ToggleLock);

        door.toggle_lock();
        door.toggle_open();
        let actions = door.actions();
        assert_eq!(actions[0].label, "Close door");
        assert_eq!(actions[1].label, "Lock door");
    }

    #[test]
    fn distract_is_idempotent_while_active() {
        let mut npc = Npc::new();
        assert_eq!(npc.distract(), "NPC distracted with phone.");
        assert!(npc.distracted);
        assert_eq!(npc.distract_timer, DISTRACT_SECONDS);

        npc.tick(1.0);
        let timer_before = npc.distract_timer;
        assert_eq!(npc.distract(), "NPC is already distracted.");
        assert_eq!(npc.distract_timer, timer_before);
    }

    #[test]
    fn distraction_expires_after_its_duration() {
        let mut npc = Npc::new();
        npc.distract();

        npc.tick(DISTRACT_SECONDS / 2.0);
        assert!(npc.distracted);
        assert!(npc.distract_timer > 0.0);

        npc.tick(DISTRACT_SECONDS / 2.0);
        assert!(!npc.distracted);
        assert_eq!(npc.distract_timer, 0.0);
    }

    #[test]
    fn distract_timer_never_goes_negative() {
        let mut npc = Npc::new();
        npc.distract();
        npc.tick(DISTRACT_SECONDS + 100.0);
        assert!(!npc.distracted);
        assert_eq!(npc.distract_timer, 0.0);
    }

    #[test]
    fn npc_always_offers_the_distract_action() {
        let mut npc = Npc::new();
        assert_eq!(npc.actions().len(), 1);
        npc.distract();
        let actions = npc.actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].command, HackCommand::Distract);
    }

    #[test]
    fn opened_door_panel_shrinks_along_the_long_axis() {
        let horizontal = DoorPanel::new(Vec2::new(60.0, 18.0));
        assert_eq!(horizontal.panel_size(false), Vec2::new(60.0, 18.0));
        assert_eq!(horizontal.panel_size(true), Vec2::new(20.0, 18.0));

        let vertical = DoorPanel::new(Vec2::new(18.0, 80.0));
        assert_eq!(vertical.panel_size(true).x, 18.0);
        assert!(vertical.panel_size(true).y < 80.0);
    }
}
