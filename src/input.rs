//! Translation of SDL events and keyboard state into game input.

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, KeyboardState, Scancode};
use sdl2::EventPump;
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::debug;

use crate::events::GameCommand;
use crate::systems::InputState;

/// Maps discrete key presses to session commands. Movement keys are not
/// bound here; they are sampled from the keyboard state each frame instead,
/// so held keys keep moving the player without key-repeat events.
pub struct Bindings {
    keys: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut keys = HashMap::new();
        keys.insert(Keycode::P, GameCommand::TogglePause);
        keys.insert(Keycode::Escape, GameCommand::Exit);
        keys.insert(Keycode::Q, GameCommand::Exit);
        Bindings { keys }
    }
}

impl Bindings {
    /// Drains the event pump and collects this frame's commands.
    pub fn poll_commands(&self, event_pump: &mut EventPump) -> SmallVec<[GameCommand; 4]> {
        let mut commands = SmallVec::new();
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    debug!("Window close requested");
                    commands.push(GameCommand::Exit);
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(command) = self.keys.get(&keycode) {
                        commands.push(*command);
                    }
                }
                _ => {}
            }
        }
        commands
    }
}

/// Samples the held movement keys. WASD and the arrow keys are equivalent.
pub fn read_input(keyboard: &KeyboardState) -> InputState {
    InputState {
        up: keyboard.is_scancode_pressed(Scancode::W) || keyboard.is_scancode_pressed(Scancode::Up),
        down: keyboard.is_scancode_pressed(Scancode::S) || keyboard.is_scancode_pressed(Scancode::Down),
        left: keyboard.is_scancode_pressed(Scancode::A) || keyboard.is_scancode_pressed(Scancode::Left),
        right: keyboard.is_scancode_pressed(Scancode::D) || keyboard.is_scancode_pressed(Scancode::Right),
    }
}
