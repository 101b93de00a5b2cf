// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides translation from a concrete windowing backend (`winit`) to engine events.
//!
//! This module acts as an adapter layer. [`translate_winit_input`] filters raw
//! window events down to the few the engine cares about, and [`InputState`]
//! turns key transitions into [`Event`]s published on the current event queue.

use cyber_core::event::{Event, EventLocator};
use cyber_core::math::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// A backend-agnostic view of the window events the input layer consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// A physical key changed state.
    Key {
        /// The key that changed.
        key: KeyCode,
        /// `true` if the key went down, `false` if it went up.
        pressed: bool,
    },
    /// The cursor moved to a new position, in window pixels from the top-left.
    CursorMoved {
        /// The new x-coordinate of the cursor.
        x: f32,
        /// The new y-coordinate of the cursor.
        y: f32,
    },
    /// The window lost keyboard focus.
    FocusLost,
}

/// Translates a `winit::event::WindowEvent` into a [`RawInput`].
///
/// Key repeats and unidentified keys are ignored, as is every event that is
/// not a direct user input action (resizes, redraws, close requests, ...).
pub fn translate_winit_input(event: &WindowEvent) -> Option<RawInput> {
    match event {
        WindowEvent::KeyboardInput {
            event: key_event, ..
        } => {
            let PhysicalKey::Code(key) = key_event.physical_key else {
                return None;
            };
            match key_event.state {
                ElementState::Pressed if !key_event.repeat => {
                    Some(RawInput::Key { key, pressed: true })
                }
                ElementState::Released => Some(RawInput::Key {
                    key,
                    pressed: false,
                }),
                _ => None,
            }
        }
        WindowEvent::CursorMoved { position, .. } => Some(RawInput::CursorMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::Focused(false) => Some(RawInput::FocusLost),
        _ => None,
    }
}

/// Returns the event identifier published for `key`.
///
/// Arrow keys map to `"Up"`, `"Down"`, `"Left"` and `"Right"`, letters to their
/// upper-case character, digits to the digit, and the space bar to `" "`.
/// Every other key uses its `winit` name, e.g. `"Escape"`.
pub fn key_event_id(key: KeyCode) -> String {
    match key {
        KeyCode::ArrowUp => "Up".to_string(),
        KeyCode::ArrowDown => "Down".to_string(),
        KeyCode::ArrowLeft => "Left".to_string(),
        KeyCode::ArrowRight => "Right".to_string(),
        KeyCode::Space => " ".to_string(),
        other => {
            let name = format!("{other:?}");
            match name
                .strip_prefix("Key")
                .or_else(|| name.strip_prefix("Digit"))
            {
                Some(short) if short.len() == 1 => short.to_string(),
                _ => name,
            }
        }
    }
}

/// Tracks keyboard and cursor state for one window.
///
/// Key events are only published when a key actually changes state, so a key
/// held down produces exactly one "pressed" and one "released" event.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<KeyCode>,
    cursor: Vec2,
    window_height: f32,
}

impl InputState {
    /// Creates an input state for a window of the given height, with every key released.
    pub fn new(window_height: u32) -> Self {
        Self {
            pressed: HashSet::new(),
            cursor: Vec2::ZERO,
            window_height: window_height as f32,
        }
    }

    /// Updates the window height used to flip the cursor's Y axis.
    pub fn set_window_height(&mut self, window_height: u32) {
        self.window_height = window_height as f32;
    }

    /// Returns `true` if `key` is currently held down.
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Returns the last known cursor position, with the origin at the bottom-left corner.
    pub fn cursor_position(&self) -> Vec2 {
        self.cursor
    }

    /// Records a key transition and returns the event to publish, if the state changed.
    pub fn key_transition(&mut self, key: KeyCode, pressed: bool) -> Option<Event> {
        let changed = if pressed {
            self.pressed.insert(key)
        } else {
            self.pressed.remove(&key)
        };

        changed.then(|| Event::bool(key_event_id(key), pressed))
    }

    /// Applies a raw input to the state, publishing key transitions on `events`.
    pub fn apply(&mut self, input: RawInput, events: &EventLocator) {
        match input {
            RawInput::Key { key, pressed } => {
                if let Some(event) = self.key_transition(key, pressed) {
                    log::trace!("Key event: {event}");
                    events.push(event);
                }
            }
            RawInput::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, self.window_height - y);
            }
            RawInput::FocusLost => self.release_all(events),
        }
    }

    /// Releases every held key, publishing one release event per key.
    ///
    /// Releases are published in key-name order so consumers see a stable sequence.
    pub fn release_all(&mut self, events: &EventLocator) {
        let mut released: Vec<String> = self.pressed.drain().map(key_event_id).collect();
        released.sort();

        for id in released {
            let event = Event::bool(id, false);
            log::trace!("Key event: {event}");
            events.push(event);
        }
    }
}
