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

use cyber_core::event::{Event, EventLocator, RingEventQueue, SharedEventQueue};
use cyber_infra::{InputState, RawInput};
use std::cell::RefCell;
use std::rc::Rc;
use winit::keyboard::KeyCode;

fn key(key: KeyCode, pressed: bool) -> RawInput {
    RawInput::Key { key, pressed }
}

#[test]
fn test_key_presses_reach_the_bound_queue() {
    // --- 1. ARRANGE ---
    let mut locator = EventLocator::new();
    let queue: SharedEventQueue = Rc::new(RefCell::new(RingEventQueue::new()));
    locator.provide(Some(queue));
    let mut input = InputState::new(640);

    // --- 2. ACT ---
    // A held key reported twice must only publish once.
    input.apply(key(KeyCode::ArrowUp, true), &locator);
    input.apply(key(KeyCode::ArrowUp, true), &locator);
    input.apply(key(KeyCode::KeyA, true), &locator);
    input.apply(RawInput::CursorMoved { x: 5.0, y: 5.0 }, &locator);
    input.apply(key(KeyCode::ArrowUp, false), &locator);

    // --- 3. ASSERT ---
    let drained: Vec<Event> = locator.drain().collect();
    assert_eq!(
        drained,
        vec![
            Event::bool("Up", true),
            Event::bool("A", true),
            Event::bool("Up", false),
        ]
    );
    assert!(input.is_pressed(KeyCode::KeyA));
}

#[test]
fn test_input_before_binding_is_discarded() {
    let mut locator = EventLocator::new();
    let mut input = InputState::new(640);

    input.apply(key(KeyCode::KeyQ, true), &locator);
    assert_eq!(locator.pop(), None);

    // The key is already down, so binding afterwards does not replay it.
    locator.provide(Some(Rc::new(RefCell::new(RingEventQueue::new()))));
    input.apply(key(KeyCode::KeyQ, true), &locator);
    assert_eq!(locator.pop(), None);

    input.apply(key(KeyCode::KeyQ, false), &locator);
    assert_eq!(locator.pop(), Some(Event::bool("Q", false)));
}

#[test]
fn test_key_burst_beyond_capacity_keeps_oldest() {
    let mut locator = EventLocator::new();
    locator.provide(Some(Rc::new(RefCell::new(RingEventQueue::new()))));
    let mut input = InputState::new(640);

    let keys = [
        KeyCode::KeyA,
        KeyCode::KeyB,
        KeyCode::KeyC,
        KeyCode::KeyD,
        KeyCode::KeyE,
        KeyCode::KeyF,
        KeyCode::KeyG,
        KeyCode::KeyH,
    ];
    for k in keys {
        input.apply(key(k, true), &locator);
        input.apply(key(k, false), &locator);
    }

    let drained: Vec<Event> = locator.drain().collect();
    assert_eq!(drained.len(), 15);
    assert_eq!(drained[0], Event::bool("A", true));
    assert_eq!(drained[14], Event::bool("H", true));
}

#[test]
fn test_focus_loss_unsticks_a_consumer_tracking_held_keys() {
    let mut locator = EventLocator::new();
    locator.provide(Some(Rc::new(RefCell::new(RingEventQueue::new()))));
    let mut input = InputState::new(640);
    let mut held_up = false;

    input.apply(key(KeyCode::ArrowUp, true), &locator);
    for event in locator.drain() {
        if event.id == "Up" {
            held_up = event.as_bool().unwrap_or(false);
        }
    }
    assert!(held_up);

    // The release happens while another window has focus, so winit never reports it.
    input.apply(RawInput::FocusLost, &locator);
    for event in locator.drain() {
        if event.id == "Up" {
            held_up = event.as_bool().unwrap_or(false);
        }
    }

    assert!(!held_up);
    assert!(!input.is_pressed(KeyCode::ArrowUp));
}
