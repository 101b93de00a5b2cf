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

use crate::math::Vec2;
use std::fmt;

/// The payload carried by an [`Event`].
///
/// Exactly one kind of value is valid per event. Producer and consumer agree on
/// which kind a given identifier carries; reading the wrong kind through the
/// typed accessors on [`Event`] yields `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventValue {
    /// A boolean state, e.g. whether a key is pressed.
    Bool(bool),
    /// A signed integer.
    Int(i32),
    /// A floating-point scalar.
    Float(f32),
    /// A 2D floating-point vector.
    Vec2(Vec2),
}

impl fmt::Display for EventValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventValue::Bool(v) => write!(f, "{v}"),
            EventValue::Int(v) => write!(f, "{v}"),
            EventValue::Float(v) => write!(f, "{v}"),
            EventValue::Vec2(v) => write!(f, "({}, {})", v.x, v.y),
        }
    }
}

/// A single event travelling through an [`EventQueue`](super::EventQueue).
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// The textual identifier of the event, e.g. `"Up"` or `"A"`.
    pub id: String,
    /// The payload of the event.
    pub value: EventValue,
}

impl Event {
    /// Creates a new event from an identifier and a payload.
    pub fn new(id: impl Into<String>, value: EventValue) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// Creates an event carrying a boolean payload.
    pub fn bool(id: impl Into<String>, value: bool) -> Self {
        Self::new(id, EventValue::Bool(value))
    }

    /// Creates an event carrying an integer payload.
    pub fn int(id: impl Into<String>, value: i32) -> Self {
        Self::new(id, EventValue::Int(value))
    }

    /// Creates an event carrying a scalar payload.
    pub fn float(id: impl Into<String>, value: f32) -> Self {
        Self::new(id, EventValue::Float(value))
    }

    /// Creates an event carrying a 2D vector payload.
    pub fn vec2(id: impl Into<String>, value: Vec2) -> Self {
        Self::new(id, EventValue::Vec2(value))
    }

    /// Returns the boolean payload, or `None` if the event carries another kind.
    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            EventValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the integer payload, or `None` if the event carries another kind.
    pub fn as_int(&self) -> Option<i32> {
        match self.value {
            EventValue::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the scalar payload, or `None` if the event carries another kind.
    pub fn as_float(&self) -> Option<f32> {
        match self.value {
            EventValue::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the vector payload, or `None` if the event carries another kind.
    pub fn as_vec2(&self) -> Option<Vec2> {
        match self.value {
            EventValue::Vec2(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.id, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_id_and_payload() {
        let event = Event::bool("Up", true);
        assert_eq!(event.id, "Up");
        assert_eq!(event.value, EventValue::Bool(true));

        assert_eq!(Event::int("Score", -3).value, EventValue::Int(-3));
        assert_eq!(Event::float("Zoom", 0.5).value, EventValue::Float(0.5));
        assert_eq!(
            Event::vec2("Look", Vec2::new(1.0, 2.0)).value,
            EventValue::Vec2(Vec2::new(1.0, 2.0))
        );
    }

    #[test]
    fn test_accessors_match_only_their_kind() {
        let pressed = Event::bool("A", true);
        assert_eq!(pressed.as_bool(), Some(true));
        assert_eq!(pressed.as_int(), None);
        assert_eq!(pressed.as_float(), None);
        assert_eq!(pressed.as_vec2(), None);

        let look = Event::vec2("Look", Vec2::new(3.0, -4.0));
        assert_eq!(look.as_vec2(), Some(Vec2::new(3.0, -4.0)));
        assert_eq!(look.as_bool(), None);

        assert_eq!(Event::int("Score", 7).as_int(), Some(7));
        assert_eq!(Event::float("Zoom", 1.5).as_float(), Some(1.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Event::bool("Up", false).to_string(), "Up = false");
        assert_eq!(
            Event::vec2("Look", Vec2::new(1.0, 2.5)).to_string(),
            "Look = (1, 2.5)"
        );
    }
}
