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

//! # Cyber Core
//!
//! Foundational crate containing the event channel, core value types, and the
//! interface contracts shared by the platform layer and the SDK.

#![warn(missing_docs)]

pub mod event;
pub mod math;
pub mod utils;

pub use event::{Event, EventLocator, EventQueue, EventValue, NullEventQueue, RingEventQueue};
pub use math::Vec2;
pub use utils::timer::FrameClock;
