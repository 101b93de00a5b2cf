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

//! Provides the engine's event channel.
//!
//! The channel is made of three pieces:
//!
//! * [`Event`]: an identifier plus one tagged [`EventValue`] payload.
//! * [`EventQueue`]: the queue capability, implemented by the bounded
//!   [`RingEventQueue`] and the no-op [`NullEventQueue`].
//! * [`EventLocator`]: the context object that hands out "the current queue"
//!   to producers and consumers, falling back to the null queue when nothing
//!   has been provided.
//!
//! Everything here is single-threaded. Producers (input callbacks) and the
//! consumer (the frame loop) run on the same thread, one after the other.

mod locator;
mod queue;
mod record;

pub use self::locator::{EventLocator, LocatorState, SharedEventQueue};
pub use self::queue::{EventQueue, NullEventQueue, RingEventQueue, DEFAULT_EVENT_CAPACITY};
pub use self::record::{Event, EventValue};
