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

//! The event queue capability and its two implementations.
//!
//! ```text
//!   head                 tail
//!    v                    v
//! [ A ][ B ][ C ][ D ][    ][    ] ... [    ]
//!  pop() takes from head, push() writes at tail.
//! ```
//!
//! One slot is always left empty so that `head == tail` unambiguously means
//! "empty" and `(tail + 1) % N == head` means "full".

use super::record::Event;

/// The number of slots in a default [`RingEventQueue`].
///
/// One slot is reserved, so a default queue holds at most 15 events.
pub const DEFAULT_EVENT_CAPACITY: usize = 16;

/// The capability shared by every event queue implementation.
///
/// All operations return immediately; none of them block or fail.
pub trait EventQueue {
    /// Appends an event at the tail of the queue.
    ///
    /// If the queue is full the event is dropped. The caller is not told.
    fn push(&mut self, event: Event);

    /// Removes and returns the oldest pending event, or `None` if the queue is empty.
    fn pop(&mut self) -> Option<Event>;

    /// Discards every pending event.
    fn clear(&mut self);

    /// Returns the number of pending events.
    fn len(&self) -> usize;

    /// Returns `true` if no events are pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fixed-capacity FIFO event queue backed by a ring buffer.
///
/// The queue never allocates after construction. When it is full, newly pushed
/// events are dropped and a warning is logged; events already in the queue are
/// never evicted, reordered, or merged.
///
/// `N` is the number of slots; the queue holds at most `N - 1` events.
#[derive(Debug, Clone)]
pub struct RingEventQueue<const N: usize = DEFAULT_EVENT_CAPACITY> {
    events: [Option<Event>; N],
    head: usize,
    tail: usize,
}

impl RingEventQueue<DEFAULT_EVENT_CAPACITY> {
    /// Creates an empty queue with [`DEFAULT_EVENT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_slots()
    }
}

impl<const N: usize> RingEventQueue<N> {
    const VALID_SLOT_COUNT: () = assert!(N >= 2, "RingEventQueue needs at least two slots");

    /// Creates an empty queue with `N` slots.
    pub fn with_slots() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_SLOT_COUNT;

        Self {
            events: std::array::from_fn(|_| None),
            head: 0,
            tail: 0,
        }
    }

    /// Returns the maximum number of events the queue can hold at once.
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Returns `true` if the next push would be dropped.
    pub fn is_full(&self) -> bool {
        (self.tail + 1) % N == self.head
    }
}

impl<const N: usize> Default for RingEventQueue<N> {
    fn default() -> Self {
        Self::with_slots()
    }
}

impl<const N: usize> EventQueue for RingEventQueue<N> {
    fn push(&mut self, event: Event) {
        let new_tail = (self.tail + 1) % N;

        if new_tail == self.head {
            log::warn!(
                "Event queue is full ({} events), dropping event '{}'.",
                N - 1,
                event.id
            );
            return;
        }

        self.events[self.tail] = Some(event);
        self.tail = new_tail;
    }

    fn pop(&mut self) -> Option<Event> {
        if self.head == self.tail {
            return None;
        }

        let event = self.events[self.head].take();
        self.head = (self.head + 1) % N;
        event
    }

    fn clear(&mut self) {
        for slot in self.events.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
    }

    fn len(&self) -> usize {
        (self.tail + N - self.head) % N
    }
}

/// An event queue that ignores everything pushed into it.
///
/// Used as the fallback behind an [`EventLocator`](super::EventLocator) so that
/// callers can publish and poll before a real queue is installed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullEventQueue;

impl EventQueue for NullEventQueue {
    fn push(&mut self, _event: Event) {}

    fn pop(&mut self) -> Option<Event> {
        None
    }

    fn clear(&mut self) {}

    fn len(&self) -> usize {
        0
    }
}
