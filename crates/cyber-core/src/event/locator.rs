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

//! A swappable handle to "the current event queue".
//!
//! The [`EventLocator`] follows the **Service Locator** pattern with a
//! **Null Object** fallback: it always points at a usable queue, so call sites
//! never have to check whether an event channel exists yet. It is an explicit
//! context object owned by the application loop and lent to whichever
//! component needs to publish or consume events.

use super::queue::{EventQueue, NullEventQueue};
use super::record::Event;
use std::cell::RefCell;
use std::rc::Rc;

/// A shared, single-threaded handle to an event queue implementation.
pub type SharedEventQueue = Rc<RefCell<dyn EventQueue>>;

/// Which kind of queue an [`EventLocator`] currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorState {
    /// The locator points at its internal [`NullEventQueue`].
    Unbound,
    /// The locator points at a queue supplied through [`EventLocator::provide`].
    Bound,
}

/// Hands out the active event queue, defaulting to a no-op queue.
///
/// # Example
///
/// ```rust
/// use cyber_core::event::{Event, EventLocator, RingEventQueue, SharedEventQueue};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let mut locator = EventLocator::new();
/// locator.push(Event::bool("Up", true)); // silently ignored
///
/// let queue: SharedEventQueue = Rc::new(RefCell::new(RingEventQueue::new()));
/// locator.provide(Some(queue));
/// locator.push(Event::bool("Up", true));
/// assert_eq!(locator.pop(), Some(Event::bool("Up", true)));
/// ```
pub struct EventLocator {
    service: SharedEventQueue,
    null_queue: SharedEventQueue,
}

impl EventLocator {
    /// Creates a locator pointing at its null queue.
    pub fn new() -> Self {
        let null_queue: SharedEventQueue = Rc::new(RefCell::new(NullEventQueue));
        Self {
            service: Rc::clone(&null_queue),
            null_queue,
        }
    }

    /// Resets the active queue to the null queue.
    ///
    /// Call this at shutdown so that nothing keeps publishing into a queue whose
    /// owner is gone.
    pub fn initialize(&mut self) {
        self.service = Rc::clone(&self.null_queue);
        log::debug!("EventLocator reset to the null event queue.");
    }

    /// Installs `queue` as the active queue, or reverts to the null queue on `None`.
    pub fn provide(&mut self, queue: Option<SharedEventQueue>) {
        match queue {
            Some(queue) => {
                self.service = queue;
                log::debug!("EventLocator bound to a new event queue.");
            }
            None => self.initialize(),
        }
    }

    /// Returns a handle to the active queue.
    pub fn current(&self) -> SharedEventQueue {
        Rc::clone(&self.service)
    }

    /// Reports whether a queue has been provided.
    pub fn state(&self) -> LocatorState {
        if Rc::ptr_eq(&self.service, &self.null_queue) {
            LocatorState::Unbound
        } else {
            LocatorState::Bound
        }
    }

    /// Pushes an event into the active queue.
    pub fn push(&self, event: Event) {
        self.service.borrow_mut().push(event);
    }

    /// Pops the oldest event from the active queue.
    pub fn pop(&self) -> Option<Event> {
        self.service.borrow_mut().pop()
    }

    /// Clears the active queue.
    pub fn clear(&self) {
        self.service.borrow_mut().clear();
    }

    /// Returns an iterator that pops events from the active queue until it is empty.
    ///
    /// The queue is only borrowed while each event is being popped, so the
    /// loop body may push new events; they are yielded by the same drain.
    pub fn drain(&self) -> impl Iterator<Item = Event> + '_ {
        std::iter::from_fn(move || self.pop())
    }
}

impl Default for EventLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLocator")
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RingEventQueue;

    fn ring_queue() -> SharedEventQueue {
        Rc::new(RefCell::new(RingEventQueue::new()))
    }

    #[test]
    fn test_new_locator_is_unbound_and_inert() {
        let locator = EventLocator::new();
        assert_eq!(locator.state(), LocatorState::Unbound);

        locator.push(Event::bool("A", true));
        assert_eq!(locator.pop(), None);
        locator.clear();
        assert!(locator.current().borrow().is_empty());
    }

    #[test]
    fn test_provide_binds_the_given_queue() {
        let mut locator = EventLocator::new();
        let queue = ring_queue();

        locator.provide(Some(Rc::clone(&queue)));

        assert_eq!(locator.state(), LocatorState::Bound);
        assert!(Rc::ptr_eq(&locator.current(), &queue));
    }

    #[test]
    fn test_provide_none_reverts_to_null_queue() {
        let mut locator = EventLocator::new();
        let queue = ring_queue();
        locator.provide(Some(Rc::clone(&queue)));

        locator.provide(None);

        assert_eq!(locator.state(), LocatorState::Unbound);
        assert!(!Rc::ptr_eq(&locator.current(), &queue));
        locator.push(Event::bool("A", true));
        assert!(queue.borrow().is_empty());
    }

    #[test]
    fn test_initialize_unbinds() {
        let mut locator = EventLocator::new();
        locator.provide(Some(ring_queue()));
        locator.initialize();
        assert_eq!(locator.state(), LocatorState::Unbound);
    }

    #[test]
    fn test_forwarding_reaches_provided_queue() {
        let mut locator = EventLocator::new();
        let queue = ring_queue();
        locator.provide(Some(Rc::clone(&queue)));

        locator.push(Event::bool("Up", true));
        locator.push(Event::bool("Up", false));
        assert_eq!(queue.borrow().len(), 2);

        assert_eq!(locator.pop(), Some(Event::bool("Up", true)));
        locator.clear();
        assert_eq!(locator.pop(), None);
    }

    #[test]
    fn test_drain_pops_until_empty() {
        let mut locator = EventLocator::new();
        locator.provide(Some(ring_queue()));
        locator.push(Event::int("N", 1));
        locator.push(Event::int("N", 2));

        let drained: Vec<Event> = locator.drain().collect();

        assert_eq!(drained, vec![Event::int("N", 1), Event::int("N", 2)]);
        assert_eq!(locator.pop(), None);
    }

    #[test]
    fn test_drain_yields_events_pushed_while_draining() {
        let mut locator = EventLocator::new();
        locator.provide(Some(ring_queue()));
        locator.push(Event::int("N", 1));

        let mut seen = Vec::new();
        for event in locator.drain() {
            if event.as_int() == Some(1) {
                locator.push(Event::int("N", 2));
            }
            seen.push(event);
        }

        assert_eq!(seen, vec![Event::int("N", 1), Event::int("N", 2)]);
    }
}
