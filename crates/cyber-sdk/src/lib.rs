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

//! The public-facing SDK for Cyber Engine applications.
//!
//! An application implements [`Application`] and hands itself to
//! [`Engine::run`], which opens the window, owns the event queue for the
//! lifetime of that window, and drives the frame loop:
//!
//! 1. input callbacks push key events on the current queue,
//! 2. each redraw drains the queue and dispatches events in FIFO order,
//! 3. then [`Application::update`] runs with the frame's delta time.

pub mod config;

use anyhow::Result;
use cyber_core::event::{Event, EventLocator, RingEventQueue, SharedEventQueue};
use cyber_core::utils::timer::FrameClock;
use cyber_infra::platform::input::translate_winit_input;
use cyber_infra::{InputState, RawInput, WinitWindow};
use std::cell::RefCell;
use std::rc::Rc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::WindowId;

pub use config::{ConfigError, EngineConfig};
pub use cyber_infra::WindowConfig;

pub mod prelude {
    //! Common imports for application code.
    pub use crate::config::EngineConfig;
    pub use crate::{Application, Engine, EngineContext};
    pub use cyber_core::event::{Event, EventValue};
    pub use cyber_core::math::Vec2;
}

/// What an application can reach while it runs.
pub struct EngineContext<'a> {
    /// The event channel. Applications may publish their own events on it;
    /// they are dispatched later in the same drain or on the next frame.
    pub events: &'a EventLocator,
    /// Keyboard and cursor state of the window.
    pub input: &'a InputState,
    /// The inner size of the window in physical pixels.
    pub window_size: (u32, u32),
}

/// The user-side half of the frame loop.
pub trait Application: Sized + 'static {
    /// Called once, after the window and the event queue exist.
    fn new(context: &EngineContext) -> Self;

    /// Called for every event drained from the queue, oldest first.
    fn on_event(&mut self, context: &EngineContext, event: &Event);

    /// Called every frame after all pending events were dispatched.
    fn update(&mut self, context: &EngineContext, dt_secs: f32);
}

/// Drains every pending event into `app`, then runs its update.
fn run_frame<A: Application>(app: &mut A, context: &EngineContext, dt_secs: f32) {
    for event in context.events.drain() {
        log::debug!("Dispatching event: {event}");
        app.on_event(context, &event);
    }
    app.update(context, dt_secs);
}

/// The internal state of the running engine, managed by the winit event loop.
struct EngineState<A: Application> {
    config: EngineConfig,
    app: Option<A>,
    window: Option<WinitWindow>,
    queue: Option<SharedEventQueue>,
    locator: EventLocator,
    input: InputState,
    clock: FrameClock,
    startup_error: Option<anyhow::Error>,
}

impl<A: Application> EngineState<A> {
    fn new(config: EngineConfig) -> Self {
        let input = InputState::new(config.window.height);
        Self {
            config,
            app: None,
            window: None,
            queue: None,
            locator: EventLocator::new(),
            input,
            clock: FrameClock::new(),
            startup_error: None,
        }
    }

    fn window_size(&self) -> (u32, u32) {
        self.window
            .as_ref()
            .map(WinitWindow::inner_size)
            .unwrap_or((self.config.window.width, self.config.window.height))
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = WinitWindow::open(event_loop, &self.config.window)?;

        let (_, height) = window.inner_size();
        self.input.set_window_height(height);

        // The queue lives exactly as long as the window.
        let queue: SharedEventQueue = Rc::new(RefCell::new(RingEventQueue::new()));
        self.locator.provide(Some(Rc::clone(&queue)));
        self.queue = Some(queue);
        self.window = Some(window);

        let context = EngineContext {
            events: &self.locator,
            input: &self.input,
            window_size: self.window_size(),
        };
        self.app = Some(A::new(&context));
        self.clock = FrameClock::new();
        Ok(())
    }

    fn frame(&mut self) {
        let window_size = self.window_size();
        let Some(app) = self.app.as_mut() else {
            return;
        };

        let dt = self.clock.tick();
        let context = EngineContext {
            events: &self.locator,
            input: &self.input,
            window_size,
        };
        run_frame(app, &context, dt);
    }
}

impl<A: Application> Drop for EngineState<A> {
    fn drop(&mut self) {
        log::info!("EngineState is being dropped. Performing controlled shutdown...");
        self.locator.initialize();
        self.queue = None;
        log::info!("Engine systems shutdown complete.");
    }
}

impl<A: Application> ApplicationHandler for EngineState<A> {
    /// Called when the event loop is ready to start processing events.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Application resumed. Initializing window and event queue...");
        if let Err(e) = self.start(event_loop) {
            log::error!("Failed to start the engine: {e}");
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if self.window.as_ref().map(WinitWindow::id) != Some(id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Shutdown requested, exiting event loop...");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.input.set_window_height(size.height);
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => match translate_winit_input(&event) {
                Some(RawInput::Key {
                    key: KeyCode::Escape,
                    pressed: true,
                }) if self.config.exit_on_escape => {
                    log::info!("Escape pressed, exiting event loop...");
                    event_loop.exit();
                }
                Some(raw) => self.input.apply(raw, &self.locator),
                None => {}
            },
        }
    }

    /// Requests a redraw for continuous rendering.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// The public entry point for the engine.
pub struct Engine;

impl Engine {
    /// Opens a window and runs `A` until the window is closed.
    ///
    /// Blocks the current thread until the application exits.
    pub fn run<A: Application>(config: EngineConfig) -> Result<()> {
        log::info!("Cyber Engine SDK: Starting...");
        let event_loop = EventLoop::new()?;

        let mut state = EngineState::<A>::new(config);
        event_loop.run_app(&mut state)?;

        match state.startup_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
