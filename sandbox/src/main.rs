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

use anyhow::Result;
use cyber_sdk::prelude::*;

const CONFIG_PATH: &str = "sandbox.json";
const SPEED: f32 = 2.0;
const REPORT_INTERVAL_SECS: f32 = 1.0;

/// Moves a point around with the arrow keys and reports where it is.
struct SandboxApp {
    position: Vec2,
    direction: Vec2,
    held: [bool; 4],
    since_report: f32,
}

impl SandboxApp {
    fn steer(&mut self, slot: usize, pressed: bool) {
        self.held[slot] = pressed;
        let [up, down, left, right] = self.held;
        let axis = |pos: bool, neg: bool| (pos as i32 - neg as i32) as f32;
        self.direction = Vec2::new(axis(right, left), axis(up, down)).normalize_or_zero();
    }
}

impl Application for SandboxApp {
    fn new(context: &EngineContext) -> Self {
        log::info!(
            "Sandbox started in a {}x{} window. Arrow keys move, Space reports the cursor.",
            context.window_size.0,
            context.window_size.1
        );
        Self {
            position: Vec2::ZERO,
            direction: Vec2::ZERO,
            held: [false; 4],
            since_report: 0.0,
        }
    }

    fn on_event(&mut self, context: &EngineContext, event: &Event) {
        let Some(pressed) = event.as_bool() else {
            log::info!("Sandbox event: {event}");
            return;
        };

        match event.id.as_str() {
            "Up" => self.steer(0, pressed),
            "Down" => self.steer(1, pressed),
            "Left" => self.steer(2, pressed),
            "Right" => self.steer(3, pressed),
            " " if pressed => {
                context
                    .events
                    .push(Event::vec2("Cursor", context.input.cursor_position()));
            }
            _ => log::debug!("Unhandled key event: {event}"),
        }
    }

    fn update(&mut self, _context: &EngineContext, dt_secs: f32) {
        self.position = self.position + self.direction * (SPEED * dt_secs);

        self.since_report += dt_secs;
        if self.since_report >= REPORT_INTERVAL_SECS {
            self.since_report = 0.0;
            log::info!(
                "Position: ({:.2}, {:.2})",
                self.position.x,
                self.position.y
            );
        }
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    let loaded = EngineConfig::load_optional(CONFIG_PATH)?;
    let found = loaded.is_some();
    let config = loaded.unwrap_or_default();

    Builder::from_env(Env::default().default_filter_or(config.log_filter.as_str())).init();

    if !found {
        log::info!("No configuration found at '{CONFIG_PATH}', using defaults.");
    }

    Engine::run::<SandboxApp>(config)?;
    Ok(())
}
