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

//! Lightweight frame timing.

use std::time::{Duration, Instant};

/// Measures the time elapsed between consecutive frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: Instant,
    last_delta: Duration,
}

impl FrameClock {
    /// Creates a clock whose first [`tick`](FrameClock::tick) measures from now.
    #[inline]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            last_delta: Duration::ZERO,
        }
    }

    /// Marks the start of a new frame and returns the seconds elapsed since the previous one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.last_delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.last_delta.as_secs_f32()
    }

    /// Returns the duration measured by the most recent tick.
    #[inline]
    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
