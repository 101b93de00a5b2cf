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

//! A fixed-size `winit` window driven by [`WindowConfig`].

use serde::Deserialize;
use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    error::OsError,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId},
};

/// Window settings, deserialized from the `window` section of the engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// The window title.
    pub title: String,
    /// The inner width of the window, in logical pixels.
    pub width: u32,
    /// The inner height of the window, in logical pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Cyber Engine".to_string(),
            width: 800,
            height: 640,
        }
    }
}

impl WindowConfig {
    /// Builds the `winit` attributes for this configuration.
    ///
    /// The window cannot be resized: the input layer flips cursor coordinates
    /// against the configured height.
    pub fn attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_resizable(false)
            .with_visible(true)
    }
}

/// The engine's window. Cloning shares the same `winit` window.
#[derive(Debug, Clone)]
pub struct WinitWindow {
    inner: Arc<Window>,
}

impl WinitWindow {
    /// Opens a window on `event_loop` as described by `config`.
    ///
    /// # Errors
    /// Returns an `OsError` if the platform refuses to create the window.
    pub fn open(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, OsError> {
        log::info!(
            "Opening '{}' ({}x{}).",
            config.title,
            config.width,
            config.height
        );

        let window = event_loop.create_window(config.attributes())?;
        log::info!("Window {:?} is open.", window.id());

        Ok(Self {
            inner: Arc::new(window),
        })
    }

    /// Returns the physical dimensions (width, height) of the window's inner area.
    pub fn inner_size(&self) -> (u32, u32) {
        let size = self.inner.inner_size();
        (size.width, size.height)
    }

    /// Requests that the window be redrawn.
    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    /// Returns the `winit` identifier of the window.
    pub fn id(&self) -> WindowId {
        self.inner.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;

    #[test]
    fn test_attributes_follow_config() {
        let config = WindowConfig {
            title: "voxels".to_string(),
            width: 1024,
            height: 768,
        };

        let attributes = config.attributes();

        assert_eq!(attributes.title, "voxels");
        assert_eq!(
            attributes.inner_size,
            Some(Size::Logical(LogicalSize::new(1024.0, 768.0)))
        );
        assert!(!attributes.resizable);
        assert!(attributes.visible);
    }

    #[test]
    fn test_default_config() {
        let attributes = WindowConfig::default().attributes();
        assert_eq!(attributes.title, "Cyber Engine");
        assert_eq!(
            attributes.inner_size,
            Some(Size::Logical(LogicalSize::new(800.0, 640.0)))
        );
    }
}
