//! Platform abstraction layer
//!
//! Seams to the outside world:
//! - Window: open/closed, clock, held buttons, presenting frames
//! - Input: press-edge detection over held-button snapshots
//! - Assets: texture handles
//!
//! `headless` implements the window for runs without a display.

pub mod assets;
pub mod headless;
pub mod input;

pub use assets::{AssetError, AssetLoader, HeadlessAssets, TextureHandle, TextureSlot, Textures};
pub use headless::{Autopilot, HeadlessWindow};
pub use input::{Button, InputEdges, InputSnapshot};

use std::fmt;

use crate::renderer::Frame;
use crate::settings::SettingsError;

/// The windowing collaborator
pub trait Window {
    /// False once the user closed the window
    fn is_open(&self) -> bool;

    /// Monotonic clock in seconds since an arbitrary epoch
    fn elapsed_time_seconds(&self) -> f64;

    /// Whether `button` is held right now
    fn is_pressed(&self, button: Button) -> bool;

    /// Show the frame that was just drawn and pump window events
    fn present(&mut self, frame: &Frame);

    fn is_primary_action_pressed(&self) -> bool {
        self.is_pressed(Button::Primary)
    }

    fn is_pause_pressed(&self) -> bool {
        self.is_pressed(Button::Pause)
    }

    fn is_restart_pressed(&self) -> bool {
        self.is_pressed(Button::Restart)
    }

    /// Held state of every game button
    fn input(&self) -> InputSnapshot {
        InputSnapshot {
            primary: self.is_primary_action_pressed(),
            pause: self.is_pause_pressed(),
            restart: self.is_restart_pressed(),
        }
    }
}

/// Fatal failures before the game loop starts
#[derive(Debug)]
pub enum BootError {
    Settings(SettingsError),
    Window(String),
    Asset(AssetError),
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootError::Settings(e) => write!(f, "invalid settings: {}", e),
            BootError::Window(reason) => write!(f, "failed to create window: {}", reason),
            BootError::Asset(e) => write!(f, "failed to load textures: {}", e),
        }
    }
}

impl std::error::Error for BootError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BootError::Settings(e) => Some(e),
            BootError::Asset(e) => Some(e),
            BootError::Window(_) => None,
        }
    }
}

impl From<SettingsError> for BootError {
    fn from(e: SettingsError) -> Self {
        BootError::Settings(e)
    }
}

impl From<AssetError> for BootError {
    fn from(e: AssetError) -> Self {
        BootError::Asset(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_boot_error_chains_source() {
        let err = BootError::from(AssetError::NotFound(PathBuf::from("assets/base.png")));
        assert!(err.to_string().contains("assets/base.png"));
        assert!(err.source().is_some());

        let err = BootError::Window("no display".to_string());
        assert!(err.source().is_none());
    }
}
