//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Number of commands kept on the undo stack unless the config overrides it
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Sprite ids start above this value; new ids are `max(existing, floor) + 1`
pub const SPRITE_ID_FLOOR: u32 = 1000;

/// Lowest value of each RGB channel for randomly assigned sprite colors.
/// Keeps marker colors bright enough to read over a dark atlas.
pub const SPRITE_COLOR_CHANNEL_MIN: u8 = 100;

/// Maximum number of recently opened sprite files to remember in config
pub const MAX_RECENT_FILES: usize = 5;

/// Label shown when the undo stack is empty
pub const NOTHING_TO_UNDO: &str = "Nothing to undo";

/// Label shown when the redo stack is empty
pub const NOTHING_TO_REDO: &str = "Nothing to redo";
