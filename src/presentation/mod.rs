//! Presentation layer for the room map view.
//!
//! This module resolves view state into concrete colors for a renderer.
//! It draws nothing itself.

pub mod color_mapping;

pub use color_mapping::{apply_palette, room_colors, RoomColors};
