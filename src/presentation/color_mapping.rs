//! Color mapping for rooms based on view state.
//!
//! This module provides functions for:
//! - Choosing the fill, stroke and text colors of a room
//! - Applying the active palette to egui visuals
//!
//! Color assignment depends only on the view state and the hover flag passed in.

use egui::Color32;

use crate::state::{RoomId, ViewState};
use crate::theme::{scale_alpha, ThemePalette};

/// Resolved colors for drawing one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomColors {
    pub fill: Color32,
    pub stroke: Color32,
    pub text: Color32,
}

/// Returns the colors a room should be drawn with.
///
/// # Arguments
/// * `state` - The view state
/// * `room` - The room being drawn
/// * `hovered` - Whether the pointer is over the room
///
/// # Returns
/// Highlight fill for the highlighted room, hover fill for a hovered room in an
/// interactive view, the plain fill otherwise. All colors are faded by the view
/// opacity; text is transparent while labels are hidden.
pub fn room_colors(state: &ViewState, room: &RoomId, hovered: bool) -> RoomColors {
    let palette = state.current_theme_config();
    let fill = if state.is_highlighted(room) {
        palette.highlight
    } else if hovered && state.is_interactive() {
        palette.hover
    } else {
        palette.fill
    };

    let opacity = state.opacity();
    RoomColors {
        fill: scale_alpha(fill, opacity),
        stroke: scale_alpha(palette.stroke, opacity),
        text: if state.show_labels() {
            scale_alpha(palette.text, opacity)
        } else {
            Color32::TRANSPARENT
        },
    }
}

/// Applies a palette's colors to egui visuals
pub fn apply_palette(palette: &ThemePalette, visuals: &mut egui::Visuals) {
    visuals.panel_fill = palette.background;
    visuals.extreme_bg_color = palette.background;
    visuals.faint_bg_color = palette.fill;

    visuals.override_text_color = Some(palette.text);

    visuals.selection.bg_fill = palette.highlight;
    visuals.selection.stroke.color = palette.text;

    visuals.widgets.noninteractive.bg_fill = palette.fill;
    visuals.widgets.inactive.bg_fill = palette.fill;
    visuals.widgets.hovered.bg_fill = palette.hover;
    visuals.widgets.active.bg_fill = palette.highlight;
}
