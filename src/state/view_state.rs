//! View-local display state for a floor-plan view.
//!
//! This module encapsulates the display preferences of one view and the room it
//! currently emphasizes. Setters never fail: unknown theme names are ignored and
//! numeric inputs are clamped into range before they are stored.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::ViewConfig;
use crate::state::observer::{Listeners, SubscriptionId, ViewChange};
use crate::theme::{PaletteHex, ThemeName, ThemePalette, ThemeRegistry};

/// Closed interval `opacity` is kept in.
pub const OPACITY_RANGE: (f32, f32) = (0.0, 1.0);
/// Closed interval `scale` is kept in.
pub const SCALE_RANGE: (f32, f32) = (0.25, 3.0);

/// Opaque identifier of a room. Stored, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serializable copy of a view state, including the resolved palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub highlighted_room: Option<RoomId>,
    pub current_theme: ThemeName,
    pub is_interactive: bool,
    pub show_labels: bool,
    pub opacity: f32,
    pub scale: f32,
    pub palette: PaletteHex,
}

/// Display state of a single floor-plan view.
///
/// Responsibilities:
/// - Tracking the highlighted room
/// - Selecting the active theme and resolving its palette
/// - Holding label/interaction toggles and clamped opacity/scale
/// - Notifying subscribers of every applied change
pub struct ViewState {
    /// Currently emphasized room, if any
    highlighted_room: Option<RoomId>,
    /// Active theme; always a registered theme
    current_theme: ThemeName,
    /// Palette of `current_theme`, refreshed on every theme change
    current_theme_config: &'static ThemePalette,
    /// Whether rooms react to pointer input
    is_interactive: bool,
    /// Whether room labels are drawn
    show_labels: bool,
    /// Plan opacity in `OPACITY_RANGE`
    opacity: f32,
    /// Plan zoom in `SCALE_RANGE`
    scale: f32,
    listeners: Listeners,
}

impl fmt::Debug for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewState")
            .field("highlighted_room", &self.highlighted_room)
            .field("current_theme", &self.current_theme)
            .field("is_interactive", &self.is_interactive)
            .field("show_labels", &self.show_labels)
            .field("opacity", &self.opacity)
            .field("scale", &self.scale)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Creates a view state with the dark theme, labels and interaction on,
    /// full opacity, unit scale and nothing highlighted.
    pub fn new() -> Self {
        let current_theme = ThemeName::default();
        Self {
            highlighted_room: None,
            current_theme,
            current_theme_config: ThemeRegistry::global().palette(current_theme),
            is_interactive: true,
            show_labels: true,
            opacity: 1.0,
            scale: 1.0,
            listeners: Listeners::default(),
        }
    }

    /// Creates a view state and applies `config` through the regular setters,
    /// so unknown theme names are ignored and numbers are clamped.
    pub fn from_config(config: &ViewConfig) -> Self {
        let mut state = Self::new();
        if let Some(theme) = &config.theme {
            state.set_theme(theme);
        }
        state.is_interactive = config.interactive;
        state.show_labels = config.show_labels;
        state.set_opacity(config.opacity);
        state.set_scale(config.scale);
        state
    }

    // ===== Queries =====

    /// Returns the highlighted room, if any.
    pub fn highlighted_room(&self) -> Option<&RoomId> {
        self.highlighted_room.as_ref()
    }

    /// Returns true if `room` is the highlighted room.
    pub fn is_highlighted(&self, room: &RoomId) -> bool {
        self.highlighted_room.as_ref() == Some(room)
    }

    /// Returns the active theme.
    pub fn current_theme(&self) -> ThemeName {
        self.current_theme
    }

    /// Returns the palette of the active theme.
    pub fn current_theme_config(&self) -> &'static ThemePalette {
        self.current_theme_config
    }

    /// Returns the registry themes are resolved from.
    pub fn themes(&self) -> &'static ThemeRegistry {
        ThemeRegistry::global()
    }

    pub fn is_interactive(&self) -> bool {
        self.is_interactive
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns a serializable copy of the current state.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            highlighted_room: self.highlighted_room.clone(),
            current_theme: self.current_theme,
            is_interactive: self.is_interactive,
            show_labels: self.show_labels,
            opacity: self.opacity,
            scale: self.scale,
            palette: self.current_theme_config.to_hex(),
        }
    }

    // ===== Mutations =====

    /// Sets the highlighted room. No check is made that the room exists.
    pub fn set_highlighted_room(&mut self, room: Option<RoomId>) {
        if self.highlighted_room == room {
            return;
        }
        self.highlighted_room = room;
        self.notify(ViewChange::HighlightedRoom(self.highlighted_room.clone()));
    }

    /// Clears the highlighted room.
    pub fn clear_highlight(&mut self) {
        self.set_highlighted_room(None);
    }

    /// Switches to the theme registered under `name`.
    ///
    /// Unknown names leave the current theme untouched and report nothing to
    /// the caller.
    pub fn set_theme(&mut self, name: &str) {
        match ThemeName::from_key(name) {
            Some(theme) => self.set_theme_name(theme),
            None => debug!(theme = name, "ignoring unknown theme"),
        }
    }

    /// Switches to `theme` and refreshes the derived palette.
    pub fn set_theme_name(&mut self, theme: ThemeName) {
        if self.current_theme == theme {
            return;
        }
        self.current_theme = theme;
        self.current_theme_config = ThemeRegistry::global().palette(theme);
        self.notify(ViewChange::Theme(theme));
    }

    /// Flips label visibility.
    pub fn toggle_labels(&mut self) {
        self.show_labels = !self.show_labels;
        self.notify(ViewChange::Labels(self.show_labels));
    }

    /// Flips whether rooms react to pointer input.
    pub fn toggle_interaction(&mut self) {
        self.is_interactive = !self.is_interactive;
        self.notify(ViewChange::Interaction(self.is_interactive));
    }

    /// Sets the opacity, clamped to `OPACITY_RANGE`.
    pub fn set_opacity(&mut self, value: f32) {
        let opacity = clamp_to(value, OPACITY_RANGE, "opacity");
        if opacity == self.opacity {
            return;
        }
        self.opacity = opacity;
        self.notify(ViewChange::Opacity(opacity));
    }

    /// Sets the scale, clamped to `SCALE_RANGE`.
    pub fn set_scale(&mut self, value: f32) {
        let scale = clamp_to(value, SCALE_RANGE, "scale");
        if scale == self.scale {
            return;
        }
        self.scale = scale;
        self.notify(ViewChange::Scale(scale));
    }

    /// Restores the initial state, notifying for each field that changes.
    pub fn reset(&mut self) {
        let initial = Self::new();
        self.set_highlighted_room(None);
        self.set_theme_name(initial.current_theme);
        if self.is_interactive != initial.is_interactive {
            self.toggle_interaction();
        }
        if self.show_labels != initial.show_labels {
            self.toggle_labels();
        }
        self.set_opacity(initial.opacity);
        self.set_scale(initial.scale);
    }

    // ===== Subscriptions =====

    /// Registers a listener called after every applied change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ViewChange) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Removes a listener. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    fn notify(&mut self, change: ViewChange) {
        trace!(?change, "view state changed");
        self.listeners.emit(&change);
    }
}

/// Clamps `value` into `(min, max)`. NaN maps to the lower bound.
fn clamp_to(value: f32, (min, max): (f32, f32), field: &str) -> f32 {
    let clamped = if value.is_nan() { min } else { value.clamp(min, max) };
    if clamped != value {
        debug!(field, value, clamped, "coerced out-of-range value");
    }
    clamped
}
