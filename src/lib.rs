pub mod theme;
pub mod state;
pub mod config;
pub mod presentation;

// Export theme support
pub use theme::{
    Theme, ThemeName, ThemePalette, ThemeRegistry, PaletteHex, UnknownTheme,
    hex_to_color32, color32_to_hex, with_alpha, scale_alpha
};

// Export view state
pub use state::{
    ViewState, ViewSnapshot, ViewChange, RoomId, SubscriptionId,
    OPACITY_RANGE, SCALE_RANGE
};

// Export configuration
pub use config::ViewConfig;

// Export presentation helpers
pub use presentation::{RoomColors, room_colors, apply_palette};
