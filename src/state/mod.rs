//! State management for the room map view.
//!
//! This module contains state-only logic (no rendering concerns):
//! - View state (highlighted room, theme, labels, interaction, opacity, scale)
//! - Change notification for consumers that derive values from the view state

mod observer;
mod view_state;

pub use observer::{SubscriptionId, ViewChange};
pub use view_state::{RoomId, ViewSnapshot, ViewState, OPACITY_RANGE, SCALE_RANGE};
