//! Reusable UI components
//!
//! - `keybindings` - Key-to-action registry, nav bar items, help sections
//! - `help_overlay` - Floating help window

pub mod help_overlay;
pub mod keybindings;
