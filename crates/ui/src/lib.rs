//! Sliding menu components for building desktop applications by using GPUI.
//!
//! The [`SlidingMenu`] container composes a menu panel, a content panel and
//! an optional header panel; the menu slides open under the header/content
//! column via taps and drags on the burger affordance or the programmatic
//! open/close API. Child panels implement the [`Panel`] contract.

mod menu_state;
mod panel;
mod sliding_menu;
mod styled;
pub mod theme;

use gpui::App;

pub use panel::{panel_view, Panel, PanelView};
pub use sliding_menu::{SlidingMenu, ToggleMenu, DEFAULT_MENU_WIDTH};
pub use styled::*;
pub use theme::{ActiveTheme, Theme, ThemeMode};

/// Initialize the components.
///
/// You must initialize the components at your application's entry point.
pub fn init(cx: &mut App) {
    theme::init(cx);
}
