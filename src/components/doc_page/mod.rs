//! Documentation page shell: navigation, theme toggle and scroll tracking.

mod component;
mod state;

pub use component::{DocPage, NavItem, Section};
pub use state::{PageController, SCROLL_THRESHOLD, current_section, link_for_section};
