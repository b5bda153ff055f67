//! UI module for RedditPains
//!
//! This module handles all user interface components, rendering, and user
//! interactions. The adaptive shell lives here: the sidebar layout state
//! machine, the resize controller, and the shell composer that switches
//! between the wide and narrow presentations.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod layout_state;
pub mod renderer;
pub mod resize;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use layout_state::{clamp_width, DragSession, LayoutState};
pub use renderer::run_app;
pub use resize::ResizeController;
