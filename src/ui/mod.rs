//! Terminal user interface.
//!
//! This module handles all user interface components, rendering, and user
//! interactions.

pub mod app_component;
pub mod components;
pub mod core;
pub mod renderer;
pub mod screens;
pub mod view_state;

pub use app_component::{AppComponent, AppState};
pub use renderer::{run_app, run_with_store};
