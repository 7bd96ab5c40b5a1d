//! Orrery - animated solar system viewer
//!
//! A library crate providing the orbital model and its Bevy plugins
//! for testing and integration purposes.

pub mod camera;
pub mod orbit;
pub mod render;
pub mod time;
pub mod types;
pub mod ui;
pub mod viewport;
