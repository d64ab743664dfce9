//! Components - Reusable Widget State
//!
//! Headless components: they hold state and callbacks, never render.

pub mod composite;
