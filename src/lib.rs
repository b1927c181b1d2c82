#![warn(missing_docs)]
//! Animated dot grid for the Halftone collective's site.
//!
//! Three sub-grids of glowing pucks — artists, main navigation, and an
//! overflow row — share one interaction machine: hover and click handling,
//! idle ripple and random-highlight animations, mouse-proximity glow, and
//! card expansion. The machine itself is plain data; Bevy systems feed it
//! the cursor, clicks, and the frame clock.

pub mod cards;
pub mod content;
pub mod dot;
pub mod grid;
pub mod interaction;
pub mod math;
pub mod patterns;
pub mod visuals;

use bevy::prelude::*;

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum GameState {
    /// Normal browsing: pointer tracking, idle animations, cards.
    #[default]
    Browsing,
    /// Debug overlay active (Tab to toggle).
    Inspecting,
}
