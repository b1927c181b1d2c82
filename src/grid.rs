//! The dot-grid composite: three sub-grids spawned as puck entities.
//!
//! Builds the artist, main, and overflow dot models with the factories in
//! [`crate::dot`], lays all three out in one unified world grid, and spawns
//! a cylinder puck per cell. Layout and lookup resources produced here are
//! what the interaction and visual systems consume.

mod entities;
mod systems;

pub use entities::{DotMarker, Dots, GridLayout};
pub use systems::spawn_grids;

use bevy::prelude::*;

/// Nested configuration for the grid subsystem.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct GridConfig {
    /// Cell layout settings.
    pub layout: LayoutSettings,
    /// Puck geometry settings.
    pub puck: PuckSettings,
}

/// Cell sizes and band row counts.
#[derive(Clone, Debug, Reflect)]
pub struct LayoutSettings {
    /// Cell edge length in world units.
    pub cell_size: f32,
    /// Gap between adjacent cells.
    pub gap: f32,
    /// Columns, shared by all three bands.
    pub cols: u32,
    /// Rows in the artist band (top).
    pub artist_rows: u32,
    /// Rows in the main content band (middle).
    pub main_rows: u32,
    /// Rows in the overflow band (bottom).
    pub overflow_rows: u32,
}

/// Puck mesh proportions.
#[derive(Clone, Debug, Reflect)]
pub struct PuckSettings {
    /// Puck radius as a fraction of the cell edge.
    pub radius_factor: f32,
    /// Puck height above the grid plane.
    pub height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            layout: LayoutSettings {
                cell_size: 2.0,
                gap: 0.6,
                cols: 5,
                artist_rows: 2,
                main_rows: 3,
                overflow_rows: 2,
            },
            puck: PuckSettings {
                radius_factor: 0.38,
                height: 0.35,
            },
        }
    }
}

/// Grid plugin: builds the dot models and spawns the puck entities.
pub struct GridPlugin(pub GridConfig);

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<GridConfig>()
            .register_type::<GridLayout>()
            .insert_resource(self.0.clone())
            .add_systems(Startup, systems::spawn_grids);
    }
}
