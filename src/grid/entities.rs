//! Components and resources describing the spawned grid.

use bevy::prelude::*;

use crate::dot::{Dot, DotId};
use crate::math::{self, GridPos};

/// Marker on each spawned puck, carrying its identity and unified cell.
#[derive(Component, Clone)]
pub struct DotMarker {
    /// Stable dot identity.
    pub id: DotId,
    /// Cell in the unified row space.
    pub cell: GridPos,
}

/// The dot data model for the three bands, in unified row space.
#[derive(Resource)]
pub struct Dots {
    /// Artist band (top rows).
    pub artist: Vec<Vec<Dot>>,
    /// Main content band (middle rows).
    pub main: Vec<Vec<Dot>>,
    /// Overflow band (bottom rows).
    pub overflow: Vec<Vec<Dot>>,
}

impl Dots {
    /// Row-major iteration over every dot of every band.
    pub fn iter(&self) -> impl Iterator<Item = &Dot> {
        self.artist
            .iter()
            .chain(&self.main)
            .chain(&self.overflow)
            .flatten()
    }

    /// Dot occupying a unified cell.
    pub fn dot_at(&self, cell: GridPos) -> Option<&Dot> {
        self.iter().find(|d| d.grid_position == cell)
    }

    /// Dot with the given id.
    pub fn find(&self, id: &DotId) -> Option<&Dot> {
        self.iter().find(|d| &d.id == id)
    }
}

/// World-space layout of the unified grid, on the `y = 0` plane.
///
/// `Vec2` here is the ground plane: `x` maps to world X (columns), `y` to
/// world Z (rows).
#[derive(Resource, Clone, Debug, Reflect)]
pub struct GridLayout {
    /// Cell edge length.
    pub cell_size: f32,
    /// Gap between cells.
    pub gap: f32,
    /// Total rows across all bands.
    pub rows: u32,
    /// Columns.
    pub cols: u32,
    /// Rows covered by the idle animations (artist + main bands).
    pub idle_rows: u32,
    /// Ground position of cell `(0, 0)`'s center.
    pub origin: Vec2,
}

impl GridLayout {
    /// Center-to-center distance between adjacent cells.
    pub fn pitch(&self) -> f32 {
        self.cell_size + self.gap
    }

    /// Ground position of a cell's center.
    pub fn world_of(&self, cell: GridPos) -> Vec2 {
        self.origin + math::grid_to_world(cell, self.cell_size, self.gap)
    }

    /// Unified cell containing a ground point, `None` outside the grid.
    ///
    /// In-bounds points go through [`math::virtual_cell`], the one shared
    /// pointer-to-cell mapping.
    pub fn cell_at(&self, point: Vec2) -> Option<GridPos> {
        let rect_min = self.origin - Vec2::splat(self.pitch() / 2.0);
        let rect_size = Vec2::new(self.cols as f32, self.rows as f32) * self.pitch();
        let inside = point.x >= rect_min.x
            && point.y >= rect_min.y
            && point.x < rect_min.x + rect_size.x
            && point.y < rect_min.y + rect_size.y;
        inside.then(|| math::virtual_cell(point, rect_min, rect_size, self.cols, self.rows, 0))
    }

    /// True when the point lands on the puck itself rather than the gap
    /// around it.
    pub fn on_dot(&self, point: Vec2, cell: GridPos) -> bool {
        self.world_of(cell).distance(point) <= self.cell_size / 2.0
    }

    /// Cursor distance to a cell center, in cell-pitch units.
    pub fn cell_distance(&self, a: GridPos, b: GridPos) -> f32 {
        let d = self.world_of(a) - self.world_of(b);
        d.length() / self.pitch()
    }
}
