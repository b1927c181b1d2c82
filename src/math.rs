//! Pure spatial helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec2` / `Vec3` inputs, making them straightforward to
//! unit-test. Vector algebra itself (add, scale, distance, dot product)
//! comes from `bevy::math`; this module only adds the grid-specific pieces.

use bevy::prelude::{Vec2, Vec3};

/// Integer grid coordinates, unique within one sub-grid namespace.
///
/// Rows grow downward on screen, columns to the right. Sub-grids share a
/// single unified row space via their row offsets, so a `GridPos` taken from
/// the unified space identifies exactly one cell across all three bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Row index (unified space: artist 0-1, main 2-4, overflow 5+).
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl GridPos {
    /// Shorthand constructor.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// World-space position of a cell center.
///
/// Cells are laid out on a fixed pitch of `cell_size + gap`; the origin cell
/// `(0,0)` sits at the world origin. Inverse of [`world_to_grid`] for every
/// canonical cell-aligned point.
pub fn grid_to_world(pos: GridPos, cell_size: f32, gap: f32) -> Vec2 {
    let pitch = cell_size + gap;
    Vec2::new(pos.col as f32 * pitch, pos.row as f32 * pitch)
}

/// Grid cell containing a world-space point.
///
/// Uses `floor`, so the round-trip with [`grid_to_world`] holds exactly for
/// cell-aligned points but a point inside a cell maps to that cell's
/// top-left coordinate.
pub fn world_to_grid(point: Vec2, cell_size: f32, gap: f32) -> GridPos {
    let pitch = cell_size + gap;
    GridPos {
        row: (point.y / pitch).floor() as i32,
        col: (point.x / pitch).floor() as i32,
    }
}

/// Linear interpolation between two scalars.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Component-wise equality within `epsilon`.
pub fn approx_eq(a: Vec2, b: Vec2, epsilon: f32) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon
}

/// Cubic ease-out curve: fast start, gentle deceleration.
///
/// `t` should be in `[0, 1]`. Returns `1 - (1 - t)^3`.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Mouse-proximity glow intensity for a dot.
///
/// Returns a value in `[0, 1]`:
/// - At `distance = 0` (cursor on the dot) the glow is strongest (`1.0`).
/// - At `distance >= radius` the glow is fully off (`0.0`).
///
/// Distances are measured in cell units so the falloff is resolution
/// independent.
pub fn proximity_glow(distance: f32, radius: f32) -> f32 {
    let t = (distance / radius).clamp(0.0, 1.0);
    1.0 - t
}

/// Virtual grid cell under a pointer, in the unified row space.
///
/// Divides the point's offset inside the band rectangle by the per-cell
/// width/height, clamps to `[0, cols-1]` / `[0, rows-1]`, then applies the
/// band's row offset. This is what lets three independently laid-out
/// sub-grids share one mouse-cell coordinate.
pub fn virtual_cell(
    point: Vec2,
    rect_min: Vec2,
    rect_size: Vec2,
    cols: u32,
    rows: u32,
    row_offset: i32,
) -> GridPos {
    let cell_w = rect_size.x / cols as f32;
    let cell_h = rect_size.y / rows as f32;
    let col = (((point.x - rect_min.x) / cell_w).floor() as i32).clamp(0, cols as i32 - 1);
    let row = (((point.y - rect_min.y) / cell_h).floor() as i32).clamp(0, rows as i32 - 1);
    GridPos {
        row: row + row_offset,
        col,
    }
}

/// Intersection of a cursor ray with the `y = 0` grid plane.
///
/// Returns the XZ hit point, or `None` when the ray is parallel to the
/// plane or points away from it.
pub fn ray_ground_hit(origin: Vec3, direction: Vec3) -> Option<Vec2> {
    if direction.y.abs() < 1e-6 {
        return None;
    }
    let t = -origin.y / direction.y;
    if t < 0.0 {
        return None;
    }
    let hit = origin + direction * t;
    Some(Vec2::new(hit.x, hit.z))
}
