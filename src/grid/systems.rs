//! Startup spawning of the three sub-grids.

use bevy::prelude::*;

use super::GridConfig;
use super::entities::{DotMarker, Dots, GridLayout};
use crate::content;
use crate::dot::{self, GridOpts};

/// Builds the three dot models and spawns one puck entity per cell.
///
/// The grid is centered on the world origin; rows grow toward +Z, columns
/// toward +X.
pub fn spawn_grids(
    mut commands: Commands,
    cfg: Res<GridConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let l = &cfg.layout;
    let opts = GridOpts {
        cell_size: l.cell_size,
        gap: l.gap,
        total_cols: l.cols,
        row_offset: 0,
        overflow: false,
    };

    let tiles = content::artist_tiles();
    let artist = dot::artist_grid(&tiles, l.cols as usize, &opts);
    let main = dot::dot_grid(&content::MAIN_ROWS, &GridOpts {
        row_offset: l.artist_rows as i32,
        ..opts
    });
    let overflow = dot::dot_grid(&content::OVERFLOW_ROWS, &GridOpts {
        row_offset: (l.artist_rows + l.main_rows) as i32,
        overflow: true,
        ..opts
    });

    let rows = l.artist_rows + l.main_rows + l.overflow_rows;
    let pitch = l.cell_size + l.gap;
    let layout = GridLayout {
        cell_size: l.cell_size,
        gap: l.gap,
        rows,
        cols: l.cols,
        idle_rows: l.artist_rows + l.main_rows,
        origin: Vec2::new(
            -((l.cols - 1) as f32) * pitch / 2.0,
            -((rows - 1) as f32) * pitch / 2.0,
        ),
    };

    let puck_mesh = meshes.add(Cylinder::new(
        l.cell_size * cfg.puck.radius_factor,
        cfg.puck.height,
    ));

    let dots = Dots {
        artist,
        main,
        overflow,
    };

    for d in dots.iter() {
        let ground = layout.world_of(d.grid_position);
        let base = d.color.base;
        let material = materials.add(StandardMaterial {
            base_color: Color::srgba(base.x, base.y, base.z, d.visual.opacity),
            emissive: LinearRgba::BLACK,
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        let label = d
            .content
            .as_ref()
            .map(|c| c.label.as_str())
            .unwrap_or("spacer");
        commands.spawn((
            Mesh3d(puck_mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_xyz(ground.x, cfg.puck.height / 2.0, ground.y),
            DotMarker {
                id: d.id.clone(),
                cell: d.grid_position,
            },
            Name::new(format!("dot {} ({label})", d.id)),
        ));
    }

    commands.insert_resource(layout);
    commands.insert_resource(dots);
}
