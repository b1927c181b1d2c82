//! Scene visuals: camera, bloom, and the per-frame dot animation.
//!
//! Sets up an overhead `Camera3d` with HDR + bloom and eases every puck
//! toward the visual targets derived from the interaction machine.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::post_process::bloom::{Bloom, BloomCompositeMode};
use bevy::prelude::*;
use bevy::render::view::Hdr;

use crate::dot::DotId;
use crate::grid::{DotMarker, Dots, GridConfig, GridLayout};
use crate::interaction::{InteractionConfig, InteractionState};
use crate::math;
use crate::patterns::{self, TargetVisual};

/// Exponential approach rate toward visual targets.
const ANIM_RATE: f32 = 10.0;

/// Seconds over which the dim-out staggers across the grid when a card
/// opens, far cells first.
const DIM_STAGGER: f32 = 0.35;

/// Emissive multiplier pushing glows over the bloom threshold.
const EMISSIVE_GAIN: f32 = 9.0;

/// Marker for the grid camera, used by pointer projection.
#[derive(Component)]
pub struct GridCamera;

/// Sets up the camera and runs the dot animation.
pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene).add_systems(
            Update,
            animate_dots.run_if(resource_exists::<InteractionState>),
        );
    }
}

/// Spawns the overhead camera with bloom and tonemapping.
pub fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Hdr,
        Tonemapping::TonyMcMapface,
        Bloom {
            intensity: 0.25,
            composite_mode: BloomCompositeMode::Additive,
            ..Bloom::NATURAL
        },
        Transform::from_xyz(0.0, 24.0, 14.0).looking_at(Vec3::ZERO, Vec3::Y),
        GridCamera,
    ));

    commands.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.03)));
}

/// Eases every puck toward its derived visual target.
///
/// Scale and lift go through the transform; opacity and glow through the
/// puck's material. When a card opens, dots dim in converge order, the
/// cells farthest from the selection first.
#[allow(clippy::too_many_arguments)]
pub fn animate_dots(
    time: Res<Time>,
    state: Res<InteractionState>,
    cfg: Res<InteractionConfig>,
    grid_cfg: Res<GridConfig>,
    layout: Res<GridLayout>,
    dots: Res<Dots>,
    mut pucks: Query<(
        &DotMarker,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut since_selected: Local<f32>,
    mut prev_selected: Local<Option<DotId>>,
) {
    if *prev_selected != state.machine.selected {
        *prev_selected = state.machine.selected.clone();
        *since_selected = 0.0;
    } else {
        *since_selected += time.delta_secs();
    }
    // External selections have no cell to converge on; they dim at once.
    let dim_order = state
        .machine
        .selected_position()
        .map(|target| patterns::converge_order(target, layout.rows, layout.cols));

    let k = (time.delta_secs() * ANIM_RATE).min(1.0);
    let rest_y = grid_cfg.puck.height / 2.0;

    for (marker, mut transform, mat_handle) in &mut pucks {
        let display = state
            .machine
            .dot_display(&marker.id, Some(marker.cell), state.narrow);
        let mut target = patterns::display_visual(&display);

        if let Some(mouse) = state.machine.mouse_cell
            && !display.should_hide
        {
            // Eased so the glow stays bright close to the cursor and falls
            // away at the rim.
            let near = math::ease_out_cubic(math::proximity_glow(
                layout.cell_distance(marker.cell, mouse),
                cfg.pointer.glow_radius,
            ));
            target.glow = target.glow.max(near * 0.6);
        }

        if display.is_selected
            && !display.is_clicked_dot
            && let Some(order) = &dim_order
            && let Some(i) = order.iter().position(|c| *c == marker.cell)
        {
            let delay = i as f32 / order.len() as f32 * DIM_STAGGER;
            if *since_selected < delay {
                target = TargetVisual::default();
            }
        }

        let ground = layout.world_of(marker.cell);
        let s = math::lerp(transform.scale.x, target.scale, k);
        transform.scale = Vec3::splat(s);
        transform.translation.x = math::lerp(transform.translation.x, ground.x + target.offset.x, k);
        transform.translation.y =
            math::lerp(transform.translation.y, rest_y + target.offset.y, k);

        let Some(d) = dots.dot_at(marker.cell) else {
            continue;
        };
        let Some(mat) = materials.get_mut(&mat_handle.0) else {
            continue;
        };
        let rgb = if display.is_hovered {
            d.color.hover
        } else {
            d.color.base
        };
        let alpha = math::lerp(mat.base_color.alpha(), target.opacity, k);
        mat.base_color = Color::srgba(rgb.x, rgb.y, rgb.z, alpha);

        let glow = d.color.glow * (target.glow * EMISSIVE_GAIN);
        mat.emissive = LinearRgba::rgb(
            math::lerp(mat.emissive.red, glow.x, k),
            math::lerp(mat.emissive.green, glow.y, k),
            math::lerp(mat.emissive.blue, glow.z, k),
        );
    }
}
