//! Pointer projection, click dispatch, and the idle clock.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::egui;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::InteractionConfig;
use super::entities::{CurrentRoute, InteractionState, NavigateTo, OpenGridCard};
use crate::dot::{self, ContentKind, DotId};
use crate::grid::{Dots, GridLayout};
use crate::interaction::machine::{GridInteraction, Navigation};
use crate::math;
use crate::visuals::GridCamera;

/// Builds the machine once the grid model exists.
///
/// The random highlight draws from the non-spacer dots of the artist and
/// main bands; the overflow band stays out of the idle animations.
pub fn init_machine(
    mut commands: Commands,
    cfg: Res<InteractionConfig>,
    dots: Res<Dots>,
    layout: Res<GridLayout>,
) {
    let ids: Vec<DotId> = dots
        .artist
        .iter()
        .chain(&dots.main)
        .flatten()
        .filter(|d| d.content.is_some())
        .map(|d| d.id.clone())
        .collect();
    commands.insert_resource(InteractionState {
        machine: GridInteraction::new(layout.idle_rows, layout.cols, ids),
        rng: SmallRng::seed_from_u64(cfg.seed),
        narrow: false,
    });
}

/// Caches the narrow-viewport flag from the primary window width.
pub fn track_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    cfg: Res<InteractionConfig>,
    mut state: ResMut<InteractionState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    state.narrow = window.width() < cfg.pointer.narrow_width;
}

/// Projects the cursor onto the grid plane and updates mouse cell + hover.
pub fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<GridCamera>>,
    layout: Res<GridLayout>,
    dots: Res<Dots>,
    mut state: ResMut<InteractionState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, cam_gt)) = camera_q.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        state.machine.clear_mouse();
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_gt, cursor) else {
        return;
    };
    let Some(ground) = math::ray_ground_hit(ray.origin, *ray.direction) else {
        state.machine.clear_mouse();
        return;
    };
    state.machine.note_pointer(ground);

    match layout.cell_at(ground) {
        Some(cell) => {
            state.machine.set_mouse_cell(cell);
            let hovered = layout
                .on_dot(ground, cell)
                .then(|| dots.dot_at(cell))
                .flatten()
                .filter(|d| d.content.is_some())
                .map(|d| d.id.clone());
            state.machine.set_hover(hovered);
        }
        None => state.machine.clear_mouse(),
    }
}

/// Routes left clicks to the dot, artist, or background handlers.
pub fn handle_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    dots: Res<Dots>,
    mut state: ResMut<InteractionState>,
    mut nav: MessageWriter<NavigateTo>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    // Clicks landing on a card belong to egui.
    if let Ok(mut ctx) = egui_ctx.single_mut()
        && ctx.get_mut().wants_pointer_input()
    {
        return;
    }

    let Some(id) = state.machine.hovered.clone() else {
        if let Some(Navigation::Route(route)) = state.machine.background_click() {
            nav.write(NavigateTo { route });
        }
        return;
    };
    let Some(content) = dots.find(&id).and_then(|d| d.content.clone()) else {
        return;
    };
    match content.kind {
        ContentKind::Navigation => state.machine.click_dot(id, &content.key),
        ContentKind::Artist | ContentKind::Special => {
            if let Some(artist) = dot::artist_for_slug(&content.key)
                && let Some(Navigation::Route(route)) = state.machine.click_artist(artist)
            {
                nav.write(NavigateTo { route });
            }
        }
    }
}

/// Router shim: records pushed routes. The subscribe route re-enters the
/// grid as a card-open request, matching how the site routes that tile.
pub fn handle_navigation(
    mut nav: MessageReader<NavigateTo>,
    mut route: ResMut<CurrentRoute>,
    mut open: MessageWriter<OpenGridCard>,
) {
    for msg in nav.read() {
        info!(route = msg.route.as_str(), "navigate");
        if msg.route == "/subscribe" {
            open.write(OpenGridCard {
                key: "subscribe".to_owned(),
            });
        }
        route.0 = msg.route.clone();
    }
}

/// Applies nav-bar and deep-link open requests to the machine.
pub fn handle_open_cards(
    mut open: MessageReader<OpenGridCard>,
    dots: Res<Dots>,
    mut state: ResMut<InteractionState>,
) {
    for msg in open.read() {
        state.machine.open_by_key(&msg.key, &dots.main);
    }
}

/// Advances the idle-animation clock.
pub fn tick_idle(
    time: Res<Time>,
    cfg: Res<InteractionConfig>,
    mut state: ResMut<InteractionState>,
) {
    let timings = cfg.timings.idle();
    let InteractionState { machine, rng, .. } = &mut *state;
    machine.tick(time.delta_secs(), &timings, rng);
}

/// Draws the machine phase and selection as an egui overlay label.
pub fn draw_phase_label(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    state: Res<InteractionState>,
    route: Res<CurrentRoute>,
    mut ready: Local<bool>,
) {
    if !*ready {
        *ready = true;
        return;
    }
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let painter = ctx.get_mut().layer_painter(egui::LayerId::background());
    let selected = state
        .machine
        .selected
        .as_ref()
        .map(DotId::to_string)
        .unwrap_or_else(|| "-".to_owned());
    painter.text(
        egui::pos2(12.0, 12.0),
        egui::Align2::LEFT_TOP,
        format!(
            "phase: {}  selected: {selected}  route: {}",
            state.machine.phase_label(),
            route.0
        ),
        egui::FontId::proportional(11.0),
        egui::Color32::WHITE,
    );
}
