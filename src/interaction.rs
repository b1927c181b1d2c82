//! Pointer tracking, click dispatch, and the idle-animation machine.
//!
//! The actual decision logic lives in [`machine`], which is plain data and
//! free of ECS types; this plugin wires it to the cursor, the mouse
//! buttons, the frame clock, and the card-open / navigation messages.

mod entities;
pub mod machine;
mod systems;

pub use entities::{CurrentRoute, InteractionState, NavigateTo, OpenGridCard};

use bevy::prelude::*;

use crate::GameState;
use machine::IdleTimings;

/// Nested configuration for the interaction subsystem.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct InteractionConfig {
    /// Idle-animation timing settings.
    pub timings: TimingSettings,
    /// Pointer and viewport settings.
    pub pointer: PointerSettings,
    /// Seed for the idle-animation RNG.
    pub seed: u64,
}

/// Idle-animation timings, mirrored into the machine each tick.
#[derive(Clone, Debug, Reflect)]
pub struct TimingSettings {
    /// Seconds of inactivity before an idle animation starts.
    pub inactivity_delay: f32,
    /// Seconds between ripple steps.
    pub ripple_step: f32,
    /// Seconds a random pick stays lit.
    pub random_step: f32,
    /// Dark gap between random picks.
    pub random_pause: f32,
    /// Picks per randomizing run.
    pub random_picks: u32,
}

/// Pointer and viewport settings.
#[derive(Clone, Debug, Reflect)]
pub struct PointerSettings {
    /// Window width below which non-selected dots hide during selection.
    pub narrow_width: f32,
    /// Proximity-glow falloff radius, in cell-pitch units.
    pub glow_radius: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            timings: TimingSettings {
                inactivity_delay: 6.0,
                ripple_step: 0.12,
                random_step: 0.55,
                random_pause: 0.25,
                random_picks: 10,
            },
            pointer: PointerSettings {
                narrow_width: 1024.0,
                glow_radius: 2.5,
            },
            seed: 0x0d07,
        }
    }
}

impl TimingSettings {
    pub(crate) fn idle(&self) -> IdleTimings {
        IdleTimings {
            inactivity_delay: self.inactivity_delay,
            ripple_step: self.ripple_step,
            random_step: self.random_step,
            random_pause: self.random_pause,
            random_picks: self.random_picks,
        }
    }
}

/// Interaction plugin: one machine resource driven by pointer and clock
/// systems.
pub struct InteractionPlugin(pub InteractionConfig);

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<InteractionConfig>()
            .register_type::<CurrentRoute>()
            .insert_resource(self.0.clone())
            .init_resource::<CurrentRoute>()
            .add_message::<OpenGridCard>()
            .add_message::<NavigateTo>()
            .add_systems(
                Startup,
                systems::init_machine.after(crate::grid::spawn_grids),
            )
            .add_systems(
                Update,
                (
                    systems::track_viewport,
                    systems::track_pointer,
                    systems::handle_clicks.after(systems::track_pointer),
                    systems::tick_idle.after(systems::handle_clicks),
                )
                    .run_if(in_state(GameState::Browsing)),
            )
            .add_systems(
                Update,
                (systems::handle_navigation, systems::handle_open_cards).chain(),
            )
            .add_systems(
                Update,
                systems::draw_phase_label.run_if(in_state(GameState::Inspecting)),
            );
    }
}
