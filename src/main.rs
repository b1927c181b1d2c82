//! Binary entry point: plugin composition and global key handling.

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use dot_grid::interaction::machine::Navigation;
use dot_grid::{GameState, cards, grid, interaction, visuals};

#[cfg(feature = "native")]
use clap::Parser;

/// Command-line overrides for timings and determinism.
#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(version, about = "Animated dot grid for the Halftone site")]
struct Cli {
    /// Seed for the idle-animation RNG.
    #[arg(long)]
    seed: Option<u64>,
    /// Seconds of inactivity before an idle animation starts.
    #[arg(long)]
    inactivity: Option<f32>,
}

fn main() {
    let mut interaction_cfg = interaction::InteractionConfig::default();

    #[cfg(feature = "native")]
    {
        let cli = Cli::parse();
        if let Some(seed) = cli.seed {
            interaction_cfg.seed = seed;
        }
        if let Some(secs) = cli.inactivity {
            interaction_cfg.timings.inactivity_delay = secs;
        }
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Halftone".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<GameState>()
    .init_state::<GameState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(visuals::VisualsPlugin)
    .add_plugins(grid::GridPlugin(grid::GridConfig::default()))
    .add_plugins(interaction::InteractionPlugin(interaction_cfg))
    .add_plugins(cards::CardsPlugin)
    .add_systems(Update, close_or_exit)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(GameState::Inspecting)));

    #[cfg(feature = "native")]
    app.add_plugins((
        bevy::remote::RemotePlugin::default(),
        bevy::remote::http::RemoteHttpPlugin::default(),
    ));

    app.run();
}

/// Escape closes the open card first; with nothing open it quits.
fn close_or_exit(
    keys: Res<ButtonInput<KeyCode>>,
    state: Option<ResMut<interaction::InteractionState>>,
    mut nav: MessageWriter<interaction::NavigateTo>,
    mut exit: MessageWriter<AppExit>,
) {
    if !keys.just_pressed(KeyCode::Escape) {
        return;
    }
    if let Some(mut state) = state
        && state.machine.selected.is_some()
    {
        let Navigation::Route(route) = state.machine.close();
        nav.write(interaction::NavigateTo { route });
    } else {
        exit.write(AppExit::Success);
    }
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        next.set(match state.get() {
            GameState::Browsing => GameState::Inspecting,
            GameState::Inspecting => GameState::Browsing,
        });
    }
}
