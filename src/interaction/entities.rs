//! Resources and messages wrapping the interaction machine.

use bevy::prelude::*;
use rand::rngs::SmallRng;

use crate::interaction::machine::GridInteraction;

/// The interaction machine plus its RNG and cached viewport flag.
#[derive(Resource)]
pub struct InteractionState {
    /// The pure state machine.
    pub machine: GridInteraction,
    /// Seeded RNG driving the idle-animation branch and picks.
    pub rng: SmallRng,
    /// True while the window is narrower than the configured threshold.
    pub narrow: bool,
}

/// Global "open this card" signal, fired by the nav bar and by routes.
#[derive(Message, Clone, Debug)]
pub struct OpenGridCard {
    /// Content key of the card to open.
    pub key: String,
}

/// Route-push request consumed by the router shim.
#[derive(Message, Clone, Debug)]
pub struct NavigateTo {
    /// Internal route, e.g. `/artists/mara-quist`.
    pub route: String,
}

/// Where the router currently points. The native build has no browser
/// history; this resource is the stand-in the cards read.
#[derive(Resource, Default, Reflect)]
pub struct CurrentRoute(pub String);
