//! The grid interaction state machine, free of ECS dependencies.
//!
//! One [`GridInteraction`] instance owns hover, selection, mouse-cell, and
//! idle-animation state for the whole composite of sub-grids. Timer state
//! lives *inside* the [`IdlePhase`] variants as plain accumulators, so at
//! most one of the ripple/random "timers" can exist at a time and the
//! inactivity watch cannot be armed while an animation runs or a card is
//! open — the cancellation hazards are ruled out by construction rather
//! than by cleanup code.

use bevy::prelude::Vec2;
use rand::Rng;

use crate::content::Artist;
use crate::dot::{self, Dot, DotId};
use crate::math::{self, GridPos};
use crate::patterns::{DotDisplay, RandomWalk, RippleScan};

/// Idle-animation timing constants.
///
/// The random highlight deliberately layers two independent durations:
/// `random_step` is how long a pick stays lit, `random_pause` the dark gap
/// before the next pick. They are not derived from one another.
#[derive(Clone, Copy, Debug)]
pub struct IdleTimings {
    /// Seconds of no pointer/selection activity before an idle animation
    /// starts.
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

impl Default for IdleTimings {
    fn default() -> Self {
        Self {
            inactivity_delay: 6.0,
            ripple_step: 0.12,
            random_step: 0.55,
            random_pause: 0.25,
            random_picks: 10,
        }
    }
}

/// Where the idle-animation side of the machine is.
enum IdlePhase {
    /// Counting down to the next idle animation.
    Watching { elapsed: f32 },
    /// Row-major ripple scan in progress.
    Rippling {
        scan: RippleScan,
        current: Option<GridPos>,
        since_step: f32,
    },
    /// Random highlight run in progress.
    Randomizing {
        walk: RandomWalk,
        current: Option<DotId>,
        picks_done: u32,
        in_pause: bool,
        elapsed: f32,
    },
    /// A card is open; nothing idle may run or arm.
    Suspended,
}

/// Route-push request produced by a click handler. The machine never
/// performs navigation itself; the host consumes these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Internal route push.
    Route(String),
}

/// The interaction state machine for one grid composite.
pub struct GridInteraction {
    /// Dot currently under the pointer.
    pub hovered: Option<DotId>,
    /// Dot whose card is open.
    pub selected: Option<DotId>,
    /// Content key of the open card.
    pub selected_content: Option<String>,
    /// Whether the open card is expanded.
    pub card_expanded: bool,
    /// Virtual mouse cell in the unified row space.
    pub mouse_cell: Option<GridPos>,
    last_pointer: Option<Vec2>,
    idle: IdlePhase,
    idle_rows: u32,
    idle_cols: u32,
    idle_ids: Vec<DotId>,
}

impl GridInteraction {
    /// Machine for an idle-animation region of `rows × cols`, randomizing
    /// over `ids` (the non-spacer dots of that region).
    pub fn new(rows: u32, cols: u32, ids: Vec<DotId>) -> Self {
        Self {
            hovered: None,
            selected: None,
            selected_content: None,
            card_expanded: false,
            mouse_cell: None,
            last_pointer: None,
            idle: IdlePhase::Watching { elapsed: 0.0 },
            idle_rows: rows,
            idle_cols: cols,
            idle_ids: ids,
        }
    }

    // ── Observers ──────────────────────────────────────────────────

    /// True while a ripple or random run is in progress.
    pub fn is_animating(&self) -> bool {
        matches!(
            self.idle,
            IdlePhase::Rippling { .. } | IdlePhase::Randomizing { .. }
        )
    }

    /// Cell currently lit by the ripple scan.
    pub fn ripple_cell(&self) -> Option<GridPos> {
        match &self.idle {
            IdlePhase::Rippling { current, .. } => *current,
            _ => None,
        }
    }

    /// Dot currently lit by the random highlight.
    pub fn random_dot(&self) -> Option<&DotId> {
        match &self.idle {
            IdlePhase::Randomizing { current, .. } => current.as_ref(),
            _ => None,
        }
    }

    /// Grid position of the selected dot, `None` when nothing is selected
    /// or the selected id is an external slug (no position to animate).
    pub fn selected_position(&self) -> Option<GridPos> {
        self.selected.as_ref().and_then(DotId::grid_position)
    }

    /// Short label for the debug overlay.
    pub fn phase_label(&self) -> &'static str {
        match &self.idle {
            IdlePhase::Watching { .. } => "watching",
            IdlePhase::Rippling { .. } => "rippling",
            IdlePhase::Randomizing { .. } => "randomizing",
            IdlePhase::Suspended => "suspended",
        }
    }

    /// Derived display flags for one dot, given its unified grid position
    /// and the narrow-viewport flag. Pure: a snapshot always yields the
    /// same answer.
    pub fn dot_display(
        &self,
        id: &DotId,
        unified_pos: Option<GridPos>,
        narrow: bool,
    ) -> DotDisplay {
        let is_selected = self.selected.is_some();
        let is_clicked_dot = self.selected.as_ref() == Some(id);
        DotDisplay {
            is_hovered: self.hovered.as_ref() == Some(id),
            is_rippling: unified_pos.is_some() && self.ripple_cell() == unified_pos,
            is_randomly_selected: self.random_dot() == Some(id),
            is_selected,
            is_clicked_dot,
            should_hide: narrow && is_selected && !is_clicked_dot,
        }
    }

    // ── Pointer tracking ───────────────────────────────────────────

    /// Pointer/selection activity: resets the inactivity watch. Running
    /// animations are left alone — hovering does not cancel them.
    pub fn note_activity(&mut self) {
        if let IdlePhase::Watching { elapsed } = &mut self.idle {
            *elapsed = 0.0;
        }
    }

    /// Updates the hovered dot; a change counts as pointer activity.
    pub fn set_hover(&mut self, id: Option<DotId>) {
        if self.hovered != id {
            self.hovered = id;
            self.note_activity();
        }
    }

    /// Updates the shared virtual mouse cell.
    pub fn set_mouse_cell(&mut self, cell: GridPos) {
        if self.mouse_cell != Some(cell) {
            self.mouse_cell = Some(cell);
            self.note_activity();
        }
    }

    /// Raw pointer sample in ground coordinates. Any movement counts as
    /// activity, even within a single cell.
    pub fn note_pointer(&mut self, point: Vec2) {
        if self
            .last_pointer
            .is_none_or(|p| !math::approx_eq(p, point, 1e-3))
        {
            self.last_pointer = Some(point);
            self.note_activity();
        }
    }

    /// Pointer left the grid.
    pub fn clear_mouse(&mut self) {
        self.mouse_cell = None;
        self.last_pointer = None;
        self.hovered = None;
    }

    // ── Click handlers ─────────────────────────────────────────────

    /// A content dot was clicked: idle animation is cancelled synchronously
    /// and the selection is set, card collapsed.
    pub fn click_dot(&mut self, id: DotId, content_key: &str) {
        self.idle = IdlePhase::Suspended;
        self.selected = Some(id);
        self.selected_content = Some(content_key.to_owned());
        self.card_expanded = false;
    }

    /// An artist-row dot was clicked.
    ///
    /// Special-link tiles navigate without selecting; ordinary artists
    /// derive their slug, select it, and navigate to the artist route.
    pub fn click_artist(&mut self, artist: &Artist) -> Option<Navigation> {
        if let Some(route) = artist.special_route {
            // No selection, so the watch restarts instead of suspending.
            self.idle = IdlePhase::Watching { elapsed: 0.0 };
            return Some(Navigation::Route(route.to_owned()));
        }
        let slug = dot::slugify(artist.name);
        let route = format!("/artists/{slug}");
        self.click_dot(DotId::External { slug: slug.clone() }, &slug);
        Some(Navigation::Route(route))
    }

    /// Click on empty background: clears any open selection and re-arms
    /// the watch. Returns the root navigation when something was open.
    pub fn background_click(&mut self) -> Option<Navigation> {
        if self.selected.is_some() {
            Some(self.close())
        } else {
            self.note_activity();
            None
        }
    }

    /// Close the open card: reset selection/content/expansion and restart
    /// the inactivity watch.
    pub fn close(&mut self) -> Navigation {
        self.selected = None;
        self.selected_content = None;
        self.card_expanded = false;
        self.idle = IdlePhase::Watching { elapsed: 0.0 };
        Navigation::Route("/".to_owned())
    }

    /// Global "open card by key" signal. The literal `subscribe` key opens
    /// the subscribe card directly; other keys resolve by linear search
    /// over the main grid. Unknown keys are a silent no-op.
    pub fn open_by_key(&mut self, key: &str, main_grid: &[Vec<Dot>]) {
        if key == "subscribe" {
            self.click_dot(
                DotId::External {
                    slug: "subscribe".to_owned(),
                },
                "subscribe",
            );
            return;
        }
        if let Some(d) = dot::find_by_content_key(main_grid, key) {
            let id = d.id.clone();
            self.click_dot(id, key);
        }
    }

    // ── Idle animation ─────────────────────────────────────────────

    /// Advances the idle side of the machine by `dt` seconds.
    ///
    /// A tick that arrives after cancellation (`Suspended`) is a no-op, so
    /// a stale callback can never resurrect an animation over an open card.
    pub fn tick<R: Rng>(&mut self, dt: f32, t: &IdleTimings, rng: &mut R) {
        match &mut self.idle {
            IdlePhase::Suspended => {}
            IdlePhase::Watching { elapsed } => {
                *elapsed += dt;
                if *elapsed >= t.inactivity_delay {
                    self.idle = if rng.gen_bool(0.5) {
                        Self::start_rippling(self.idle_rows, self.idle_cols)
                    } else {
                        Self::start_randomizing(self.idle_ids.clone(), rng)
                    };
                }
            }
            IdlePhase::Rippling {
                scan,
                current,
                since_step,
            } => {
                *since_step += dt;
                while *since_step >= t.ripple_step {
                    *since_step -= t.ripple_step;
                    match scan.next() {
                        Some(cell) => *current = Some(cell),
                        None => {
                            // Past the last cell: halt and go back to watching.
                            self.idle = IdlePhase::Watching { elapsed: 0.0 };
                            return;
                        }
                    }
                }
            }
            IdlePhase::Randomizing {
                walk,
                current,
                picks_done,
                in_pause,
                elapsed,
            } => {
                *elapsed += dt;
                if !*in_pause {
                    if *elapsed >= t.random_step {
                        // Briefly clear before the next pick.
                        *current = None;
                        *in_pause = true;
                        *elapsed = 0.0;
                    }
                } else if *elapsed >= t.random_pause {
                    if *picks_done >= t.random_picks {
                        self.idle = IdlePhase::Watching { elapsed: 0.0 };
                        return;
                    }
                    *current = walk.next_pick(rng);
                    *picks_done += 1;
                    *in_pause = false;
                    *elapsed = 0.0;
                }
            }
        }
    }

    fn start_rippling(rows: u32, cols: u32) -> IdlePhase {
        let mut scan = RippleScan::new(rows, cols);
        let current = scan.next();
        IdlePhase::Rippling {
            scan,
            current,
            since_step: 0.0,
        }
    }

    fn start_randomizing<R: Rng>(ids: Vec<DotId>, rng: &mut R) -> IdlePhase {
        let mut walk = RandomWalk::new(ids);
        let current = walk.next_pick(rng);
        IdlePhase::Randomizing {
            walk,
            current,
            picks_done: 1,
            in_pause: false,
            elapsed: 0.0,
        }
    }

    #[cfg(test)]
    fn force_rippling(&mut self) {
        self.idle = Self::start_rippling(self.idle_rows, self.idle_cols);
    }

    #[cfg(test)]
    fn force_randomizing<R: Rng>(&mut self, rng: &mut R) {
        self.idle = Self::start_randomizing(self.idle_ids.clone(), rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const T: IdleTimings = IdleTimings {
        inactivity_delay: 2.0,
        ripple_step: 0.1,
        random_step: 0.3,
        random_pause: 0.1,
        random_picks: 4,
    };

    fn region_ids() -> Vec<DotId> {
        (0..5)
            .flat_map(|r| (0..5).map(move |c| DotId::Grid { row: r, col: c }))
            .collect()
    }

    fn machine() -> GridInteraction {
        GridInteraction::new(5, 5, region_ids())
    }

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    // ── Idle watch ──────────────────────────────────────────────────

    #[test]
    fn watch_triggers_an_animation_after_the_delay() {
        let mut m = machine();
        let mut r = rng(0);
        m.tick(T.inactivity_delay + 0.01, &T, &mut r);
        assert!(m.is_animating());
    }

    #[test]
    fn both_idle_branches_are_reachable() {
        let mut saw_ripple = false;
        let mut saw_random = false;
        for seed in 0..32 {
            let mut m = machine();
            let mut r = rng(seed);
            m.tick(T.inactivity_delay + 0.01, &T, &mut r);
            match m.phase_label() {
                "rippling" => saw_ripple = true,
                "randomizing" => saw_random = true,
                other => panic!("unexpected phase {other}"),
            }
        }
        assert!(saw_ripple && saw_random, "50/50 branch never took one side");
    }

    #[test]
    fn branch_choice_is_deterministic_under_a_seed() {
        let label = |seed| {
            let mut m = machine();
            let mut r = rng(seed);
            m.tick(T.inactivity_delay + 0.01, &T, &mut r);
            m.phase_label()
        };
        assert_eq!(label(9), label(9));
    }

    #[test]
    fn activity_resets_the_watch() {
        let mut m = machine();
        let mut r = rng(0);
        m.tick(T.inactivity_delay * 0.9, &T, &mut r);
        m.note_activity();
        m.tick(T.inactivity_delay * 0.9, &T, &mut r);
        assert!(!m.is_animating(), "watch must restart from zero on activity");
    }

    #[test]
    fn pointer_motion_within_one_cell_counts_as_activity() {
        let mut m = machine();
        let mut r = rng(0);
        m.tick(T.inactivity_delay * 0.9, &T, &mut r);
        m.note_pointer(Vec2::new(0.10, 0.10));
        m.tick(T.inactivity_delay * 0.9, &T, &mut r);
        // A wiggle far smaller than a cell still resets the watch.
        m.note_pointer(Vec2::new(0.14, 0.10));
        m.tick(T.inactivity_delay * 0.9, &T, &mut r);
        assert!(!m.is_animating());
    }

    #[test]
    fn stationary_pointer_does_not_hold_the_watch_open() {
        let mut m = machine();
        let mut r = rng(0);
        m.note_pointer(Vec2::new(0.5, 0.5));
        m.tick(T.inactivity_delay * 0.9, &T, &mut r);
        m.note_pointer(Vec2::new(0.5, 0.5));
        m.tick(T.inactivity_delay * 0.9, &T, &mut r);
        assert!(m.is_animating(), "a resting cursor is not activity");
    }

    // ── Rippling ────────────────────────────────────────────────────

    #[test]
    fn ripple_walks_row_major_and_nulls_once() {
        let mut m = machine();
        let mut r = rng(0);
        m.force_rippling();

        let mut visited = vec![m.ripple_cell().unwrap()];
        let mut nulled = 0;
        for _ in 0..40 {
            m.tick(T.ripple_step, &T, &mut r);
            match m.ripple_cell() {
                Some(cell) => {
                    if visited.last() != Some(&cell) {
                        visited.push(cell);
                    }
                }
                None => {
                    nulled += 1;
                    break;
                }
            }
        }
        let expected: Vec<GridPos> = (0..5)
            .flat_map(|r| (0..5).map(move |c| GridPos::new(r, c)))
            .collect();
        assert_eq!(visited, expected, "strict row-major visit order");
        assert_eq!(nulled, 1);
        assert_eq!(m.phase_label(), "watching", "halt returns to the watch");
    }

    #[test]
    fn ripple_catches_up_over_a_large_dt() {
        let mut m = machine();
        let mut r = rng(0);
        m.force_rippling();
        m.tick(T.ripple_step * 3.0, &T, &mut r);
        assert_eq!(m.ripple_cell(), Some(GridPos::new(0, 3)));
    }

    // ── Randomizing ─────────────────────────────────────────────────

    #[test]
    fn random_run_shows_the_fixed_pick_count_then_returns_to_watch() {
        let mut m = machine();
        let mut r = rng(5);
        m.force_randomizing(&mut r);

        let mut shown = vec![m.random_dot().cloned().unwrap()];
        let mut guard = 0;
        while m.phase_label() == "randomizing" && guard < 200 {
            m.tick(0.05, &T, &mut r);
            if let Some(id) = m.random_dot()
                && shown.last() != Some(id)
            {
                shown.push(id.clone());
            }
            guard += 1;
        }
        assert_eq!(shown.len(), T.random_picks as usize);
        assert_eq!(m.phase_label(), "watching");
        for w in shown.windows(2) {
            assert_ne!(w[0], w[1], "same id twice consecutively");
        }
        let all = region_ids();
        for id in &shown {
            assert!(all.contains(id), "pick outside the valid id set");
        }
    }

    #[test]
    fn random_pick_blinks_dark_between_picks() {
        let mut m = machine();
        let mut r = rng(5);
        m.force_randomizing(&mut r);
        assert!(m.random_dot().is_some());
        m.tick(T.random_step + 0.01, &T, &mut r);
        assert!(m.random_dot().is_none(), "pick must clear before the pause");
    }

    // ── Selection & cancellation ────────────────────────────────────

    #[test]
    fn clicking_sets_selection_and_disarms_everything() {
        let mut m = machine();
        let id = DotId::Grid { row: 2, col: 1 };
        m.click_dot(id.clone(), "projects");
        assert_eq!(m.selected, Some(id));
        assert_eq!(m.selected_content.as_deref(), Some("projects"));
        assert!(!m.card_expanded);
        assert!(!m.is_animating());
        assert_eq!(m.phase_label(), "suspended");
    }

    #[test]
    fn selecting_during_ripple_cancels_it_immediately() {
        let mut m = machine();
        m.force_rippling();
        assert!(m.ripple_cell().is_some());
        m.click_dot(DotId::Grid { row: 2, col: 0 }, "about");
        assert_eq!(m.ripple_cell(), None);
        assert_eq!(m.random_dot(), None);
        assert!(!m.is_animating());
    }

    #[test]
    fn ghost_tick_after_cancellation_is_a_no_op() {
        let mut m = machine();
        let mut r = rng(1);
        m.force_rippling();
        m.click_dot(DotId::Grid { row: 2, col: 0 }, "about");
        // A stale timer callback firing after cancellation.
        m.tick(10.0, &T, &mut r);
        assert!(!m.is_animating());
        assert_eq!(m.ripple_cell(), None);
        assert_eq!(m.selected, Some(DotId::Grid { row: 2, col: 0 }));
    }

    #[test]
    fn selecting_during_random_run_cancels_it() {
        let mut m = machine();
        let mut r = rng(2);
        m.force_randomizing(&mut r);
        assert!(m.random_dot().is_some());
        m.click_dot(DotId::Grid { row: 3, col: 3 }, "radio");
        assert_eq!(m.random_dot(), None);
        let before = m.selected.clone();
        m.tick(5.0, &T, &mut r);
        assert_eq!(m.selected, before);
    }

    #[test]
    fn hovering_does_not_cancel_a_running_animation() {
        // Preserved quirk: only clicks cancel idle animation.
        let mut m = machine();
        m.force_rippling();
        m.set_hover(Some(DotId::Grid { row: 0, col: 0 }));
        assert!(m.is_animating());
        m.set_mouse_cell(GridPos::new(1, 1));
        assert!(m.is_animating());
    }

    #[test]
    fn close_resets_everything_and_rearms_the_watch() {
        let mut m = machine();
        let mut r = rng(3);
        m.click_dot(DotId::Grid { row: 2, col: 2 }, "zine");
        m.card_expanded = true;
        let nav = m.close();
        assert_eq!(nav, Navigation::Route("/".to_owned()));
        assert_eq!(m.selected, None);
        assert_eq!(m.selected_content, None);
        assert!(!m.card_expanded);
        // A fresh idle period re-triggers an animation.
        m.tick(T.inactivity_delay + 0.01, &T, &mut r);
        assert!(m.is_animating());
    }

    #[test]
    fn background_click_is_a_close_only_when_a_card_is_open() {
        let mut m = machine();
        assert_eq!(m.background_click(), None);
        m.click_dot(DotId::Grid { row: 2, col: 0 }, "about");
        assert_eq!(m.background_click(), Some(Navigation::Route("/".to_owned())));
        assert_eq!(m.selected, None);
    }

    // ── Artist clicks ───────────────────────────────────────────────

    #[test]
    fn ordinary_artist_click_selects_the_derived_slug() {
        let mut m = machine();
        let nav = m.click_artist(&content::ARTISTS[0]);
        assert_eq!(
            nav,
            Some(Navigation::Route("/artists/mara-quist".to_owned()))
        );
        assert_eq!(
            m.selected,
            Some(DotId::External {
                slug: "mara-quist".to_owned()
            })
        );
        assert_eq!(m.selected_content.as_deref(), Some("mara-quist"));
    }

    #[test]
    fn special_tile_navigates_without_selecting() {
        let mut m = machine();
        let nav = m.click_artist(&content::SUBSCRIBE_TILE);
        assert_eq!(nav, Some(Navigation::Route("/subscribe".to_owned())));
        assert_eq!(m.selected, None);
        assert!(!m.is_animating());
    }

    #[test]
    fn special_tile_click_leaves_the_watch_armed() {
        // A pure navigation opens no card, so idle animation must not be
        // parked behind a suspension nothing will lift.
        let mut m = machine();
        let mut r = rng(4);
        m.click_artist(&content::SUBSCRIBE_TILE);
        assert_eq!(m.phase_label(), "watching");
        m.tick(T.inactivity_delay + 0.01, &T, &mut r);
        assert!(m.is_animating());
    }

    // ── open_by_key ─────────────────────────────────────────────────

    #[test]
    fn open_by_key_resolves_through_the_main_grid() {
        let mut m = machine();
        let grid = dot::dot_grid(&content::MAIN_ROWS, &dot::GridOpts {
            row_offset: 2,
            ..dot::GridOpts::default()
        });
        m.open_by_key("radio", &grid);
        assert_eq!(m.selected, Some(DotId::Grid { row: 3, col: 2 }));
        assert_eq!(m.selected_content.as_deref(), Some("radio"));
    }

    #[test]
    fn open_by_key_special_cases_subscribe() {
        let mut m = machine();
        m.open_by_key("subscribe", &[]);
        assert_eq!(
            m.selected,
            Some(DotId::External {
                slug: "subscribe".to_owned()
            })
        );
    }

    #[test]
    fn open_by_unknown_key_is_a_silent_no_op() {
        let mut m = machine();
        let grid = dot::dot_grid(&content::MAIN_ROWS, &dot::GridOpts::default());
        m.open_by_key("missing", &grid);
        assert_eq!(m.selected, None);
        assert_eq!(m.phase_label(), "watching");
    }

    // ── Derived display state ───────────────────────────────────────

    #[test]
    fn dot_display_is_pure() {
        let mut m = machine();
        m.click_dot(DotId::Grid { row: 2, col: 1 }, "projects");
        m.set_hover(Some(DotId::Grid { row: 2, col: 2 }));
        let id = DotId::Grid { row: 2, col: 2 };
        let a = m.dot_display(&id, Some(GridPos::new(2, 2)), false);
        let b = m.dot_display(&id, Some(GridPos::new(2, 2)), false);
        assert_eq!(a, b);
    }

    #[test]
    fn display_flags_for_the_clicked_dot() {
        let mut m = machine();
        let id = DotId::Grid { row: 2, col: 1 };
        m.click_dot(id.clone(), "projects");
        let d = m.dot_display(&id, Some(GridPos::new(2, 1)), true);
        assert!(d.is_selected && d.is_clicked_dot);
        assert!(!d.should_hide, "the clicked dot never hides");
    }

    #[test]
    fn narrow_viewport_hides_the_other_dots() {
        let mut m = machine();
        m.click_dot(DotId::Grid { row: 2, col: 1 }, "projects");
        let other = DotId::Grid { row: 3, col: 3 };
        let narrow = m.dot_display(&other, Some(GridPos::new(3, 3)), true);
        assert!(narrow.should_hide);
        let wide = m.dot_display(&other, Some(GridPos::new(3, 3)), false);
        assert!(!wide.should_hide);
    }

    #[test]
    fn ripple_flag_matches_by_unified_position() {
        let mut m = machine();
        m.force_rippling();
        let lit = m.ripple_cell().unwrap();
        let id = DotId::External {
            slug: "mara-quist".to_owned(),
        };
        // An artist dot at the lit cell ripples by position, not by id.
        let d = m.dot_display(&id, Some(lit), false);
        assert!(d.is_rippling);
        let elsewhere = m.dot_display(&id, Some(GridPos::new(4, 4)), false);
        assert!(!elsewhere.is_rippling);
        let no_pos = m.dot_display(&id, None, false);
        assert!(!no_pos.is_rippling);
    }

    #[test]
    fn selected_position_degrades_for_external_ids() {
        let mut m = machine();
        m.click_dot(
            DotId::External {
                slug: "mara-quist".to_owned(),
            },
            "mara-quist",
        );
        assert_eq!(m.selected_position(), None);
        m.click_dot(DotId::Grid { row: 3, col: 2 }, "radio");
        assert_eq!(m.selected_position(), Some(GridPos::new(3, 2)));
    }
}
