//! Idle-animation pattern generators and the flag → visual-target map.
//!
//! Everything here is pure and ECS-free: lazy position sequences consumed
//! by the interaction machine, plus the function that turns a dot's derived
//! interaction flags into animation targets. Randomness is injected through
//! `rand::Rng` so tests can seed it.

use bevy::prelude::Vec2;
use rand::Rng;

use crate::dot::DotId;
use crate::math::GridPos;

// ── Ripple scan ────────────────────────────────────────────────────

/// Lazy row-major scan from `(0,0)` to the last cell.
///
/// Walking past the last column wraps to column 0 of the next row; past the
/// last row the iterator is exhausted and the ripple halts.
#[derive(Clone, Debug)]
pub struct RippleScan {
    rows: u32,
    cols: u32,
    next: Option<GridPos>,
}

impl RippleScan {
    /// Scan over a `rows × cols` region. Empty regions yield nothing.
    pub fn new(rows: u32, cols: u32) -> Self {
        let next = (rows > 0 && cols > 0).then_some(GridPos::new(0, 0));
        Self { rows, cols, next }
    }
}

impl Iterator for RippleScan {
    type Item = GridPos;

    fn next(&mut self) -> Option<GridPos> {
        let current = self.next?;
        let mut after = GridPos::new(current.row, current.col + 1);
        if after.col >= self.cols as i32 {
            after = GridPos::new(current.row + 1, 0);
        }
        self.next = (after.row < self.rows as i32).then_some(after);
        Some(current)
    }
}

// ── Random highlight walk ──────────────────────────────────────────

/// Uniform without-replacement sampler over a fixed id set.
///
/// Guarantees forward progress: when every id has been used the used-set is
/// cleared and sampling continues (possible repeats across the reset, but
/// never the same id twice consecutively while more than one id exists).
#[derive(Clone, Debug)]
pub struct RandomWalk {
    ids: Vec<DotId>,
    used: Vec<bool>,
    last: Option<usize>,
}

impl RandomWalk {
    /// Sampler over `ids`; an empty set never yields.
    pub fn new(ids: Vec<DotId>) -> Self {
        let used = vec![false; ids.len()];
        Self {
            ids,
            used,
            last: None,
        }
    }

    /// Ids not yet shown since the last reset.
    pub fn remaining(&self) -> usize {
        self.used.iter().filter(|u| !**u).count()
    }

    /// Draws the next id, uniformly among unused ids.
    pub fn next_pick<R: Rng>(&mut self, rng: &mut R) -> Option<DotId> {
        if self.ids.is_empty() {
            return None;
        }
        let mut candidates: Vec<usize> = (0..self.ids.len())
            .filter(|i| !self.used[*i] && Some(*i) != self.last)
            .collect();
        if candidates.is_empty() {
            // Exhausted: clear and keep going, still avoiding an immediate
            // repeat when any alternative exists.
            self.used.fill(false);
            candidates = (0..self.ids.len())
                .filter(|i| Some(*i) != self.last)
                .collect();
            if candidates.is_empty() {
                candidates = vec![0];
            }
        }
        let idx = candidates[rng.gen_range(0..candidates.len())];
        self.used[idx] = true;
        self.last = Some(idx);
        Some(self.ids[idx].clone())
    }
}

// ── Converge-by-distance ───────────────────────────────────────────

/// Every cell of a `rows × cols` region ordered far-to-near toward
/// `target`, ties broken row-major. The renderer uses this to stagger the
/// dim-out of non-selected dots when a card opens.
pub fn converge_order(target: GridPos, rows: u32, cols: u32) -> Vec<GridPos> {
    let mut cells: Vec<GridPos> = (0..rows as i32)
        .flat_map(|r| (0..cols as i32).map(move |c| GridPos::new(r, c)))
        .collect();
    cells.sort_by_key(|p| {
        let dr = p.row - target.row;
        let dc = p.col - target.col;
        (std::cmp::Reverse(dr * dr + dc * dc), p.row, p.col)
    });
    cells
}

// ── Flags → visual targets ─────────────────────────────────────────

/// Derived per-dot display flags, recomputed from the machine's state
/// snapshot — never stored on the entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DotDisplay {
    /// Pointer is over this dot.
    pub is_hovered: bool,
    /// The ripple scan is on this dot.
    pub is_rippling: bool,
    /// The random highlight is on this dot.
    pub is_randomly_selected: bool,
    /// Some dot (any dot) is selected.
    pub is_selected: bool,
    /// This dot is the selected one.
    pub is_clicked_dot: bool,
    /// Narrow viewport + another dot selected: hide this dot.
    pub should_hide: bool,
}

/// Animation targets for one dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetVisual {
    /// Uniform scale.
    pub scale: f32,
    /// 0 = invisible.
    pub opacity: f32,
    /// Emissive boost in `[0, 1]`.
    pub glow: f32,
    /// In-plane nudge; `y` is lift toward the camera.
    pub offset: Vec2,
}

impl Default for TargetVisual {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: 0.7,
            glow: 0.0,
            offset: Vec2::ZERO,
        }
    }
}

/// Pure map from interaction flags to animation targets.
///
/// Precedence: hide > clicked > hovered > random highlight > ripple >
/// dimmed-by-selection > idle.
pub fn display_visual(d: &DotDisplay) -> TargetVisual {
    if d.should_hide {
        return TargetVisual {
            scale: 0.6,
            opacity: 0.0,
            glow: 0.0,
            offset: Vec2::ZERO,
        };
    }
    if d.is_clicked_dot {
        return TargetVisual {
            scale: 1.5,
            opacity: 1.0,
            glow: 1.0,
            offset: Vec2::ZERO,
        };
    }
    if d.is_hovered {
        return TargetVisual {
            scale: 1.35,
            opacity: 1.0,
            glow: 1.0,
            offset: Vec2::new(0.0, 0.3),
        };
    }
    if d.is_randomly_selected {
        return TargetVisual {
            scale: 1.3,
            opacity: 1.0,
            glow: 0.9,
            offset: Vec2::ZERO,
        };
    }
    if d.is_rippling {
        return TargetVisual {
            scale: 1.25,
            opacity: 1.0,
            glow: 0.8,
            offset: Vec2::ZERO,
        };
    }
    if d.is_selected {
        return TargetVisual {
            scale: 0.9,
            opacity: 0.25,
            glow: 0.0,
            offset: Vec2::ZERO,
        };
    }
    TargetVisual::default()
}
