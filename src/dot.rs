//! Dot entity model and grid factories.
//!
//! A [`Dot`] is the canonical representation of one grid cell: identity,
//! position, content binding, and visual / physics / collection sub-records.
//! Everything here is pure — constructors build new values and updaters
//! return new records, so renderers can never alias partial mutations.

use bevy::prelude::{Vec2, Vec3};
use std::fmt;

use crate::content::Artist;
use crate::math::{self, GridPos};

/// Id prefix for the overflow sub-grid namespace.
pub const OVERFLOW_PREFIX: &str = "ov";

/// Tagged dot identifier.
///
/// Replaces the stringly `"row-col"` / `"prefix-row-col"` / slug encoding
/// with a sum type; [`DotId::parse`] and [`fmt::Display`] are the only
/// places the string form exists.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DotId {
    /// Main-grid cell, formatted `"row-col"`.
    Grid {
        /// Unified display row.
        row: i32,
        /// Column.
        col: i32,
    },
    /// Overflow-grid cell, formatted `"ov-row-col"`.
    Overflow {
        /// Unified display row.
        row: i32,
        /// Column.
        col: i32,
    },
    /// Externally named dot (artist slugs, special tiles).
    External {
        /// Opaque slug, used verbatim.
        slug: String,
    },
}

impl DotId {
    /// The row/col encoded in the id, `None` for external slugs.
    ///
    /// Callers treat `None` as "no selection offset to animate" — never an
    /// error.
    pub fn grid_position(&self) -> Option<GridPos> {
        match self {
            Self::Grid { row, col } | Self::Overflow { row, col } => {
                Some(GridPos::new(*row, *col))
            }
            Self::External { .. } => None,
        }
    }

    /// Parses the legacy string form. Empty input yields `None`; anything
    /// that is not `row-col` or `ov-row-col` becomes an external slug.
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        if let Some(rest) = s.strip_prefix("ov-")
            && let Some((row, col)) = parse_row_col(rest)
        {
            return Some(Self::Overflow { row, col });
        }
        if let Some((row, col)) = parse_row_col(s) {
            return Some(Self::Grid { row, col });
        }
        Some(Self::External { slug: s.to_owned() })
    }
}

impl fmt::Display for DotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid { row, col } => write!(f, "{row}-{col}"),
            Self::Overflow { row, col } => write!(f, "{OVERFLOW_PREFIX}-{row}-{col}"),
            Self::External { slug } => f.write_str(slug),
        }
    }
}

fn parse_row_col(s: &str) -> Option<(i32, i32)> {
    let (row, col) = s.split_once('-')?;
    Some((row.parse().ok()?, col.parse().ok()?))
}

/// Interaction state of a dot. Transitions always record the prior state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DotState {
    /// At rest.
    #[default]
    Idle,
    /// Pointer over the dot.
    Hovered,
    /// The dot's card is open.
    Selected,
    /// Lit by the ripple scan.
    Rippling,
    /// Lit by the random highlight.
    Highlighted,
    /// Mid transition between visual targets.
    Animating,
    /// Collected (gamification stub, unused at runtime).
    Collected,
    /// Hidden while another dot's card is open on a narrow viewport.
    Hidden,
}

/// Color channels of a dot. `base` and `glow` derive from grid position;
/// `current` is the only channel the renderer animates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotColor {
    /// Resting color.
    pub base: Vec3,
    /// Pointer-hover color.
    pub hover: Vec3,
    /// Emissive glow color.
    pub glow: Vec3,
    /// What is on screen this frame.
    pub current: Vec3,
}

/// Per-frame visual fields — the only part a renderer reads each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotVisual {
    /// Uniform scale multiplier.
    pub scale: f32,
    /// 0 = invisible, 1 = solid.
    pub opacity: f32,
    /// Rotation in radians (reserved, currently always 0).
    pub rotation: f32,
    /// Emissive boost in `[0, 1]`.
    pub glow_intensity: f32,
}

impl Default for DotVisual {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: 0.7,
            rotation: 0.0,
            glow_intensity: 0.0,
        }
    }
}

/// Forward-compatibility physics record. No simulation loop drives this;
/// `is_static` is always true in the current scope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotPhysics {
    /// Placeholder velocity.
    pub velocity: Vec2,
    /// Placeholder mass.
    pub mass: f32,
    /// Always true.
    pub is_static: bool,
}

impl Default for DotPhysics {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            mass: 1.0,
            is_static: true,
        }
    }
}

/// What kind of card a dot opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    /// Ordinary content card.
    Navigation,
    /// Artist gallery card.
    Artist,
    /// Special link tile: navigates, never opens a card.
    Special,
}

/// Content binding of a dot. `None` on the entity means the cell is a
/// visual spacer — not clickable, not collectible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotContent {
    /// Content table key (or artist slug).
    pub key: String,
    /// Display label.
    pub label: String,
    /// Card kind.
    pub kind: ContentKind,
    /// Route or external URL.
    pub url: String,
}

/// Gamification metadata. Stubbed: collectible iff content is present,
/// nothing collects dots at runtime.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DotCollection {
    /// Whether the dot can be collected at all.
    pub collectible: bool,
    /// Who collected it.
    pub collected_by: Option<String>,
    /// Collection timestamp (seconds).
    pub collected_at: Option<f64>,
    /// Where the collection came from.
    pub source: Option<String>,
    /// Point value.
    pub value: u32,
}

/// The atomic interactive unit of the grid.
///
/// `id` and `grid_position` are immutable after creation; all other fields
/// are replaced wholesale by the updaters below.
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    /// Stable identity, unique within its sub-grid namespace.
    pub id: DotId,
    /// Grid slot (never changes).
    pub grid_position: GridPos,
    /// Current world position.
    pub world_position: Vec2,
    /// Position being animated toward.
    pub target_position: Vec2,
    /// Color channels.
    pub color: DotColor,
    /// Per-frame visual fields.
    pub visual: DotVisual,
    /// Inert physics record.
    pub physics: DotPhysics,
    /// Current interaction state.
    pub state: DotState,
    /// State before the last transition.
    pub previous_state: DotState,
    /// Card binding, `None` for spacers.
    pub content: Option<DotContent>,
    /// Gamification stub.
    pub collection: DotCollection,
}

// ── Position-derived color ─────────────────────────────────────────

/// Zone endpoint colors: one `(left, right)` pair per row, rows past the
/// table clamp to the last zone.
const ZONE_COLORS: [([f32; 3], [f32; 3]); 5] = [
    ([0.98, 0.45, 0.35], [0.95, 0.78, 0.25]), // coral → gold
    ([0.95, 0.78, 0.25], [0.45, 0.90, 0.65]), // gold → mint
    ([0.45, 0.90, 0.65], [0.30, 0.80, 0.95]), // mint → cyan
    ([0.30, 0.80, 0.95], [0.60, 0.45, 0.95]), // cyan → violet
    ([0.60, 0.45, 0.95], [0.95, 0.35, 0.75]), // violet → magenta
];

/// Deterministic `(base, glow)` colors for a grid position.
///
/// The row picks a zone (clamped to the last one); the column factor
/// `col / (total_cols - 1)` interpolates between the zone's two endpoint
/// colors. Glow is the base pushed toward white.
pub fn position_color(row: i32, col: i32, total_cols: u32) -> (Vec3, Vec3) {
    let zone = (row.max(0) as usize).min(ZONE_COLORS.len() - 1);
    let (left, right) = ZONE_COLORS[zone];
    let factor = if total_cols > 1 {
        (col.max(0) as f32 / (total_cols - 1) as f32).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let base = Vec3::new(
        math::lerp(left[0], right[0], factor),
        math::lerp(left[1], right[1], factor),
        math::lerp(left[2], right[2], factor),
    );
    let glow = base.lerp(Vec3::ONE, 0.35);
    (base, glow)
}

// ── Factories ──────────────────────────────────────────────────────

/// Layout parameters shared by the grid factories.
#[derive(Clone, Copy, Debug)]
pub struct GridOpts {
    /// Cell edge length in world units.
    pub cell_size: f32,
    /// Gap between cells.
    pub gap: f32,
    /// Columns in the sub-grid (drives the color factor).
    pub total_cols: u32,
    /// Added to array rows to produce unified display rows.
    pub row_offset: i32,
    /// Use the overflow id namespace.
    pub overflow: bool,
}

impl Default for GridOpts {
    fn default() -> Self {
        Self {
            cell_size: 2.0,
            gap: 0.6,
            total_cols: 5,
            row_offset: 0,
            overflow: false,
        }
    }
}

impl Dot {
    /// Canonical constructor: position-derived colors, default visual and
    /// physics records, collectible iff content is present.
    pub fn new(
        id: DotId,
        pos: GridPos,
        content: Option<DotContent>,
        value: u32,
        opts: &GridOpts,
    ) -> Self {
        let world = math::grid_to_world(pos, opts.cell_size, opts.gap);
        let (base, glow) = position_color(pos.row, pos.col, opts.total_cols);
        let collectible = content.is_some();
        Self {
            id,
            grid_position: pos,
            world_position: world,
            target_position: world,
            color: DotColor {
                base,
                hover: base.lerp(Vec3::ONE, 0.55),
                glow,
                current: base,
            },
            visual: DotVisual::default(),
            physics: DotPhysics::default(),
            state: DotState::Idle,
            previous_state: DotState::Idle,
            content,
            collection: DotCollection {
                collectible,
                value,
                ..DotCollection::default()
            },
        }
    }
}

/// A clickable content dot. `row` is the unified display row (offset
/// already applied by [`dot_grid`]). Content type defaults to navigation;
/// an unknown key still yields a dot, with the key standing in as label.
pub fn grid_dot(row: i32, col: i32, key: &str, opts: &GridOpts) -> Dot {
    let id = if opts.overflow {
        DotId::Overflow { row, col }
    } else {
        DotId::Grid { row, col }
    };
    let (label, url) = match crate::content::content_info(key) {
        Some(info) => (info.text.to_owned(), info.link.to_owned()),
        None => (key.to_owned(), format!("/{key}")),
    };
    let content = DotContent {
        key: key.to_owned(),
        label,
        kind: ContentKind::Navigation,
        url,
    };
    Dot::new(id, GridPos::new(row, col), Some(content), 1, opts)
}

/// A spacer dot: no content, value 0, not collectible.
pub fn empty_dot(row: i32, col: i32, opts: &GridOpts) -> Dot {
    let id = if opts.overflow {
        DotId::Overflow { row, col }
    } else {
        DotId::Grid { row, col }
    };
    Dot::new(id, GridPos::new(row, col), None, 0, opts)
}

/// An artist-row dot.
///
/// Special-link tiles use their literal slug as id, type `Special`, point
/// value 2; ordinary artists derive the slug from the name, type `Artist`,
/// point value 5.
pub fn artist_dot(row: i32, col: i32, artist: &Artist, opts: &GridOpts) -> Dot {
    let (slug, kind, url, value) = match artist.special_route {
        Some(route) => (
            artist.slug.unwrap_or(artist.name).to_owned(),
            ContentKind::Special,
            route.to_owned(),
            2,
        ),
        None => {
            let slug = slugify(artist.name);
            let url = format!("/artists/{slug}");
            (slug, ContentKind::Artist, url, 5)
        }
    };
    let content = DotContent {
        key: slug.clone(),
        label: artist.name.to_owned(),
        kind,
        url,
    };
    Dot::new(
        DotId::External { slug },
        GridPos::new(row, col),
        Some(content),
        value,
        opts,
    )
}

/// Maps a 2-D content-key array to a 2-D dot array.
///
/// `opts.row_offset` shifts display rows; falsy (empty) keys become
/// spacers. Ids derive from the display row, not the array row.
pub fn dot_grid<R, K>(rows: &[R], opts: &GridOpts) -> Vec<Vec<Dot>>
where
    R: AsRef<[K]>,
    K: AsRef<str>,
{
    rows.iter()
        .enumerate()
        .map(|(r, keys)| {
            keys.as_ref()
                .iter()
                .enumerate()
                .map(|(c, key)| {
                    let row = r as i32 + opts.row_offset;
                    let key = key.as_ref();
                    if key.is_empty() {
                        empty_dot(row, c as i32, opts)
                    } else {
                        grid_dot(row, c as i32, key, opts)
                    }
                })
                .collect()
        })
        .collect()
}

/// Chunks a flat artist list into rows of `cols`, preserving input order.
/// A short final row is allowed, never padded.
pub fn artist_grid(tiles: &[&Artist], cols: usize, opts: &GridOpts) -> Vec<Vec<Dot>> {
    tiles
        .chunks(cols.max(1))
        .enumerate()
        .map(|(r, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(c, a)| artist_dot(r as i32 + opts.row_offset, c as i32, a, opts))
                .collect()
        })
        .collect()
}

// ── Slugging ───────────────────────────────────────────────────────

/// URL slug for an artist name: lowercase, non-alphanumeric runs collapsed
/// to single hyphens, no leading or trailing hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

// ── Updaters (return new records) ──────────────────────────────────

impl Dot {
    /// New record in `state`, recording the prior state.
    pub fn with_state(&self, state: DotState) -> Dot {
        Dot {
            previous_state: self.state,
            state,
            ..self.clone()
        }
    }

    /// New record with replaced visual fields.
    pub fn with_visual(&self, visual: DotVisual) -> Dot {
        Dot {
            visual,
            ..self.clone()
        }
    }

    /// New collected record; forces `state = Collected`.
    pub fn collect(&self, by: &str, at: f64, source: &str) -> Dot {
        Dot {
            previous_state: self.state,
            state: DotState::Collected,
            collection: DotCollection {
                collected_by: Some(by.to_owned()),
                collected_at: Some(at),
                source: Some(source.to_owned()),
                ..self.collection.clone()
            },
            ..self.clone()
        }
    }
}

// ── Search helpers ─────────────────────────────────────────────────

/// Linear search for a dot by id. O(n) over the sub-grid.
pub fn find_dot_by_id<'a>(grid: &'a [Vec<Dot>], id: &DotId) -> Option<&'a Dot> {
    grid.iter().flatten().find(|d| &d.id == id)
}

/// Artist record behind a slug, explicit slugs checked before derived
/// ones. `None` for slugs that belong to no tile.
pub fn artist_for_slug(slug: &str) -> Option<&'static Artist> {
    crate::content::artist_tiles()
        .into_iter()
        .find(|a| match a.slug {
            Some(s) => s == slug,
            None => slugify(a.name) == slug,
        })
}

/// Linear search for a dot by content key.
pub fn find_by_content_key<'a>(grid: &'a [Vec<Dot>], key: &str) -> Option<&'a Dot> {
    grid.iter()
        .flatten()
        .find(|d| d.content.as_ref().is_some_and(|c| c.key == key))
}

/// Flattens a 2-D grid into row-major references.
pub fn flatten_grid(grid: &[Vec<Dot>]) -> Vec<&Dot> {
    grid.iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn opts() -> GridOpts {
        GridOpts::default()
    }

    // ── DotId ───────────────────────────────────────────────────────

    #[test]
    fn id_format_and_parse_roundtrip() {
        let ids = [
            DotId::Grid { row: 3, col: 1 },
            DotId::Overflow { row: 5, col: 4 },
            DotId::External {
                slug: "mara-quist".into(),
            },
        ];
        for id in ids {
            let s = id.to_string();
            assert_eq!(DotId::parse(&s), Some(id), "roundtrip failed for {s}");
        }
    }

    #[test]
    fn malformed_id_degrades_to_external_slug() {
        // Cannot be parsed into row/col — becomes a slug, never an error.
        let id = DotId::parse("not-a-position").unwrap();
        assert!(matches!(id, DotId::External { .. }));
        assert_eq!(id.grid_position(), None);
    }

    #[test]
    fn empty_id_parses_to_none() {
        assert_eq!(DotId::parse(""), None);
    }

    #[test]
    fn grid_position_extraction() {
        assert_eq!(
            DotId::Grid { row: 2, col: 4 }.grid_position(),
            Some(GridPos::new(2, 4))
        );
        assert_eq!(
            DotId::Overflow { row: 6, col: 0 }.grid_position(),
            Some(GridPos::new(6, 0))
        );
    }

    // ── position_color ──────────────────────────────────────────────

    #[test]
    fn color_is_deterministic() {
        for row in 0..5 {
            for col in 0..5 {
                assert_eq!(
                    position_color(row, col, 5),
                    position_color(row, col, 5),
                    "color not deterministic at ({row},{col})"
                );
            }
        }
    }

    #[test]
    fn color_stays_within_zone_endpoints() {
        for row in 0..5 {
            let (left, right) = ZONE_COLORS[row as usize];
            for col in 0..5 {
                let (base, _) = position_color(row, col, 5);
                for ch in 0..3 {
                    let lo = left[ch].min(right[ch]);
                    let hi = left[ch].max(right[ch]);
                    let v = [base.x, base.y, base.z][ch];
                    assert!(
                        (lo..=hi).contains(&v),
                        "channel {ch} out of range at ({row},{col}): {v}"
                    );
                }
            }
        }
    }

    #[test]
    fn rows_past_the_table_clamp_to_last_zone() {
        assert_eq!(position_color(12, 2, 5), position_color(4, 2, 5));
    }

    #[test]
    fn single_column_grid_uses_left_endpoint() {
        let (base, _) = position_color(0, 0, 1);
        let left = ZONE_COLORS[0].0;
        assert!((base.x - left[0]).abs() < 1e-6);
    }

    // ── factories ───────────────────────────────────────────────────

    #[test]
    fn grid_dot_is_collectible_with_content() {
        let d = grid_dot(2, 1, "about", &opts());
        assert!(d.content.is_some());
        assert!(d.collection.collectible);
        assert_eq!(d.id, DotId::Grid { row: 2, col: 1 });
    }

    #[test]
    fn empty_dot_is_a_spacer() {
        let d = empty_dot(5, 2, &GridOpts {
            overflow: true,
            ..opts()
        });
        assert!(d.content.is_none());
        assert!(!d.collection.collectible);
        assert_eq!(d.collection.value, 0);
        assert_eq!(d.id, DotId::Overflow { row: 5, col: 2 });
    }

    #[test]
    fn world_position_matches_grid_math() {
        let o = opts();
        let d = grid_dot(3, 2, "zine", &o);
        let expected = math::grid_to_world(GridPos::new(3, 2), o.cell_size, o.gap);
        assert_eq!(d.world_position, expected);
        assert_eq!(d.target_position, expected);
    }

    #[test]
    fn physics_is_inert() {
        let d = grid_dot(0, 0, "about", &opts());
        assert!(d.physics.is_static);
        assert_eq!(d.physics.velocity, Vec2::ZERO);
    }

    #[test]
    fn ordinary_artist_dot_slugs_the_name() {
        let d = artist_dot(0, 0, &content::ARTISTS[0], &opts());
        let c = d.content.as_ref().unwrap();
        assert_eq!(c.kind, ContentKind::Artist);
        assert_eq!(c.key, "mara-quist");
        assert_eq!(c.url, "/artists/mara-quist");
        assert_eq!(d.collection.value, 5);
        assert_eq!(
            d.id,
            DotId::External {
                slug: "mara-quist".into()
            }
        );
    }

    #[test]
    fn special_tile_keeps_its_literal_slug() {
        let d = artist_dot(1, 4, &content::SUBSCRIBE_TILE, &opts());
        let c = d.content.as_ref().unwrap();
        assert_eq!(c.kind, ContentKind::Special);
        assert_eq!(c.url, "/subscribe");
        assert_eq!(d.collection.value, 2);
        assert_eq!(
            d.id,
            DotId::External {
                slug: "subscribe".into()
            }
        );
    }

    #[test]
    fn dot_grid_applies_row_offset_to_ids() {
        let rows = [["about", ""], ["press", "contact"]];
        let grid = dot_grid(&rows, &GridOpts {
            row_offset: 2,
            ..opts()
        });
        assert_eq!(grid[0][0].id, DotId::Grid { row: 2, col: 0 });
        assert_eq!(grid[1][1].id, DotId::Grid { row: 3, col: 1 });
        assert!(grid[0][1].content.is_none(), "empty key must be a spacer");
    }

    #[test]
    fn artist_grid_chunks_preserving_order() {
        let tiles = content::artist_tiles();
        let grid = artist_grid(&tiles, 4, &opts());
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0].len(), 4);
        assert_eq!(grid[2].len(), 2, "short final row is allowed");
        let first = grid[0][0].content.as_ref().unwrap();
        assert_eq!(first.label, content::ARTISTS[0].name);
    }

    // ── slugify ─────────────────────────────────────────────────────

    #[test]
    fn slug_collapses_non_alphanumeric_runs() {
        assert_eq!(slugify("Jane D'Oh!!"), "jane-d-oh");
    }

    #[test]
    fn slug_trims_edges_and_lowercases() {
        assert_eq!(slugify("  Pim van Dael  "), "pim-van-dael");
        assert_eq!(slugify("ALLCAPS"), "allcaps");
        assert_eq!(slugify("---"), "");
    }

    // ── updaters ────────────────────────────────────────────────────

    #[test]
    fn with_state_records_previous() {
        let d = grid_dot(2, 0, "about", &opts());
        let hovered = d.with_state(DotState::Hovered);
        assert_eq!(hovered.state, DotState::Hovered);
        assert_eq!(hovered.previous_state, DotState::Idle);
        let selected = hovered.with_state(DotState::Selected);
        assert_eq!(selected.previous_state, DotState::Hovered);
        // original untouched
        assert_eq!(d.state, DotState::Idle);
    }

    #[test]
    fn collect_forces_collected_state() {
        let d = grid_dot(2, 0, "about", &opts());
        let c = d.collect("visitor", 12.5, "click");
        assert_eq!(c.state, DotState::Collected);
        assert_eq!(c.collection.collected_by.as_deref(), Some("visitor"));
        assert_eq!(c.collection.collected_at, Some(12.5));
        assert_eq!(c.collection.value, d.collection.value);
    }

    // ── search helpers ──────────────────────────────────────────────

    #[test]
    fn find_and_flatten() {
        let grid = dot_grid(&content::MAIN_ROWS, &GridOpts {
            row_offset: 2,
            ..opts()
        });
        let id = DotId::Grid { row: 3, col: 4 };
        let found = find_dot_by_id(&grid, &id).unwrap();
        assert_eq!(found.content.as_ref().unwrap().key, "contact");
        assert_eq!(flatten_grid(&grid).len(), 15);
        assert!(find_dot_by_id(&grid, &DotId::Grid { row: 9, col: 9 }).is_none());
    }

    #[test]
    fn find_by_content_key_is_a_linear_search() {
        let grid = dot_grid(&content::MAIN_ROWS, &GridOpts {
            row_offset: 2,
            ..opts()
        });
        let d = find_by_content_key(&grid, "radio").unwrap();
        assert_eq!(d.id, DotId::Grid { row: 3, col: 2 });
        assert!(find_by_content_key(&grid, "nope").is_none());
    }
}
