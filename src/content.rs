//! Static content, palette, and artist source tables.
//!
//! Pure data consumed by the grid factories and the card renderer. Nothing
//! in here carries logic beyond table lookups; the interaction machine never
//! reads these tables directly.

/// A content card's static payload.
#[derive(Clone, Copy, Debug)]
pub struct ContentInfo {
    /// Card body text.
    pub text: &'static str,
    /// Route pushed when the card's dot is clicked.
    pub link: &'static str,
    /// Optional attribution line.
    pub created_by: Option<&'static str>,
    /// Gallery image slugs, empty for text-only cards.
    pub images: &'static [&'static str],
}

/// Main content region: 3 rows of 5 keys, all clickable.
pub const MAIN_ROWS: [[&str; 5]; 3] = [
    ["about", "projects", "zine", "events", "shop"],
    ["press", "residency", "radio", "archive", "contact"],
    ["mixes", "prints", "stickers", "wholesale", "faq"],
];

/// Overflow region: 2 rows of 5 keys; empty strings are visual spacers.
pub const OVERFLOW_ROWS: [[&str; 5]; 2] = [
    ["colophon", "", "rss", "", "links"],
    ["", "privacy", "", "credits", ""],
];

/// Static card payload for a content key, `None` for unknown keys.
pub fn content_info(key: &str) -> Option<ContentInfo> {
    let info = match key {
        "about" => ContentInfo {
            text: "Halftone is a rotating collective of nine artists sharing \
                   a print studio and a mailing list.",
            link: "/about",
            created_by: None,
            images: &[],
        },
        "projects" => ContentInfo {
            text: "Current and past group projects, open calls included.",
            link: "/projects",
            created_by: None,
            images: &["projects-grid", "projects-wall"],
        },
        "zine" => ContentInfo {
            text: "A quarterly riso zine. Issue seven is at the printer.",
            link: "/zine",
            created_by: Some("the zine committee"),
            images: &["zine-7-cover"],
        },
        "events" => ContentInfo {
            text: "Openings, print fairs, and studio nights.",
            link: "/events",
            created_by: None,
            images: &[],
        },
        "shop" => ContentInfo {
            text: "Prints, shirts, and leftovers from fairs.",
            link: "/shop",
            created_by: None,
            images: &[],
        },
        "press" => ContentInfo {
            text: "Clippings and interviews.",
            link: "/press",
            created_by: None,
            images: &[],
        },
        "residency" => ContentInfo {
            text: "One desk, three months, no rent. Applications open twice \
                   a year.",
            link: "/residency",
            created_by: None,
            images: &[],
        },
        "radio" => ContentInfo {
            text: "Monthly broadcast from the studio corner.",
            link: "/radio",
            created_by: Some("dot & wave"),
            images: &[],
        },
        "archive" => ContentInfo {
            text: "Everything we have scanned so far.",
            link: "/archive",
            created_by: None,
            images: &[],
        },
        "contact" => ContentInfo {
            text: "studio@halftone.example — or the form on the subscribe \
                   card.",
            link: "/contact",
            created_by: None,
            images: &[],
        },
        "mixes" => ContentInfo {
            text: "Companion mixes for each zine issue.",
            link: "/mixes",
            created_by: None,
            images: &[],
        },
        "prints" => ContentInfo {
            text: "Editioned riso and screen prints.",
            link: "/prints",
            created_by: None,
            images: &["prints-drawer"],
        },
        "stickers" => ContentInfo {
            text: "Free with every order until the box runs out.",
            link: "/stickers",
            created_by: None,
            images: &[],
        },
        "wholesale" => ContentInfo {
            text: "Stock the zine in your shop.",
            link: "/wholesale",
            created_by: None,
            images: &[],
        },
        "faq" => ContentInfo {
            text: "Shipping times, returns, and how to join.",
            link: "/faq",
            created_by: None,
            images: &[],
        },
        "colophon" => ContentInfo {
            text: "Set in whatever the browser gives you. Dots by hand.",
            link: "/colophon",
            created_by: None,
            images: &[],
        },
        "rss" => ContentInfo {
            text: "Yes, there is a feed.",
            link: "/rss",
            created_by: None,
            images: &[],
        },
        "links" => ContentInfo {
            text: "Friends of the studio.",
            link: "/links",
            created_by: None,
            images: &[],
        },
        "privacy" => ContentInfo {
            text: "We store your email to send the letter. That is all.",
            link: "/privacy",
            created_by: None,
            images: &[],
        },
        "credits" => ContentInfo {
            text: "Site by the collective, animated dots included.",
            link: "/credits",
            created_by: None,
            images: &[],
        },
        "subscribe" => ContentInfo {
            text: "One letter a month: new prints, open calls, studio news.",
            link: "/subscribe",
            created_by: None,
            images: &[],
        },
        _ => return None,
    };
    Some(info)
}

// ── Palette ────────────────────────────────────────────────────────

/// Fixed palette of 8 named colors (linear RGB triples).
pub const PALETTE: [(&str, [f32; 3]); 8] = [
    ("coral", [0.98, 0.45, 0.35]),
    ("gold", [0.95, 0.78, 0.25]),
    ("mint", [0.45, 0.90, 0.65]),
    ("cyan", [0.30, 0.80, 0.95]),
    ("violet", [0.60, 0.45, 0.95]),
    ("magenta", [0.95, 0.35, 0.75]),
    ("lime", [0.70, 0.92, 0.30]),
    ("ink", [0.12, 0.12, 0.18]),
];

/// Rendering accent for a content key. Unknown keys fall back to `ink`.
pub fn content_color(key: &str) -> &'static str {
    match key {
        "about" | "press" | "faq" => "coral",
        "projects" | "archive" | "prints" => "cyan",
        "zine" | "radio" | "mixes" => "violet",
        "events" | "residency" => "gold",
        "shop" | "stickers" | "wholesale" => "mint",
        "subscribe" | "contact" => "magenta",
        "colophon" | "rss" | "links" | "privacy" | "credits" => "lime",
        _ => "ink",
    }
}

/// Complementary pairing used for card chrome.
pub fn complementary(color: &str) -> &'static str {
    match color {
        "coral" => "cyan",
        "gold" => "violet",
        "mint" => "magenta",
        "cyan" => "coral",
        "violet" => "gold",
        "magenta" => "mint",
        "lime" => "ink",
        _ => "lime",
    }
}

/// Linear RGB triple for a palette name, `ink` for unknown names.
pub fn palette_rgb(name: &str) -> [f32; 3] {
    PALETTE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, rgb)| *rgb)
        .unwrap_or(PALETTE[7].1)
}

// ── Artist source ──────────────────────────────────────────────────

/// Externally supplied artist record.
#[derive(Clone, Copy, Debug)]
pub struct Artist {
    /// Display name; slugged for routes unless `slug` is set.
    pub name: &'static str,
    /// Explicit slug, used verbatim for special-link tiles.
    pub slug: Option<&'static str>,
    /// Short bio shown on the artist card.
    pub bio: &'static str,
    /// Artwork image slugs.
    pub artwork: &'static [&'static str],
    /// Headshot image slugs.
    pub headshots: &'static [&'static str],
    /// Optional project blurb.
    pub project_description: Option<&'static str>,
    /// Optional price line for current work.
    pub price: Option<&'static str>,
    /// Optional external website.
    pub website: Option<&'static str>,
    /// Optional instagram handle.
    pub instagram: Option<&'static str>,
    /// Set for special-link tiles: clicking navigates here, no card opens.
    pub special_route: Option<&'static str>,
}

const fn artist(
    name: &'static str,
    bio: &'static str,
    artwork: &'static [&'static str],
) -> Artist {
    Artist {
        name,
        slug: None,
        bio,
        artwork,
        headshots: &[],
        project_description: None,
        price: None,
        website: None,
        instagram: None,
        special_route: None,
    }
}

/// The nine artists feeding the artist sub-grid, input order preserved.
pub const ARTISTS: [Artist; 9] = [
    artist(
        "Mara Quist",
        "Riso prints about weather nobody ordered.",
        &["quist-fog", "quist-sleet"],
    ),
    artist(
        "Jonas Feld",
        "Letterpress and very patient linework.",
        &["feld-lines"],
    ),
    artist("Ada Hart", "Collage from the studio's paper bin.", &["hart-bin"]),
    artist(
        "Pim van Dael",
        "Screen prints of buildings that no longer exist.",
        &["dael-block-a", "dael-block-b"],
    ),
    artist("Noor Eleni", "Ceramics, mostly cups, all crooked.", &["eleni-cups"]),
    artist(
        "Theo Brandt",
        "Photograms and other darkroom accidents.",
        &["brandt-gram"],
    ),
    artist("Iris Kova", "Textile pieces dyed in the yard.", &["kova-yard"]),
    artist(
        "Sam Oduya",
        "Zine comics drawn on the night bus.",
        &["oduya-bus-1", "oduya-bus-2"],
    ),
    artist("Lene Vox", "Sound pieces for small rooms.", &["vox-room"]),
];

/// The special Subscribe tile appended to the artist row.
pub const SUBSCRIBE_TILE: Artist = Artist {
    name: "Subscribe",
    slug: Some("subscribe"),
    bio: "",
    artwork: &[],
    headshots: &[],
    project_description: None,
    price: None,
    website: None,
    instagram: None,
    special_route: Some("/subscribe"),
};

/// Tiles for the artist sub-grid: the first nine artists plus the
/// subscribe tile, in display order.
pub fn artist_tiles() -> Vec<&'static Artist> {
    ARTISTS.iter().chain(std::iter::once(&SUBSCRIBE_TILE)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_main_key_resolves() {
        for row in MAIN_ROWS {
            for key in row {
                assert!(content_info(key).is_some(), "missing content for {key}");
            }
        }
    }

    #[test]
    fn every_nonempty_overflow_key_resolves() {
        for row in OVERFLOW_ROWS {
            for key in row {
                if !key.is_empty() {
                    assert!(content_info(key).is_some(), "missing content for {key}");
                }
            }
        }
    }

    #[test]
    fn unknown_key_is_a_silent_miss() {
        assert!(content_info("does-not-exist").is_none());
    }

    #[test]
    fn artist_tiles_are_nine_plus_subscribe() {
        let tiles = artist_tiles();
        assert_eq!(tiles.len(), 10);
        assert!(tiles[9].special_route.is_some());
        assert!(tiles[..9].iter().all(|a| a.special_route.is_none()));
    }

    #[test]
    fn palette_lookup_falls_back_to_ink() {
        assert_eq!(palette_rgb("not-a-color"), PALETTE[7].1);
        assert_eq!(palette_rgb("coral"), PALETTE[0].1);
    }

    #[test]
    fn complementary_is_drawn_from_the_palette() {
        for (name, _) in PALETTE {
            let comp = complementary(name);
            assert!(PALETTE.iter().any(|(n, _)| *n == comp));
        }
    }
}
