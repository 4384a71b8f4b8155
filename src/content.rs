//! Static site content: hotspot geometry, gallery image lists, redstone
//! showcase items, and block statistics. Paths are relative to the served
//! asset root and are never fetched or validated here.

use crate::gallery::HighlightCard;
use crate::reveal::Hotspot;

pub const HERO_BACKGROUND: &str = "images/render frost pursuit.webp";
pub const HERO_LOGO: &str = "images/logo 2.png";
pub const NAV_LOGO: &str = "images/logo 1.PNG";

pub const DOWNLOAD_URL: &str = "https://www.planetminecraft.com/project/free-to-download-frost-pursuit-a-1k-x-1k-winter-ice-boat-race-map-vanilla-1-20-1/";
pub const TEAM_URL: &str = "https://mc-ctec.org/";
pub const BLOG_PATH: &str = "/redstone-blog";

/// Wrapper-relative hotspot boxes over the hero render. Order doubles as
/// hit-test priority.
pub const HOTSPOTS: &[Hotspot] = &[
    Hotspot {
        id: "spectator-loft",
        top: 0.40,
        left: 0.27,
        width: 0.25,
        height: 0.25,
    },
    Hotspot {
        id: "main-lounge",
        top: 0.21,
        left: 0.495,
        width: 0.20,
        height: 0.20,
    },
    Hotspot {
        id: "cable-car",
        top: 0.85,
        left: 0.75,
        width: 0.15,
        height: 0.20,
    },
];

/// The three renders the showcase crossfades between.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MapViewMode {
    #[default]
    Isometric,
    NoBalloons,
    TopDown,
}

impl MapViewMode {
    pub const ALL: [MapViewMode; 3] = [Self::Isometric, Self::NoBalloons, Self::TopDown];

    pub fn image(self) -> &'static str {
        match self {
            Self::Isometric => "images/isometric 1.png",
            Self::NoBalloons => "images/isometric 4.png",
            Self::TopDown => "images/isometric 2.png",
        }
    }
}

pub struct BlockStat {
    pub count: &'static str,
    pub name: &'static str,
    pub image: &'static str,
}

pub const BLOCK_STATS: &[BlockStat] = &[
    BlockStat {
        count: "3,118,723",
        name: "Packed Ice",
        image: "images/packed ice.webp",
    },
    BlockStat {
        count: "1,479,066",
        name: "Blue Ice",
        image: "images/blue ice.webp",
    },
    BlockStat {
        count: "1,050,334",
        name: "Light Blue Concrete Powder",
        image: "images/light blue concrete powder.webp",
    },
    BlockStat {
        count: "823,695",
        name: "Stone",
        image: "images/stone.webp",
    },
    BlockStat {
        count: "149,209",
        name: "Acacia Log",
        image: "images/acacia log.png",
    },
    BlockStat {
        count: "138,951",
        name: "Tuff",
        image: "images/tuff.webp",
    },
    BlockStat {
        count: "121,562",
        name: "Snow",
        image: "images/snow.webp",
    },
    BlockStat {
        count: "117,669",
        name: "Barrier",
        image: "images/barrier.webp",
    },
    BlockStat {
        count: "117,254",
        name: "Deepslate",
        image: "images/deepslate.webp",
    },
    BlockStat {
        count: "75,828",
        name: "Andesite",
        image: "images/andesite.webp",
    },
];

pub const HIGHLIGHT_CARDS: &[HighlightCard] = &[
    HighlightCard {
        id: "track",
        day_images: &[
            "images/track/day 1.png",
            "images/track/day 2.png",
            "images/track/day 3.png",
            "images/track/day 4.png",
            "images/track/day 5.png",
            "images/track/day 6.png",
            "images/track/day 7.png",
            "images/track/day 8.png",
        ],
        night_images: &[
            "images/track/night 1.png",
            "images/track/night 2.png",
            "images/track/night 3.png",
            "images/track/night 4.png",
            "images/track/night 5.png",
            "images/track/night 6.png",
            "images/track/night 7.png",
            "images/track/night 8.png",
        ],
    },
    HighlightCard {
        id: "main-lounge",
        day_images: &[
            "images/main lounge/day 1.png",
            "images/main lounge/day 2.png",
            "images/main lounge/day 3.png",
            "images/main lounge/day 4.png",
            "images/main lounge/day 5.png",
            "images/main lounge/day 6.png",
        ],
        night_images: &[
            "images/main lounge/night 1.png",
            "images/main lounge/night 2.png",
            "images/main lounge/night 3.png",
            "images/main lounge/night 4.png",
            "images/main lounge/night 5.png",
            "images/main lounge/night 6.png",
        ],
    },
    HighlightCard {
        id: "spectator-loft",
        day_images: &[
            "images/spectator loft/day 1.png",
            "images/spectator loft/day 2.png",
            "images/spectator loft/day 3.png",
            "images/spectator loft/day 4.png",
            "images/spectator loft/day 5.png",
            "images/spectator loft/day 6.png",
            "images/spectator loft/day 7.png",
            "images/spectator loft/day 8.png",
        ],
        night_images: &[
            "images/spectator loft/night 1.png",
            "images/spectator loft/night 2.png",
            "images/spectator loft/night 3.png",
            "images/spectator loft/night 4.png",
            "images/spectator loft/night 5.png",
            "images/spectator loft/night 6.png",
            "images/spectator loft/night 7.png",
            "images/spectator loft/night 8.png",
        ],
    },
    HighlightCard {
        // The caves look the same day and night; both lists share one set.
        id: "ice-caves",
        day_images: &[
            "images/ice caves/2025-11-18_23.47.28.png",
            "images/ice caves/2025-11-18_23.49.01.png",
            "images/ice caves/2025-11-18_23.49.24_2.png",
            "images/ice caves/2025-12-20_01.19.00.png",
            "images/ice caves/2025-12-20_01.19.18.png",
            "images/ice caves/2025-12-20_01.19.31.png",
        ],
        night_images: &[
            "images/ice caves/2025-11-18_23.47.28.png",
            "images/ice caves/2025-11-18_23.49.01.png",
            "images/ice caves/2025-11-18_23.49.24_2.png",
            "images/ice caves/2025-12-20_01.19.00.png",
            "images/ice caves/2025-12-20_01.19.18.png",
            "images/ice caves/2025-12-20_01.19.31.png",
        ],
    },
    HighlightCard {
        id: "cable-car",
        day_images: &[
            "images/cable car/day 1.png",
            "images/cable car/day 2.png",
            "images/cable car/day 3.png",
            "images/cable car/day 4.png",
        ],
        night_images: &[
            "images/cable car/night 1.png",
            "images/cable car/night 2.png",
            "images/cable car/night 3.png",
            "images/cable car/night 4.png",
        ],
    },
    HighlightCard {
        id: "miscellaneous",
        day_images: &[
            "images/miscellaneous/day 1.png",
            "images/miscellaneous/day 2.png",
        ],
        night_images: &[
            "images/miscellaneous/night 1.png",
            "images/miscellaneous/night 2.png",
        ],
    },
];

pub struct RedstoneItem {
    pub src: &'static str,
    pub label: &'static str,
    /// Rendered larger in the scroll column.
    pub large: bool,
}

pub const REDSTONE_IMAGE_DIR: &str = "images/frost pursuit redstone";

pub const REDSTONE_ITEMS: &[RedstoneItem] = &[
    RedstoneItem {
        src: "Overview-min.webp",
        label: "Overview",
        large: false,
    },
    RedstoneItem {
        src: "Main Computations System-min.webp",
        label: "Main Computations System",
        large: true,
    },
    RedstoneItem {
        src: "Initial Race Registration UI-min.webp",
        label: "Initial Race Registration UI",
        large: false,
    },
    RedstoneItem {
        src: "Race Whitelist Login UI-min.webp",
        label: "Race Whitelist Login UI",
        large: false,
    },
    RedstoneItem {
        src: "3-Layer Timer with Shift Registers-min.webp",
        label: "3-Layer Timer with Shift Registers",
        large: false,
    },
    RedstoneItem {
        src: "3-bit Adder-min.webp",
        label: "3-bit Adder",
        large: false,
    },
    RedstoneItem {
        src: "Insertion Sort Module-min.webp",
        label: "Insertion Sort Module",
        large: false,
    },
    RedstoneItem {
        src: "Insertion Sort Unit-min.webp",
        label: "Insertion Sort Unit",
        large: false,
    },
    RedstoneItem {
        src: "Generated Box UI Reverse Loader-min.webp",
        label: "Generated Box UI Reverse Loader",
        large: false,
    },
    RedstoneItem {
        src: "Analog-7 Segment Display-Binary Converter-min.webp",
        label: "Analog-7 Segment Display-Binary Converter",
        large: false,
    },
    RedstoneItem {
        src: "26-Bit Serial Binary Box Transcoder-min.webp",
        label: "26-Bit Serial Binary Box Transcoder",
        large: false,
    },
    RedstoneItem {
        src: "26-Bit 4gt Serial Binary Box Decoder-min.webp",
        label: "26-Bit 4gt Serial Binary Box Decoder",
        large: false,
    },
    RedstoneItem {
        src: "23-Bit Mini Time Display-min.webp",
        label: "23-Bit Mini Time Display",
        large: false,
    },
    RedstoneItem {
        src: "Nether Portal Chunk Loader-min.webp",
        label: "Nether Portal Chunk Loader",
        large: false,
    },
    RedstoneItem {
        src: "10-item Simple Reverser-min.webp",
        label: "10-item Simple Reverser",
        large: false,
    },
    RedstoneItem {
        src: "Process Manager (Priority Queue Based)-min.webp",
        label: "Process Manager (Priority Queue Based)",
        large: false,
    },
    RedstoneItem {
        src: "Modular Display Unit-min.webp",
        label: "Modular Display Unit",
        large: false,
    },
    RedstoneItem {
        src: "Low-Latency Comparator Chain Unit-min.webp",
        label: "Low-Latency Comparator Chain Unit",
        large: false,
    },
    RedstoneItem {
        src: "Latency-Free Analog Downlink (BED Encoded)-min.webp",
        label: "Latency-Free Analog Downlink (BED Encoded)",
        large: false,
    },
    RedstoneItem {
        src: "Instant Item Catcher (Separates Boat and ID)-min.webp",
        label: "Instant Item Catcher (Separates Boat and ID)",
        large: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::DisplayMode;
    use crate::i18n::EN;

    #[test]
    fn hotspot_boxes_are_well_formed() {
        for hotspot in HOTSPOTS {
            assert!((0.0..=1.0).contains(&hotspot.left), "{}", hotspot.id);
            assert!((0.0..=1.0).contains(&hotspot.top), "{}", hotspot.id);
            assert!(hotspot.width > 0.0 && hotspot.height > 0.0, "{}", hotspot.id);
        }
    }

    #[test]
    fn every_card_has_matching_day_and_night_counts() {
        for card in HIGHLIGHT_CARDS {
            assert_eq!(
                card.day_images.len(),
                card.night_images.len(),
                "card {}",
                card.id
            );
            assert!(!card.day_images.is_empty(), "card {}", card.id);
            assert_eq!(card.thumbnail(DisplayMode::Day), card.day_images[0]);
        }
    }

    #[test]
    fn every_card_and_redstone_item_is_translated() {
        for card in HIGHLIGHT_CARDS {
            assert!(
                EN.highlights.cards.iter().any(|text| text.id == card.id),
                "card {} missing copy",
                card.id
            );
        }
        for item in REDSTONE_ITEMS {
            assert!(
                EN.redstone.items.iter().any(|text| text.key == item.label),
                "item {} missing copy",
                item.label
            );
        }
    }

    #[test]
    fn hero_hotspots_have_tooltip_labels() {
        for hotspot in HOTSPOTS {
            assert!(!EN.hero.hotspot_label(hotspot.id).is_empty());
        }
    }
}
