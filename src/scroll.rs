//! Scroll-derived navbar and hero state.
//!
//! Pure derivations only; the rendering layer samples the DOM once per
//! animation frame and feeds measurements in.

/// Fixed reference line from the viewport top that a region must straddle
/// to claim the navbar theme.
pub const NAVBAR_OFFSET: f64 = 80.0;
/// Scroll offset past which the navbar switches to its solid treatment.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
pub const PARALLAX_FACTOR: f64 = 0.4;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NavTheme {
    #[default]
    Default,
    Cyan,
    Redstone,
}

impl NavTheme {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Cyan => Some("cyan-theme"),
            Self::Redstone => Some("redstone-theme"),
        }
    }
}

/// Vertical extent of a page region in viewport coordinates. `None` at the
/// call sites means the region is not mounted yet.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RegionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl RegionBounds {
    fn straddles(self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Measured bounds of the named regions the navbar reacts to.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PageRegions {
    pub showcase: Option<RegionBounds>,
    pub highlights: Option<RegionBounds>,
    pub redstone: Option<RegionBounds>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ScrollState {
    pub scrolled: bool,
    pub theme: NavTheme,
}

/// Redstone outranks the cyan sections; an unmounted region is never current.
pub fn derive_theme(regions: &PageRegions) -> NavTheme {
    let is_current = |bounds: Option<RegionBounds>| {
        bounds.is_some_and(|bounds| bounds.straddles(NAVBAR_OFFSET))
    };

    if is_current(regions.redstone) {
        NavTheme::Redstone
    } else if is_current(regions.showcase) || is_current(regions.highlights) {
        NavTheme::Cyan
    } else {
        NavTheme::Default
    }
}

pub fn derive_scroll_state(scroll_y: f64, regions: &PageRegions) -> ScrollState {
    ScrollState {
        scrolled: scroll_y > SCROLLED_THRESHOLD,
        theme: derive_theme(regions),
    }
}

/// The hero copy fades out once the page is scrolled past half the hero.
pub fn hero_text_hidden(scroll_y: f64, hero_height: f64) -> bool {
    scroll_y > hero_height * 0.5
}

/// Parallax translation for the hero background. `None` while the hero is
/// off-screen; the previous transform is left as-is since it is not visible.
pub fn parallax_offset(scroll_y: f64, hero_height: f64) -> Option<f64> {
    (scroll_y < hero_height).then(|| scroll_y * PARALLAX_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(top: f64, bottom: f64) -> Option<RegionBounds> {
        Some(RegionBounds { top, bottom })
    }

    #[test]
    fn no_region_straddling_the_line_keeps_default_theme() {
        let regions = PageRegions {
            showcase: bounds(200.0, 900.0),
            highlights: bounds(900.0, 1600.0),
            redstone: bounds(1600.0, 2400.0),
        };
        assert_eq!(derive_theme(&regions), NavTheme::Default);
    }

    #[test]
    fn showcase_under_the_reference_line_yields_cyan() {
        let regions = PageRegions {
            showcase: bounds(-100.0, 500.0),
            ..PageRegions::default()
        };
        assert_eq!(derive_theme(&regions), NavTheme::Cyan);
    }

    #[test]
    fn highlights_alone_also_yields_cyan() {
        let regions = PageRegions {
            highlights: bounds(0.0, 400.0),
            ..PageRegions::default()
        };
        assert_eq!(derive_theme(&regions), NavTheme::Cyan);
    }

    #[test]
    fn redstone_wins_over_cyan_sections() {
        let regions = PageRegions {
            showcase: bounds(-100.0, 500.0),
            redstone: bounds(-50.0, 300.0),
            highlights: None,
        };
        assert_eq!(derive_theme(&regions), NavTheme::Redstone);
    }

    #[test]
    fn region_exclusively_around_the_line_claims_the_theme() {
        // Reference line at 80px sits inside redstone only.
        let regions = PageRegions {
            showcase: bounds(500.0, 1200.0),
            highlights: None,
            redstone: bounds(-200.0, 400.0),
        };
        assert_eq!(derive_theme(&regions), NavTheme::Redstone);

        // Scrolled past it into neutral space.
        let past = PageRegions {
            showcase: bounds(900.0, 1600.0),
            highlights: None,
            redstone: bounds(200.0, 800.0),
        };
        assert_eq!(derive_theme(&past), NavTheme::Default);
    }

    #[test]
    fn unmounted_regions_are_never_current() {
        assert_eq!(derive_theme(&PageRegions::default()), NavTheme::Default);
    }

    #[test]
    fn scrolled_flag_trips_past_threshold() {
        let regions = PageRegions::default();
        assert!(!derive_scroll_state(0.0, &regions).scrolled);
        assert!(!derive_scroll_state(50.0, &regions).scrolled);
        assert!(derive_scroll_state(51.0, &regions).scrolled);
    }

    #[test]
    fn hero_text_hides_past_half_height() {
        assert!(!hero_text_hidden(0.0, 800.0));
        assert!(!hero_text_hidden(400.0, 800.0));
        assert!(hero_text_hidden(401.0, 800.0));
    }

    #[test]
    fn parallax_applies_only_while_hero_is_on_screen() {
        assert_eq!(parallax_offset(0.0, 800.0), Some(0.0));
        assert_eq!(parallax_offset(500.0, 800.0), Some(200.0));
        assert_eq!(parallax_offset(800.0, 800.0), None);
        assert_eq!(parallax_offset(2000.0, 800.0), None);
    }
}
