//! Highlight gallery state machine.
//!
//! The modal is either closed or open on one card with a valid image index
//! for the current day/night mode. All transitions go through the methods
//! here; invalid requests leave the state untouched.

/// Two image lists exist per card; the toggle affects the whole gallery.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DisplayMode {
    #[default]
    Day,
    Night,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    pub fn is_day(self) -> bool {
        matches!(self, Self::Day)
    }

    pub fn section_class(self) -> &'static str {
        match self {
            Self::Day => "light-mode",
            Self::Night => "dark-mode",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HighlightCard {
    pub id: &'static str,
    pub day_images: &'static [&'static str],
    pub night_images: &'static [&'static str],
}

impl HighlightCard {
    pub fn images(&self, mode: DisplayMode) -> &'static [&'static str] {
        match mode {
            DisplayMode::Day => self.day_images,
            DisplayMode::Night => self.night_images,
        }
    }

    /// Index 0 doubles as the card thumbnail.
    pub fn thumbnail(&self, mode: DisplayMode) -> &'static str {
        self.images(mode).first().copied().unwrap_or("")
    }
}

/// Randomness seam for the hover preview, so tests can drive it
/// deterministically. `pick(bound)` returns a value in `0..bound`.
pub trait PreviewRng {
    fn pick(&mut self, bound: usize) -> usize;
}

/// Pseudo-random preview image for a hovered card: any image but the
/// thumbnail at index 0. Single-image lists reuse the thumbnail.
pub fn preview_image_index(image_count: usize, rng: &mut impl PreviewRng) -> usize {
    if image_count <= 1 {
        return 0;
    }
    1 + rng.pick(image_count - 1) % (image_count - 1)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HoverPreview {
    pub card: usize,
    pub image: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct GalleryCarousel {
    cards: &'static [HighlightCard],
    selected: Option<usize>,
    index: usize,
    mode: DisplayMode,
}

impl GalleryCarousel {
    pub fn new(cards: &'static [HighlightCard]) -> Self {
        Self {
            cards,
            selected: None,
            index: 0,
            mode: DisplayMode::Day,
        }
    }

    pub fn cards(&self) -> &'static [HighlightCard] {
        self.cards
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_card(&self) -> Option<&'static HighlightCard> {
        self.selected.and_then(|card| self.cards.get(card))
    }

    /// Background page scroll stays suspended exactly while the modal is
    /// open; callers key the lock off this flag.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn current_images(&self) -> &'static [&'static str] {
        self.selected_card()
            .map(|card| card.images(self.mode))
            .unwrap_or(&[])
    }

    pub fn open(&mut self, card: usize) {
        if card >= self.cards.len() {
            return;
        }
        self.selected = Some(card);
        self.index = 0;
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.index = 0;
    }

    pub fn next(&mut self) {
        let len = self.current_images().len();
        if len == 0 {
            return;
        }
        self.index = if self.index == len - 1 { 0 } else { self.index + 1 };
    }

    pub fn prev(&mut self) {
        let len = self.current_images().len();
        if len == 0 {
            return;
        }
        self.index = if self.index == 0 { len - 1 } else { self.index - 1 };
    }

    /// Direct jump from a thumbnail. Out-of-range requests are rejected
    /// outright rather than clamped, to surface caller bugs.
    pub fn select_index(&mut self, index: usize) {
        if self.is_open() && index < self.current_images().len() {
            self.index = index;
        }
    }

    /// Flips day/night for the whole gallery. The two lists are not
    /// guaranteed to correspond index-for-index, so an open modal restarts
    /// at the first image.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        if self.is_open() {
            self.index = 0;
        }
    }

    /// Keyboard bindings, inert while closed. Returns whether the key was
    /// consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            "Escape" => self.close(),
            "ArrowRight" => self.next(),
            "ArrowLeft" => self.prev(),
            _ => return false,
        }
        true
    }

    pub fn preview_for(&self, card: usize, rng: &mut impl PreviewRng) -> Option<HoverPreview> {
        let images = self.cards.get(card)?.images(self.mode);
        let image = images.get(preview_image_index(images.len(), rng))?;
        Some(HoverPreview { card, image })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: &[&str] = &["day 1", "day 2", "day 3", "day 4"];
    const NIGHT: &[&str] = &[
        "night 1", "night 2", "night 3", "night 4", "night 5", "night 6",
    ];
    const ONE: &[&str] = &["only"];

    const CARDS: &[HighlightCard] = &[
        HighlightCard {
            id: "track",
            day_images: DAY,
            night_images: NIGHT,
        },
        HighlightCard {
            id: "misc",
            day_images: ONE,
            night_images: ONE,
        },
    ];

    struct FixedRng(usize);

    impl PreviewRng for FixedRng {
        fn pick(&mut self, bound: usize) -> usize {
            self.0 % bound.max(1)
        }
    }

    fn open_gallery() -> GalleryCarousel {
        let mut gallery = GalleryCarousel::new(CARDS);
        gallery.open(0);
        gallery
    }

    #[test]
    fn open_starts_at_the_first_image_and_locks_scroll() {
        let gallery = open_gallery();
        assert_eq!(gallery.index(), 0);
        assert!(gallery.scroll_locked());
        assert_eq!(gallery.selected_card().map(|card| card.id), Some("track"));
    }

    #[test]
    fn close_releases_the_scroll_lock() {
        let mut gallery = open_gallery();
        gallery.close();
        assert!(!gallery.is_open());
        assert!(!gallery.scroll_locked());
    }

    #[test]
    fn open_rejects_unknown_cards() {
        let mut gallery = GalleryCarousel::new(CARDS);
        gallery.open(99);
        assert!(!gallery.is_open());
    }

    #[test]
    fn next_wraps_after_a_full_cycle() {
        let mut gallery = open_gallery();
        for _ in 0..DAY.len() {
            gallery.next();
        }
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn prev_from_zero_wraps_to_the_last_image() {
        let mut gallery = open_gallery();
        gallery.prev();
        assert_eq!(gallery.index(), DAY.len() - 1);
    }

    #[test]
    fn select_index_rejects_out_of_range() {
        let mut gallery = open_gallery();
        gallery.select_index(2);
        assert_eq!(gallery.index(), 2);

        gallery.select_index(DAY.len());
        assert_eq!(gallery.index(), 2, "out-of-range jump must be a no-op");
    }

    #[test]
    fn toggle_mode_while_open_resets_to_the_first_image() {
        // Four day images, six night images.
        let mut gallery = open_gallery();
        gallery.next();
        gallery.next();
        gallery.next();
        assert_eq!(gallery.index(), 3);

        gallery.toggle_mode();
        assert_eq!(gallery.mode(), DisplayMode::Night);
        assert_eq!(gallery.index(), 0);
        assert_eq!(gallery.current_images().len(), 6);
    }

    #[test]
    fn toggle_mode_while_closed_only_flips_the_mode() {
        let mut gallery = GalleryCarousel::new(CARDS);
        gallery.toggle_mode();
        assert_eq!(gallery.mode(), DisplayMode::Night);
        gallery.toggle_mode();
        assert_eq!(gallery.mode(), DisplayMode::Day);
    }

    #[test]
    fn keyboard_is_inert_while_closed() {
        let mut gallery = GalleryCarousel::new(CARDS);
        assert!(!gallery.handle_key("Escape"));
        assert!(!gallery.handle_key("ArrowRight"));
        assert!(!gallery.is_open());
    }

    #[test]
    fn keyboard_drives_the_open_modal() {
        let mut gallery = open_gallery();
        assert!(gallery.handle_key("ArrowRight"));
        assert_eq!(gallery.index(), 1);
        assert!(gallery.handle_key("ArrowLeft"));
        assert_eq!(gallery.index(), 0);
        assert!(!gallery.handle_key("Enter"));
        assert!(gallery.handle_key("Escape"));
        assert!(!gallery.is_open());
    }

    #[test]
    fn preview_skips_the_thumbnail_index() {
        for seed in 0..8 {
            let index = preview_image_index(DAY.len(), &mut FixedRng(seed));
            assert!((1..DAY.len()).contains(&index));
        }
    }

    #[test]
    fn preview_reuses_a_single_image_list() {
        assert_eq!(preview_image_index(1, &mut FixedRng(3)), 0);

        let gallery = GalleryCarousel::new(CARDS);
        let preview = gallery.preview_for(1, &mut FixedRng(5));
        assert_eq!(
            preview,
            Some(HoverPreview {
                card: 1,
                image: "only"
            })
        );
    }

    #[test]
    fn preview_follows_the_gallery_mode() {
        let mut gallery = GalleryCarousel::new(CARDS);
        gallery.toggle_mode();
        let preview = gallery.preview_for(0, &mut FixedRng(0)).expect("card exists");
        assert!(preview.image.starts_with("night"));
    }
}
