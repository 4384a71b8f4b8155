//! Reducers over batched intersection reports.
//!
//! IntersectionObserver callbacks arrive asynchronously, batched, with no
//! ordering guarantee across regions. Both policies here are expressed as
//! pure, idempotent reducers so the outcome is deterministic for a given
//! batch: the one-shot set is monotonic, the scroll-spy is last-write-wins.

/// Fraction of a region that must intersect before a one-shot reveal fires.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Fraction of a region that must sit inside the scroll-spy band.
pub const SPY_THRESHOLD: f64 = 0.6;
/// Narrows the scroll-spy root to the middle 20%–80% of the viewport.
pub const SPY_ROOT_MARGIN: &str = "-20% 0px -20% 0px";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct VisibilityEvent {
    pub region: usize,
    pub is_intersecting: bool,
}

/// One-shot reveal policy: once a region has been visible it stays revealed,
/// no matter what later reports say.
#[derive(Clone, PartialEq, Debug)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(region_count: usize) -> Self {
        Self {
            revealed: vec![false; region_count],
        }
    }

    pub fn apply(&mut self, events: &[VisibilityEvent]) {
        for event in events {
            if event.is_intersecting {
                if let Some(slot) = self.revealed.get_mut(event.region) {
                    *slot = true;
                }
            }
        }
    }

    pub fn is_revealed(&self, region: usize) -> bool {
        self.revealed.get(region).copied().unwrap_or(false)
    }
}

/// Continuous scroll-spy policy: a single active region, taken from the last
/// intersecting report in a batch. Loss of intersection never clears the
/// active region; only a newly intersecting one replaces it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScrollSpy {
    region_count: usize,
    active: usize,
}

impl ScrollSpy {
    pub fn new(region_count: usize) -> Self {
        Self {
            region_count,
            active: 0,
        }
    }

    pub fn apply(&mut self, events: &[VisibilityEvent]) {
        for event in events {
            if event.is_intersecting && event.region < self.region_count {
                self.active = event.region;
            }
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(region: usize) -> VisibilityEvent {
        VisibilityEvent {
            region,
            is_intersecting: true,
        }
    }

    fn gone(region: usize) -> VisibilityEvent {
        VisibilityEvent {
            region,
            is_intersecting: false,
        }
    }

    #[test]
    fn reveal_fires_once_and_never_reverts() {
        let mut reveals = RevealSet::new(3);
        assert!(!reveals.is_revealed(1));

        reveals.apply(&[seen(1)]);
        assert!(reveals.is_revealed(1));

        reveals.apply(&[gone(1)]);
        assert!(reveals.is_revealed(1), "reveal state is monotonic");
        assert!(!reveals.is_revealed(0));
        assert!(!reveals.is_revealed(2));
    }

    #[test]
    fn reveal_apply_is_idempotent() {
        let mut reveals = RevealSet::new(2);
        reveals.apply(&[seen(0), seen(0), gone(0)]);
        let snapshot = reveals.clone();
        reveals.apply(&[seen(0), gone(0)]);
        assert_eq!(reveals, snapshot);
    }

    #[test]
    fn reveal_ignores_unknown_regions() {
        let mut reveals = RevealSet::new(1);
        reveals.apply(&[seen(7)]);
        assert!(!reveals.is_revealed(7));
        assert!(!reveals.is_revealed(0));
    }

    #[test]
    fn spy_starts_on_the_first_region() {
        assert_eq!(ScrollSpy::new(5).active(), 0);
    }

    #[test]
    fn spy_hands_over_between_adjacent_regions() {
        let mut spy = ScrollSpy::new(4);

        spy.apply(&[seen(1)]);
        assert_eq!(spy.active(), 1);

        // Scrolling onward: region 1 leaves the band, region 2 enters.
        // Batch order is not guaranteed; the leave report must not matter.
        spy.apply(&[seen(2), gone(1)]);
        assert_eq!(spy.active(), 2);

        spy.apply(&[gone(2)]);
        assert_eq!(spy.active(), 2, "losing intersection keeps the last active");
    }

    #[test]
    fn spy_resolves_simultaneous_reports_last_write_wins() {
        let mut spy = ScrollSpy::new(4);
        spy.apply(&[seen(1), seen(3)]);
        assert_eq!(spy.active(), 3);
    }

    #[test]
    fn spy_ignores_out_of_range_regions() {
        let mut spy = ScrollSpy::new(2);
        spy.apply(&[seen(9)]);
        assert_eq!(spy.active(), 0);
    }
}
