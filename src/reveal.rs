//! Cursor-reveal grid shown over the hero render.
//!
//! A tinted overlay is tiled with fixed-size square cells; cells near the
//! pointer lose opacity so the underlying image shows through. The same
//! pointer sample also drives hotspot hit-testing against a separate wrapper
//! rectangle, which can differ in size from the tracked surface.

pub const CELL_SIZE: f64 = 50.0;
pub const MAX_REVEAL_RADIUS: f64 = 120.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Measured bounding box of a DOM element, in client coordinates.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A named region of interest, with fractional bounds relative to the
/// wrapper rectangle. Declaration order is the tie-break for overlaps.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Hotspot {
    pub id: &'static str,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Hotspot {
    /// Inclusive on both edges; the ambiguity is sub-pixel either way.
    pub fn contains(&self, rel_x: f64, rel_y: f64) -> bool {
        rel_x >= self.left
            && rel_x <= self.left + self.width
            && rel_y >= self.top
            && rel_y <= self.top + self.height
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GridDimensions {
    pub cols: usize,
    pub rows: usize,
}

impl GridDimensions {
    pub fn for_surface(width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }

        Self {
            cols: (width / CELL_SIZE).ceil() as usize,
            rows: (height / CELL_SIZE).ceil() as usize,
        }
    }

    pub fn cell_count(self) -> usize {
        self.cols * self.rows
    }
}

#[derive(Clone, PartialEq)]
pub struct RevealGrid {
    hotspots: &'static [Hotspot],
    dims: GridDimensions,
    pointer: Option<PointerPosition>,
    active_hotspot: Option<&'static str>,
}

impl RevealGrid {
    pub fn new(hotspots: &'static [Hotspot]) -> Self {
        Self {
            hotspots,
            dims: GridDimensions::default(),
            pointer: None,
            active_hotspot: None,
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    pub fn pointer(&self) -> Option<PointerPosition> {
        self.pointer
    }

    pub fn active_hotspot(&self) -> Option<&'static str> {
        self.active_hotspot
    }

    /// Rebuilds the cell tiling for a newly measured surface. An unmeasured
    /// (zero-sized) surface yields an empty grid.
    pub fn resize(&mut self, surface_width: f64, surface_height: f64) {
        self.dims = GridDimensions::for_surface(surface_width, surface_height);
    }

    /// Stores the pointer in surface-relative coordinates and re-runs hotspot
    /// hit-testing in wrapper-relative fractional coordinates. The first
    /// declared hotspot containing the pointer wins.
    pub fn on_pointer_move(
        &mut self,
        client_x: f64,
        client_y: f64,
        surface: ElementRect,
        wrapper: ElementRect,
    ) {
        self.pointer = Some(PointerPosition {
            x: client_x - surface.left,
            y: client_y - surface.top,
        });

        self.active_hotspot = if wrapper.width > 0.0 && wrapper.height > 0.0 {
            let rel_x = (client_x - wrapper.left) / wrapper.width;
            let rel_y = (client_y - wrapper.top) / wrapper.height;
            self.hotspots
                .iter()
                .find(|hotspot| hotspot.contains(rel_x, rel_y))
                .map(|hotspot| hotspot.id)
        } else {
            None
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
        self.active_hotspot = None;
    }

    /// Tint opacity of the cell at (col, row): 0 right under the pointer
    /// (image fully revealed), 1 at or beyond `MAX_REVEAL_RADIUS`.
    pub fn cell_tint(&self, col: usize, row: usize) -> f64 {
        1.0 - self.reveal_amount(col, row)
    }

    fn reveal_amount(&self, col: usize, row: usize) -> f64 {
        let Some(pointer) = self.pointer else {
            return 0.0;
        };

        let cell_center_x = col as f64 * CELL_SIZE + CELL_SIZE / 2.0;
        let cell_center_y = row as f64 * CELL_SIZE + CELL_SIZE / 2.0;
        let dx = cell_center_x - pointer.x;
        let dy = cell_center_y - pointer.y;
        let distance = (dx * dx + dy * dy).sqrt();

        let raw = (1.0 - distance / MAX_REVEAL_RADIUS).max(0.0);
        // Square root sharpens the falloff close to the pointer.
        raw.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_HOTSPOTS: &[Hotspot] = &[
        Hotspot {
            id: "first",
            top: 0.2,
            left: 0.2,
            width: 0.3,
            height: 0.3,
        },
        Hotspot {
            id: "second",
            top: 0.4,
            left: 0.4,
            width: 0.3,
            height: 0.3,
        },
    ];

    fn surface_1000x600() -> ElementRect {
        ElementRect {
            left: 0.0,
            top: 0.0,
            width: 1000.0,
            height: 600.0,
        }
    }

    fn grid_over_surface() -> RevealGrid {
        let mut grid = RevealGrid::new(TEST_HOTSPOTS);
        grid.resize(1000.0, 600.0);
        grid
    }

    #[test]
    fn grid_dimensions_round_up_to_cover_surface() {
        let dims = GridDimensions::for_surface(1000.0, 600.0);
        assert_eq!(dims, GridDimensions { cols: 20, rows: 12 });
        assert_eq!(dims.cell_count(), 240);

        let ragged = GridDimensions::for_surface(1001.0, 551.0);
        assert_eq!(ragged, GridDimensions { cols: 21, rows: 12 });
    }

    #[test]
    fn unmeasured_surface_produces_empty_grid() {
        assert_eq!(GridDimensions::for_surface(0.0, 600.0).cell_count(), 0);
        assert_eq!(GridDimensions::for_surface(-1.0, -1.0).cell_count(), 0);
    }

    #[test]
    fn pointer_outside_every_hotspot_activates_none() {
        let mut grid = grid_over_surface();
        grid.on_pointer_move(50.0, 50.0, surface_1000x600(), surface_1000x600());
        assert_eq!(grid.active_hotspot(), None);
    }

    #[test]
    fn pointer_inside_single_hotspot_activates_it() {
        let mut grid = grid_over_surface();
        // (0.25, 0.25) falls only in "first".
        grid.on_pointer_move(250.0, 150.0, surface_1000x600(), surface_1000x600());
        assert_eq!(grid.active_hotspot(), Some("first"));
    }

    #[test]
    fn overlapping_hotspots_prefer_declaration_order() {
        let mut grid = grid_over_surface();
        // (0.45, 0.45) is inside both; "first" is declared first.
        grid.on_pointer_move(450.0, 270.0, surface_1000x600(), surface_1000x600());
        assert_eq!(grid.active_hotspot(), Some("first"));
    }

    #[test]
    fn hotspot_bounds_are_inclusive_on_both_edges() {
        let hotspot = TEST_HOTSPOTS[0];
        assert!(hotspot.contains(0.2, 0.2));
        assert!(hotspot.contains(0.5, 0.5));
        assert!(!hotspot.contains(0.51, 0.3));
    }

    #[test]
    fn wrapper_smaller_than_surface_shifts_hotspot_math() {
        let wrapper = ElementRect {
            left: 100.0,
            top: 100.0,
            width: 500.0,
            height: 300.0,
        };
        let mut grid = grid_over_surface();
        // Client (225, 175) is (0.25, 0.25) of the wrapper.
        grid.on_pointer_move(225.0, 175.0, surface_1000x600(), wrapper);
        assert_eq!(grid.active_hotspot(), Some("first"));
    }

    #[test]
    fn zero_sized_wrapper_never_activates_a_hotspot() {
        let mut grid = grid_over_surface();
        grid.on_pointer_move(250.0, 150.0, surface_1000x600(), ElementRect::default());
        assert_eq!(grid.active_hotspot(), None);
        assert!(grid.pointer().is_some());
    }

    #[test]
    fn pointer_leave_resets_pointer_and_hotspot() {
        let mut grid = grid_over_surface();
        grid.on_pointer_move(250.0, 150.0, surface_1000x600(), surface_1000x600());
        grid.on_pointer_leave();
        assert_eq!(grid.pointer(), None);
        assert_eq!(grid.active_hotspot(), None);
        assert_eq!(grid.cell_tint(5, 3), 1.0);
    }

    #[test]
    fn tint_is_zero_at_pointer_and_full_beyond_radius() {
        let mut grid = grid_over_surface();
        // Pointer exactly on the center of cell (10, 6): (525, 325).
        grid.on_pointer_move(525.0, 325.0, surface_1000x600(), surface_1000x600());
        assert!(grid.cell_tint(10, 6).abs() < 1e-9);

        // Cell (0, 0) centers at (25, 25), far beyond 120px away.
        assert_eq!(grid.cell_tint(0, 0), 1.0);
    }

    #[test]
    fn tint_grows_monotonically_with_distance() {
        let mut grid = grid_over_surface();
        grid.on_pointer_move(25.0, 25.0, surface_1000x600(), surface_1000x600());

        // Walk rightwards along row 0, away from the pointer.
        let mut previous = grid.cell_tint(0, 0);
        for col in 1..10 {
            let tint = grid.cell_tint(col, 0);
            assert!(
                tint >= previous,
                "tint must not decrease with distance: col {col}"
            );
            assert!((0.0..=1.0).contains(&tint));
            previous = tint;
        }
    }
}
