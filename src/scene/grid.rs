//! Character grid backing the canvas: one glyph and a current color per cell.

use crate::rng::RandomSource;

/// Glyph ramp cells draw from, sparsest to densest.
pub const GLYPH_RAMP: [&str; 9] = [".", ":", "-", "=", "+", "*", "#", "%", "@"];

/// Resting color of untinted cells (light gray).
pub const BASE_COLOR: &str = "#f0f0f0";

/// One character position. The glyph is fixed when the grid is built; only
/// the color changes frame to frame.
#[derive(Clone, Copy)]
pub struct Cell {
    pub glyph: &'static str,
    pub color: &'static str,
}

/// Row-major cell grid sized from the viewport. Rebuilt wholesale on resize.
pub struct Grid {
    cols: usize,
    rows: usize,
    cell_size: f64,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid covering `width` x `height` pixels at `cell_size` per
    /// cell, every glyph drawn uniformly from [`GLYPH_RAMP`]. A degenerate
    /// viewport yields an empty grid rather than an error.
    pub fn rebuild(
        width: f64,
        height: f64,
        cell_size: f64,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let cols = (width.max(0.0) / cell_size).floor() as usize;
        let rows = (height.max(0.0) / cell_size).floor() as usize;
        let mut cells = Vec::with_capacity(cols * rows);
        for _ in 0..cols * rows {
            cells.push(Cell {
                glyph: GLYPH_RAMP[rng.index(GLYPH_RAMP.len())],
                color: BASE_COLOR,
            });
        }
        Self {
            cols,
            rows,
            cell_size,
            cells,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.cols + col]
    }

    pub fn tint(&mut self, row: usize, col: usize, color: &'static str) {
        self.cells[row * self.cols + col].color = color;
    }

    /// Drop every tint back to [`BASE_COLOR`]. Runs once per frame before
    /// hearts are rasterized so stale tints never outlive a moved heart.
    pub fn reset_colors(&mut self) {
        for cell in &mut self.cells {
            cell.color = BASE_COLOR;
        }
    }
}
