//! Implicit-curve rasterizer: maps a heart outline onto the grid cells it
//! crosses and tints them pink.

use super::grid::Grid;
use super::heart::Heart;
use crate::rng::RandomSource;

/// Pinks sampled independently per tinted cell, per frame. The re-roll each
/// frame is what makes the outline sparkle.
pub const PINK_PALETTE: [&str; 6] = [
    "#ffc1cc", // Classic Baby Pink
    "#ffd1dc", // Pastel Pink
    "#ff99ac", // Salmon Pink
    "#ffb7b2", // Melon
    "#fbcfe8", // Light Pink (Tailwind)
    "#f472b6", // Rose Pink
];

/// Vertical correction applied before the curve test; without it the outline
/// looks stretched on screen. Empirically chosen, tunable.
pub const ASPECT_RATIO: f64 = 1.8;

/// Half-width of the band around the zero level-set treated as "on the
/// outline". Exact equality would almost never hit a discrete cell sample.
pub const OUTLINE_BAND: f64 = 0.25;

/// Heart equation: x^2 + (1.2 y - sqrt(|x|))^2 - 1 = 0
pub fn heart_equation(x: f64, y: f64) -> f64 {
    let y_adjusted = y * 1.2 - x.abs().sqrt();
    x * x + y_adjusted * y_adjusted - 1.0
}

/// Whether a point in normalized curve space lies on the renderable outline.
/// Pure function of its inputs.
pub fn is_heart_outline(x: f64, y: f64) -> bool {
    heart_equation(x, y).abs() < OUTLINE_BAND
}

/// Tint every cell the heart's outline crosses with a random pink. Only the
/// cells inside the heart's bounding box are tested; the curve is bounded
/// within radius 1 of the center in normalized space, so cells outside it
/// can never be on the outline. Cost scales with the box, not the grid.
pub fn rasterize(heart: &Heart, grid: &mut Grid, rng: &mut dyn RandomSource) {
    if grid.is_empty() {
        return;
    }
    let radius = heart.radius();
    let cell_size = grid.cell_size();

    let min_col = (((heart.x - radius) / cell_size).floor().max(0.0)) as usize;
    let max_col = ((((heart.x + radius) / cell_size).ceil().max(0.0)) as usize).min(grid.cols());
    let min_row = (((heart.y - radius) / cell_size).floor().max(0.0)) as usize;
    let max_row = ((((heart.y + radius) / cell_size).ceil().max(0.0)) as usize).min(grid.rows());

    for row in min_row..max_row {
        for col in min_col..max_col {
            let cell_x = col as f64 * cell_size + cell_size / 2.0;
            let cell_y = row as f64 * cell_size + cell_size / 2.0;

            let dx = (cell_x - heart.x) / radius;
            let dy = (cell_y - heart.y) / radius * ASPECT_RATIO;

            // y is flipped so the point of the heart faces down the screen.
            if is_heart_outline(dx, -dy) {
                grid.tint(row, col, PINK_PALETTE[rng.index(PINK_PALETTE.len())]);
            }
        }
    }
}
