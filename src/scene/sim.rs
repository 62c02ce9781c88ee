//! Platform-free simulation state: the grid, the heart field and the
//! per-tick step. The canvas driver in `scene` owns the single instance;
//! everything here also runs under native `cargo test`.

use super::grid::Grid;
use super::heart::HeartField;
use super::raster;
use crate::rng::RandomSource;

pub struct Simulation {
    width: f64,
    height: f64,
    cell_size: f64,
    pub grid: Grid,
    pub hearts: HeartField,
}

impl Simulation {
    pub fn new(width: f64, height: f64, cell_size: f64, rng: &mut dyn RandomSource) -> Self {
        Self {
            width,
            height,
            cell_size,
            grid: Grid::rebuild(width, height, cell_size, rng),
            hearts: HeartField::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// One animation tick: maybe spawn, reset tints, advance every heart,
    /// rasterize each outline, prune fallen hearts. Rasterization reads only
    /// its own heart, so advancing all hearts first is equivalent to the
    /// per-heart interleave.
    pub fn step(&mut self, rng: &mut dyn RandomSource) {
        self.hearts.maybe_spawn(self.width, rng);
        self.grid.reset_colors();
        self.hearts.advance();
        for heart in self.hearts.iter() {
            raster::rasterize(heart, &mut self.grid, rng);
        }
        self.hearts.prune(self.height);
    }

    /// Rebuild the grid for a new viewport (fresh random glyphs). Hearts are
    /// left untouched and keep their absolute pixel positions.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut dyn RandomSource) {
        self.width = width;
        self.height = height;
        self.grid = Grid::rebuild(width, height, self.cell_size, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SplitMix64;
    use crate::scene::grid::BASE_COLOR;

    #[test]
    fn step_with_no_hearts_leaves_grid_at_base_color() {
        let mut rng = SplitMix64::new(31);
        let mut sim = Simulation::new(280.0, 280.0, 14.0, &mut rng);
        // A unit source pinned at 1.0 never clears the spawn roll.
        struct Never;
        impl RandomSource for Never {
            fn next_unit(&mut self) -> f64 {
                0.999_999
            }
        }
        sim.step(&mut Never);
        assert!(sim.hearts.is_empty());
        for row in 0..sim.grid.rows() {
            for col in 0..sim.grid.cols() {
                assert_eq!(sim.grid.cell(row, col).color, BASE_COLOR);
            }
        }
    }

    #[test]
    fn resize_rebuilds_grid_but_keeps_hearts() {
        let mut rng = SplitMix64::new(32);
        let mut sim = Simulation::new(1024.0, 768.0, 14.0, &mut rng);
        sim.hearts.spawn(1024.0, &mut rng);
        let (x, y) = {
            let h = sim.hearts.iter().next().unwrap();
            (h.x, h.y)
        };
        sim.resize(640.0, 480.0, &mut rng);
        assert_eq!(sim.grid.cols(), 45);
        assert_eq!(sim.grid.rows(), 34);
        let h = sim.hearts.iter().next().unwrap();
        assert_eq!((h.x, h.y), (x, y));
    }
}
