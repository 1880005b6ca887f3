use super::*;

/// Uniform without-replacement placement from a fixed seed.
///
/// The same seed always produces the same layout for a given config, so
/// tests can pin boards without spelling out every mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Draws a fresh seed from the process-wide rng.
    pub fn from_entropy() -> Self {
        use rand::Rng;
        Self {
            seed: rand::rng().random(),
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: &GameConfig) -> Result<TruthGrid> {
        use rand::prelude::*;

        let (rows, cols) = config.size();
        let mut cells: Vec<Coord2> = Vec::with_capacity(config.total_cells().into());
        for row in 0..rows {
            for col in 0..cols {
                cells.push((row, col));
            }
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        cells.shuffle(&mut rng);
        cells.truncate(config.mines().into());

        log::debug!(
            "placed {} mines on a {}x{} board (seed {})",
            config.mines(),
            cols,
            rows,
            self.seed
        );

        let grid = TruthGrid::from_mine_coords(config.size(), &cells)?;
        if grid.mine_count() != config.mines() {
            log::warn!(
                "generated mine count mismatch, actual: {}, requested: {}",
                grid.mine_count(),
                config.mines()
            );
        }
        Ok(grid)
    }
}
