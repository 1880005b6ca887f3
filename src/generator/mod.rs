use crate::*;
pub use random::*;

mod random;

/// Strategy for placing mines into a fresh truth grid.
pub trait MineGenerator {
    fn generate(self, config: &GameConfig) -> Result<TruthGrid>;
}
