use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Validated board dimensions and mine budget.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

impl GameConfig {
    /// Size is taken in the external `(width, height)` order and stored as
    /// `(rows, cols)`. A zero mine count is legal.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if mines > mult(height, width) {
            return Err(GameError::InvalidMineCount);
        }
        Ok(Self {
            size: (height, width),
            mines,
        })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn height(&self) -> Coord {
        self.size.0
    }

    pub const fn width(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Fixed mine/count layout established at game start.
///
/// Every safe cell stores its adjacent-mine count, precomputed once at
/// construction; the layout is never altered afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TruthGrid {
    cells: Array2<CellKind>,
    mine_count: CellCount,
}

impl TruthGrid {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let dim = mine_mask.dim();
        let (rows, cols): Coord2 = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        let mut cells: Array2<CellKind> = Array2::default(mine_mask.raw_dim());
        let mut mine_count: CellCount = 0;

        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                cells[coords.to_nd_index()] = if mine_mask[coords.to_nd_index()] {
                    mine_count += 1;
                    CellKind::Mine
                } else {
                    let near = mine_mask
                        .iter_neighbor_cells(coords)
                        .filter(|&neighbor_is_mine| neighbor_is_mine)
                        .count();
                    CellKind::Near(near.try_into().unwrap())
                };
            }
        }

        Self { cells, mine_count }
    }

    /// Rejects out-of-bounds and duplicated coordinates rather than
    /// silently clamping them.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCell);
            }
            let cell = &mut mine_mask[coords.to_nd_index()];
            if *cell {
                return Err(GameError::InvalidCell);
            }
            *cell = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            mines: self.mine_count,
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Board size as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn kind_at(&self, coords: Coord2) -> CellKind {
        self[coords]
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}

impl Index<Coord2> for TruthGrid {
    type Output = CellKind;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}
