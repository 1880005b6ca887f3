use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use web_time::{Duration, SystemTime};

use crate::*;

/// Lifecycle of a single game.
///
/// Transitions are monotonic: `NotStarted -> InProgress -> Victory | Defeat`.
/// Terminal states accept queries but absorb every further action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Victory,
    Defeat,
}

impl GameStatus {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl OpenOutcome {
    pub const fn has_update(self) -> bool {
        use OpenOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// A single game from construction to Victory or Defeat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    truth: TruthGrid,
    visible: Array2<CellView>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    started_at: SystemTime,
    ended_at: SystemTime,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Random board: `mines` distinct cells chosen uniformly without
    /// replacement, seeded from the process-wide rng.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = GameConfig::new(width, height, mines)?;
        Self::generate(config, RandomMineGenerator::from_entropy())
    }

    /// Explicit board: every listed coordinate becomes a mine.
    pub fn with_mines(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions);
        }
        let truth = TruthGrid::from_mine_coords((height, width), mine_coords)?;
        Ok(Self::from_truth(truth))
    }

    pub fn generate(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        Ok(Self::from_truth(generator.generate(&config)?))
    }

    pub fn from_truth(truth: TruthGrid) -> Self {
        let size = truth.size();
        let now = SystemTime::now();
        Self {
            truth,
            visible: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            status: Default::default(),
            started_at: now,
            ended_at: now,
            triggered_mine: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn config(&self) -> GameConfig {
        self.truth.config()
    }

    /// Board size as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        self.truth.size()
    }

    pub fn height(&self) -> Coord {
        self.truth.size().0
    }

    pub fn width(&self) -> Coord {
        self.truth.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.truth.total_cells()
    }

    pub fn total_mines(&self) -> CellCount {
        self.truth.mine_count()
    }

    /// How many mines have not been flagged yet; negative when the player
    /// has planted more flags than there are mines.
    pub fn mines_left(&self) -> isize {
        (self.truth.mine_count() as isize) - (self.flagged_count as isize)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.visible[coords.to_nd_index()]
    }

    /// The mine that ended the game, if it ended in Defeat.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Finalized duration between game start and game end.
    ///
    /// Both timestamps are snapshotted at construction; the start is
    /// re-recorded once on the first action and the end once at the
    /// terminal transition, so the value is meaningful (and stable) only
    /// after the game has finished. Callers wanting live elapsed time must
    /// re-sample the clock themselves.
    pub fn game_time(&self) -> Duration {
        self.ended_at
            .duration_since(self.started_at)
            .unwrap_or_default()
    }

    /// One string per row, columns left to right: `.` revealed zero,
    /// `1`-`8` revealed count, `*` revealed mine, `?` flag, `-` closed.
    pub fn render_field(&self) -> Vec<String> {
        self.visible
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|cell| cell.as_char()).collect())
            .collect()
    }

    /// Opens a cell, flood-filling through zero-count regions.
    ///
    /// Terminal boards ignore the call. A flagged cell cannot be opened
    /// and an already-revealed cell never re-opens.
    pub fn open_cell(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        use OpenOutcome::*;

        let coords = self.truth.validate_coords(coords)?;

        if self.status.is_terminal() {
            return Ok(NoChange);
        }
        self.mark_started();

        let outcome = match self.visible[coords.to_nd_index()] {
            CellView::Flagged | CellView::Revealed(_) => NoChange,
            CellView::Closed if self.truth.contains_mine(coords) => {
                self.explode(coords);
                HitMine
            }
            CellView::Closed => {
                self.flood_reveal(coords);
                Revealed
            }
        };

        if matches!(outcome, HitMine) {
            Ok(HitMine)
        } else if self.check_victory() {
            Ok(Won)
        } else {
            Ok(outcome)
        }
    }

    /// Toggles a flag on a closed cell. Revealed cells are never flagged.
    pub fn mark_cell(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let coords = self.truth.validate_coords(coords)?;

        if self.status.is_terminal() {
            return Ok(NoChange);
        }
        self.mark_started();

        let outcome = match self.visible[coords.to_nd_index()] {
            CellView::Closed => {
                self.visible[coords.to_nd_index()] = CellView::Flagged;
                self.flagged_count += 1;
                Changed
            }
            CellView::Flagged => {
                self.visible[coords.to_nd_index()] = CellView::Closed;
                self.flagged_count -= 1;
                Changed
            }
            CellView::Revealed(_) => NoChange,
        };

        self.check_victory();
        Ok(outcome)
    }

    /// Breadth-first reveal seeded at `seed`.
    ///
    /// Zero-count cells enqueue their closed neighbors; positive counts
    /// are revealed but stop propagation. Flags block both expansion and
    /// the seed itself (callers filter the seed). Each cell is scheduled
    /// at most once, so the loop is bounded by the grid size.
    fn flood_reveal(&mut self, seed: Coord2) {
        let mut scheduled = HashSet::from([seed]);
        let mut frontier = VecDeque::from([seed]);
        log::trace!("flood-fill seeded at {:?}", seed);

        while let Some(coords) = frontier.pop_front() {
            if !matches!(self.visible[coords.to_nd_index()], CellView::Closed) {
                continue;
            }

            let kind = self.truth.kind_at(coords);
            self.visible[coords.to_nd_index()] = CellView::Revealed(kind);
            self.revealed_count += 1;
            log::trace!("revealed {:?} as {:?}", coords, kind);

            if matches!(kind, CellKind::Near(0)) {
                frontier.extend(
                    self.truth
                        .iter_neighbors(coords)
                        .filter(|&pos| matches!(self.visible[pos.to_nd_index()], CellView::Closed))
                        .filter(|&pos| scheduled.insert(pos)),
                );
            }
        }
    }

    /// Defeat path: the whole truth grid becomes visible, flags included.
    fn explode(&mut self, coords: Coord2) {
        let (rows, cols) = self.truth.size();
        for row in 0..rows {
            for col in 0..cols {
                let pos = (row, col);
                self.visible[pos.to_nd_index()] = CellView::Revealed(self.truth.kind_at(pos));
            }
        }
        self.revealed_count = self.truth.total_cells();
        self.flagged_count = 0;
        self.triggered_mine = Some(coords);
        self.finish(GameStatus::Defeat);
    }

    /// Victory once every safe cell is revealed; mines may remain closed
    /// or flagged.
    fn check_victory(&mut self) -> bool {
        if !matches!(self.status, GameStatus::InProgress) {
            return false;
        }
        if self.revealed_count == self.truth.safe_cell_count() {
            self.finish(GameStatus::Victory);
            true
        } else {
            false
        }
    }

    fn mark_started(&mut self) {
        if self.status.is_initial() {
            self.status = GameStatus::InProgress;
            self.started_at = SystemTime::now();
            log::debug!("game started");
        }
    }

    fn finish(&mut self, status: GameStatus) {
        if self.status.is_terminal() {
            return;
        }
        self.status = status;
        self.ended_at = SystemTime::now();
        log::debug!("game ended: {:?}", status);
    }
}
