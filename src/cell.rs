use serde::{Deserialize, Serialize};

/// Ground-truth content of a single cell, fixed when the board is
/// generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    /// Safe cell carrying its precomputed adjacent-mine count (0..=8).
    Near(u8),
}

impl CellKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Near(0)
    }
}

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Closed,
    Flagged,
    Revealed(CellKind),
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Closed | Self::Flagged)
    }

    /// Fixed one-character presentation used by `Board::render_field`.
    pub const fn as_char(self) -> char {
        match self {
            Self::Closed => '-',
            Self::Flagged => '?',
            Self::Revealed(CellKind::Mine) => '*',
            Self::Revealed(CellKind::Near(0)) => '.',
            Self::Revealed(CellKind::Near(count)) => (b'0' + count) as char,
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_mapping_is_the_render_contract() {
        assert_eq!(CellView::Closed.as_char(), '-');
        assert_eq!(CellView::Flagged.as_char(), '?');
        assert_eq!(CellView::Revealed(CellKind::Mine).as_char(), '*');
        assert_eq!(CellView::Revealed(CellKind::Near(0)).as_char(), '.');
        for count in 1..=8 {
            let expected = char::from_digit(count.into(), 10).unwrap();
            assert_eq!(CellView::Revealed(CellKind::Near(count)).as_char(), expected);
        }
    }

    #[test]
    fn unrevealed_covers_closed_and_flagged() {
        assert!(CellView::Closed.is_unrevealed());
        assert!(CellView::Flagged.is_unrevealed());
        assert!(!CellView::Revealed(CellKind::Near(1)).is_unrevealed());
    }
}
