//! Game session - the selection state machine
//!
//! ```text
//!            click unrevealed                 click unrevealed
//!   Idle ─────────────────────▶ OneRevealed ───────────────────▶ Idle
//!                               (first)       match:    keep both
//!                                             mismatch: cover both
//! ```
//!
//! Clicks on revealed tiles or outside the board are ignored. The session owns
//! the only mutable game state: which tiles are revealed and the pending first
//! pick. Everything here is synchronous and side-effect free; delays and
//! animations belong to the caller.

use tracing::{debug, info};

use crate::board::Board;
use crate::layout::Layout;
use crate::types::{CellPos, Icon, PixelPos};

/// Where the selection round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    OneRevealed(CellPos),
}

/// Result of a single click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Outside the board or on a revealed tile
    Ignored,
    /// First pick of a round
    FirstRevealed(CellPos),
    /// Second pick matched the first; `won` is set when this cleared the board
    Matched {
        first: CellPos,
        second: CellPos,
        won: bool,
    },
    /// Second pick did not match; both tiles are covered again
    Mismatched { first: CellPos, second: CellPos },
}

impl ClickOutcome {
    pub fn is_won(&self) -> bool {
        matches!(self, ClickOutcome::Matched { won: true, .. })
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    revealed: Vec<bool>,
    selection: Option<CellPos>,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        let revealed = vec![false; board.len()];
        Self {
            board,
            revealed,
            selection: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        match self.selection {
            None => Phase::Idle,
            Some(pos) => Phase::OneRevealed(pos),
        }
    }

    /// First tile of the current round, if one is picked
    pub fn selection(&self) -> Option<CellPos> {
        self.selection
    }

    pub fn icon(&self, pos: CellPos) -> Option<Icon> {
        self.board.icon(pos)
    }

    /// Out-of-board positions report false.
    pub fn is_revealed(&self, pos: CellPos) -> bool {
        self.board
            .index(pos)
            .map(|i| self.revealed[i])
            .unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }

    /// Matched pairs so far (a pending first pick is not counted)
    pub fn pairs_found(&self) -> usize {
        let pending = usize::from(self.selection.is_some());
        (self.revealed_count() - pending) / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.board.len() / 2
    }

    /// Every tile revealed
    pub fn has_won(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// Resolve a click at surface coordinates.
    pub fn click_at(&mut self, layout: &Layout, p: PixelPos) -> ClickOutcome {
        match layout.cell_at(p) {
            Some(pos) => self.click(pos),
            None => ClickOutcome::Ignored,
        }
    }

    /// Advance the state machine with a click on `pos`.
    pub fn click(&mut self, pos: CellPos) -> ClickOutcome {
        let Some(index) = self.board.index(pos) else {
            return ClickOutcome::Ignored;
        };
        if self.revealed[index] {
            return ClickOutcome::Ignored;
        }
        self.revealed[index] = true;

        let Some(first) = self.selection.take() else {
            self.selection = Some(pos);
            debug!(col = pos.col, row = pos.row, "first tile revealed");
            return ClickOutcome::FirstRevealed(pos);
        };

        if self.board.icon(first) == self.board.icon(pos) {
            let won = self.has_won();
            debug!(?first, second = ?pos, "pair matched");
            if won {
                info!(pairs = self.total_pairs(), "board cleared");
            }
            ClickOutcome::Matched {
                first,
                second: pos,
                won,
            }
        } else {
            self.cover(first);
            self.cover(pos);
            debug!(?first, second = ?pos, "pair mismatched");
            ClickOutcome::Mismatched { first, second: pos }
        }
    }

    fn cover(&mut self, pos: CellPos) {
        if let Some(i) = self.board.index(pos) {
            self.revealed[i] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Shape, BLUE, GREEN, RED, YELLOW};

    // Row 0: A A B C
    // Row 1: B C D D
    fn session_4x2() -> GameSession {
        let a = Icon::new(Shape::Square, RED);
        let b = Icon::new(Shape::Donut, BLUE);
        let c = Icon::new(Shape::Oval, GREEN);
        let d = Icon::new(Shape::Lines, YELLOW);
        let board = Board::from_icons(4, 2, vec![a, a, b, c, b, c, d, d]).unwrap();
        GameSession::new(board)
    }

    #[test]
    fn test_new_session_is_idle_and_covered() {
        let s = session_4x2();
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.revealed_count(), 0);
        assert!(!s.has_won());
        assert_eq!(s.total_pairs(), 4);
    }

    #[test]
    fn test_first_click_reveals_and_selects() {
        let mut s = session_4x2();
        let pos = CellPos::new(2, 0);
        assert_eq!(s.click(pos), ClickOutcome::FirstRevealed(pos));
        assert!(s.is_revealed(pos));
        assert_eq!(s.phase(), Phase::OneRevealed(pos));
        assert_eq!(s.pairs_found(), 0);
    }

    #[test]
    fn test_matching_pair_stays_revealed() {
        let mut s = session_4x2();
        s.click(CellPos::new(0, 0));
        let outcome = s.click(CellPos::new(1, 0));

        assert_eq!(
            outcome,
            ClickOutcome::Matched {
                first: CellPos::new(0, 0),
                second: CellPos::new(1, 0),
                won: false
            }
        );
        assert!(s.is_revealed(CellPos::new(0, 0)));
        assert!(s.is_revealed(CellPos::new(1, 0)));
        assert_eq!(s.selection(), None);
        assert_eq!(s.pairs_found(), 1);

        // Clicking them again changes nothing.
        assert_eq!(s.click(CellPos::new(0, 0)), ClickOutcome::Ignored);
        assert!(s.is_revealed(CellPos::new(1, 0)));
    }

    #[test]
    fn test_mismatched_pair_is_covered() {
        let mut s = session_4x2();
        s.click(CellPos::new(0, 0));
        let outcome = s.click(CellPos::new(2, 0));

        assert_eq!(
            outcome,
            ClickOutcome::Mismatched {
                first: CellPos::new(0, 0),
                second: CellPos::new(2, 0)
            }
        );
        assert_eq!(s.revealed_count(), 0);
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_click_on_pending_first_is_ignored() {
        let mut s = session_4x2();
        s.click(CellPos::new(3, 1));
        assert_eq!(s.click(CellPos::new(3, 1)), ClickOutcome::Ignored);
        assert_eq!(s.phase(), Phase::OneRevealed(CellPos::new(3, 1)));
    }

    #[test]
    fn test_click_outside_board_is_ignored() {
        let mut s = session_4x2();
        assert_eq!(s.click(CellPos::new(4, 0)), ClickOutcome::Ignored);
        assert_eq!(s.click(CellPos::new(0, 2)), ClickOutcome::Ignored);
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_won_reported_only_on_last_pair() {
        let mut s = session_4x2();
        let pairs = [
            (CellPos::new(0, 0), CellPos::new(1, 0)),
            (CellPos::new(2, 0), CellPos::new(0, 1)),
            (CellPos::new(3, 0), CellPos::new(1, 1)),
            (CellPos::new(2, 1), CellPos::new(3, 1)),
        ];
        for (i, (a, b)) in pairs.iter().enumerate() {
            s.click(*a);
            let outcome = s.click(*b);
            let last = i == pairs.len() - 1;
            assert_eq!(outcome.is_won(), last);
            assert_eq!(s.has_won(), last);
        }
        assert_eq!(s.pairs_found(), 4);
    }
}
