//! Board tests - dealing and the exactly-twice invariant

use std::collections::HashMap;

use proptest::prelude::*;

use tui_memory::core::{Board, ConfigError, SimpleRng};
use tui_memory::types::{Icon, Shape, BLUE, GREEN, ICON_VARIETY, RED, YELLOW};

fn icon_counts(board: &Board) -> HashMap<Icon, usize> {
    let mut counts = HashMap::new();
    for icon in board.icons() {
        *counts.entry(*icon).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_default_board_has_six_pairs() {
    let board = Board::generate(4, 3, &mut SimpleRng::new(12345)).unwrap();
    assert_eq!(board.columns(), 4);
    assert_eq!(board.rows(), 3);
    assert_eq!(icon_counts(&board).len(), 6);
}

#[test]
fn test_largest_board_uses_every_icon() {
    let board = Board::generate(10, 9, &mut SimpleRng::new(1)).unwrap();
    let counts = icon_counts(&board);
    assert_eq!(counts.len(), ICON_VARIETY);
    assert!(counts.values().all(|&c| c == 2));
}

#[test]
fn test_odd_board_fails_with_descriptive_error() {
    let err = Board::generate(3, 5, &mut SimpleRng::new(1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "the board must have an even number of tiles, got 3x5 = 15"
    );
}

#[test]
fn test_too_many_tiles_fails_with_descriptive_error() {
    let err = Board::generate(12, 8, &mut SimpleRng::new(1)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::NotEnoughIcons {
            cells: 96,
            needed: 48,
            available: 45
        }
    ));
    assert!(err.to_string().contains("too big"));
}

#[test]
fn test_explicit_board_keeps_row_major_order() {
    let a = Icon::new(Shape::Square, RED);
    let b = Icon::new(Shape::Donut, BLUE);
    let c = Icon::new(Shape::Oval, GREEN);
    let d = Icon::new(Shape::Lines, YELLOW);
    let board = Board::from_icons(4, 2, vec![a, a, b, c, b, c, d, d]).unwrap();

    use tui_memory::types::CellPos;
    assert_eq!(board.icon(CellPos::new(0, 0)), Some(a));
    assert_eq!(board.icon(CellPos::new(2, 0)), Some(b));
    assert_eq!(board.icon(CellPos::new(0, 1)), Some(b));
    assert_eq!(board.icon(CellPos::new(3, 1)), Some(d));
}

proptest! {
    #[test]
    fn prop_every_icon_appears_exactly_twice(
        columns in 1u16..=10,
        rows in 1u16..=9,
        seed in any::<u32>(),
    ) {
        let result = Board::generate(columns, rows, &mut SimpleRng::new(seed));
        let cells = columns as usize * rows as usize;

        if cells % 2 == 1 {
            let is_odd = matches!(result, Err(ConfigError::OddCellCount { .. }));
            prop_assert!(is_odd);
        } else if cells / 2 > ICON_VARIETY {
            let is_short = matches!(result, Err(ConfigError::NotEnoughIcons { .. }));
            prop_assert!(is_short);
        } else {
            let board = result.unwrap();
            prop_assert_eq!(board.len(), cells);
            let counts = icon_counts(&board);
            prop_assert_eq!(counts.len(), cells / 2);
            prop_assert!(counts.values().all(|&c| c == 2));
        }
    }
}
