//! Cell lookup tests

use proptest::prelude::*;

use tui_memory::core::{GameConfig, Layout};
use tui_memory::types::{CellPos, PixelPos};

/// Brute-force reference: scan every tile rectangle.
fn tiles_containing(layout: &Layout, p: PixelPos) -> Vec<CellPos> {
    let mut hits = Vec::new();
    for row in 0..layout.rows() {
        for col in 0..layout.columns() {
            let pos = CellPos::new(col, row);
            let o = layout.origin(pos);
            let (x, y) = (p.x as u32, p.y as u32);
            let (left, top) = (o.x as u32, o.y as u32);
            if left < x
                && x < left + layout.tile_width() as u32
                && top < y
                && y < top + layout.tile_height() as u32
            {
                hits.push(pos);
            }
        }
    }
    hits
}

#[test]
fn test_640x480_geometry_with_square_tiles() {
    // 40px tiles, 10px gaps, 4x3 grid on 640x480.
    let config = GameConfig {
        tile_width: 40,
        tile_height: 40,
        gap_x: 10,
        gap_y: 10,
        ..GameConfig::default()
    };
    let layout = Layout::centered(&config, 640, 480);
    assert_eq!(layout.margins(), (220, 165));

    assert_eq!(layout.cell_at(PixelPos::new(221, 166)), Some(CellPos::new(0, 0)));
    assert_eq!(layout.cell_at(PixelPos::new(220, 166)), None);
    assert_eq!(layout.cell_at(PixelPos::new(260, 166)), None);
    assert_eq!(layout.cell_at(PixelPos::new(271, 166)), Some(CellPos::new(1, 0)));
    assert_eq!(layout.cell_at(PixelPos::new(400, 300)), Some(CellPos::new(3, 2)));
}

proptest! {
    #[test]
    fn prop_lookup_agrees_with_tile_scan(
        columns in 1u16..=8,
        rows in 1u16..=6,
        tile_w in 1u16..=12,
        tile_h in 1u16..=6,
        gap_x in 0u16..=4,
        gap_y in 0u16..=3,
        x in 0u16..160,
        y in 0u16..60,
    ) {
        let config = GameConfig {
            columns,
            rows,
            tile_width: tile_w,
            tile_height: tile_h,
            gap_x,
            gap_y,
            ..GameConfig::default()
        };
        let layout = Layout::centered(&config, 120, 40);
        let p = PixelPos::new(x, y);
        let hits = tiles_containing(&layout, p);

        prop_assert!(hits.len() <= 1);
        prop_assert_eq!(layout.cell_at(p), hits.first().copied());
    }
}
