//! End-to-end layout tests
//!
//! Run with logs: RUST_LOG=domino_layout=trace cargo test --features tracing -- --nocapture

use domino_layout::render::defaults::SPINNER_BOX;
use domino_layout::render::render_text;
use domino_layout::{
    Arm, Arms, Board, BoundingBox, Direction, Domino, Grid, Layout, LayoutError, RenderedBoard,
    Viewport, build_rendered_board, solve_layout,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn d(head: u8, tail: u8) -> Domino {
    Domino::new(head, tail)
}

/// `len` distinct-looking non-doubles.
fn chain(len: usize) -> Vec<Domino> {
    (0..len).map(|i| d((i % 6) as u8, ((i + 1) % 6) as u8 + 1)).collect()
}

fn long_row() -> Board {
    Board::open((0..12).map(|i| d(i % 7, (i + 1) % 7)).collect::<Vec<_>>())
}

fn long_cross() -> Board {
    Board::spun(d(6, 6))
        .with_arm(Arm::East, chain(9))
        .with_arm(Arm::West, chain(9))
        .with_arm(Arm::North, chain(6))
        .with_arm(Arm::South, chain(6))
}

fn long_east_arm() -> Board {
    Board::spun(d(6, 6)).with_arm(Arm::East, chain(8))
}

fn solve(width: u32, height: u32, board: &Board) -> Layout {
    init_tracing();
    match solve_layout(Viewport::new(width, height), board) {
        Ok(layout) => layout,
        Err(e) => panic!("{width}x{height}: {e}"),
    }
}

fn assert_fits(layout: &Layout) {
    let grid = layout.grid();
    for tile in layout.tiles() {
        assert!(
            tile.bounding_box.fits_in(grid),
            "{} at {:?} is off the {}x{} grid",
            tile.domino,
            tile.bounding_box,
            grid.width,
            grid.height
        );
    }
    let picture = render_text(&layout.board, grid);
    assert!(!picture.contains('+'), "tiles overlap:\n{picture}");
}

fn assert_abutting(board: &RenderedBoard, arm: Arm) {
    let spinner = board.spinner().expect("spun board").bounding_box;
    let mut previous = spinner;
    for tile in board.arm(arm) {
        let b = tile.bounding_box;
        match arm {
            Arm::North => assert_eq!(b.south, previous.north),
            Arm::East => assert_eq!(b.west, previous.east),
            Arm::South => assert_eq!(b.north, previous.south),
            Arm::West => assert_eq!(b.east, previous.west),
        }
        previous = b;
    }
}

/// Consecutive boxes share an edge, wherever the chain turns.
fn touches(a: BoundingBox, b: BoundingBox) -> bool {
    let overlap_x = a.west < b.east && b.west < a.east;
    let overlap_y = a.north < b.south && b.north < a.south;
    ((a.south == b.north || a.north == b.south) && overlap_x)
        || ((a.east == b.west || a.west == b.east) && overlap_y)
}

fn assert_chained(board: &RenderedBoard, arm: Arm) {
    let mut previous = board.spinner().expect("spun board");
    for tile in board.arm(arm) {
        assert!(
            touches(previous.bounding_box, tile.bounding_box),
            "gap between {} at {:?} and {} at {:?}",
            previous.domino,
            previous.bounding_box,
            tile.domino,
            tile.bounding_box
        );
        previous = tile;
    }
}

#[test]
fn fast_path_centres_the_board() {
    let board = Board::spun(d(6, 6))
        .with_arm(Arm::East, [d(6, 3), d(3, 1)])
        .with_arm(Arm::West, [d(6, 2)]);
    let layout = solve(800, 600, &board);
    assert_eq!(layout.attempt, 0);
    assert!(!layout.bent);
    assert_eq!(layout.grid(), Grid::new(32, 24));

    let bounds = layout.board.bounds().unwrap();
    let midpoint = (
        (bounds.east + bounds.west).div_euclid(2),
        (bounds.north + bounds.south).div_euclid(2),
    );
    let center = layout.grid().center();
    assert_eq!(midpoint, (center.x, center.y));
    assert_fits(&layout);
}

#[test]
fn short_row_is_laid_out_in_one_line() {
    let board = Board::open([d(2, 5), d(5, 4), d(4, 1), d(1, 0)]);
    let layout = solve(800, 600, &board);
    assert_eq!(layout.attempt, 0);
    assert!(!layout.bent);

    let row = layout.board.row().unwrap();
    assert_eq!(row.len(), 4);
    for tile in row {
        assert_eq!(tile.direction, Direction::East);
        assert_eq!(tile.bounding_box.width(), 4);
        assert_eq!(tile.bounding_box.height(), 2);
    }
    for pair in row.windows(2) {
        assert_eq!(pair[1].bounding_box.west, pair[0].bounding_box.east);
    }
    // span 0..16 has midpoint 8, moved onto the grid's x = 16
    assert_eq!(row[0].bounding_box, BoundingBox::new(11, 12, 13, 8));
    let bounds = layout.board.bounds().unwrap();
    assert_eq!((bounds.east + bounds.west).div_euclid(2), layout.grid().center().x);
    assert_fits(&layout);
}

#[test]
fn lone_spinner_sits_in_the_middle() {
    let layout = solve(800, 600, &Board::spun(d(6, 6)));
    assert_eq!(layout.attempt, 0);
    let spinner = layout.board.spinner().unwrap();
    assert_eq!(spinner.bounding_box, BoundingBox::new(10, 17, 14, 15));
}

#[test]
fn empty_board_is_trivially_laid_out() {
    let layout = solve(800, 600, &Board::empty());
    assert_eq!(layout.attempt, 0);
    assert!(!layout.bent);
    assert_eq!(layout.tiles().count(), 0);
    assert_eq!(layout.grid(), Grid::new(32, 24));
}

#[test]
fn arms_grow_outward_without_gaps() {
    let board = Board::spun(d(6, 6))
        .with_arm(Arm::North, [d(6, 1), d(1, 1), d(1, 4)])
        .with_arm(Arm::East, [d(6, 3), d(3, 3), d(3, 1)])
        .with_arm(Arm::South, [d(6, 5)])
        .with_arm(Arm::West, [d(6, 2), d(2, 4)]);
    let rendered = build_rendered_board(&board);
    assert_eq!(rendered.spinner().unwrap().bounding_box, SPINNER_BOX);
    for arm in Arm::ALL {
        assert_abutting(&rendered, arm);
    }
    // abutting survives solving too
    let layout = solve(800, 600, &board);
    for arm in Arm::ALL {
        assert_abutting(&layout.board, arm);
    }
}

#[test]
fn solving_is_repeatable() {
    for board in [long_row(), long_cross(), long_east_arm()] {
        let first = solve(640, 360, &board);
        let second = solve(640, 360, &board);
        assert_eq!(first, second);
    }
}

#[test]
fn long_arm_bends_at_the_edge() {
    let layout = solve(600, 600, &long_east_arm());
    assert_eq!(layout.attempt, 1);
    assert!(layout.bent);
    assert_eq!(layout.grid(), Grid::new(30, 30));

    let east = layout.board.arm(Arm::East);
    let (straight, bent) = east.split_at(7);
    assert!(straight.iter().all(|t| t.direction == Direction::East));
    assert_eq!(bent.len(), 1);
    assert_eq!(bent[0].direction, Direction::North);
    assert_eq!(bent[0].bounding_box, BoundingBox::new(16, 30, 20, 28));
    assert_fits(&layout);
}

#[test]
fn bent_tiles_form_a_suffix_of_their_arm() {
    let layout = solve(800, 600, &long_cross());
    assert!(layout.bent);
    for arm in Arm::ALL {
        let tiles = layout.board.arm(arm);
        let first_bent = tiles
            .iter()
            .position(|t| t.direction != arm.direction())
            .unwrap_or(tiles.len());
        assert!(
            tiles[first_bent..]
                .iter()
                .all(|t| t.direction == arm.direction().rotate_counter_clockwise()),
            "{arm:?} arm bends back and forth"
        );
    }
}

#[test]
fn every_tile_fits_after_bending() {
    for ((width, height), attempt) in [((800, 600), 2), ((1024, 768), 2), ((300, 300), 3)] {
        let layout = solve(width, height, &long_cross());
        assert_eq!(layout.attempt, attempt, "{width}x{height}");
        assert_fits(&layout);
    }
}

#[test]
fn doubles_near_the_bend_keep_the_chain_intact() {
    for arm in [Arm::East, Arm::West] {
        for index in 7..=9 {
            let mut tiles = chain(10);
            tiles[index] = d(3, 3);
            let board = Board::spun(d(6, 6)).with_arm(arm, tiles);
            for (width, height) in [(600, 600), (800, 600), (600, 800), (500, 300)] {
                let layout = solve(width, height, &board);
                assert_fits(&layout);
                assert_chained(&layout.board, arm);
            }
        }
    }
}

#[test]
fn bent_doubles_in_a_full_cross_never_overlap() {
    for index in 0..8 {
        for arm in Arm::ALL {
            let mut arms = Arms {
                north: chain(6),
                east: chain(9),
                south: chain(6),
                west: chain(9),
            };
            if let Some(tile) = arms[arm].get_mut(index) {
                *tile = d(3, 3);
            }
            let board = Board::Spun {
                spinner: d(6, 6),
                arms,
            };
            for (width, height) in [(600, 600), (800, 600), (400, 400)] {
                let Ok(layout) = solve_layout(Viewport::new(width, height), &board) else {
                    continue;
                };
                assert_fits(&layout);
                for arm in Arm::ALL {
                    assert_chained(&layout.board, arm);
                }
            }
        }
    }
}

#[test]
fn doubling_the_viewport_doubles_the_squares() {
    for board in [long_row(), long_cross(), long_east_arm()] {
        for (width, height) in [(400, 300), (300, 300), (640, 360)] {
            let small = solve(width, height, &board);
            let large = solve(width * 2, height * 2, &board);
            assert_eq!(small.attempt, large.attempt);
            assert_eq!(small.grid(), large.grid());
            assert!(large.grid_square_px >= small.grid_square_px);
            assert_eq!(small.board, large.board);
        }
    }
}

#[test]
fn long_row_bends_at_both_ends() {
    let layout = solve(800, 600, &long_row());
    assert!(layout.bent);
    assert_eq!(layout.attempt, 0);
    let row = layout.board.row().unwrap();
    assert_eq!(row[0].direction, Direction::South);
    assert_eq!(row[11].direction, Direction::North);
    insta::assert_snapshot!(render_text(&layout.board, layout.grid()), @r"
    ................................
    ................................
    ................................
    vv..............................
    vv..............................
    vv..............................
    vv..............................
    vv..............................
    vv..............................
    vv..............................
    vv..............................
    >>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>
    >>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>
    ..............................^^
    ..............................^^
    ..............................^^
    ..............................^^
    ..............................^^
    ..............................^^
    ..............................^^
    ..............................^^
    ................................
    ................................
    ................................
    ");
}

#[test]
fn hopeless_board_is_unresolved() {
    init_tracing();
    let board = Board::spun(d(6, 6)).with_arm(Arm::East, chain(60));
    let err = solve_layout(Viewport::new(800, 600), &board).unwrap_err();
    assert_eq!(
        err,
        LayoutError::Unresolved {
            attempts: 10,
            viewport: Viewport::new(800, 600),
            tiles: 61,
        }
    );
}
