//! Strategist priority tests over fixed board positions.

use ttt_engine::{Board, Mark, MatchRng, Strategist};

fn board_of(marks: &[(usize, Mark)]) -> Board {
    let mut board = Board::empty();
    for &(idx, mark) in marks {
        board = board.place(idx, mark).unwrap();
    }
    board
}

// =============================================================================
// Fixed Positions
// =============================================================================

#[test]
fn test_completes_own_row_over_blocking() {
    // X X _ / O O _ / _ _ _ - O to move: finishing its own row at 5
    // outranks blocking X at 2.
    let board = board_of(&[
        (0, Mark::X),
        (1, Mark::X),
        (3, Mark::O),
        (4, Mark::O),
    ]);

    let strategist = Strategist::new(Mark::O);
    for seed in 0..20 {
        let mut rng = MatchRng::new(seed);
        assert_eq!(strategist.choose_move(&board, &mut rng), 5);
    }
}

#[test]
fn test_takes_win_at_index_two() {
    // O O _ / X X _ / _ _ _ - O to move must win at 2.
    let board = board_of(&[
        (0, Mark::O),
        (1, Mark::O),
        (3, Mark::X),
        (4, Mark::X),
    ]);

    let strategist = Strategist::new(Mark::O);
    for seed in 0..20 {
        let mut rng = MatchRng::new(seed);
        assert_eq!(strategist.choose_move(&board, &mut rng), 2);
    }
}

#[test]
fn test_blocks_when_no_win_exists() {
    // X _ X / _ O _ / _ _ _ - O must block the top row at 1.
    let board = board_of(&[(0, Mark::X), (2, Mark::X), (4, Mark::O)]);

    let strategist = Strategist::new(Mark::O);
    for seed in 0..20 {
        let mut rng = MatchRng::new(seed);
        assert_eq!(strategist.choose_move(&board, &mut rng), 1);
    }
}

#[test]
fn test_blocks_diagonal_threat() {
    // X _ _ / _ X _ / O _ _ - O must block the diagonal at 8.
    let board = board_of(&[(0, Mark::X), (4, Mark::X), (6, Mark::O)]);

    let strategist = Strategist::new(Mark::O);
    for seed in 0..20 {
        let mut rng = MatchRng::new(seed);
        assert_eq!(strategist.choose_move(&board, &mut rng), 8);
    }
}

#[test]
fn test_ascending_scan_picks_lowest_winning_cell() {
    // O can complete either the top row (at 2) or the bottom row (at 8);
    // the ascending scan must settle on 2.
    let board = board_of(&[
        (0, Mark::O),
        (1, Mark::O),
        (6, Mark::O),
        (7, Mark::O),
        (3, Mark::X),
        (4, Mark::X),
    ]);

    let strategist = Strategist::new(Mark::O);
    let mut rng = MatchRng::new(42);
    assert_eq!(strategist.choose_move(&board, &mut rng), 2);
}

// =============================================================================
// Fallback Behavior
// =============================================================================

#[test]
fn test_fallback_stays_on_open_cells() {
    // No win, no block: every choice must land on an empty cell.
    let board = board_of(&[(0, Mark::X), (4, Mark::O)]);
    let strategist = Strategist::new(Mark::O);

    for seed in 0..100 {
        let mut rng = MatchRng::new(seed);
        let idx = strategist.choose_move(&board, &mut rng);
        assert!(board.is_open(idx), "seed {seed} chose {idx}");
    }
}

#[test]
fn test_fallback_reproducible_with_seed() {
    let board = board_of(&[(0, Mark::X), (4, Mark::O)]);
    let strategist = Strategist::new(Mark::O);

    let picks: Vec<usize> = (0..5)
        .map(|_| {
            let mut rng = MatchRng::new(1234);
            strategist.choose_move(&board, &mut rng)
        })
        .collect();

    assert!(picks.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_single_open_cell_is_forced() {
    // X O X / X O O / O X _ - only cell 8 open, no line completable
    // there by either mark, so the fallback has exactly one choice.
    let board = board_of(&[
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (3, Mark::X),
        (4, Mark::O),
        (5, Mark::O),
        (6, Mark::O),
        (7, Mark::X),
    ]);

    let strategist = Strategist::new(Mark::O);
    for seed in 0..20 {
        let mut rng = MatchRng::new(seed);
        assert_eq!(strategist.choose_move(&board, &mut rng), 8);
    }
}
