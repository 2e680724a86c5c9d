//! Tests for the minimax search engine.

use std::collections::HashSet;
use strictly_mnk::{
    Board, DRAW_SCORE, GameOutcome, LOSS_SCORE, MnkErrorKind, Move, SearchEngine, Symbol,
    WIN_SCORE, has_win, is_draw, outcome,
};

/// Side to move in a game where X starts.
fn to_move(board: &Board) -> Symbol {
    if board.count(Symbol::X) > board.count(Symbol::O) {
        Symbol::O
    } else {
        Symbol::X
    }
}

/// All positions reachable from the empty board with X moving first.
fn reachable_positions(size: usize, win_length: usize) -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new(size, win_length).unwrap()];
    let mut positions = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board.clone()) {
            continue;
        }
        if !outcome(&board).is_over() {
            let symbol = to_move(&board);
            for mv in board.cells_in_play() {
                let mut child = board.clone();
                child.play(mv, symbol).unwrap();
                stack.push(child);
            }
        }
        positions.push(board);
    }

    positions
}

fn assert_engines_agree(board: &Board, bot: Symbol) {
    let mut pruned_board = board.clone();
    let mut full_board = board.clone();
    let pruned = SearchEngine::new()
        .search(&mut pruned_board, bot, bot.opponent())
        .unwrap();
    let full = SearchEngine::unpruned()
        .search(&mut full_board, bot, bot.opponent())
        .unwrap();

    assert_eq!(pruned.best_move, full.best_move, "{}", board.notation());
    assert_eq!(pruned.score, full.score, "{}", board.notation());
    assert!(pruned.nodes <= full.nodes);
    assert_eq!(&pruned_board, board);
    assert_eq!(&full_board, board);
}

#[test]
fn test_pruned_matches_unpruned_on_every_3x3_position() {
    let positions = reachable_positions(3, 3);
    assert_eq!(positions.len(), 5478);

    let terminal = positions
        .iter()
        .filter(|board| outcome(board).is_over())
        .count();
    assert_eq!(terminal, 958);

    for board in positions.iter().filter(|board| !outcome(board).is_over()) {
        assert_engines_agree(board, to_move(board));
    }
}

#[test]
fn test_pruned_matches_unpruned_with_short_runs() {
    // 4×4 boards with K = 3, eight marks down.
    for notation in ["XOX./O.O./.X../X..O", "X..O/.OX./.XO./O..X"] {
        let board = Board::parse(notation, 3).unwrap();
        assert_eq!(outcome(&board), GameOutcome::InProgress);
        assert_engines_agree(&board, Symbol::X);
        assert_engines_agree(&board, Symbol::O);
    }
}

#[test]
fn test_forced_win_completes_row() {
    let mut board = Board::new(3, 3).unwrap();
    assert!(board.apply_move(0, 0, Symbol::X));
    assert!(board.apply_move(0, 1, Symbol::X));
    assert!(board.apply_move(1, 0, Symbol::O));
    assert!(board.apply_move(1, 1, Symbol::O));

    let result = SearchEngine::new()
        .search(&mut board, Symbol::X, Symbol::O)
        .unwrap();
    assert_eq!(result.best_move, Move::new(0, 2));
    assert_eq!(result.score, WIN_SCORE);
}

/// Plays the position out with the engine on both sides.
fn play_out(mut board: Board, mut symbol: Symbol) -> GameOutcome {
    let engine = SearchEngine::new();
    while !outcome(&board).is_over() {
        let mv = engine.choose_move(&mut board, symbol, symbol.opponent()).unwrap();
        board.play(mv, symbol).unwrap();
        symbol = symbol.opponent();
    }
    outcome(&board)
}

#[test]
fn test_blocks_diagonal_threat() {
    // O holds (0,0) and (1,1); X must take (2,2).
    let mut board = Board::parse("OX./XO./...", 3).unwrap();
    let engine = SearchEngine::new();

    let result = engine.search(&mut board, Symbol::X, Symbol::O).unwrap();
    assert_eq!(result.best_move, Move::new(2, 2));
    assert!(result.score > LOSS_SCORE);

    let alternatives: Vec<Move> = board
        .cells_in_play()
        .filter(|mv| *mv != result.best_move)
        .collect();
    assert_eq!(alternatives.len(), 4);
    for mv in alternatives {
        let mut line = board.clone();
        line.play(mv, Symbol::X).unwrap();
        let reply = engine.search(&mut line, Symbol::O, Symbol::X).unwrap();
        assert_eq!(reply.score, WIN_SCORE, "X at {} should lose", mv);
        assert_eq!(play_out(line, Symbol::O), GameOutcome::Win(Symbol::O));
    }
}

#[test]
fn test_full_board_draw_is_rejected() {
    let mut board = Board::parse("XOX/XOO/OXX", 3).unwrap();
    assert!(board.is_full());
    assert!(!has_win(&board, Symbol::X));
    assert!(!has_win(&board, Symbol::O));
    assert!(is_draw(&board));
    assert_eq!(outcome(&board), GameOutcome::Draw);

    for engine in [SearchEngine::new(), SearchEngine::unpruned()] {
        let err = engine
            .choose_move(&mut board, Symbol::X, Symbol::O)
            .unwrap_err();
        assert!(matches!(err.kind(), MnkErrorKind::InvalidState(_)));
    }
}

#[test]
fn test_decided_position_is_rejected() {
    // X already has the top row, with empty cells left.
    let mut board = Board::parse("XXX/OO./...", 3).unwrap();
    let before = board.clone();

    for engine in [SearchEngine::new(), SearchEngine::unpruned()] {
        for (bot, opponent) in [(Symbol::X, Symbol::O), (Symbol::O, Symbol::X)] {
            let err = engine.search(&mut board, bot, opponent).unwrap_err();
            assert!(matches!(err.kind(), MnkErrorKind::InvalidState(_)));
        }
    }
    assert_eq!(board, before);
}

#[test]
fn test_search_is_symmetric_in_symbols() {
    // Same position with marks swapped: same move, same score.
    let board = Board::parse("X.O/.X./...", 3).unwrap();
    let swapped = Board::parse("O.X/.O./...", 3).unwrap();
    let engine = SearchEngine::new();

    let a = engine.search(&mut board.clone(), Symbol::O, Symbol::X).unwrap();
    let b = engine.search(&mut swapped.clone(), Symbol::X, Symbol::O).unwrap();
    assert_eq!(a.best_move, b.best_move);
    assert_eq!(a.score, b.score);
    assert_eq!(a.best_move, Move::new(2, 2));
}

#[test]
fn test_scores_follow_bot_perspective() {
    // O to move with its own open row.
    let mut board = Board::parse("XX./X../O.O", 3).unwrap();
    let result = SearchEngine::new()
        .search(&mut board, Symbol::O, Symbol::X)
        .unwrap();
    assert_eq!(result.score, WIN_SCORE);

    // O to move; blocking the row hands X a fork.
    let mut board = Board::parse("XX./X../O..", 3).unwrap();
    let result = SearchEngine::new()
        .search(&mut board, Symbol::O, Symbol::X)
        .unwrap();
    assert_eq!(result.score, LOSS_SCORE);
}

#[test]
fn test_empty_board_value_is_draw() {
    let mut board = Board::new(3, 3).unwrap();
    let result = SearchEngine::new()
        .search(&mut board, Symbol::X, Symbol::O)
        .unwrap();
    assert_eq!(result.score, DRAW_SCORE);
}

#[test]
fn test_one_cell_board() {
    let mut board = Board::new(1, 1).unwrap();
    let result = SearchEngine::new()
        .search(&mut board, Symbol::O, Symbol::X)
        .unwrap();
    assert_eq!(result.best_move, Move::new(0, 0));
    assert_eq!(result.score, WIN_SCORE);
}
