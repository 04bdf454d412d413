use crate::board::Board;
use crate::error::BotError;
use crate::session_rng::SessionRng;
use crate::settings::BotSettings;
use crate::types::{GameStatus, Mark};
use crate::win_detector::evaluate;

const O_WIN_SCORE: i32 = 1;
const X_WIN_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

// The bot always plays O and maximizes O's outcome.
pub fn calculate_move(
    board: &Board,
    settings: &BotSettings,
    rng: &mut SessionRng,
) -> Result<usize, BotError> {
    if rng.random_chance(settings.random_move_chance) {
        calculate_random_move(board, rng)
    } else {
        calculate_minimax_move(board)
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<usize, BotError> {
    let available_moves: Vec<usize> = board.empty_cells().collect();
    if available_moves.is_empty() {
        return Err(BotError::NoLegalMove);
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

pub fn calculate_minimax_move(board: &Board) -> Result<usize, BotError> {
    let available_moves: Vec<usize> = board.empty_cells().collect();
    if available_moves.is_empty() {
        return Err(BotError::NoLegalMove);
    }

    let mut board = board.clone();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        board.place(index, Mark::O);
        let score = minimax(&mut board, 0, false);
        board.remove(index);

        // Strict comparison: ties keep the first index in ascending order.
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or(BotError::NoLegalMove)
}

// Full-depth search; `depth` is threaded through but never affects the
// score or terminates a branch early.
fn minimax(board: &mut Board, depth: u32, is_maximizing: bool) -> i32 {
    match evaluate(board) {
        GameStatus::OWon => return O_WIN_SCORE,
        GameStatus::XWon => return X_WIN_SCORE,
        GameStatus::Draw => return DRAW_SCORE,
        GameStatus::InProgress => {}
    }

    let moves: Vec<usize> = board.empty_cells().collect();
    assert!(
        !moves.is_empty(),
        "non-terminal board must have an empty cell"
    );

    if is_maximizing {
        let mut best_score = i32::MIN;
        for index in moves {
            board.place(index, Mark::O);
            let score = minimax(board, depth + 1, false);
            board.remove(index);
            best_score = best_score.max(score);
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for index in moves {
            board.place(index, Mark::X);
            let score = minimax(board, depth + 1, true);
            board.remove(index);
            best_score = best_score.min(score);
        }
        best_score
    }
}
