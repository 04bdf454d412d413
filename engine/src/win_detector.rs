use crate::board::Board;
use crate::types::{GameStatus, Mark, WinningLine};

// 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn has_win(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.mark_at(index) == mark))
}

// O is checked before X: if both sides somehow held a line (unreachable
// under legal play), O is reported as the winner.
pub fn evaluate(board: &Board) -> GameStatus {
    if has_win(board, Mark::O) {
        return GameStatus::OWon;
    }
    if has_win(board, Mark::X) {
        return GameStatus::XWon;
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    for mark in [Mark::O, Mark::X] {
        for line in WINNING_LINES {
            if line.iter().all(|&index| board.mark_at(index) == mark) {
                return Some(WinningLine::new(mark, line));
            }
        }
    }
    None
}
