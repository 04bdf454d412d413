use crate::board::Board;
use crate::error::MoveError;
use crate::types::{GameStatus, Mark};
use crate::win_detector::evaluate;

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl GameState {
    // X always moves first, as in a fresh game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameFinished);
        }

        if mark != self.current_mark {
            return Err(MoveError::WrongTurn { mark });
        }

        if self.board.is_occupied(index)? {
            return Err(MoveError::CellOccupied { index });
        }

        self.board.place(index, mark);
        self.last_move = Some(index);

        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!("current mark is never empty"),
        };
    }

    pub fn restart(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
