use crate::types::Mark;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    InvalidIndex { index: usize },
    CellOccupied { index: usize },
    GameFinished,
    WrongTurn { mark: Mark },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidIndex { index } => {
                write!(f, "Cell index {} is outside the board", index)
            }
            MoveError::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            MoveError::GameFinished => write!(f, "Game is already over"),
            MoveError::WrongTurn { mark } => write!(f, "It is not {}'s turn", mark),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotError {
    NoLegalMove,
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::NoLegalMove => write!(f, "No legal move available"),
        }
    }
}

impl std::error::Error for BotError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
    Move(MoveError),
    Bot(BotError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Move(e) => write!(f, "Move rejected: {}", e),
            SessionError::Bot(e) => write!(f, "Bot move failed: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            SessionError::Bot(e) => Some(e),
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(e: MoveError) -> Self {
        SessionError::Move(e)
    }
}

impl From<BotError> for SessionError {
    fn from(e: BotError) -> Self {
        SessionError::Bot(e)
    }
}
