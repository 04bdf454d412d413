use crate::bot_controller::calculate_move;
use crate::error::{MoveError, SessionError};
use crate::game_state::GameState;
use crate::replay::{GameRecord, GameRecorder};
use crate::session_rng::SessionRng;
use crate::settings::BotSettings;
use crate::types::{GameStatus, Mark, WinningLine};
use crate::win_detector::find_winning_line;
use crate::{ENGINE_VERSION, log};

// One interactive game: the human plays X, the bot plays O, X moves first.
// Everything runs synchronously on the caller's thread.
pub struct GameSession {
    state: GameState,
    bot_settings: BotSettings,
    rng: SessionRng,
    recorder: Option<GameRecorder>,
}

impl GameSession {
    pub fn new(bot_settings: BotSettings, seed: u64) -> Result<Self, String> {
        bot_settings.validate()?;
        log!("Starting tic-tac-toe session, seed {}", seed);
        Ok(Self {
            state: GameState::new(),
            bot_settings,
            rng: SessionRng::new(seed),
            recorder: None,
        })
    }

    pub fn from_random_seed(bot_settings: BotSettings) -> Result<Self, String> {
        let seed = SessionRng::from_random().seed();
        Self::new(bot_settings, seed)
    }

    pub fn with_recording(mut self) -> Self {
        self.recorder = Some(GameRecorder::new(ENGINE_VERSION.to_string(), self.rng.seed()));
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn play_human_move(&mut self, index: usize) -> Result<GameStatus, SessionError> {
        let status = self.apply_move(Mark::X, index)?;
        Ok(status)
    }

    // Chooses and applies the bot's move; returns the chosen cell along
    // with the status after the move.
    pub fn play_bot_move(&mut self) -> Result<(usize, GameStatus), SessionError> {
        if self.state.status() != GameStatus::InProgress {
            return Err(MoveError::GameFinished.into());
        }

        let index = calculate_move(self.state.board(), &self.bot_settings, &mut self.rng)?;
        let status = self.apply_move(Mark::O, index)?;
        Ok((index, status))
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.state.status() {
            GameStatus::XWon | GameStatus::OWon => find_winning_line(self.state.board()),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn restart(&mut self) {
        self.state.restart();
        if self.recorder.is_some() {
            self.recorder = Some(GameRecorder::new(ENGINE_VERSION.to_string(), self.rng.seed()));
        }
        log!("Session restarted");
    }

    // Finalizes the recorder for the game played so far, if recording was
    // requested.
    pub fn finish_recording(&mut self) -> Option<GameRecord> {
        let outcome = self.state.status();
        self.recorder
            .as_mut()
            .map(|recorder| recorder.finalize(outcome))
    }

    fn apply_move(&mut self, mark: Mark, index: usize) -> Result<GameStatus, MoveError> {
        self.state.place_mark(mark, index)?;
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.record_move(mark, index);
        }

        let status = self.state.status();
        if status != GameStatus::InProgress {
            log!("Game over: {}", status);
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BotError;
    use crate::replay::replay_record;

    fn perfect_session(seed: u64) -> GameSession {
        GameSession::new(BotSettings::perfect(), seed).unwrap()
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let settings = BotSettings {
            random_move_chance: 2.0,
        };
        assert!(GameSession::new(settings, 0).is_err());
    }

    #[test]
    fn test_bot_answers_corner_with_center() {
        let mut session = perfect_session(0);
        assert_eq!(
            session.play_human_move(0),
            Ok(GameStatus::InProgress)
        );
        let (index, status) = session.play_bot_move().unwrap();
        assert_eq!(index, 4);
        assert_eq!(status, GameStatus::InProgress);
    }

    #[test]
    fn test_human_cannot_move_twice_in_a_row() {
        let mut session = perfect_session(0);
        session.play_human_move(0).unwrap();
        assert_eq!(
            session.play_human_move(1),
            Err(SessionError::Move(MoveError::WrongTurn { mark: Mark::X }))
        );
    }

    #[test]
    fn test_bot_move_fails_once_game_is_over() {
        let mut session = perfect_session(0);
        // Human walks into a drawn/finished game by perfect bot play.
        while session.status() == GameStatus::InProgress {
            let index = session
                .state()
                .board()
                .empty_cells()
                .next()
                .expect("in-progress game has empty cells");
            session.play_human_move(index).unwrap();
            if session.status() == GameStatus::InProgress {
                session.play_bot_move().unwrap();
            }
        }

        assert_ne!(session.status(), GameStatus::XWon);
        assert_eq!(
            session.play_bot_move(),
            Err(SessionError::Move(MoveError::GameFinished))
        );
    }

    #[test]
    fn test_no_legal_move_surfaces_from_bot() {
        // Drive the board to a draw, then ask the bot directly.
        let board = crate::board::Board::from_marks([
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ]);
        let mut rng = SessionRng::new(0);
        assert_eq!(
            calculate_move(&board, &BotSettings::perfect(), &mut rng),
            Err(BotError::NoLegalMove)
        );
    }

    #[test]
    fn test_winning_line_reported_after_win() {
        let mut session = perfect_session(0);
        // Human plays a losing line on purpose; bot completes a row or
        // diagonal eventually.
        let human_moves = [1, 5, 6, 7, 8];
        for &index in &human_moves {
            if session.status() != GameStatus::InProgress {
                break;
            }
            if session.play_human_move(index).is_err() {
                continue;
            }
            if session.status() == GameStatus::InProgress {
                session.play_bot_move().unwrap();
            }
        }

        if session.status() == GameStatus::OWon {
            let line = session.winning_line().unwrap();
            assert_eq!(line.mark, Mark::O);
        } else {
            assert_eq!(session.winning_line(), None);
        }
    }

    #[test]
    fn test_recorded_session_replays_deterministically() {
        let mut session = GameSession::new(BotSettings::default_settings(), 99)
            .unwrap()
            .with_recording();
        let mut rng = SessionRng::new(123);

        while session.status() == GameStatus::InProgress {
            let moves: Vec<usize> = session.state().board().empty_cells().collect();
            let index = moves[rng.random_range(0..moves.len())];
            session.play_human_move(index).unwrap();
            if session.status() == GameStatus::InProgress {
                session.play_bot_move().unwrap();
            }
        }

        let record = session.finish_recording().unwrap();
        assert_eq!(record.seed, 99);
        let replayed = replay_record(&record).unwrap();
        assert_eq!(replayed.status(), session.status());
    }

    #[test]
    fn test_restart_gives_a_fresh_game() {
        let mut session = perfect_session(5);
        session.play_human_move(4).unwrap();
        session.play_bot_move().unwrap();
        session.restart();

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.state().board().empty_cells().count(), 9);
        assert_eq!(session.state().current_mark(), Mark::X);
    }
}
