pub mod board;
pub mod bot_controller;
pub mod config;
pub mod error;
pub mod game_state;
pub mod logger;
pub mod replay;
pub mod session;
pub mod session_rng;
pub mod settings;
pub mod types;
pub mod win_detector;

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub use board::{Board, CELL_COUNT};
pub use bot_controller::{calculate_minimax_move, calculate_move, calculate_random_move};
pub use config::{EngineConfig, load_config, save_config};
pub use error::{BotError, MoveError, SessionError};
pub use game_state::GameState;
pub use logger::init_logger;
pub use replay::{GameRecord, GameRecorder, RecordError, load_record, replay_record, save_record};
pub use session::GameSession;
pub use session_rng::SessionRng;
pub use settings::BotSettings;
pub use types::{GameStatus, Mark, WinningLine};
pub use win_detector::{WINNING_LINES, evaluate, find_winning_line, has_win};
