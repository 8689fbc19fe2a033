mod error;
pub use error::Error;

pub mod core;

pub mod board;
pub use board::{Board, GameStatus, GuessError};

pub mod puzzle;
pub use puzzle::{DailyPuzzle, DayCounting, PuzzleSelector};

pub mod request;
pub use request::{GuessRequest, GuessResponse, RequestHandler};

mod words_list;
pub use words_list::WordsList;
