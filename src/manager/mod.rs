//! Session management and the I/O collaborator contracts.
//!
//! - `GameManager`: owns a session and drives setup, moves, undo, restart
//! - `Actuator` / `StorageManager`: rendering and persistence contracts
//! - `MemoryStorage`, `NullActuator`: in-process implementations

pub mod game;
pub mod io;
pub mod state;
pub mod storage;

pub use game::{GameManager, MoveCommand};
pub use io::{Actuator, ActuatorMetadata, NullActuator, StorageManager};
pub use state::SavedGame;
pub use storage::{decode_game, encode_game, MemoryStorage};
