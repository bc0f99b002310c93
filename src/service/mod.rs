mod board_handler;

pub use board_handler::{ClaimBoard, ClaimInputError, ClaimOutcome};
