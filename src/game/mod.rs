//! Game session layer
//!
//! Turns the pure scoring core into playable rounds: attempt accounting,
//! win/loss transitions, the pending input row, and statistics.

mod input;
mod session;
mod stats;

pub use input::{KeyInput, KeyOutcome};
pub use session::{GameSession, GuessRecord, SessionState, SubmitOutcome};
pub use stats::Statistics;
