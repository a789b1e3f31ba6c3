//! Game outcomes.
//!
//! The runner in `games::war` ends every game with a `GameResult` and
//! wraps it in a `GameReport` for the caller.

pub mod result;

pub use result::{GameReport, GameResult, Victory};
