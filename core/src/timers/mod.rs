//! Zone timers
//!
//! This module provides:
//! - **SimpleTimer**: daily runs, one running total plus the instance the
//!   player currently occupies
//! - **SequenceTimer**: marathons, a fixed ordered sequence of stages
//!   entered strictly in order and persisted after every change
//!
//! Both are driven the same way: `start`/`stop` on user toggles, `update`
//! with the current map ID on every poll tick while running. Every call
//! returns the `DisplayTriple` to render.

mod clock;
mod display;
mod sequence;
mod simple;


pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use display::{DisplayTriple, format_duration, format_elapsed};
pub use sequence::SequenceTimer;
pub use simple::SimpleTimer;

use crate::game_data::ZoneId;

/// Common contract of the daily and marathon timers
pub trait ZoneTimer {
    /// User started the timer
    fn start(&mut self) -> DisplayTriple;

    /// User stopped the timer
    fn stop(&mut self) -> DisplayTriple;

    /// Poll tick with the player's current map
    fn update(&mut self, zone: ZoneId) -> DisplayTriple;

    /// Current display without changing state
    fn display(&self) -> DisplayTriple;
}
