pub mod log;
pub mod record;
pub mod roster;

pub use roster::{Roster, RosterRow};
