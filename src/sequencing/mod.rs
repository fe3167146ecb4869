pub mod chime;
pub mod time_of_day;

pub use chime::{ChimeEvent, ChimeSequence, ChimeSequencer};
pub use time_of_day::{TimeOfDay, MINUTES_PER_QUARTER};
