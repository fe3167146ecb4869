pub mod clock;
pub mod error;
pub mod graph; // Bell synthesis nodes
pub mod io;
pub mod player; // Paced, single-flight strike playback
pub mod sequencing; // Time of day to repeater strikes
pub mod synth; // Bell voices and polyphony

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{RepeaterError, Result};
pub use player::{ChimePlayer, PlayOutcome, RepeaterConfig, Tone, ToneEmitter};
pub use sequencing::{ChimeEvent, ChimeSequence, ChimeSequencer, TimeOfDay};

pub const MAX_BLOCK_SIZE: usize = 2048;
