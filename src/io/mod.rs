// Purpose - external interfaces: the audio device behind the tone emitter

#[cfg(feature = "rtrb")]
pub mod output;

#[cfg(feature = "rtrb")]
pub use output::{AudioOutput, CpalEmitter};
