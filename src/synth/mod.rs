// Purpose: Bell voice management for tones requested by the player
// This layer sits above graph nodes and lets strikes ring over each other

pub mod carillon;
pub mod message;
pub mod voice;

pub use carillon::Carillon;
pub use message::ToneReceiver;
pub use voice::{BellVoice, VoiceState};
