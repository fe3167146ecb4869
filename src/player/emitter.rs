#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::sync::Arc;

use crate::error::Result;

/// Which of the two wire gongs is struck
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gong {
    Low,
    High,
}

/// The ringing character of a strike.
///
/// Hour strikes ring longest; quarter and minute strikes are lighter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strike {
    Hour,
    Quarter,
    Minute,
}

/// A single tone request handed to a [`ToneEmitter`]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub gong: Gong,
    pub strike: Strike,
    /// Fundamental in Hz, resolved from the gong pitches in use
    pub frequency: f32,
}

/// Something that can make a tone sound.
///
/// `emit` must return immediately: it schedules the sound and leaves decay to
/// the implementation. Tones emitted close together are expected to overlap.
pub trait ToneEmitter: Send + Sync {
    fn emit(&self, tone: Tone) -> Result<()>;
}

impl<T: ToneEmitter + ?Sized> ToneEmitter for &T {
    fn emit(&self, tone: Tone) -> Result<()> {
        (**self).emit(tone)
    }
}

impl<T: ToneEmitter + ?Sized> ToneEmitter for Box<T> {
    fn emit(&self, tone: Tone) -> Result<()> {
        (**self).emit(tone)
    }
}

impl<T: ToneEmitter + ?Sized> ToneEmitter for Arc<T> {
    fn emit(&self, tone: Tone) -> Result<()> {
        (**self).emit(tone)
    }
}
