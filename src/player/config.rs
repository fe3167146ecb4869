//! Presentation tuning for the repeater: strike pacing and gong pitches.
//!
//! None of these values affect which strikes ring or in what order. They only
//! decide how far apart the strikes fall and what they sound like.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::time::Duration;

use super::emitter::Gong;
use crate::sequencing::{ChimeEvent, ChimeSequence};

/// Gaps the player waits for between tones
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Wait after every strike before the next one
    pub strike_gap: Duration,
    /// Wait between the high and low tone of a quarter
    pub ding_dong_gap: Duration,
}

impl Pacing {
    pub const WIRE_GONG: Pacing = Pacing {
        strike_gap: Duration::from_millis(700),
        ding_dong_gap: Duration::from_millis(150),
    };

    pub const BRISK: Pacing = Pacing {
        strike_gap: Duration::from_millis(400),
        ding_dong_gap: Duration::from_millis(100),
    };

    /// Total time a playback of `sequence` takes, trailing gap included
    pub fn duration_of(&self, sequence: &ChimeSequence) -> Duration {
        let strikes = sequence.len() as u32;
        let quarters = sequence.count(ChimeEvent::Quarter) as u32;
        self.strike_gap * strikes + self.ding_dong_gap * quarters
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::WIRE_GONG
    }
}

/// Fundamentals of the two gongs
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GongPitches {
    pub low_hz: f32,
    pub high_hz: f32,
}

impl GongPitches {
    /// B3 and D#4, close to the gongs of a real repeater
    pub const WIRE_GONG: GongPitches = GongPitches {
        low_hz: 246.94,
        high_hz: 311.13,
    };

    pub fn frequency(&self, gong: Gong) -> f32 {
        match gong {
            Gong::Low => self.low_hz,
            Gong::High => self.high_hz,
        }
    }
}

impl Default for GongPitches {
    fn default() -> Self {
        Self::WIRE_GONG
    }
}

/// Pacing plus pitches, as one skin for the player
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RepeaterConfig {
    pub pacing: Pacing,
    pub pitches: GongPitches,
}

impl RepeaterConfig {
    pub fn wire_gong() -> Self {
        Self {
            pacing: Pacing::WIRE_GONG,
            pitches: GongPitches::WIRE_GONG,
        }
    }

    /// Shorter gaps for a quicker read-out, same gongs
    pub fn brisk() -> Self {
        Self {
            pacing: Pacing::BRISK,
            pitches: GongPitches::WIRE_GONG,
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_pitches(mut self, pitches: GongPitches) -> Self {
        self.pitches = pitches;
        self
    }
}
