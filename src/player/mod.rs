//! Paced playback of chime sequences.
//!
//! The [`ChimePlayer`] walks a [`ChimeSequence`] strike by strike, asking a
//! [`ToneEmitter`] for each tone and sleeping for the configured gaps in
//! between. Sleeping is the only place playback yields; tones themselves are
//! fire-and-forget and may still be ringing when the next one starts.
//!
//! ```text
//!   Hour     LOW  ──── strike_gap ────
//!   Quarter  HIGH ─ ding_dong_gap ─ LOW ──── strike_gap ────
//!   Minute   HIGH ──── strike_gap ────
//! ```
//!
//! At most one playback is in flight per player. A `play` call that arrives
//! while another is ringing returns [`PlayOutcome::Busy`] without emitting
//! anything; it is neither queued nor treated as an error.

pub mod config;
pub mod emitter;

pub use config::{GongPitches, Pacing, RepeaterConfig};
pub use emitter::{Gong, Strike, Tone, ToneEmitter};

use std::sync::atomic::{AtomicBool, Ordering};

use crate::clock::Clock;
use crate::error::Result;
use crate::sequencing::{ChimeEvent, ChimeSequence, ChimeSequencer, TimeOfDay};

/// How a call to [`ChimePlayer::play`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The whole sequence rang; `strikes` is its event count
    Struck { strikes: usize },
    /// Another playback was already in progress, nothing was emitted
    Busy,
}

/// Single-flight minute-repeater driver over an injected emitter
pub struct ChimePlayer<E> {
    emitter: E,
    config: RepeaterConfig,
    /// Set for exactly as long as one playback session is alive
    playing: AtomicBool,
}

impl<E: ToneEmitter> ChimePlayer<E> {
    /// Create a player with the wire-gong preset
    pub fn new(emitter: E) -> Self {
        Self::with_config(emitter, RepeaterConfig::wire_gong())
    }

    pub fn with_config(emitter: E, config: RepeaterConfig) -> Self {
        Self {
            emitter,
            config,
            playing: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &RepeaterConfig {
        &self.config
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Whether a playback session is currently ringing
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }

    /// Sample `clock` once and ring that time
    pub async fn play_now<C: Clock + ?Sized>(&self, clock: &C) -> Result<PlayOutcome> {
        self.play(clock.now()).await
    }

    /// Ring the time `now`, returning once the last strike's gap has elapsed.
    ///
    /// An emitter failure ends the session early and is returned as-is. The
    /// in-progress flag is cleared on every exit path, including the future
    /// being dropped mid-sequence, so a later call can retry.
    pub async fn play(&self, now: TimeOfDay) -> Result<PlayOutcome> {
        let Some(_session) = PlaybackSession::begin(&self.playing) else {
            log::debug!("chime for {now} ignored: playback already in progress");
            return Ok(PlayOutcome::Busy);
        };

        let sequence = ChimeSequencer::compute_time(now);
        log::info!(
            "striking {now}: {} hours, {} quarters, {} minutes ({:?})",
            sequence.count(ChimeEvent::Hour),
            sequence.count(ChimeEvent::Quarter),
            sequence.count(ChimeEvent::Minute),
            self.config.pacing.duration_of(&sequence),
        );

        self.ring(&sequence).await?;

        log::info!("finished striking {now}");
        Ok(PlayOutcome::Struck {
            strikes: sequence.len(),
        })
    }

    async fn ring(&self, sequence: &ChimeSequence) -> Result<()> {
        let pacing = self.config.pacing;

        for event in sequence {
            match event {
                ChimeEvent::Hour => self.sound(Gong::Low, Strike::Hour)?,
                ChimeEvent::Quarter => {
                    self.sound(Gong::High, Strike::Quarter)?;
                    tokio::time::sleep(pacing.ding_dong_gap).await;
                    self.sound(Gong::Low, Strike::Quarter)?;
                }
                ChimeEvent::Minute => self.sound(Gong::High, Strike::Minute)?,
            }
            tokio::time::sleep(pacing.strike_gap).await;
        }

        Ok(())
    }

    fn sound(&self, gong: Gong, strike: Strike) -> Result<()> {
        let tone = Tone {
            gong,
            strike,
            frequency: self.config.pitches.frequency(gong),
        };
        log::debug!("emit {:?} gong ({:?}) at {:.2} Hz", gong, strike, tone.frequency);
        self.emitter.emit(tone)
    }
}

/// Holds the in-progress flag for the lifetime of one playback
struct PlaybackSession<'a> {
    flag: &'a AtomicBool,
}

impl<'a> PlaybackSession<'a> {
    /// Claim the flag, or `None` if another session holds it
    fn begin(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for PlaybackSession<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
