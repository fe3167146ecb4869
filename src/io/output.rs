//! Sound card output for the repeater.
//!
//! [`CpalEmitter::open`] starts a cpal output stream that renders a
//! [`Carillon`] and returns two halves:
//!
//! - [`AudioOutput`] owns the stream. Keep it alive on the thread that opened
//!   it; dropping it silences the gongs.
//! - [`CpalEmitter`] is the [`ToneEmitter`] handed to the player. It only
//!   pushes tones into a lock-free ring, so `emit` never waits on the audio
//!   thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, RingBuffer};

use crate::{
    error::{RepeaterError, Result},
    player::{Tone, ToneEmitter},
    synth::Carillon,
    MAX_BLOCK_SIZE,
};

/// Pending strikes the audio thread has not picked up yet
pub const STRIKE_QUEUE_SIZE: usize = 64;
/// Rendered samples kept for visualization
pub const SCOPE_QUEUE_SIZE: usize = 48_000;
/// Bells allowed to ring at once
pub const MAX_VOICES: usize = 16;

/// Running output stream plus a tap of what it plays
pub struct AudioOutput {
    _stream: cpal::Stream,
    scope: Option<Consumer<f32>>,
    sample_rate: f32,
    channels: usize,
}

impl AudioOutput {
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Mono samples as rendered, for oscilloscopes (can be taken once)
    pub fn take_scope(&mut self) -> Option<Consumer<f32>> {
        self.scope.take()
    }
}

/// Tone emitter feeding the carillon inside a cpal stream
pub struct CpalEmitter {
    tx: Mutex<Producer<Tone>>,
    /// Cleared by the stream's error callback
    alive: Arc<AtomicBool>,
}

impl CpalEmitter {
    /// Open the default output device and start ringing silence
    pub fn open() -> Result<(AudioOutput, CpalEmitter)> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| RepeaterError::unavailable("no default output device available"))?;
        let config = device.default_output_config().map_err(|e| {
            RepeaterError::unavailable(format!("failed to fetch default output config: {e}"))
        })?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;
        log::info!("audio output: {sample_rate} Hz, {channels} channels");

        let (tone_tx, tone_rx) = RingBuffer::<Tone>::new(STRIKE_QUEUE_SIZE);
        let (mut scope_tx, scope_rx) = RingBuffer::<f32>::new(SCOPE_QUEUE_SIZE);
        let mut carillon = Carillon::new(sample_rate, MAX_VOICES, tone_rx);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let alive = Arc::new(AtomicBool::new(true));
        let alive_on_error = alive.clone();

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;

                    while frames_written < total_frames {
                        let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                        let block = &mut render_buf[..frames_to_render];
                        carillon.render_block(block);

                        // Copy to output (mono to all channels)
                        let out_off = frames_written * channels;
                        for (i, &s) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                            // Scope lagging behind is fine, drop samples
                            let _ = scope_tx.push(s);
                        }

                        frames_written += frames_to_render;
                    }
                },
                move |err| {
                    log::error!("audio stream error: {err}");
                    alive_on_error.store(false, Ordering::Release);
                },
                None,
            )
            .map_err(|e| RepeaterError::unavailable(format!("failed to build output stream: {e}")))?;

        stream
            .play()
            .map_err(|e| RepeaterError::unavailable(format!("failed to start output stream: {e}")))?;

        let output = AudioOutput {
            _stream: stream,
            scope: Some(scope_rx),
            sample_rate,
            channels,
        };
        Ok((output, Self::from_parts(tone_tx, alive)))
    }

    fn from_parts(tx: Producer<Tone>, alive: Arc<AtomicBool>) -> Self {
        Self {
            tx: Mutex::new(tx),
            alive,
        }
    }
}

impl ToneEmitter for CpalEmitter {
    fn emit(&self, tone: Tone) -> Result<()> {
        if !self.alive.load(Ordering::Acquire) {
            return Err(RepeaterError::unavailable("audio stream stopped"));
        }

        let mut tx = self
            .tx
            .lock()
            .map_err(|_| RepeaterError::unavailable("strike queue poisoned"))?;
        tx.push(tone)
            .map_err(|_| RepeaterError::unavailable("strike queue full"))
    }
}
