use std::f32::consts::TAU;

use crate::graph::node::{GraphNode, RenderCtx};
use crate::player::Strike;

/*
Wire Gong
=========

A repeater's gongs are hardened steel wires coiled around the movement. Struck
by a hammer they ring with a bright, slightly clangy tone that fades slowly.
We approximate that with additive synthesis: a handful of sine partials above
the fundamental, two of them deliberately off the harmonic series.

  partial   ratio   amplitude
  -------   -----   ---------
     1       1.0      1.00      fundamental
     2       2.0      0.60      octave
     3       3.0      0.40      octave + fifth
     4       4.2      0.20      inharmonic, gives the metallic edge
     5       5.4      0.10      inharmonic

The partial sum is normalized so a single bell never exceeds its peak level.


The Envelope
------------

  Level
   peak ┐ ╱╲
        │╱  ╲
        │    ╲__
        │       ╲____
  floor └─────────────────────────┐
        0  20ms        ring      3.0s
        attack  exponential decay   stop

Attack is a 20 ms linear ramp to the peak. From there the level falls
exponentially, reaching `floor` (0.001) at the ring time, and holds there
until every partial stops at 3 s.

  strike     peak   ring
  -------    ----   ----
  Hour       0.8    2.5s
  Quarter    0.6    1.5s
  Minute     0.6    1.5s

Exponential decay is a constant per-sample multiplier:

    factor = (floor / peak) ^ (1 / decay_samples)

so after `decay_samples` multiplications the level lands on the floor.
*/

struct Partial {
    ratio: f32,
    amplitude: f32,
}

const PARTIAL_COUNT: usize = 5;

const PARTIALS: [Partial; PARTIAL_COUNT] = [
    Partial { ratio: 1.0, amplitude: 1.0 },
    Partial { ratio: 2.0, amplitude: 0.6 },
    Partial { ratio: 3.0, amplitude: 0.4 },
    Partial { ratio: 4.2, amplitude: 0.2 },
    Partial { ratio: 5.4, amplitude: 0.1 },
];

const AMPLITUDE_SUM: f32 = 2.3;
const ATTACK_SECONDS: f32 = 0.02;
const DECAY_FLOOR: f32 = 0.001;
const STOP_SECONDS: f32 = 3.0;

/// Peak level and ring time for a strike kind
fn ring_profile(strike: Strike) -> (f32, f32) {
    match strike {
        Strike::Hour => (0.8, 2.5),
        Strike::Quarter | Strike::Minute => (0.6, 1.5),
    }
}

pub struct BellNode {
    /// Phase of each partial in cycles (0.0 - 1.0)
    phases: [f32; PARTIAL_COUNT],
    /// Phase advance per sample for each partial
    increments: [f32; PARTIAL_COUNT],
    level: f32,
    peak: f32,
    attack_samples: u32,
    decay_factor: f32,
    elapsed_samples: u32,
    stop_samples: u32,
    active: bool,
}

impl BellNode {
    pub fn new() -> Self {
        Self {
            phases: [0.0; PARTIAL_COUNT],
            increments: [0.0; PARTIAL_COUNT],
            level: 0.0,
            peak: 0.0,
            attack_samples: 1,
            decay_factor: 1.0,
            elapsed_samples: 0,
            stop_samples: 0,
            active: false,
        }
    }

    /// Advance the envelope by one sample
    #[inline]
    fn next_level(&mut self) -> f32 {
        if self.elapsed_samples < self.attack_samples {
            let progress = (self.elapsed_samples + 1) as f32 / self.attack_samples as f32;
            self.level = self.peak * progress;
        } else {
            self.level = (self.level * self.decay_factor).max(DECAY_FLOOR);
        }
        self.level
    }

    /// Sum of all partials at the current phase, then advance phases
    #[inline]
    fn next_partials(&mut self) -> f32 {
        let mut sum = 0.0;
        for (i, partial) in PARTIALS.iter().enumerate() {
            sum += (self.phases[i] * TAU).sin() * partial.amplitude;
            self.phases[i] += self.increments[i];
            if self.phases[i] >= 1.0 {
                self.phases[i] -= 1.0;
            }
        }
        sum / AMPLITUDE_SUM
    }
}

impl Default for BellNode {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphNode for BellNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        if !self.active {
            out.fill(0.0);
            return;
        }

        for sample in out.iter_mut() {
            if self.elapsed_samples >= self.stop_samples {
                self.active = false;
                self.level = 0.0;
                *sample = 0.0;
                continue;
            }

            let level = self.next_level();
            *sample = self.next_partials() * level;
            self.elapsed_samples += 1;
        }
    }

    /// Restart the bell from silence at the context's pitch
    fn strike(&mut self, ctx: &RenderCtx) {
        let (peak, ring_seconds) = ring_profile(ctx.strike);

        for (i, partial) in PARTIALS.iter().enumerate() {
            self.phases[i] = 0.0;
            self.increments[i] = ctx.frequency * partial.ratio / ctx.sample_rate;
        }

        self.attack_samples = ((ATTACK_SECONDS * ctx.sample_rate) as u32).max(1);
        let ring_samples = (ring_seconds * ctx.sample_rate) as u32;
        let decay_samples = ring_samples.saturating_sub(self.attack_samples).max(1);
        self.decay_factor = (DECAY_FLOOR / peak).powf(1.0 / decay_samples as f32);
        self.stop_samples = (STOP_SECONDS * ctx.sample_rate) as u32;

        self.peak = peak;
        self.level = 0.0;
        self.elapsed_samples = 0;
        self.active = true;
    }

    fn level(&self) -> Option<f32> {
        Some(self.level)
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    fn render_seconds(bell: &mut BellNode, ctx: &RenderCtx, seconds: f32) -> f32 {
        let mut remaining = (seconds * SAMPLE_RATE) as usize;
        let mut buffer = [0.0f32; 512];
        let mut peak = 0.0f32;
        while remaining > 0 {
            let n = remaining.min(buffer.len());
            bell.render_block(&mut buffer[..n], ctx);
            peak = buffer[..n].iter().fold(peak, |acc, &x| acc.max(x.abs()));
            remaining -= n;
        }
        peak
    }

    #[test]
    fn test_silent_until_struck() {
        let mut bell = BellNode::new();
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, 246.94, Strike::Hour);

        assert!(!bell.is_active());
        assert_eq!(render_seconds(&mut bell, &ctx, 0.1), 0.0);
    }

    #[test]
    fn test_attack_reaches_peak() {
        let mut bell = BellNode::new();
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, 246.94, Strike::Hour);
        bell.strike(&ctx);

        let peak = render_seconds(&mut bell, &ctx, ATTACK_SECONDS);
        assert!((bell.level().unwrap() - 0.8).abs() < 1e-4);
        assert!(peak > 0.1);
        assert!(peak <= 0.8);
    }

    #[test]
    fn test_hour_rings_longer_than_minute() {
        let mut hour = BellNode::new();
        let hour_ctx = RenderCtx::from_freq(SAMPLE_RATE, 246.94, Strike::Hour);
        hour.strike(&hour_ctx);

        let mut minute = BellNode::new();
        let minute_ctx = RenderCtx::from_freq(SAMPLE_RATE, 311.13, Strike::Minute);
        minute.strike(&minute_ctx);

        render_seconds(&mut hour, &hour_ctx, 1.5);
        render_seconds(&mut minute, &minute_ctx, 1.5);

        let hour_level = hour.level().unwrap();
        let minute_level = minute.level().unwrap();
        assert!(hour_level > 10.0 * minute_level);
        assert!(minute_level < 0.002);
    }

    #[test]
    fn test_stops_after_three_seconds() {
        let mut bell = BellNode::new();
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, 311.13, Strike::Quarter);
        bell.strike(&ctx);

        render_seconds(&mut bell, &ctx, 2.9);
        assert!(bell.is_active());

        render_seconds(&mut bell, &ctx, 0.2);
        assert!(!bell.is_active());
        assert_eq!(bell.level(), Some(0.0));
    }

    #[test]
    fn test_restrike_resets_envelope() {
        let mut bell = BellNode::new();
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, 246.94, Strike::Hour);
        bell.strike(&ctx);
        render_seconds(&mut bell, &ctx, 1.0);

        bell.strike(&ctx);
        assert_eq!(bell.level(), Some(0.0));
        render_seconds(&mut bell, &ctx, ATTACK_SECONDS);
        assert!((bell.level().unwrap() - 0.8).abs() < 1e-4);
    }
}
