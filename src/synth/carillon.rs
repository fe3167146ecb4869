use crate::{
    synth::{message::ToneReceiver, voice::BellVoice},
    MAX_BLOCK_SIZE,
};

/// Polyphonic bell renderer.
///
/// Every tone popped from the receiver gets its own voice so consecutive
/// strikes layer acoustically instead of cutting each other off. When the pool
/// is exhausted the oldest ringing voice is restruck.
pub struct Carillon<R> {
    voices: Vec<BellVoice>,
    rx: R,
    temp_buffer: Vec<f32>,
    frame_counter: u64,
}

impl<R: ToneReceiver> Carillon<R> {
    pub fn new(sample_rate: f32, max_voices: usize, rx: R) -> Self {
        let voices = (0..max_voices).map(|_| BellVoice::new(sample_rate)).collect();

        Self {
            voices,
            rx,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
            frame_counter: 0,
        }
    }

    /// Render one block (at most `MAX_BLOCK_SIZE` frames) of mono output
    pub fn render_block(&mut self, out: &mut [f32]) {
        debug_assert!(out.len() <= MAX_BLOCK_SIZE);

        // Start voices for pending strikes
        while let Some(tone) = self.rx.pop() {
            let age = self.frame_counter;
            if let Some(voice) = self.allocate_voice() {
                voice.start(tone, age);
            }
        }

        // Mix voices
        out.fill(0.0);
        for voice in &mut self.voices {
            if voice.is_active() {
                let temp = &mut self.temp_buffer[..out.len()];
                voice.render(temp);

                for (o, v) in out.iter_mut().zip(temp.iter()) {
                    *o += v;
                }
            }
        }

        for sample in out.iter_mut() {
            *sample = sample.clamp(-1.0, 1.0);
        }

        self.frame_counter += out.len() as u64;
    }

    /// Number of voices still ringing
    pub fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| v.is_active()).count()
    }

    pub fn voices(&self) -> &[BellVoice] {
        &self.voices
    }

    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.rx
    }

    fn allocate_voice(&mut self) -> Option<&mut BellVoice> {
        // First pass: find free voice index
        let free_idx = self.voices.iter().position(|v| v.is_free());
        if let Some(idx) = free_idx {
            return Some(&mut self.voices[idx]);
        }

        // Second pass: restrike the oldest voice
        let steal_idx = self
            .voices
            .iter()
            .enumerate()
            .min_by_key(|(_, v)| v.age())
            .map(|(idx, _)| idx);

        steal_idx.map(|idx| &mut self.voices[idx])
    }
}
