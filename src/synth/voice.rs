use crate::graph::{
    bell::BellNode,
    node::{GraphNode, RenderCtx},
};
use crate::player::{Strike, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Free,    // Available for allocation
    Ringing, // Struck, bell still sounding
}

/// One gong strike ringing out
pub struct BellVoice {
    tone: Option<Tone>,
    state: VoiceState,
    age: u64,
    sample_rate: f32,
    bell: BellNode,
}

impl BellVoice {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            tone: None,
            state: VoiceState::Free,
            age: 0,
            sample_rate,
            bell: BellNode::new(),
        }
    }

    pub fn start(&mut self, tone: Tone, age: u64) {
        self.tone = Some(tone);
        self.state = VoiceState::Ringing;
        self.age = age;

        let ctx = RenderCtx::from_tone(self.sample_rate, &tone);
        self.bell.strike(&ctx);
    }

    /// Render this voice into `out`, overwriting its contents
    pub fn render(&mut self, out: &mut [f32]) {
        let Some(tone) = self.tone else {
            out.fill(0.0);
            return;
        };

        let ctx = RenderCtx::from_tone(self.sample_rate, &tone);
        self.bell.render_block(out, &ctx);

        // Bell has stopped, the voice can be reused
        if !self.bell.is_active() {
            self.free();
        }
    }

    pub fn is_free(&self) -> bool {
        self.state == VoiceState::Free
    }

    pub fn is_active(&self) -> bool {
        self.state == VoiceState::Ringing
    }

    pub fn level(&self) -> Option<f32> {
        self.bell.level()
    }

    pub fn free(&mut self) {
        self.state = VoiceState::Free;
        self.tone = None;
    }

    pub fn strike(&self) -> Option<Strike> {
        self.tone.map(|t| t.strike)
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }
}
