use crate::player::{Strike, Tone};

/// Context passed to graph nodes when struck and while rendering
///
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - frequency: Fundamental to ring at (Hz)
/// - strike: Which repeater strike this is, selects the ring length
pub struct RenderCtx {
    pub sample_rate: f32,
    pub frequency: f32,
    pub strike: Strike,
}

impl RenderCtx {
    /// Create context for a tone request from the player
    pub fn from_tone(sample_rate: f32, tone: &Tone) -> Self {
        Self {
            sample_rate,
            frequency: tone.frequency,
            strike: tone.strike,
        }
    }

    /// Create context from a direct frequency (previews, benches)
    pub fn from_freq(sample_rate: f32, frequency: f32, strike: Strike) -> Self {
        Self {
            sample_rate,
            frequency,
            strike,
        }
    }
}

/// Core trait for audio processing graph nodes
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Triggered when the node is struck
    ///
    /// Default implementation does nothing (passthrough nodes).
    fn strike(&mut self, _ctx: &RenderCtx) {}

    /// Current amplitude envelope, if the node has one
    fn level(&self) -> Option<f32> {
        None
    }

    /// Check if this node is still producing sound
    ///
    /// Used by voice management to know when a voice can be freed.
    fn is_active(&self) -> bool {
        true
    }
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn strike(&mut self, ctx: &RenderCtx) {
        (**self).strike(ctx)
    }

    fn level(&self) -> Option<f32> {
        (**self).level()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
