use std::collections::VecDeque;
use std::sync::Mutex;

use saavy_repeater::{synth::Carillon, ChimePlayer, TimeOfDay, Tone, ToneEmitter};

/// Queues tones for an offline carillon
#[derive(Default)]
struct OfflineEmitter(Mutex<VecDeque<Tone>>);

impl ToneEmitter for OfflineEmitter {
    fn emit(&self, tone: Tone) -> saavy_repeater::Result<()> {
        self.0.lock().unwrap().push_back(tone);
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn renders_bells_for_played_sequence() {
    let player = ChimePlayer::new(OfflineEmitter::default());
    player.play(TimeOfDay::new(3, 20).unwrap()).await.unwrap();

    let tones = std::mem::take(&mut *player.emitter().0.lock().unwrap());
    assert_eq!(tones.len(), 3 + 2 + 5);

    let mut carillon = Carillon::new(48_000.0, 16, tones);
    let mut block = vec![0.0f32; 512];
    let mut samples = Vec::new();
    for _ in 0..100 {
        carillon.render_block(&mut block);
        samples.extend_from_slice(&block);
    }

    assert!(samples.iter().any(|s| s.abs() > 0.0));
    assert!(samples.iter().all(|s| s.abs() <= 1.0));
    assert_eq!(carillon.active_voices(), 10);
}
