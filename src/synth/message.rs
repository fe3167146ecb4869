use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::player::Tone;

/// Source of pending tone requests, drained once per rendered block
pub trait ToneReceiver {
    fn pop(&mut self) -> Option<Tone>;
}

#[cfg(feature = "rtrb")]
impl ToneReceiver for Consumer<Tone> {
    fn pop(&mut self) -> Option<Tone> {
        Consumer::pop(self).ok()
    }
}

/// Offline rendering and tests
impl ToneReceiver for VecDeque<Tone> {
    fn pop(&mut self) -> Option<Tone> {
        self.pop_front()
    }
}
