mod carillon;
mod sequencer;

pub use carillon::bench_carillon;
pub use sequencer::bench_sequencer;
