//! Repeater - host application builder and runner

use std::sync::Arc;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use saavy_repeater::{
    io::CpalEmitter, ChimePlayer, Clock, FixedClock, RepeaterConfig, SystemClock, TimeOfDay,
};

use super::ui::UiApp;

/// Main application builder
pub struct Repeater {
    config: RepeaterConfig,
    fixed_time: Option<TimeOfDay>,
}

impl Repeater {
    pub fn new() -> Self {
        Self {
            config: RepeaterConfig::default(),
            fixed_time: None,
        }
    }

    /// Set pacing and gong pitches
    pub fn config(mut self, config: RepeaterConfig) -> Self {
        self.config = config;
        self
    }

    /// Always strike this time instead of reading the local clock
    pub fn fixed_time(mut self, time: Option<TimeOfDay>) -> Self {
        self.fixed_time = time;
        self
    }

    /// Run the application (takes over the terminal, plays audio)
    pub fn run(self) -> EyreResult<()> {
        // The emitter must be live before the first trigger
        let (mut output, emitter) = CpalEmitter::open().wrap_err("failed to open audio output")?;
        log::info!(
            "repeater ready: {} Hz, {} channels, {:?}",
            output.sample_rate(),
            output.channels(),
            self.config.pacing
        );

        // Pacing timers run here, the UI loop stays on this thread
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .wrap_err("failed to start timer runtime")?;

        let clock: Arc<dyn Clock> = match self.fixed_time {
            Some(time) => Arc::new(FixedClock::new(time)),
            None => Arc::new(SystemClock),
        };
        let player = Arc::new(ChimePlayer::with_config(emitter, self.config));

        let mut ui = UiApp::new(
            output.take_scope(),
            player,
            clock,
            runtime.handle().clone(),
            output.sample_rate(),
        );

        let mut terminal = ratatui::init();
        let result = ui.run(&mut terminal);
        ratatui::restore();

        result
    }
}

impl Default for Repeater {
    fn default() -> Self {
        Self::new()
    }
}
