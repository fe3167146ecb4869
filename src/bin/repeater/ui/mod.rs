//! TUI module for repeater
//!
//! Shows the time about to be struck, the strikes it breaks down into, and the
//! gongs' output. Space is the "play now" trigger.

mod face;
mod strikes;
mod waveform;

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use saavy_repeater::{
    io::CpalEmitter, ChimePlayer, ChimeSequencer, Clock, PlayOutcome, TimeOfDay,
};
use tokio::{runtime::Handle, task::JoinHandle};

use face::{render_face, AudioStats};
use strikes::render_strikes;
use waveform::render_waveform;

/// Audio visualization buffer size
const VIS_BUFFER_SIZE: usize = 1024;

type Playback = JoinHandle<saavy_repeater::Result<PlayOutcome>>;

/// UI application state
pub struct UiApp {
    /// Ring buffer receiver for rendered gong samples
    scope: Option<Consumer<f32>>,
    player: Arc<ChimePlayer<CpalEmitter>>,
    clock: Arc<dyn Clock>,
    /// Runtime the playbacks are spawned on
    runtime: Handle,
    sample_rate: f32,
    /// Audio sample buffer for visualization
    audio_buffer: Vec<f32>,
    /// Playbacks whose outcome has not been reported yet
    pending: Vec<Playback>,
    /// Time of the most recent trigger
    struck: Option<TimeOfDay>,
    /// Last outcome shown in the help bar
    status: String,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        scope: Option<Consumer<f32>>,
        player: Arc<ChimePlayer<CpalEmitter>>,
        clock: Arc<dyn Clock>,
        runtime: Handle,
        sample_rate: f32,
    ) -> Self {
        Self {
            scope,
            player,
            clock,
            runtime,
            sample_rate,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            pending: Vec::new(),
            struck: None,
            status: String::from("ready"),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.poll_playbacks();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Poll for new audio samples from ring buffer
    fn poll_audio(&mut self) {
        let Some(scope) = self.scope.as_mut() else {
            return;
        };

        // Keep only the last VIS_BUFFER_SIZE samples
        while let Ok(sample) = scope.pop() {
            self.audio_buffer.push(sample);
        }
        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
    }

    /// Report playbacks that have finished since the last frame
    fn poll_playbacks(&mut self) {
        let (finished, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|handle| handle.is_finished());
        self.pending = pending;

        for handle in finished {
            self.status = match self.runtime.block_on(handle) {
                Ok(Ok(PlayOutcome::Struck { strikes })) => format!("rang {strikes} strikes"),
                Ok(Ok(PlayOutcome::Busy)) => String::from("still ringing, trigger ignored"),
                Ok(Err(err)) => {
                    log::error!("chime failed: {err}");
                    format!("error: {err}")
                }
                Err(err) => {
                    log::error!("chime task failed: {err}");
                    format!("error: {err}")
                }
            };
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => self.trigger(),
            _ => {}
        }
    }

    /// Read the clock once and hand the reading to the player
    fn trigger(&mut self) {
        // The player's guard still decides; this only skips a task that would come back Busy
        if self.player.is_playing() {
            self.status = String::from("still ringing, trigger ignored");
            return;
        }

        let now = self.clock.now();
        self.struck = Some(now);
        self.status = format!("striking {now}");

        let player = Arc::clone(&self.player);
        self.pending
            .push(self.runtime.spawn(async move { player.play(now).await }));
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let playing = self.player.is_playing();

        // While ringing show what is being struck, otherwise preview the clock
        let shown = match (playing, self.struck) {
            (true, Some(time)) => time,
            _ => self.clock.now(),
        };
        let sequence = ChimeSequencer::compute_time(shown);

        // Main layout: face, strikes, waveform, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Face
                Constraint::Min(5),    // Strikes
                Constraint::Length(8), // Waveform
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_face(frame, chunks[0], shown, playing, self.sample_rate, &stats);
        render_strikes(
            frame,
            chunks[1],
            &sequence,
            playing,
            &self.player.config().pacing,
        );
        render_waveform(frame, chunks[2], &self.audio_buffer);

        let help = Paragraph::new(format!(" [Space] Chime  [Q] Quit   {}", self.status))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
