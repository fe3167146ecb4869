//! Face bar - the time being struck, ring state, and output level

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use saavy_repeater::TimeOfDay;

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// Render the face bar
pub fn render_face(
    frame: &mut Frame,
    area: Rect,
    time: TimeOfDay,
    playing: bool,
    sample_rate: f32,
    audio_stats: &AudioStats,
) {
    let block = Block::default().title(" repeater ").borders(Borders::ALL);

    let meridiem = if time.hour24() < 12 { "am" } else { "pm" };
    let (symbol, state) = if playing {
        ("🔔", "Striking")
    } else {
        ("·", "Silent")
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {time}  "),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("({}:{:02} {meridiem})  ", time.hour12(), time.minute()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{symbol} {state}  "),
            Style::default().fg(if playing { Color::Green } else { Color::Yellow }),
        ),
        Span::styled(
            format!("{:.1}kHz  ", sample_rate / 1000.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", audio_stats.peak, audio_stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
