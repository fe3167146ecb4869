//! Strikes widget - one row per gong pattern, one mark per strike

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use saavy_repeater::{player::Pacing, ChimeEvent, ChimeSequence};

const LABEL_WIDTH: usize = 10;

/// Render the hour, quarter and minute rows for `sequence`
pub fn render_strikes(
    frame: &mut Frame,
    area: Rect,
    sequence: &ChimeSequence,
    playing: bool,
    pacing: &Pacing,
) {
    let title = format!(
        " Strikes ({} in {:.1}s) ",
        sequence.len(),
        pacing.duration_of(sequence).as_secs_f32()
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    let color = if playing { Color::Cyan } else { Color::DarkGray };
    let rows = [
        ("hours", ChimeEvent::Hour, "● "),
        ("quarters", ChimeEvent::Quarter, "◆◇ "),
        ("minutes", ChimeEvent::Minute, "○ "),
    ];

    let lines: Vec<Line> = rows
        .iter()
        .map(|&(label, kind, mark)| {
            let count = sequence.count(kind);
            Line::from(vec![
                Span::styled(
                    format!("{label:<width$}{count:>3}  ", width = LABEL_WIDTH),
                    Style::default().fg(Color::White),
                ),
                Span::styled(mark.repeat(count), Style::default().fg(color)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
