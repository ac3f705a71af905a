//! Bottom playback bar rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::PlaybackView;

use super::utils::format_duration;

pub fn render_player_bar(frame: &mut Frame, area: Rect, playback: &PlaybackView) {
    let status_text = match &playback.track {
        None => " Nothing selected".to_string(),
        Some(track) => {
            let marker = if playback.playing { "▶" } else { "⏸" };
            let heart = if playback.liked { "♥" } else { " " };
            format!(
                " {marker} {} | {} {heart} ({})",
                track.name,
                track.artist.name,
                format_duration(track.duration)
            )
        }
    };

    let queue_info = match playback.queue_pos {
        Some(pos) if playback.queue_len > 0 => {
            format!(" Queue: {} of {} ", pos + 1, playback.queue_len)
        }
        _ => String::new(),
    };

    let bar = Paragraph::new(status_text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Now Playing ")
                .title_bottom(Line::from(queue_info).right_aligned())
                .border_style(if playback.playing {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );

    frame.render_widget(bar, area);
}
