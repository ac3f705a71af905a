//! Header chrome rendering (brand, section links, identity)

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::model::SessionState;

pub fn render_header(frame: &mut Frame, area: Rect, session: &SessionState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Brand
            Constraint::Min(0),     // Section links
            Constraint::Length(26), // Identity
        ])
        .split(area);

    let brand = Paragraph::new(Span::styled(
        "Viberfy",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(brand, chunks[0]);

    let links = Line::from(vec![
        Span::styled("Tracks", Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled("Albums", Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled("Artists", Style::default().fg(Color::DarkGray)),
    ]);
    let nav = Paragraph::new(links).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(nav, chunks[1]);

    let identity = if session.logged_in {
        match &session.profile {
            Some(profile) => Span::styled(
                format!("@{} (A: menu)", profile.username),
                Style::default().fg(Color::Cyan),
            ),
            None => Span::styled("Signed in", Style::default().fg(Color::Cyan)),
        }
    } else {
        Span::styled("Login / Register", Style::default().fg(Color::DarkGray))
    };
    let account = Paragraph::new(identity)
        .block(Block::default().borders(Borders::ALL).title(" Account "));
    frame.render_widget(account, chunks[2]);
}
