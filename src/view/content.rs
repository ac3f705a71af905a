//! Main content area rendering (track grid, detail page, not-found)

use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::model::{ContentState, ContentView, InfoPanel, Track, TrackDetail};

use super::utils::{format_count, format_duration, truncate_string};

/// Liked status as every card renders it: the session overlay wins over the
/// snapshot's baseline.
fn merged_liked(overlay: &HashMap<String, bool>, track: &Track) -> bool {
    overlay.get(&track.slug).copied().unwrap_or(track.is_liked)
}

pub fn render_main_content(
    frame: &mut Frame,
    area: Rect,
    content_state: &ContentState,
    overlay: &HashMap<String, bool>,
    current_track_id: Option<u64>,
    playing: bool,
) {
    if content_state.is_loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title(" Tracks "));
        frame.render_widget(loading, area);
        return;
    }

    match &content_state.view {
        ContentView::Empty => {
            let content = Paragraph::new(
                "Use ↑/↓ to browse tracks\nEnter opens a track, Space plays it, X likes it\nQ quits",
            )
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::horizontal(1)),
            );
            frame.render_widget(content, area);
        }
        ContentView::TrackGrid { tracks, selected } => {
            render_track_grid(
                frame,
                area,
                tracks,
                *selected,
                overlay,
                current_track_id,
                playing,
            );
        }
        ContentView::TrackDetail {
            detail,
            similar_selected,
        } => {
            render_track_detail(
                frame,
                area,
                detail,
                *similar_selected,
                overlay,
                current_track_id,
                playing,
            );
        }
        ContentView::NotFound { slug } => render_not_found(frame, area, slug),
    }
}

fn track_row(
    track: &Track,
    index: usize,
    selected: bool,
    liked: bool,
    is_current: bool,
    playing: bool,
) -> ListItem<'static> {
    let marker = if is_current {
        if playing { "▶" } else { "⏸" }
    } else {
        " "
    };
    let heart = if liked { "♥" } else { " " };
    let genres = track
        .genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let text = format!(
        " {:>3}  {} {}  {}  {}  ♥ {:>6}  ♪ {:>6}  {:>6}",
        index + 1,
        marker,
        heart,
        truncate_string(&track.name, 28),
        truncate_string(&genres, 18),
        format_count(track.likes_count),
        format_count(track.plays_count),
        format_duration(track.duration),
    );

    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if is_current {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    ListItem::new(text).style(style)
}

fn render_track_grid(
    frame: &mut Frame,
    area: Rect,
    tracks: &[Track],
    selected: usize,
    overlay: &HashMap<String, bool>,
    current_track_id: Option<u64>,
    playing: bool,
) {
    if tracks.is_empty() {
        let empty = Paragraph::new("No tracks available")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Tracks "));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            track_row(
                track,
                i,
                i == selected,
                merged_liked(overlay, track),
                current_track_id == Some(track.id),
                playing,
            )
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Tracks ({}) ", tracks.len()))
            .title_bottom(Line::from(" Space: play  X: like  Enter: open ").right_aligned()),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_track_detail(
    frame: &mut Frame,
    area: Rect,
    detail: &TrackDetail,
    similar_selected: usize,
    overlay: &HashMap<String, bool>,
    current_track_id: Option<u64>,
    playing: bool,
) {
    let panel_open = detail.panel != InfoPanel::None;
    let mut constraints = vec![
        Constraint::Length(8), // Metadata
        Constraint::Length(3), // Controls
    ];
    if panel_open {
        constraints.push(Constraint::Length(8));
    }
    constraints.push(Constraint::Min(0)); // Similar tracks

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_detail_metadata(frame, chunks[0], detail);
    render_detail_controls(frame, chunks[1], detail, current_track_id, playing);

    let similar_area = if panel_open {
        render_detail_panel(frame, chunks[2], detail);
        chunks[3]
    } else {
        chunks[2]
    };

    render_similar_tracks(
        frame,
        similar_area,
        detail,
        similar_selected,
        overlay,
        current_track_id,
        playing,
    );
}

fn render_detail_metadata(frame: &mut Frame, area: Rect, detail: &TrackDetail) {
    let track = &detail.track;

    let mut lines = vec![Line::from(Span::styled(
        track.name.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];

    let mut by_line = format!("Artist: {}", track.artist.name);
    if !track.featured_artists.is_empty() {
        let featured = track
            .featured_artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        by_line.push_str(&format!("   Featuring: {featured}"));
    }
    lines.push(Line::from(by_line));

    let album = track
        .album
        .as_ref()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "Single".to_string());
    lines.push(Line::from(format!(
        "Album: {album}   Duration: {}",
        format_duration(track.duration)
    )));

    let mut meta = Vec::new();
    if let Some(language) = &track.language {
        meta.push(format!("Language: {language}"));
    }
    if let Some(mood) = &track.mood {
        meta.push(format!("Mood: {mood}"));
    }
    if let Some(bpm) = track.bpm {
        meta.push(format!("BPM: {bpm}"));
    }
    if track.is_explicit {
        meta.push("Explicit".to_string());
    }
    if !meta.is_empty() {
        lines.push(Line::from(meta.join("   ")));
    }

    if !track.genres.is_empty() {
        let genres = track
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(Span::styled(
            format!("Genres: {genres}"),
            Style::default().fg(Color::Blue),
        )));
    }

    let metadata = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Track ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(metadata, area);
}

fn render_detail_controls(
    frame: &mut Frame,
    area: Rect,
    detail: &TrackDetail,
    current_track_id: Option<u64>,
    playing: bool,
) {
    let track = &detail.track;
    let is_current_playing = current_track_id == Some(track.id) && playing;

    let play_label = if is_current_playing {
        Span::styled(
            "[Space ⏸ Playing]",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[Space ▶ Play]", Style::default().fg(Color::Green))
    };

    // The page's liked flag is the confirmed one, not the overlay guess
    let like_style = if detail.is_liked {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let like_label = Span::styled(
        format!(
            "[X {} {} Like]",
            if detail.is_liked { "♥" } else { "♡" },
            format_count(track.likes_count)
        ),
        like_style,
    );

    let controls = Line::from(vec![
        play_label,
        Span::raw("  "),
        like_label,
        Span::raw("  "),
        Span::styled(
            format!("[♪ {} plays]", format_count(track.plays_count)),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[⬇ {} {}]", format_count(track.download_count), track.audio),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled("[S Share]", Style::default().fg(Color::Cyan)),
    ]);

    let mut hints = Vec::new();
    if track.description.is_some() {
        hints.push("D: description");
    }
    if track.lyrics.is_some() {
        hints.push("L: lyrics");
    }

    let bar = Paragraph::new(controls).block(
        Block::default()
            .borders(Borders::ALL)
            .title_bottom(Line::from(format!(" {} ", hints.join("  "))).right_aligned())
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(bar, area);
}

fn render_detail_panel(frame: &mut Frame, area: Rect, detail: &TrackDetail) {
    let (title, body) = match detail.panel {
        InfoPanel::Description => (
            " Description ",
            detail.track.description.as_deref().unwrap_or(""),
        ),
        InfoPanel::Lyrics => (" Lyrics ", detail.track.lyrics.as_deref().unwrap_or("")),
        InfoPanel::None => return,
    };

    let panel = Paragraph::new(body.to_string())
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(panel, area);
}

fn render_similar_tracks(
    frame: &mut Frame,
    area: Rect,
    detail: &TrackDetail,
    similar_selected: usize,
    overlay: &HashMap<String, bool>,
    current_track_id: Option<u64>,
    playing: bool,
) {
    // An empty similar list hides the section entirely
    if detail.similar.is_empty() {
        return;
    }

    let items: Vec<ListItem> = detail
        .similar
        .iter()
        .enumerate()
        .map(|(i, track)| {
            track_row(
                track,
                i,
                i == similar_selected,
                merged_liked(overlay, track),
                current_track_id == Some(track.id),
                playing,
            )
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Related tracks ")
            .title_bottom(Line::from(" P: play  K: like  Enter: open ").right_aligned()),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(similar_selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_not_found(frame: &mut Frame, area: Rect, slug: &str) {
    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Track not found",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("\"{slug}\" does not exist or is no longer available"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to go back",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .centered()
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, area);
}
