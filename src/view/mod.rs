//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Header chrome (brand, section links, identity)
//! - `content`: Main content area (track grid, detail page, not-found)
//! - `player_bar`: Bottom playback bar
//! - `overlays`: Popovers (share menu, account dropdown)

mod content;
mod layout;
mod overlays;
mod player_bar;
mod utils;

use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::model::{ContentState, PlaybackView, SessionState, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        playback: &PlaybackView,
        liked_overlay: &HashMap<String, bool>,
        ui_state: &UiState,
        session: &SessionState,
        content_state: &ContentState,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header chrome
                Constraint::Min(0),    // Main content
                Constraint::Length(3), // Playback bar
            ])
            .split(frame.area());

        layout::render_header(frame, chunks[0], session);

        content::render_main_content(
            frame,
            chunks[1],
            content_state,
            liked_overlay,
            playback.track.as_ref().map(|t| t.id),
            playback.playing,
        );

        player_bar::render_player_bar(frame, chunks[2], playback);

        // Popovers sit on top of whatever is underneath
        if ui_state.share_open {
            overlays::render_share_menu(frame, ui_state);
        }
        if ui_state.dropdown_open {
            overlays::render_account_dropdown(frame, ui_state, session);
        }
    }
}
