//! Popover rendering (share menu, account dropdown)

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use crate::model::{ACCOUNT_MENU, SessionState, UiState};

fn centered_popup(frame: &Frame, width: u16, height: u16) -> Rect {
    let area = frame.area();
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));
    Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

pub fn render_share_menu(frame: &mut Frame, ui_state: &UiState) {
    let max_url = ui_state
        .share_links
        .iter()
        .map(|l| l.label.len() + l.url.len() + 4)
        .max()
        .unwrap_or(40);
    let popup_area = centered_popup(
        frame,
        (max_url as u16 + 4).clamp(40, 90),
        ui_state.share_links.len() as u16 + 2,
    );

    frame.render_widget(Clear, popup_area);

    let items: Vec<ListItem> = ui_state
        .share_links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let style = if i == ui_state.share_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(" {:<9} {}", link.label, link.url)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Share (↑↓ Enter, any other key closes) ")
            .style(Style::default().bg(Color::Black)),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(ui_state.share_selected));
    frame.render_stateful_widget(list, popup_area, &mut list_state);
}

pub fn render_account_dropdown(frame: &mut Frame, ui_state: &UiState, session: &SessionState) {
    let area = frame.area();
    let popup_width = 24u16.min(area.width.saturating_sub(2));
    // Anchored under the account area at the top right, like a dropdown
    let popup_area = Rect {
        x: area.width.saturating_sub(popup_width + 1),
        y: 3,
        width: popup_width,
        height: ACCOUNT_MENU.len() as u16 + 2,
    };

    frame.render_widget(Clear, popup_area);

    let items: Vec<ListItem> = ACCOUNT_MENU
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == ui_state.dropdown_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if *entry == "Logout" {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(" {entry}")).style(style)
        })
        .collect();

    let title = session
        .profile
        .as_ref()
        .map(|p| format!(" @{} ", p.username))
        .unwrap_or_else(|| " Account ".to_string());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .style(Style::default().bg(Color::Black)),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(ui_state.dropdown_selected));
    frame.render_stateful_widget(list, popup_area, &mut list_state);
}
