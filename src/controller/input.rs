//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::model::{ACCOUNT_MENU, ContentView};

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Share popover captures navigation keys; anything outside its
        // bounds closes it, like a click elsewhere on the page.
        if self.model.is_share_open().await {
            match key.code {
                KeyCode::Up => self.model.share_move_up().await,
                KeyCode::Down => self.model.share_move_down().await,
                KeyCode::Enter => {
                    if let Some(link) = self.model.selected_share_link().await {
                        tracing::info!(target_name = link.label, url = %link.url, "Share link chosen");
                    }
                    self.model.close_share().await;
                }
                _ => self.model.close_share().await,
            }
            return Ok(());
        }

        // Account dropdown behaves the same way
        if self.model.is_dropdown_open().await {
            match key.code {
                KeyCode::Up => self.model.dropdown_move_up().await,
                KeyCode::Down => self.model.dropdown_move_down(ACCOUNT_MENU.len()).await,
                KeyCode::Enter => {
                    let selected = self.model.dropdown_selected().await;
                    match ACCOUNT_MENU.get(selected).copied() {
                        Some("Logout") => self.logout().await,
                        Some(entry) => {
                            tracing::debug!(entry, "Account entry chosen");
                            self.model.close_dropdown().await;
                        }
                        None => self.model.close_dropdown().await,
                    }
                }
                _ => self.model.close_dropdown().await,
            }
            return Ok(());
        }

        let content = self.model.get_content_state().await;
        match &content.view {
            ContentView::TrackGrid { .. } => match key.code {
                KeyCode::Up => self.model.content_move_up().await,
                KeyCode::Down => self.model.content_move_down().await,
                KeyCode::Enter => self.open_selected_track().await,
                KeyCode::Char(' ') => {
                    if let Some((track, context)) = self.model.selected_grid_track().await {
                        self.play_from_card(track, context).await;
                    }
                }
                KeyCode::Char('x') | KeyCode::Char('X') => {
                    if let Some((track, _)) = self.model.selected_grid_track().await {
                        self.toggle_like_from_card(&track).await;
                    }
                }
                _ => {}
            },
            ContentView::TrackDetail { .. } => match key.code {
                KeyCode::Up => self.model.content_move_up().await,
                KeyCode::Down => self.model.content_move_down().await,
                KeyCode::Enter => self.open_selected_track().await,
                KeyCode::Char(' ') => self.play_from_detail().await,
                KeyCode::Char('x') | KeyCode::Char('X') => self.toggle_like_from_detail().await,
                // Card affordances of the selected similar track
                KeyCode::Char('p') | KeyCode::Char('P') => {
                    if let Some((track, context)) = self.model.selected_similar_track().await {
                        self.play_from_card(track, context).await;
                    }
                }
                KeyCode::Char('k') | KeyCode::Char('K') => {
                    if let Some((track, _)) = self.model.selected_similar_track().await {
                        self.toggle_like_from_card(&track).await;
                    }
                }
                KeyCode::Char('d') | KeyCode::Char('D') => {
                    self.model.toggle_description_panel().await;
                }
                KeyCode::Char('l') | KeyCode::Char('L') => {
                    self.model.toggle_lyrics_panel().await;
                }
                KeyCode::Char('s') | KeyCode::Char('S') => self.open_share_menu().await,
                KeyCode::Esc | KeyCode::Backspace => self.go_back().await,
                _ => {}
            },
            ContentView::NotFound { .. } => match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => self.go_back().await,
                _ => {}
            },
            ContentView::Empty => {}
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.model.set_should_quit(true).await;
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                if self.model.is_logged_in().await {
                    self.model.toggle_dropdown().await;
                }
            }
            _ => {}
        }

        Ok(())
    }
}
