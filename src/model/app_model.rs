//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::content::{ContentState, ContentView, TrackDetail};
use super::gateway::LikeResponse;
use super::player::PlayerState;
use super::types::{Profile, SessionState, ShareLink, Track, UiState};

/// Snapshot of playback state handed to the view each frame
#[derive(Clone, Debug, Default)]
pub struct PlaybackView {
    pub track: Option<Track>,
    pub playing: bool,
    pub queue_len: usize,
    /// Zero-based position of the current track within the queue, when the
    /// queue contains it
    pub queue_pos: Option<usize>,
    pub liked: bool,
}

/// Main application model containing all state.
///
/// Created once at startup and shared by every component; the player state
/// and liked overlay inside it live for the whole session.
pub struct AppModel {
    player: Arc<Mutex<PlayerState>>,
    content_state: Arc<Mutex<ContentState>>,
    ui_state: Arc<Mutex<UiState>>,
    session: Arc<Mutex<SessionState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(logged_in: bool) -> Self {
        Self {
            player: Arc::new(Mutex::new(PlayerState::new())),
            content_state: Arc::new(Mutex::new(ContentState::default())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            session: Arc::new(Mutex::new(SessionState {
                logged_in,
                profile: None,
            })),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // Player state
    // ========================================================================

    pub async fn set_queue(&self, tracks: Vec<Track>) {
        self.player.lock().await.set_queue(tracks);
    }

    pub async fn toggle_play(&self, track: &Track) {
        self.player.lock().await.toggle_play(track);
    }

    pub async fn toggle_like(&self, slug: &str) {
        self.player.lock().await.toggle_like(slug);
    }

    pub async fn liked_status(&self, slug: &str, baseline: bool) -> bool {
        self.player.lock().await.is_liked(slug, baseline)
    }

    pub async fn is_current_and_playing(&self, track_id: u64) -> bool {
        self.player.lock().await.is_current_and_playing(track_id)
    }

    /// Snapshot of the liked overlay for rendering a whole frame of cards
    pub async fn liked_overlay(&self) -> std::collections::HashMap<String, bool> {
        self.player.lock().await.overlay().clone()
    }

    pub async fn playback_view(&self) -> PlaybackView {
        let player = self.player.lock().await;
        let track = player.current_track().cloned();
        let queue_pos = track
            .as_ref()
            .and_then(|current| player.queue().iter().position(|t| t.id == current.id));
        let liked = track
            .as_ref()
            .map(|t| player.is_liked(&t.slug, t.is_liked))
            .unwrap_or(false);

        PlaybackView {
            playing: player.is_playing(),
            queue_len: player.queue().len(),
            queue_pos,
            liked,
            track,
        }
    }

    // ========================================================================
    // Content state
    // ========================================================================

    pub async fn get_content_state(&self) -> ContentState {
        self.content_state.lock().await.clone()
    }

    pub async fn set_content_loading(&self, loading: bool) {
        self.content_state.lock().await.is_loading = loading;
    }

    pub async fn set_track_grid(&self, tracks: Vec<Track>) {
        let mut state = self.content_state.lock().await;
        state.navigation_stack.clear();
        state.view = ContentView::TrackGrid {
            tracks,
            selected: 0,
        };
        state.is_loading = false;
    }

    pub async fn set_track_detail(&self, detail: TrackDetail) {
        let mut state = self.content_state.lock().await;
        if !matches!(state.view, ContentView::Empty) {
            let previous_view = state.view.clone();
            state.navigation_stack.push(previous_view);
        }
        state.view = ContentView::TrackDetail {
            detail,
            similar_selected: 0,
        };
        state.is_loading = false;
    }

    pub async fn set_not_found(&self, slug: String) {
        let mut state = self.content_state.lock().await;
        if !matches!(state.view, ContentView::Empty) {
            let previous_view = state.view.clone();
            state.navigation_stack.push(previous_view);
        }
        state.view = ContentView::NotFound { slug };
        state.is_loading = false;
    }

    pub async fn navigate_back(&self) -> bool {
        let mut state = self.content_state.lock().await;
        if let Some(previous_view) = state.navigation_stack.pop() {
            state.view = previous_view;
            true
        } else {
            false
        }
    }

    pub async fn content_move_up(&self) {
        let mut state = self.content_state.lock().await;
        match &mut state.view {
            ContentView::TrackGrid { selected, .. } => {
                if *selected > 0 {
                    *selected -= 1;
                }
            }
            ContentView::TrackDetail {
                similar_selected, ..
            } => {
                if *similar_selected > 0 {
                    *similar_selected -= 1;
                }
            }
            _ => {}
        }
    }

    pub async fn content_move_down(&self) {
        let mut state = self.content_state.lock().await;
        match &mut state.view {
            ContentView::TrackGrid { tracks, selected } => {
                if *selected < tracks.len().saturating_sub(1) {
                    *selected += 1;
                }
            }
            ContentView::TrackDetail {
                detail,
                similar_selected,
            } => {
                if *similar_selected < detail.similar.len().saturating_sub(1) {
                    *similar_selected += 1;
                }
            }
            _ => {}
        }
    }

    /// The selected card in the grid, together with the full grid list that
    /// becomes the queue when play is pressed from that card
    pub async fn selected_grid_track(&self) -> Option<(Track, Vec<Track>)> {
        let state = self.content_state.lock().await;
        if let ContentView::TrackGrid { tracks, selected } = &state.view {
            tracks.get(*selected).map(|t| (t.clone(), tracks.clone()))
        } else {
            None
        }
    }

    /// The selected card in the detail page's similar section, with the
    /// similar list as its queue context
    pub async fn selected_similar_track(&self) -> Option<(Track, Vec<Track>)> {
        let state = self.content_state.lock().await;
        if let ContentView::TrackDetail { detail, similar_selected } = &state.view {
            detail
                .similar
                .get(*similar_selected)
                .map(|t| (t.clone(), detail.similar.clone()))
        } else {
            None
        }
    }

    pub async fn detail_track(&self) -> Option<Track> {
        let state = self.content_state.lock().await;
        if let ContentView::TrackDetail { detail, .. } = &state.view {
            Some(detail.track.clone())
        } else {
            None
        }
    }

    pub async fn toggle_description_panel(&self) {
        let mut state = self.content_state.lock().await;
        if let ContentView::TrackDetail { detail, .. } = &mut state.view {
            if detail.track.description.is_some() {
                detail.panel = detail.panel.toggle_description();
            }
        }
    }

    pub async fn toggle_lyrics_panel(&self) {
        let mut state = self.content_state.lock().await;
        if let ContentView::TrackDetail { detail, .. } = &mut state.view {
            if detail.track.lyrics.is_some() {
                detail.panel = detail.panel.toggle_lyrics();
            }
        }
    }

    // ========================================================================
    // Counter reconciliation
    //
    // Every update is keyed by slug, so a response that arrives after the
    // user moved on only touches view copies still showing that slug.
    // ========================================================================

    /// Replace the displayed play counter with the authoritative value
    /// returned by the backend.
    pub async fn set_plays_count(&self, slug: &str, plays: u64) {
        let mut state = self.content_state.lock().await;
        match &mut state.view {
            ContentView::TrackGrid { tracks, .. } => {
                if let Some(track) = tracks.iter_mut().find(|t| t.slug == slug) {
                    track.plays_count = plays;
                }
            }
            ContentView::TrackDetail { detail, .. } => {
                if detail.track.slug == slug {
                    detail.track.plays_count = plays;
                }
                if let Some(track) = detail.similar.iter_mut().find(|t| t.slug == slug) {
                    track.plays_count = plays;
                }
            }
            _ => {}
        }
    }

    /// Optimistic card-side like adjustment: shift the displayed counter by
    /// one in the direction implied by the pre-flip liked status. Card copies
    /// only; the detail page waits for the confirmed value instead.
    pub async fn adjust_likes_count(&self, slug: &str, was_liked: bool) {
        let delta: i64 = if was_liked { -1 } else { 1 };
        let mut state = self.content_state.lock().await;
        match &mut state.view {
            ContentView::TrackGrid { tracks, .. } => {
                if let Some(track) = tracks.iter_mut().find(|t| t.slug == slug) {
                    track.likes_count = track.likes_count.saturating_add_signed(delta);
                }
            }
            ContentView::TrackDetail { detail, .. } => {
                if let Some(track) = detail.similar.iter_mut().find(|t| t.slug == slug) {
                    track.likes_count = track.likes_count.saturating_add_signed(delta);
                }
            }
            _ => {}
        }
    }

    /// Replace the displayed like counter on card copies with the
    /// authoritative value: confirmed always overwrites the pending ±1.
    pub async fn set_likes_count(&self, slug: &str, likes: u64) {
        let mut state = self.content_state.lock().await;
        match &mut state.view {
            ContentView::TrackGrid { tracks, .. } => {
                if let Some(track) = tracks.iter_mut().find(|t| t.slug == slug) {
                    track.likes_count = likes;
                }
            }
            ContentView::TrackDetail { detail, .. } => {
                if let Some(track) = detail.similar.iter_mut().find(|t| t.slug == slug) {
                    track.likes_count = likes;
                }
            }
            _ => {}
        }
    }

    /// Confirmed detail-side like update: apply the authoritative boolean and
    /// counter from the backend, if the detail page still shows this slug.
    pub async fn apply_like_confirmation(&self, slug: &str, response: LikeResponse) {
        let mut state = self.content_state.lock().await;
        if let ContentView::TrackDetail { detail, .. } = &mut state.view {
            if detail.track.slug == slug {
                detail.is_liked = response.is_liked;
                detail.track.likes_count = response.likes_count;
            }
        }
    }

    // ========================================================================
    // Session & chrome
    // ========================================================================

    pub async fn get_session(&self) -> SessionState {
        self.session.lock().await.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.session.lock().await.logged_in
    }

    pub async fn set_profile(&self, profile: Profile) {
        let mut session = self.session.lock().await;
        session.profile = Some(profile);
    }

    /// Identity fetch failed: display as logged out. The flag is never
    /// upgraded back to true by a fetch.
    pub async fn downgrade_identity(&self) {
        let mut session = self.session.lock().await;
        session.logged_in = false;
        session.profile = None;
    }

    pub async fn clear_identity(&self) {
        let mut session = self.session.lock().await;
        session.logged_in = false;
        session.profile = None;
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn toggle_dropdown(&self) {
        let mut state = self.ui_state.lock().await;
        state.dropdown_open = !state.dropdown_open;
        state.dropdown_selected = 0;
    }

    pub async fn close_dropdown(&self) {
        let mut state = self.ui_state.lock().await;
        state.dropdown_open = false;
    }

    pub async fn is_dropdown_open(&self) -> bool {
        self.ui_state.lock().await.dropdown_open
    }

    pub async fn dropdown_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.dropdown_selected > 0 {
            state.dropdown_selected -= 1;
        }
    }

    pub async fn dropdown_move_down(&self, entries: usize) {
        let mut state = self.ui_state.lock().await;
        if state.dropdown_selected < entries.saturating_sub(1) {
            state.dropdown_selected += 1;
        }
    }

    pub async fn dropdown_selected(&self) -> usize {
        self.ui_state.lock().await.dropdown_selected
    }

    pub async fn open_share(&self, links: Vec<ShareLink>) {
        let mut state = self.ui_state.lock().await;
        state.share_open = true;
        state.share_selected = 0;
        state.share_links = links;
    }

    pub async fn close_share(&self) {
        let mut state = self.ui_state.lock().await;
        state.share_open = false;
        state.share_links.clear();
    }

    pub async fn is_share_open(&self) -> bool {
        self.ui_state.lock().await.share_open
    }

    pub async fn share_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.share_selected > 0 {
            state.share_selected -= 1;
        }
    }

    pub async fn share_move_down(&self) {
        let mut state = self.ui_state.lock().await;
        if state.share_selected < state.share_links.len().saturating_sub(1) {
            state.share_selected += 1;
        }
    }

    pub async fn selected_share_link(&self) -> Option<ShareLink> {
        let state = self.ui_state.lock().await;
        state.share_links.get(state.share_selected).cloned()
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(false)
    }
}
